use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// namespace all ActivityStreams properties and types live in
pub const ACTIVITYSTREAMS: &str = "https://www.w3.org/TR/activitystreams-vocabulary";
/// what documents actually put in their @context to import [`ACTIVITYSTREAMS`]
pub const ACTIVITYSTREAMS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

/// Maps a vocabulary namespace URI to the alias it was imported with. An empty alias means the
/// namespace is the default one and its terms appear unprefixed.
pub type Namespaces = BTreeMap<String, String>;

pub fn context_of(alias: &str) -> Namespaces {
	Namespaces::from([(ACTIVITYSTREAMS.to_string(), alias.to_string())])
}

/// merges `from` into `into`, never overwriting keys already present
pub fn merge_context(into: &mut Namespaces, from: Namespaces) {
	for (namespace, alias) in from {
		into.entry(namespace).or_insert(alias);
	}
}

fn canonical_namespace(uri: &str) -> &str {
	match uri.trim_end_matches('#') {
		ACTIVITYSTREAMS_CONTEXT | ACTIVITYSTREAMS => ACTIVITYSTREAMS,
		_ => uri,
	}
}

/// Reads namespace bindings from a document's `@context`.
///
/// Plain strings import a namespace without alias, while object entries bind a prefix to it.
/// Terms only count as prefixes if they map to the ActivityStreams namespace or to an IRI ending
/// with `#` or `/`, so that term definitions like `"sensitive": "as:sensitive"` are skipped.
pub fn namespaces(document: &Map<String, Value>) -> Namespaces {
	let mut out = Namespaces::new();
	match document.get("@context") {
		Some(Value::Array(entries)) => {
			for entry in entries {
				bind(&mut out, entry);
			}
		},
		Some(entry) => bind(&mut out, entry),
		None => {},
	}
	out
}

fn bind(out: &mut Namespaces, entry: &Value) {
	match entry {
		Value::String(uri) => {
			out.entry(canonical_namespace(uri).to_string()).or_default();
		},
		Value::Object(terms) => {
			for (prefix, uri) in terms {
				if prefix.starts_with('@') { continue }
				let Some(uri) = uri.as_str() else { continue };
				let namespace = canonical_namespace(uri);
				if namespace != ACTIVITYSTREAMS && !uri.ends_with('#') && !uri.ends_with('/') {
					continue;
				}
				// first prefix wins
				let bound = out.get(namespace).is_some_and(|alias| !alias.is_empty());
				if !bound {
					out.insert(namespace.to_string(), prefix.clone());
				}
			}
		},
		other => tracing::debug!("ignoring unsupported @context entry: {other}"),
	}
}

/// builds a `@context` value importing given namespaces
pub fn context_block(namespaces: &Namespaces) -> Value {
	let mut entries : Vec<Value> = namespaces
		.iter()
		.map(|(namespace, alias)| {
			let uri = if namespace == ACTIVITYSTREAMS { ACTIVITYSTREAMS_CONTEXT } else { namespace.as_str() };
			if alias.is_empty() {
				Value::String(uri.to_string())
			} else {
				let uri = if uri.ends_with('#') || uri.ends_with('/') { uri.to_string() } else { format!("{uri}#") };
				let mut term = Map::new();
				term.insert(alias.clone(), Value::String(uri));
				Value::Object(term)
			}
		})
		.collect();

	if entries.len() == 1 {
		entries.pop().unwrap_or(Value::Null)
	} else {
		Value::Array(entries)
	}
}

/// writes a `@context` block into a serialized object, replacing any previous one
pub fn with_context(mut map: Map<String, Value>, namespaces: &Namespaces) -> Map<String, Value> {
	map.insert("@context".to_string(), context_block(namespaces));
	map
}

pub trait LD {
	fn ld_context(self, namespaces: &Namespaces) -> Self;
}

impl LD for Value {
	fn ld_context(self, namespaces: &Namespaces) -> Self {
		match self {
			Value::Object(map) => Value::Object(with_context(map, namespaces)),
			other => {
				tracing::warn!("cannot add @context to json value different than object");
				other
			},
		}
	}
}
