//! Classification of raw json values into polymorphic property values.
//!
//! A value found under a property key is, in order: an IRI if it's a string with a scheme, the
//! first candidate type whose deserializer accepts it if it's an object, and an opaque value
//! otherwise. This never fails.

use serde_json::{Map, Value};
use crate::{jsonld::{self, Namespaces}, Iri, Registry, Vocab, VocabType};

/// kind index of IRI values
pub const KIND_IRI: i32 = -2;
/// kind index of opaque or missing values
pub const KIND_NONE: i32 = -1;

/// The typed alternatives a polymorphic property value can hold.
pub trait Alternatives: Sized {
	/// candidate types, in the order they are tried
	const CANDIDATES: &'static [VocabType];

	/// wraps a deserialized vocabulary object, handing it back if it's not a candidate
	fn typed(value: Vocab) -> Result<Self, Vocab>;
	fn iri(iri: Iri) -> Self;
	fn unknown(value: Value) -> Self;
}

pub fn alias_of(namespaces: &Namespaces) -> String {
	namespaces
		.get(jsonld::ACTIVITYSTREAMS)
		.cloned()
		.unwrap_or_default()
}

pub fn property_key(name: &str, alias: &str) -> String {
	if alias.is_empty() {
		name.to_string()
	} else {
		format!("{alias}:{name}")
	}
}

/// finds the raw value of property `name`, returning the alias used to look for it
pub fn lookup<'a>(map: &'a Map<String, Value>, name: &str, namespaces: &Namespaces) -> (String, Option<&'a Value>) {
	let alias = alias_of(namespaces);
	let raw = map.get(property_key(name, &alias).as_str());
	(alias, raw)
}

/// Only absolute IRIs are accepted: a scheme is required, plain text is never an IRI.
pub fn parse_iri(value: &str) -> Option<Iri> {
	Iri::parse(value).ok()
}

pub fn kind_position(candidates: &[VocabType], kind: VocabType) -> i32 {
	candidates
		.iter()
		.position(|c| *c == kind)
		.map_or(KIND_NONE, |i| i as i32)
}

pub fn resolve<V: Alternatives>(raw: &Value, namespaces: &Namespaces, registry: &Registry) -> V {
	if let Value::String(s) = raw {
		if let Some(iri) = parse_iri(s) {
			return V::iri(iri);
		}
	}

	if let Value::Object(map) = raw {
		for candidate in V::CANDIDATES {
			match registry.deserialize_as(*candidate, map, namespaces) {
				Ok(vocab) => match V::typed(vocab) {
					Ok(value) => return value,
					Err(other) => tracing::warn!(
						"deserializer for {candidate} produced a {}, skipping it",
						other.vocab_type()
					),
				},
				Err(e) => tracing::trace!("value is not a {candidate}: {e}"),
			}
		}
	}

	tracing::debug!("keeping unrecognized value as opaque");
	V::unknown(raw.clone())
}
