use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{jsonld, resolve, types, DecodeError, Namespaces, Vocab, VocabType};

pub type DeserializeFn = fn(&Map<String, Value>, &Namespaces, &Registry) -> Result<Vocab, DecodeError>;

/// Deserializers for each vocabulary type, handed to every deserialization call so that
/// properties can build the objects they hold (and objects the properties they hold).
///
/// Replacing or removing entries changes how polymorphic values get classified: a type with no
/// deserializer is simply never matched.
#[derive(Debug, Clone)]
pub struct Registry {
	deserializers: HashMap<VocabType, DeserializeFn>,
}

impl Default for Registry {
	fn default() -> Self {
		Self::activitystreams()
	}
}

impl Registry {
	pub fn empty() -> Self {
		Registry { deserializers: HashMap::new() }
	}

	/// registry with builtin deserializers for every known type
	pub fn activitystreams() -> Self {
		let mut registry = Self::empty();
		for vocab_type in VocabType::ALL {
			registry.register(*vocab_type, vocab_type.deserializer());
		}
		registry
	}

	/// returns the deserializer previously registered for this type, if any
	pub fn register(&mut self, vocab_type: VocabType, deserializer: DeserializeFn) -> Option<DeserializeFn> {
		self.deserializers.insert(vocab_type, deserializer)
	}

	pub fn unregister(&mut self, vocab_type: VocabType) -> Option<DeserializeFn> {
		self.deserializers.remove(&vocab_type)
	}

	pub fn get(&self, vocab_type: VocabType) -> Option<DeserializeFn> {
		self.deserializers.get(&vocab_type).copied()
	}

	pub fn deserialize_as(&self, vocab_type: VocabType, map: &Map<String, Value>, namespaces: &Namespaces) -> Result<Vocab, DecodeError> {
		match self.get(vocab_type) {
			Some(deserializer) => deserializer(map, namespaces, self),
			None => Err(DecodeError::Unregistered(vocab_type.to_string())),
		}
	}

	/// Deserializes a map into whatever its own "type" says. When many types are listed, the
	/// first one which is both known and successfully deserialized wins.
	pub fn deserialize(&self, map: &Map<String, Value>, namespaces: &Namespaces) -> Result<Vocab, DecodeError> {
		let alias = resolve::alias_of(namespaces);
		let names : Vec<&str> = match map.get("type") {
			None => return Err(DecodeError::MissingType),
			Some(Value::String(name)) => vec![name.as_str()],
			Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).collect(),
			Some(other) => return Err(DecodeError::MalformedType(types::json_kind(other))),
		};

		let mut last_error = None;
		for name in &names {
			let Ok(vocab_type) = VocabType::try_from(types::strip_alias(name, &alias)) else {
				tracing::trace!("no vocabulary type named '{name}'");
				continue;
			};
			match self.deserialize_as(vocab_type, map, namespaces) {
				Ok(vocab) => return Ok(vocab),
				Err(e) => {
					tracing::debug!("failed deserializing as {vocab_type}: {e}");
					last_error = Some(e);
				},
			}
		}

		Err(last_error.unwrap_or_else(|| DecodeError::Unregistered(names.join(", "))))
	}

	/// Entry point for whole documents: namespaces are taken from the document's own @context.
	pub fn decode(&self, document: &Value) -> Result<Vocab, DecodeError> {
		let map = document.as_object().ok_or(DecodeError::NotAnObject)?;
		self.deserialize(map, &jsonld::namespaces(map))
	}
}
