use crate::VocabType;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("no \"type\" property in map")]
	MissingType,

	#[error("\"type\" property is not of {expected} type: {found}")]
	WrongType { expected: VocabType, found: String },

	#[error("could not find a \"type\" property of value {0}")]
	TypeNotListed(VocabType),

	#[error("\"type\" property is unrecognized type: {0}")]
	MalformedType(&'static str),

	#[error("no deserializer registered for type '{0}'")]
	Unregistered(String),

	#[error("document is not a json object")]
	NotAnObject,

	#[error("invalid property '{property}' on {object}: {source}")]
	Property {
		object: VocabType,
		property: &'static str,
		#[source]
		source: Box<DecodeError>,
	},
}

impl DecodeError {
	pub fn property(object: VocabType, property: &'static str, source: DecodeError) -> Self {
		DecodeError::Property { object, property, source: Box::new(source) }
	}
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	#[error("property '{0}' holds a number which can't be represented in json")]
	NonFiniteNumber(&'static str),
}
