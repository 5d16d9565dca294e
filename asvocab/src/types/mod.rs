mod link;
pub use link::{Link, Mention};

mod place;
pub use place::Place;

mod relationship;
pub use relationship::Relationship;

mod collection;
pub use collection::{
	Collection, OrderedCollection,
	page::{CollectionPage, OrderedCollectionPage},
};

use serde_json::{Map, Value};

use crate::{resolve, DecodeError, DeserializeFn, EncodeError, Namespaces, Registry, StableOrder};

crate::strenum! {
	pub enum VocabType {
		Collection,
		CollectionPage,
		Link,
		Mention,
		OrderedCollection,
		OrderedCollectionPage,
		Place,
		Relationship,
	};
}

// every type of the core vocabulary which is an Object, extended ones included
const OBJECT_TYPES: &[&str] = &[
	"Accept", "Activity", "Add", "Announce", "Application", "Arrive", "Article", "Audio", "Block",
	"Collection", "CollectionPage", "Create", "Delete", "Dislike", "Document", "Event", "Flag",
	"Follow", "Group", "Ignore", "Image", "IntransitiveActivity", "Invite", "Join", "Leave", "Like",
	"Listen", "Move", "Note", "Object", "Offer", "OrderedCollection", "OrderedCollectionPage",
	"Organization", "Page", "Person", "Place", "Profile", "Question", "Read", "Reject",
	"Relationship", "Remove", "Service", "TentativeAccept", "TentativeReject", "Tombstone", "Travel",
	"Undo", "Update", "Video", "View",
];

const LINK_TYPES: &[&str] = &["Link", "Mention"];

impl VocabType {
	fn supertypes(&self) -> &'static [&'static str] {
		match self {
			VocabType::Link => &[],
			VocabType::Mention => &["Link"],
			VocabType::Place | VocabType::Relationship | VocabType::Collection => &["Object"],
			VocabType::OrderedCollection | VocabType::CollectionPage => &["Collection", "Object"],
			VocabType::OrderedCollectionPage => &["Collection", "CollectionPage", "Object", "OrderedCollection"],
		}
	}

	fn subtypes(&self) -> &'static [&'static str] {
		match self {
			VocabType::Link => &["Mention"],
			VocabType::Collection => &["CollectionPage", "OrderedCollection", "OrderedCollectionPage"],
			VocabType::OrderedCollection | VocabType::CollectionPage => &["OrderedCollectionPage"],
			VocabType::Mention
				| VocabType::Place
				| VocabType::Relationship
				| VocabType::OrderedCollectionPage => &[],
		}
	}

	fn disjoint(&self) -> &'static [&'static str] {
		match self {
			VocabType::Link | VocabType::Mention => OBJECT_TYPES,
			_ => LINK_TYPES,
		}
	}

	/// true if this type extends the type named `other`, directly or not
	pub fn extends(&self, other: &str) -> bool {
		self.supertypes().contains(&other)
	}

	pub fn is_disjoint_with(&self, other: &str) -> bool {
		self.disjoint().contains(&other)
	}

	/// true if the type named `other` extends this type, directly or not
	pub fn is_extended_by(&self, other: &str) -> bool {
		self.subtypes().contains(&other)
	}
}

macro_rules! vocab {
	( $($name:ident),+ $(,)? ) => {
		/// Any vocabulary object, as produced by a [`Registry`].
		#[derive(Debug, Clone, PartialEq)]
		pub enum Vocab {
			$($name($name),)+
		}

		impl Vocab {
			pub fn vocab_type(&self) -> VocabType {
				match self {
					$(Vocab::$name(_) => VocabType::$name,)+
				}
			}

			pub fn serialize(&self) -> Result<Map<String, Value>, EncodeError> {
				match self {
					$(Vocab::$name(x) => x.serialize(),)+
				}
			}

			pub fn jsonld_context(&self) -> Namespaces {
				match self {
					$(Vocab::$name(x) => x.jsonld_context(),)+
				}
			}

			pub fn alias(&self) -> &str {
				match self {
					$(Vocab::$name(x) => x.alias(),)+
				}
			}

			pub fn extra_types(&self) -> &[String] {
				match self {
					$(Vocab::$name(x) => x.extra_types(),)+
				}
			}

			pub fn unknown_properties(&self) -> &Map<String, Value> {
				match self {
					$(Vocab::$name(x) => x.unknown_properties(),)+
				}
			}
		}

		$(
			impl From<$name> for Vocab {
				fn from(value: $name) -> Self {
					Vocab::$name(value)
				}
			}
		)+

		impl StableOrder for Vocab {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				match (self, other) {
					$((Vocab::$name(a), Vocab::$name(b)) => a.stable_cmp(b),)+
					_ => self.vocab_type().cmp(&other.vocab_type()),
				}
			}
		}

		paste::paste! {
			$(
				fn [< deserialize_ $name:snake >](
					map: &Map<String, Value>,
					namespaces: &Namespaces,
					registry: &Registry,
				) -> Result<Vocab, DecodeError> {
					$name::deserialize(map, namespaces, registry).map(Vocab::$name)
				}
			)+

			impl VocabType {
				/// builtin deserializer for this type
				pub fn deserializer(&self) -> DeserializeFn {
					match self {
						$(VocabType::$name => [< deserialize_ $name:snake >] as DeserializeFn,)+
					}
				}
			}
		}
	};
}

vocab! {
	Collection,
	CollectionPage,
	Link,
	Mention,
	OrderedCollection,
	OrderedCollectionPage,
	Place,
	Relationship,
}

pub(crate) fn strip_alias<'a>(name: &'a str, alias: &str) -> &'a str {
	if alias.is_empty() {
		return name;
	}
	name.strip_prefix(alias)
		.and_then(|x| x.strip_prefix(':'))
		.unwrap_or(name)
}

/// Checks that "type" lists `expected`, returning all other listed types.
pub(crate) fn check_type(map: &Map<String, Value>, expected: VocabType, alias: &str) -> Result<Vec<String>, DecodeError> {
	match map.get("type") {
		None => Err(DecodeError::MissingType),
		Some(Value::String(name)) => {
			if strip_alias(name, alias) == expected.as_ref() {
				Ok(Vec::new())
			} else {
				Err(DecodeError::WrongType { expected, found: name.clone() })
			}
		},
		Some(Value::Array(names)) => {
			let mut found = false;
			let mut extra = Vec::new();
			for name in names {
				let Some(name) = name.as_str() else {
					tracing::warn!("dropping non-string \"type\" entry: {name}");
					continue;
				};
				if !found && strip_alias(name, alias) == expected.as_ref() {
					found = true;
				} else {
					extra.push(name.to_string());
				}
			}
			if found {
				Ok(extra)
			} else {
				Err(DecodeError::TypeNotListed(expected))
			}
		},
		Some(other) => Err(DecodeError::MalformedType(json_kind(other))),
	}
}

/// "type" and declared properties under their alias-aware key
pub(crate) fn is_declared(key: &str, alias: &str, properties: &[&str]) -> bool {
	if key == "type" {
		return true;
	}
	let name = if alias.is_empty() {
		key
	} else {
		match key.strip_prefix(alias).and_then(|x| x.strip_prefix(':')) {
			Some(name) => name,
			None => return false,
		}
	};
	properties.contains(&name)
}

pub(crate) fn type_value(own: VocabType, alias: &str, extra: &[String]) -> Value {
	let own = Value::String(resolve::property_key(own.as_ref(), alias));
	if extra.is_empty() {
		own
	} else {
		let mut out = Vec::with_capacity(extra.len() + 1);
		out.push(own);
		out.extend(extra.iter().cloned().map(Value::String));
		Value::Array(out)
	}
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	#[test]
	fn type_names_round_trip() {
		for vocab_type in VocabType::ALL {
			assert_eq!(VocabType::try_from(vocab_type.as_ref()).ok(), Some(*vocab_type));
		}
		assert!(VocabType::try_from("Person").is_err());
		assert_eq!(VocabType::OrderedCollectionPage.to_string(), "OrderedCollectionPage");
	}

	#[test]
	fn lattice() {
		assert!(VocabType::Mention.extends("Link"));
		assert!(!VocabType::Link.extends("Mention"));
		assert!(VocabType::Link.is_extended_by("Mention"));
		assert!(VocabType::OrderedCollectionPage.extends("CollectionPage"));
		assert!(VocabType::OrderedCollectionPage.extends("OrderedCollection"));
		assert!(VocabType::Collection.is_extended_by("OrderedCollectionPage"));
		assert!(!VocabType::Place.is_extended_by("Relationship"));
		assert!(VocabType::Link.is_disjoint_with("Note"));
		assert!(VocabType::Mention.is_disjoint_with("Collection"));
		assert!(!VocabType::Link.is_disjoint_with("Mention"));
		assert!(VocabType::Relationship.is_disjoint_with("Mention"));
		assert!(!VocabType::Relationship.is_disjoint_with("Place"));
	}

	#[test]
	fn type_checks() {
		let check = |doc: Value| check_type(doc.as_object().unwrap(), VocabType::Link, "");
		assert_eq!(check(json!({ "type": "Link" })).unwrap(), Vec::<String>::new());
		assert_eq!(check(json!({ "type": ["Hashtag", "Link"] })).unwrap(), vec!["Hashtag".to_string()]);
		assert!(matches!(check(json!({})), Err(DecodeError::MissingType)));
		assert!(matches!(
			check(json!({ "type": "Mention" })),
			Err(DecodeError::WrongType { expected: VocabType::Link, found }) if found == "Mention"
		));
		assert!(matches!(check(json!({ "type": ["Mention"] })), Err(DecodeError::TypeNotListed(VocabType::Link))));
		assert!(matches!(check(json!({ "type": { "a": 1 } })), Err(DecodeError::MalformedType("object"))));
	}

	#[test]
	fn type_checks_with_alias() {
		let doc = json!({ "type": ["as:Link", "toot:Emoji"] });
		let extra = check_type(doc.as_object().unwrap(), VocabType::Link, "as").unwrap();
		assert_eq!(extra, vec!["toot:Emoji".to_string()]);
		assert_eq!(type_value(VocabType::Link, "as", &extra), json!(["as:Link", "toot:Emoji"]));
		// prefix must be followed by a colon
		assert_eq!(strip_alias("asLink", "as"), "asLink");
	}

	#[test]
	fn declared_keys() {
		let props = &["name", "href"];
		assert!(is_declared("type", "", props));
		assert!(is_declared("name", "", props));
		assert!(!is_declared("as:name", "", props));
		assert!(is_declared("as:name", "as", props));
		assert!(!is_declared("name", "as", props));
		assert!(!is_declared("customField", "", props));
		assert!(!is_declared("namely", "", props));
	}

	#[test]
	fn vocab_dispatch() {
		let registry = Registry::default();
		let doc = json!({ "type": "Mention", "href": "https://example.com/@alice", "name": "@alice" });
		let vocab = registry.deserialize_as(VocabType::Mention, doc.as_object().unwrap(), &Namespaces::new()).unwrap();
		assert_eq!(vocab.vocab_type(), VocabType::Mention);
		assert_eq!(Value::Object(vocab.serialize().unwrap()), doc);
		assert!(vocab.extra_types().is_empty());

		let link = Vocab::from(Link::new());
		assert!(link.less_than(&vocab));
		assert!(!vocab.less_than(&link));
	}
}
