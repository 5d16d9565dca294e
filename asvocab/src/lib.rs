//! # asvocab
//! > typed ActivityStreams vocabulary objects, with polymorphic property resolution
//!
//! Every vocabulary type is a plain struct holding one optional field per declared property,
//! plus a bag of properties it doesn't know about. Properties which can hold different kinds of
//! values are enums, tried in a fixed order while deserializing:
//!
//! ```rust
//! use asvocab::{Registry, Vocab};
//!
//! let doc = serde_json::json!({
//! 	"@context": "https://www.w3.org/ns/activitystreams",
//! 	"type": "CollectionPage",
//! 	"next": { "type": "Link", "href": "https://example.com/outbox?page=2" },
//! 	"customField": 42,
//! });
//!
//! let Vocab::CollectionPage(page) = Registry::default().decode(&doc).unwrap() else { panic!() };
//! assert!(page.next().unwrap().is_link());
//! assert_eq!(page.unknown_properties().get("customField"), Some(&serde_json::json!(42)));
//! ```
//!
//! Deserializers for nested objects are looked up in a [`Registry`], which can be customized to
//! change or restrict which types get recognized.

mod macros;
pub(crate) use macros::{strenum, literal_property, polymorphic, vocabulary_object};
pub use macros::TypeValueError;

mod error;
pub use error::{DecodeError, EncodeError};

mod order;
pub use order::StableOrder;

mod iri;
pub use iri::Iri;

pub mod jsonld;
pub use jsonld::{Namespaces, LD};

pub mod resolve;

mod registry;
pub use registry::{DeserializeFn, Registry};

pub mod property;
pub use property::{LangMap, Literal, LiteralValue, Property};

pub mod types;
pub use types::{
	Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place,
	Relationship, Vocab, VocabType,
};
