mod literal;
pub use literal::*;

mod collection;
pub use collection::*;

mod object;
pub use object::*;

use std::{cmp::Ordering, collections::BTreeMap};

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::{resolve, DecodeError, EncodeError, Iri, Namespaces, Registry, StableOrder};

/// Natural language values keyed by BCP47 language tag, as in `nameMap`.
pub type LangMap = BTreeMap<String, String>;

/// A property of some vocabulary object, stored under `NAME` (possibly alias-prefixed).
pub trait Property: Sized + StableOrder {
	const NAME: &'static str;

	/// `Ok(None)` means the property is not in the map at all
	fn deserialize(map: &Map<String, Value>, namespaces: &Namespaces, registry: &Registry) -> Result<Option<Self>, DecodeError>;

	/// `Ok(None)` means there is nothing to emit
	fn serialize(&self) -> Result<Option<Value>, EncodeError>;

	fn jsonld_context(&self) -> Namespaces;

	fn alias(&self) -> &str;

	fn name(&self) -> &'static str {
		Self::NAME
	}

	/// key this property is written under
	fn key(&self) -> String {
		resolve::property_key(Self::NAME, self.alias())
	}
}

/// Plain json values a literal property can hold.
pub trait Literal: Sized {
	fn from_json(value: &Value) -> Option<Self>;
	/// `None` if the literal can't be represented in json
	fn to_json(&self) -> Option<Value>;
	fn literal_cmp(&self, other: &Self) -> Ordering;
}

impl Literal for String {
	fn from_json(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}

	fn to_json(&self) -> Option<Value> {
		Some(Value::String(self.clone()))
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

impl Literal for f64 {
	fn from_json(value: &Value) -> Option<Self> {
		value.as_f64()
	}

	fn to_json(&self) -> Option<Value> {
		Number::from_f64(*self).map(Value::Number)
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.total_cmp(other)
	}
}

impl Literal for u64 {
	// integral floats like 3.0 are accepted too
	fn from_json(value: &Value) -> Option<Self> {
		value.as_u64().or_else(|| {
			let x = value.as_f64()?;
			if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 {
				Some(x as u64)
			} else {
				None
			}
		})
	}

	fn to_json(&self) -> Option<Value> {
		Some(Value::Number(Number::from(*self)))
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

// offsets are kept as written, ordering is by instant first
impl Literal for DateTime<FixedOffset> {
	fn from_json(value: &Value) -> Option<Self> {
		DateTime::parse_from_rfc3339(value.as_str()?).ok()
	}

	fn to_json(&self) -> Option<Value> {
		Some(Value::String(self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)))
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
			.then_with(|| self.offset().local_minus_utc().cmp(&other.offset().local_minus_utc()))
	}
}

impl Literal for Iri {
	fn from_json(value: &Value) -> Option<Self> {
		resolve::parse_iri(value.as_str()?)
	}

	fn to_json(&self) -> Option<Value> {
		Some(Value::String(self.as_str().to_string()))
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

impl Literal for LangMap {
	fn from_json(value: &Value) -> Option<Self> {
		value
			.as_object()?
			.iter()
			.map(|(lang, text)| Some((lang.clone(), text.as_str()?.to_string())))
			.collect()
	}

	fn to_json(&self) -> Option<Value> {
		Some(Value::Object(
			self.iter()
				.map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
				.collect()
		))
	}

	fn literal_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

/// Value of a literal property. IRIs only show up for literals which can't be parsed from the
/// IRI string itself, since the literal is always tried first.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue<T> {
	Value(T),
	Iri(Iri),
	Unknown(Value),
	Empty,
}

impl<T> Default for LiteralValue<T> {
	fn default() -> Self {
		LiteralValue::Empty
	}
}

impl<T: Literal> LiteralValue<T> {
	pub fn resolve(raw: &Value) -> Self {
		if let Some(value) = T::from_json(raw) {
			return LiteralValue::Value(value);
		}
		if let Some(iri) = raw.as_str().and_then(resolve::parse_iri) {
			return LiteralValue::Iri(iri);
		}
		tracing::debug!("keeping unparsable literal as opaque: {raw}");
		LiteralValue::Unknown(raw.clone())
	}

	pub fn serialize(&self, property: &'static str) -> Result<Option<Value>, EncodeError> {
		match self {
			LiteralValue::Value(x) => x
				.to_json()
				.map(Some)
				.ok_or(EncodeError::NonFiniteNumber(property)),
			LiteralValue::Iri(iri) => Ok(Some(Value::String(iri.as_str().to_string()))),
			LiteralValue::Unknown(x) => Ok(Some(x.clone())),
			LiteralValue::Empty => Ok(None),
		}
	}
}

impl<T> LiteralValue<T> {
	pub fn get(&self) -> Option<&T> {
		match self {
			LiteralValue::Value(x) => Some(x),
			_ => None,
		}
	}

	pub fn get_iri(&self) -> Option<&Iri> {
		match self {
			LiteralValue::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn get_unknown(&self) -> Option<&Value> {
		match self {
			LiteralValue::Unknown(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_value(&self) -> bool {
		matches!(self, LiteralValue::Value(_))
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, LiteralValue::Iri(_))
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, LiteralValue::Unknown(_))
	}

	pub fn has_any(&self) -> bool {
		matches!(self, LiteralValue::Value(_) | LiteralValue::Iri(_))
	}

	pub fn kind_index(&self) -> i32 {
		match self {
			LiteralValue::Value(_) => 0,
			LiteralValue::Iri(_) => resolve::KIND_IRI,
			LiteralValue::Unknown(_) | LiteralValue::Empty => resolve::KIND_NONE,
		}
	}
}

impl<T: Literal> StableOrder for LiteralValue<T> {
	fn stable_cmp(&self, other: &Self) -> Ordering {
		self.kind_index()
			.cmp(&other.kind_index())
			.then_with(|| match (self, other) {
				(LiteralValue::Value(a), LiteralValue::Value(b)) => a.literal_cmp(b),
				(LiteralValue::Iri(a), LiteralValue::Iri(b)) => a.as_str().cmp(b.as_str()),
				_ => Ordering::Equal,
			})
	}
}
