#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* $(,)? };)+ ) => {
		$(
			#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
			}

			impl $enum_name {
				pub const ALL: &'static [Self] = &[$(Self::$flat,)*];
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value: &str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => Err($crate::macros::TypeValueError),
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// Declares literal (single-typed) properties: the literal itself, an IRI standing in for it, or
/// an opaque value. `=> T` declares a functional property, `=> [T]` a non-functional one.
macro_rules! literal_property {
	() => {};

	(
		$(#[$meta:meta])*
		pub struct $prop:ident($name:literal) => [$t:ty];
		$($rest:tt)*
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Default)]
		pub struct $prop {
			alias: String,
			values: Vec<$crate::property::LiteralValue<$t>>,
		}

		impl $prop {
			pub fn new() -> Self {
				Self::default()
			}

			pub fn len(&self) -> usize {
				self.values.len()
			}

			pub fn is_empty(&self) -> bool {
				self.values.is_empty()
			}

			pub fn iter(&self) -> std::slice::Iter<'_, $crate::property::LiteralValue<$t>> {
				self.values.iter()
			}

			pub fn at(&self, index: usize) -> Option<&$crate::property::LiteralValue<$t>> {
				self.values.get(index)
			}

			/// literal values only, skipping IRIs and opaque ones
			pub fn literals(&self) -> impl Iterator<Item = &$t> {
				self.values.iter().filter_map(|x| x.get())
			}

			pub fn append(&mut self, value: $t) {
				self.values.push($crate::property::LiteralValue::Value(value));
			}

			pub fn prepend(&mut self, value: $t) {
				self.values.insert(0, $crate::property::LiteralValue::Value(value));
			}

			pub fn append_iri(&mut self, iri: $crate::Iri) {
				self.values.push($crate::property::LiteralValue::Iri(iri));
			}

			pub fn remove(&mut self, index: usize) -> Option<$crate::property::LiteralValue<$t>> {
				if index < self.values.len() {
					Some(self.values.remove(index))
				} else {
					None
				}
			}

			/// canonical ordering of contained values
			pub fn sort(&mut self) {
				self.values.sort_by($crate::StableOrder::stable_cmp);
			}

			pub fn clear(&mut self) {
				self.values.clear();
			}
		}

		impl $crate::Property for $prop {
			const NAME: &'static str = $name;

			fn deserialize(
				map: &serde_json::Map<String, serde_json::Value>,
				namespaces: &$crate::Namespaces,
				_registry: &$crate::Registry,
			) -> Result<Option<Self>, $crate::DecodeError> {
				let (alias, raw) = $crate::resolve::lookup(map, $name, namespaces);
				let Some(raw) = raw else { return Ok(None) };
				let values = match raw {
					serde_json::Value::Array(arr) => arr.iter().map($crate::property::LiteralValue::resolve).collect(),
					x => vec![$crate::property::LiteralValue::resolve(x)],
				};
				Ok(Some(Self { alias, values }))
			}

			fn serialize(&self) -> Result<Option<serde_json::Value>, $crate::EncodeError> {
				let mut out = Vec::with_capacity(self.values.len());
				for value in &self.values {
					if let Some(x) = value.serialize($name)? {
						out.push(x);
					}
				}
				if out.len() == 1 {
					Ok(out.pop())
				} else {
					Ok(Some(serde_json::Value::Array(out)))
				}
			}

			fn jsonld_context(&self) -> $crate::Namespaces {
				$crate::jsonld::context_of(&self.alias)
			}

			fn alias(&self) -> &str {
				&self.alias
			}
		}

		impl $crate::StableOrder for $prop {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				for (a, b) in self.values.iter().zip(other.values.iter()) {
					match $crate::StableOrder::stable_cmp(a, b) {
						std::cmp::Ordering::Equal => continue,
						ord => return ord,
					}
				}
				self.values.len().cmp(&other.values.len())
			}
		}

		$crate::literal_property! { $($rest)* }
	};

	(
		$(#[$meta:meta])*
		pub struct $prop:ident($name:literal) => $t:ty;
		$($rest:tt)*
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Default)]
		pub struct $prop {
			alias: String,
			value: $crate::property::LiteralValue<$t>,
		}

		impl $prop {
			pub fn new() -> Self {
				Self::default()
			}

			/// property already holding given literal
			pub fn with(value: $t) -> Self {
				Self {
					alias: String::new(),
					value: $crate::property::LiteralValue::Value(value),
				}
			}

			pub fn value(&self) -> &$crate::property::LiteralValue<$t> {
				&self.value
			}

			pub fn get(&self) -> Option<&$t> {
				self.value.get()
			}

			pub fn set(&mut self, value: $t) {
				self.value = $crate::property::LiteralValue::Value(value);
			}

			pub fn is_value(&self) -> bool {
				self.value.is_value()
			}

			pub fn get_iri(&self) -> Option<&$crate::Iri> {
				self.value.get_iri()
			}

			pub fn set_iri(&mut self, iri: $crate::Iri) {
				self.value = $crate::property::LiteralValue::Iri(iri);
			}

			pub fn is_iri(&self) -> bool {
				self.value.is_iri()
			}

			pub fn get_unknown(&self) -> Option<&serde_json::Value> {
				self.value.get_unknown()
			}

			pub fn is_unknown(&self) -> bool {
				self.value.is_unknown()
			}

			pub fn has_any(&self) -> bool {
				self.value.has_any()
			}

			pub fn clear(&mut self) {
				self.value = $crate::property::LiteralValue::Empty;
			}

			pub fn kind_index(&self) -> i32 {
				self.value.kind_index()
			}
		}

		impl $crate::Property for $prop {
			const NAME: &'static str = $name;

			fn deserialize(
				map: &serde_json::Map<String, serde_json::Value>,
				namespaces: &$crate::Namespaces,
				_registry: &$crate::Registry,
			) -> Result<Option<Self>, $crate::DecodeError> {
				let (alias, raw) = $crate::resolve::lookup(map, $name, namespaces);
				Ok(raw.map(|raw| Self {
					value: $crate::property::LiteralValue::resolve(raw),
					alias,
				}))
			}

			fn serialize(&self) -> Result<Option<serde_json::Value>, $crate::EncodeError> {
				self.value.serialize($name)
			}

			fn jsonld_context(&self) -> $crate::Namespaces {
				$crate::jsonld::context_of(&self.alias)
			}

			fn alias(&self) -> &str {
				&self.alias
			}
		}

		impl $crate::StableOrder for $prop {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				$crate::StableOrder::stable_cmp(&self.value, &other.value)
			}
		}

		$crate::literal_property! { $($rest)* }
	};
}

pub(crate) use literal_property;

/// Declares a polymorphic property: a tagged union over a fixed, ordered list of vocabulary types,
/// plus IRI and opaque fallbacks. Order of the variants is the order in which they are tried
/// while deserializing, and also their kind index.
macro_rules! polymorphic {
	(@value $name:literal, $value:ident { $($variant:ident),+ }) => {
		#[doc = concat!("Single value of the \"", $name, "\" property.")]
		#[derive(Debug, Clone, PartialEq, Default)]
		pub enum $value {
			$($variant(Box<$crate::types::$variant>),)+
			Iri($crate::Iri),
			Unknown(serde_json::Value),
			#[default]
			Empty,
		}

		paste::paste! {
			impl $value {
				pub fn kind_index(&self) -> i32 {
					match self {
						$(
							Self::$variant(_) => $crate::resolve::kind_position(
								<Self as $crate::resolve::Alternatives>::CANDIDATES,
								$crate::VocabType::$variant,
							),
						)+
						Self::Iri(_) => $crate::resolve::KIND_IRI,
						Self::Unknown(_) | Self::Empty => $crate::resolve::KIND_NONE,
					}
				}

				$(
					pub fn [< is_ $variant:snake >](&self) -> bool {
						matches!(self, Self::$variant(_))
					}

					pub fn [< get_ $variant:snake >](&self) -> Option<&$crate::types::$variant> {
						match self {
							Self::$variant(x) => Some(&**x),
							_ => None,
						}
					}
				)+

				pub fn is_iri(&self) -> bool {
					matches!(self, Self::Iri(_))
				}

				pub fn get_iri(&self) -> Option<&$crate::Iri> {
					match self {
						Self::Iri(x) => Some(x),
						_ => None,
					}
				}

				pub fn is_unknown(&self) -> bool {
					matches!(self, Self::Unknown(_))
				}

				pub fn get_unknown(&self) -> Option<&serde_json::Value> {
					match self {
						Self::Unknown(x) => Some(x),
						_ => None,
					}
				}

				/// true when holding a typed value or an IRI; opaque values don't count
				pub fn has_any(&self) -> bool {
					!matches!(self, Self::Unknown(_) | Self::Empty)
				}

				pub fn serialize(&self) -> Result<Option<serde_json::Value>, $crate::EncodeError> {
					Ok(match self {
						$(Self::$variant(x) => Some(serde_json::Value::Object(x.serialize()?)),)+
						Self::Iri(iri) => Some(serde_json::Value::String(iri.as_str().to_string())),
						Self::Unknown(x) => Some(x.clone()),
						Self::Empty => None,
					})
				}

				pub fn jsonld_context(&self) -> $crate::Namespaces {
					match self {
						$(Self::$variant(x) => x.jsonld_context(),)+
						_ => $crate::Namespaces::new(),
					}
				}
			}
		}

		impl $crate::resolve::Alternatives for $value {
			const CANDIDATES: &'static [$crate::VocabType] = &[$($crate::VocabType::$variant),+];

			#[allow(unreachable_patterns)]
			fn typed(value: $crate::Vocab) -> Result<Self, $crate::Vocab> {
				match value {
					$($crate::Vocab::$variant(x) => Ok(Self::$variant(Box::new(x))),)+
					other => Err(other),
				}
			}

			fn iri(iri: $crate::Iri) -> Self {
				Self::Iri(iri)
			}

			fn unknown(value: serde_json::Value) -> Self {
				Self::Unknown(value)
			}
		}

		impl $crate::StableOrder for $value {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				self.kind_index()
					.cmp(&other.kind_index())
					.then_with(|| match (self, other) {
						$(
							(Self::$variant(a), Self::$variant(b)) =>
								$crate::StableOrder::stable_cmp(&**a, &**b),
						)+
						(Self::Iri(a), Self::Iri(b)) => a.as_str().cmp(b.as_str()),
						_ => std::cmp::Ordering::Equal,
					})
			}
		}
	};

	(
		$(#[$meta:meta])*
		functional $prop:ident($name:literal) as $value:ident { $($variant:ident),+ $(,)? }
	) => {
		$crate::polymorphic!(@value $name, $value { $($variant),+ });

		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Default)]
		pub struct $prop {
			alias: String,
			value: $value,
		}

		paste::paste! {
			impl $prop {
				pub fn new() -> Self {
					Self::default()
				}

				pub fn with(value: $value) -> Self {
					Self { alias: String::new(), value }
				}

				pub fn value(&self) -> &$value {
					&self.value
				}

				pub fn into_value(self) -> $value {
					self.value
				}

				pub fn kind_index(&self) -> i32 {
					self.value.kind_index()
				}

				pub fn has_any(&self) -> bool {
					self.value.has_any()
				}

				pub fn clear(&mut self) {
					self.value = $value::Empty;
				}

				$(
					pub fn [< is_ $variant:snake >](&self) -> bool {
						self.value.[< is_ $variant:snake >]()
					}

					pub fn [< get_ $variant:snake >](&self) -> Option<&$crate::types::$variant> {
						self.value.[< get_ $variant:snake >]()
					}

					pub fn [< set_ $variant:snake >](&mut self, value: $crate::types::$variant) {
						self.value = $value::$variant(Box::new(value));
					}
				)+

				pub fn is_iri(&self) -> bool {
					self.value.is_iri()
				}

				pub fn get_iri(&self) -> Option<&$crate::Iri> {
					self.value.get_iri()
				}

				pub fn set_iri(&mut self, iri: $crate::Iri) {
					self.value = $value::Iri(iri);
				}

				pub fn is_unknown(&self) -> bool {
					self.value.is_unknown()
				}

				pub fn get_unknown(&self) -> Option<&serde_json::Value> {
					self.value.get_unknown()
				}
			}
		}

		impl $crate::Property for $prop {
			const NAME: &'static str = $name;

			fn deserialize(
				map: &serde_json::Map<String, serde_json::Value>,
				namespaces: &$crate::Namespaces,
				registry: &$crate::Registry,
			) -> Result<Option<Self>, $crate::DecodeError> {
				let (alias, raw) = $crate::resolve::lookup(map, $name, namespaces);
				Ok(raw.map(|raw| Self {
					value: $crate::resolve::resolve(raw, namespaces, registry),
					alias,
				}))
			}

			fn serialize(&self) -> Result<Option<serde_json::Value>, $crate::EncodeError> {
				self.value.serialize()
			}

			fn jsonld_context(&self) -> $crate::Namespaces {
				let mut context = $crate::jsonld::context_of(&self.alias);
				$crate::jsonld::merge_context(&mut context, self.value.jsonld_context());
				context
			}

			fn alias(&self) -> &str {
				&self.alias
			}
		}

		impl $crate::StableOrder for $prop {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				$crate::StableOrder::stable_cmp(&self.value, &other.value)
			}
		}
	};

	(
		$(#[$meta:meta])*
		nonfunctional $prop:ident($name:literal) as $value:ident { $($variant:ident),+ $(,)? }
	) => {
		$crate::polymorphic!(@value $name, $value { $($variant),+ });

		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Default)]
		pub struct $prop {
			alias: String,
			values: Vec<$value>,
		}

		paste::paste! {
			impl $prop {
				pub fn new() -> Self {
					Self::default()
				}

				pub fn len(&self) -> usize {
					self.values.len()
				}

				pub fn is_empty(&self) -> bool {
					self.values.is_empty()
				}

				pub fn iter(&self) -> std::slice::Iter<'_, $value> {
					self.values.iter()
				}

				pub fn at(&self, index: usize) -> Option<&$value> {
					self.values.get(index)
				}

				pub fn append(&mut self, value: $value) {
					self.values.push(value);
				}

				pub fn prepend(&mut self, value: $value) {
					self.values.insert(0, value);
				}

				/// panics if `index > len`, like [`Vec::insert`]
				pub fn insert(&mut self, index: usize, value: $value) {
					self.values.insert(index, value);
				}

				/// replaces value at `index`, returning the previous one
				pub fn set(&mut self, index: usize, value: $value) -> Option<$value> {
					let slot = self.values.get_mut(index)?;
					Some(std::mem::replace(slot, value))
				}

				pub fn remove(&mut self, index: usize) -> Option<$value> {
					if index < self.values.len() {
						Some(self.values.remove(index))
					} else {
						None
					}
				}

				/// panics if either index is out of bounds, like [`slice::swap`]
				pub fn swap(&mut self, a: usize, b: usize) {
					self.values.swap(a, b);
				}

				/// whether value at `a` sorts before value at `b`; panics if either index is out
				/// of bounds, like slice indexing
				pub fn less(&self, a: usize, b: usize) -> bool {
					$crate::StableOrder::less_than(&self.values[a], &self.values[b])
				}

				/// canonical ordering of contained values
				pub fn sort(&mut self) {
					self.values.sort_by($crate::StableOrder::stable_cmp);
				}

				pub fn clear(&mut self) {
					self.values.clear();
				}

				$(
					pub fn [< append_ $variant:snake >](&mut self, value: $crate::types::$variant) {
						self.values.push($value::$variant(Box::new(value)));
					}

					pub fn [< prepend_ $variant:snake >](&mut self, value: $crate::types::$variant) {
						self.values.insert(0, $value::$variant(Box::new(value)));
					}
				)+

				pub fn append_iri(&mut self, iri: $crate::Iri) {
					self.values.push($value::Iri(iri));
				}

				pub fn prepend_iri(&mut self, iri: $crate::Iri) {
					self.values.insert(0, $value::Iri(iri));
				}
			}
		}

		impl<'a> IntoIterator for &'a $prop {
			type Item = &'a $value;
			type IntoIter = std::slice::Iter<'a, $value>;

			fn into_iter(self) -> Self::IntoIter {
				self.values.iter()
			}
		}

		impl $crate::Property for $prop {
			const NAME: &'static str = $name;

			fn deserialize(
				map: &serde_json::Map<String, serde_json::Value>,
				namespaces: &$crate::Namespaces,
				registry: &$crate::Registry,
			) -> Result<Option<Self>, $crate::DecodeError> {
				let (alias, raw) = $crate::resolve::lookup(map, $name, namespaces);
				let Some(raw) = raw else { return Ok(None) };
				let values : Vec<$value> = match raw {
					serde_json::Value::Array(arr) => arr
						.iter()
						.map(|x| $crate::resolve::resolve(x, namespaces, registry))
						.collect(),
					x => vec![$crate::resolve::resolve(x, namespaces, registry)],
				};
				Ok(Some(Self { alias, values }))
			}

			fn serialize(&self) -> Result<Option<serde_json::Value>, $crate::EncodeError> {
				let mut out = Vec::with_capacity(self.values.len());
				for value in &self.values {
					if let Some(x) = value.serialize()? {
						out.push(x);
					}
				}
				if out.len() == 1 {
					Ok(out.pop())
				} else {
					Ok(Some(serde_json::Value::Array(out)))
				}
			}

			fn jsonld_context(&self) -> $crate::Namespaces {
				let mut context = $crate::jsonld::context_of(&self.alias);
				for value in &self.values {
					$crate::jsonld::merge_context(&mut context, value.jsonld_context());
				}
				context
			}

			fn alias(&self) -> &str {
				&self.alias
			}
		}

		impl $crate::StableOrder for $prop {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				for (a, b) in self.values.iter().zip(other.values.iter()) {
					match $crate::StableOrder::stable_cmp(a, b) {
						std::cmp::Ordering::Equal => continue,
						ord => return ord,
					}
				}
				self.values.len().cmp(&other.values.len())
			}
		}
	};
}

pub(crate) use polymorphic;

/// Declares a vocabulary type: its declared properties, an unknown properties bag, and the
/// machinery to move it in and out of json maps.
macro_rules! vocabulary_object {
	(
		$(#[$meta:meta])*
		pub struct $name:ident {
			$( $(#[$field_meta:meta])* $field:ident : $prop:ty ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Default)]
		pub struct $name {
			$( $field: Option<$prop>, )+
			extra_types: Vec<String>,
			alias: String,
			unknown: serde_json::Map<String, serde_json::Value>,
		}

		paste::paste! {
			impl $name {
				/// names of all properties declared by this type, besides "type"
				pub const PROPERTIES: &'static [&'static str] = &[$( <$prop as $crate::Property>::NAME ),+];

				pub fn new() -> Self {
					Self::default()
				}

				pub fn vocab_type(&self) -> $crate::VocabType {
					$crate::VocabType::$name
				}

				pub fn alias(&self) -> &str {
					&self.alias
				}

				/// additional "type" entries found besides this type's own name
				pub fn extra_types(&self) -> &[String] {
					&self.extra_types
				}

				pub fn set_extra_types(mut self, val: Vec<String>) -> Self {
					self.extra_types = val;
					self
				}

				pub fn unknown_properties(&self) -> &serde_json::Map<String, serde_json::Value> {
					&self.unknown
				}

				pub fn set_unknown(mut self, key: &str, val: serde_json::Value) -> Self {
					self.unknown.insert(key.to_string(), val);
					self
				}

				pub fn extends(&self, other: &str) -> bool {
					$crate::VocabType::$name.extends(other)
				}

				pub fn is_disjoint_with(&self, other: &str) -> bool {
					$crate::VocabType::$name.is_disjoint_with(other)
				}

				pub fn is_extended_by(&self, other: &str) -> bool {
					$crate::VocabType::$name.is_extended_by(other)
				}

				$(
					$(#[$field_meta])*
					pub fn $field(&self) -> Option<&$prop> {
						self.$field.as_ref()
					}

					pub fn [< $field _mut >](&mut self) -> Option<&mut $prop> {
						self.$field.as_mut()
					}

					pub fn [< set_ $field >](mut self, val: Option<$prop>) -> Self {
						self.$field = val;
						self
					}
				)+

				pub fn deserialize(
					map: &serde_json::Map<String, serde_json::Value>,
					namespaces: &$crate::Namespaces,
					registry: &$crate::Registry,
				) -> Result<Self, $crate::DecodeError> {
					let alias = $crate::resolve::alias_of(namespaces);
					let extra_types = $crate::types::check_type(map, $crate::VocabType::$name, &alias)?;
					let mut this = Self { extra_types, ..Default::default() };
					$(
						this.$field = <$prop as $crate::Property>::deserialize(map, namespaces, registry)
							.map_err(|e| $crate::DecodeError::property(
								$crate::VocabType::$name,
								<$prop as $crate::Property>::NAME,
								e,
							))?;
					)+
					for (key, value) in map {
						if !$crate::types::is_declared(key, &alias, Self::PROPERTIES) {
							this.unknown.insert(key.clone(), value.clone());
						}
					}
					this.alias = alias;
					Ok(this)
				}

				pub fn serialize(&self) -> Result<serde_json::Map<String, serde_json::Value>, $crate::EncodeError> {
					let mut map = serde_json::Map::new();
					map.insert(
						"type".to_string(),
						$crate::types::type_value($crate::VocabType::$name, &self.alias, &self.extra_types),
					);
					$(
						if let Some(property) = &self.$field {
							if let Some(value) = $crate::Property::serialize(property)? {
								map.insert($crate::Property::key(property), value);
							}
						}
					)+
					for (key, value) in &self.unknown {
						if !map.contains_key(key) {
							map.insert(key.clone(), value.clone());
						}
					}
					Ok(map)
				}

				pub fn jsonld_context(&self) -> $crate::Namespaces {
					let mut context = $crate::jsonld::context_of(&self.alias);
					$(
						if let Some(property) = &self.$field {
							$crate::jsonld::merge_context(&mut context, $crate::Property::jsonld_context(property));
						}
					)+
					context
				}
			}
		}

		impl $crate::StableOrder for $name {
			fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
				std::cmp::Ordering::Equal
					$( .then_with(|| $crate::StableOrder::stable_cmp(&self.$field, &other.$field)) )+
					.then_with(|| self.extra_types.cmp(&other.extra_types))
					.then_with(|| self.unknown.len().cmp(&other.unknown.len()))
			}
		}
	};
}

pub(crate) use vocabulary_object;
