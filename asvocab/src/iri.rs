use std::{cmp::Ordering, hash::{Hash, Hasher}, str::FromStr};

use url::Url;

/// Absolute IRI, kept exactly as it was written.
///
/// Parsing only decides whether a string is an IRI at all (a scheme is required): the original
/// text is what gets compared and serialized, so `https://example.com` doesn't come back as
/// `https://example.com/`.
#[derive(Debug, Clone)]
pub struct Iri {
	raw: String,
	url: Url,
}

impl Iri {
	pub fn parse(value: &str) -> Result<Self, url::ParseError> {
		let url = Url::parse(value)?;
		Ok(Iri { raw: value.to_string(), url })
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// normalized form, for resolving or comparing hosts and paths
	pub fn url(&self) -> &Url {
		&self.url
	}

	pub fn into_string(self) -> String {
		self.raw
	}
}

impl FromStr for Iri {
	type Err = url::ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Iri::parse(s)
	}
}

impl From<Url> for Iri {
	fn from(url: Url) -> Self {
		Iri { raw: url.to_string(), url }
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.raw
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.raw)
	}
}

impl PartialEq for Iri {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for Iri {}

impl Hash for Iri {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.raw.hash(state);
	}
}

impl PartialOrd for Iri {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Iri {
	fn cmp(&self, other: &Self) -> Ordering {
		self.raw.cmp(&other.raw)
	}
}
