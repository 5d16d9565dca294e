use chrono::{DateTime, FixedOffset};

use super::LangMap;
use crate::Iri;

crate::literal_property! {
	/// unique global identifier of an object or link
	pub struct IdProperty("id") => Iri;

	/// target resource pointed to by a link
	pub struct HrefProperty("href") => Iri;

	/// language of the resource pointed to by a link, as a BCP47 tag
	pub struct HreflangProperty("hreflang") => String;

	pub struct MediaTypeProperty("mediaType") => String;

	pub struct NameProperty("name") => String;

	/// name in many languages
	pub struct NameMapProperty("nameMap") => LangMap;

	pub struct SummaryProperty("summary") => String;

	pub struct SummaryMapProperty("summaryMap") => LangMap;

	pub struct ContentProperty("content") => String;

	pub struct ContentMapProperty("contentMap") => LangMap;

	/// link relations, usually html rel values like "canonical" or "preview"
	pub struct RelProperty("rel") => [String];

	pub struct HeightProperty("height") => u64;

	pub struct WidthProperty("width") => u64;

	/// accuracy of position coordinates of a place, in percent
	pub struct AccuracyProperty("accuracy") => f64;

	pub struct AltitudeProperty("altitude") => f64;

	pub struct LatitudeProperty("latitude") => f64;

	pub struct LongitudeProperty("longitude") => f64;

	pub struct RadiusProperty("radius") => f64;

	/// unit for radius and altitude, either one of "cm", "feet", "inches", "km", "m", "miles" or an IRI
	pub struct UnitsProperty("units") => String;

	pub struct PublishedProperty("published") => DateTime<FixedOffset>;

	pub struct UpdatedProperty("updated") => DateTime<FixedOffset>;

	pub struct StartTimeProperty("startTime") => DateTime<FixedOffset>;

	pub struct EndTimeProperty("endTime") => DateTime<FixedOffset>;

	/// approximate length of a time-bound object, as an xsd:duration like "PT2H"
	pub struct DurationProperty("duration") => String;

	pub struct TotalItemsProperty("totalItems") => u64;

	/// index of the first item of an ordered page, relative to the whole collection
	pub struct StartIndexProperty("startIndex") => u64;
}
