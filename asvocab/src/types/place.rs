use crate::property::{
	AccuracyProperty, AltitudeProperty, AttachmentProperty, AttributedToProperty, AudienceProperty,
	BccProperty, BtoProperty, CcProperty, ContentMapProperty, ContentProperty, ContextProperty,
	DurationProperty, EndTimeProperty, GeneratorProperty, IconProperty, IdProperty, ImageProperty,
	InReplyToProperty, LatitudeProperty, LocationProperty, LongitudeProperty, MediaTypeProperty,
	NameMapProperty, NameProperty, PreviewProperty, PublishedProperty, RadiusProperty,
	RepliesProperty, StartTimeProperty, SummaryMapProperty, SummaryProperty, TagProperty,
	ToProperty, UnitsProperty, UpdatedProperty, UrlProperty,
};

crate::vocabulary_object! {
	/// A logical or physical location.
	pub struct Place {
		id: IdProperty,
		name: NameProperty,
		summary: SummaryProperty,
		content: ContentProperty,
		media_type: MediaTypeProperty,
		published: PublishedProperty,
		updated: UpdatedProperty,
		name_map: NameMapProperty,
		summary_map: SummaryMapProperty,
		content_map: ContentMapProperty,
		attributed_to: AttributedToProperty,
		to: ToProperty,
		cc: CcProperty,
		bto: BtoProperty,
		bcc: BccProperty,
		audience: AudienceProperty,
		url: UrlProperty,
		tag: TagProperty,
		attachment: AttachmentProperty,
		icon: IconProperty,
		image: ImageProperty,
		in_reply_to: InReplyToProperty,
		context: ContextProperty,
		generator: GeneratorProperty,
		replies: RepliesProperty,
		start_time: StartTimeProperty,
		end_time: EndTimeProperty,
		duration: DurationProperty,
		accuracy: AccuracyProperty,
		altitude: AltitudeProperty,
		latitude: LatitudeProperty,
		longitude: LongitudeProperty,
		radius: RadiusProperty,
		units: UnitsProperty,
		location: LocationProperty,
		preview: PreviewProperty,
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{DecodeError, EncodeError, Namespaces, Registry, StableOrder, VocabType};

	#[test]
	fn round_trip() {
		let doc = json!({
			"type": "Place",
			"name": "Fresno Area",
			"latitude": 36.75,
			"longitude": 119.7667,
			"radius": 15,
			"units": "miles",
			"published": "2015-01-25T12:34:56Z",
			"location": [
				"https://example.com/places/california",
				{ "type": "Place", "name": "Earth" },
			],
		});
		let place = Place::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert_eq!(place.latitude().and_then(|x| x.get()), Some(&36.75));
		assert_eq!(place.radius().and_then(|x| x.get()), Some(&15.0));
		assert_eq!(place.location().map(|x| x.len()), Some(2));

		let encoded = place.serialize().unwrap();
		let again = Place::deserialize(&encoded, &Namespaces::new(), &Registry::default()).unwrap();
		assert_eq!(again, place);
		assert!(!again.less_than(&place) && !place.less_than(&again));
	}

	#[test]
	fn dates_keep_their_offset() {
		let doc = json!({
			"type": "Place",
			"published": "2014-12-12T12:12:12+02:00",
			"startTime": "2014-12-31T23:00:00-08:00",
			"endTime": "2015-01-01T09:00:00Z",
			"duration": "PT2H",
		});
		let place = Place::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		let published = place.published().and_then(|x| x.get()).unwrap();
		assert_eq!(published.offset().local_minus_utc(), 2 * 3600);
		let start = place.start_time().and_then(|x| x.get()).unwrap();
		let end = place.end_time().and_then(|x| x.get()).unwrap();
		assert!(start < end);
		assert_eq!(place.duration().and_then(|x| x.get()).map(String::as_str), Some("PT2H"));
		assert_eq!(serde_json::Value::Object(place.serialize().unwrap()), doc);
	}

	#[test]
	fn object_properties() {
		let doc = json!({
			"type": "Place",
			"nameMap": { "en": "Fresno Area", "es": "Área de Fresno" },
			"contentMap": { "en": "a city" },
			"attributedTo": "https://example.com/users/alice",
			"to": ["https://www.w3.org/ns/activitystreams#Public", "https://example.com/users/bob"],
			"cc": "https://example.com/users/alice/followers",
			"bto": "https://example.com/users/carol",
			"bcc": "https://example.com/users/dave",
			"audience": { "type": "Collection", "totalItems": 2 },
			"url": [
				"https://example.com/places/fresno",
				{ "type": "Link", "href": "https://example.com/places/fresno.html", "mediaType": "text/html" },
			],
			"tag": { "type": "Mention", "href": "https://example.com/@bob", "name": "@bob" },
			"attachment": [],
			"icon": { "type": "Link", "href": "https://example.com/icon.png" },
			"image": "https://example.com/fresno.jpg",
			"inReplyTo": "https://example.com/notes/1",
			"context": "https://example.com/threads/1",
			"generator": { "type": "Note", "content": "not known" },
			"replies": { "type": "OrderedCollection", "totalItems": 0 },
		});
		let place = Place::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert!(place.unknown_properties().is_empty());
		assert_eq!(place.to().map(|x| x.len()), Some(2));
		assert!(place.to().and_then(|x| x.at(1)).is_some_and(|x| x.is_iri()));
		assert!(place.audience().and_then(|x| x.at(0)).is_some_and(|x| x.is_collection()));
		assert!(place.url().and_then(|x| x.at(1)).is_some_and(|x| x.is_link()));
		assert!(place.tag().and_then(|x| x.at(0)).is_some_and(|x| x.is_mention()));
		assert!(place.icon().and_then(|x| x.at(0)).is_some_and(|x| x.is_link()));
		assert!(place.generator().and_then(|x| x.at(0)).is_some_and(|x| x.is_unknown()));
		assert!(place.replies().is_some_and(|x| x.is_ordered_collection()));
		assert_eq!(place.replies().map(|x| x.kind_index()), Some(2));
		assert_eq!(place.content_map().and_then(|x| x.get()).map(|x| x.len()), Some(1));
		assert_eq!(serde_json::Value::Object(place.serialize().unwrap()), doc);
	}

	#[test]
	fn non_finite_coordinates_fail_encoding() {
		let place = Place::new().set_altitude(Some(AltitudeProperty::with(f64::INFINITY)));
		assert!(matches!(place.serialize(), Err(EncodeError::NonFiniteNumber("altitude"))));
		let place = place.set_altitude(Some(AltitudeProperty::with(12.5)));
		assert_eq!(place.serialize().unwrap().get("altitude"), Some(&json!(12.5)));
	}

	#[test]
	fn place_checks_its_type() {
		let doc = json!({ "type": "Relationship", "name": "not a place" });
		let res = Place::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default());
		assert!(matches!(res, Err(DecodeError::WrongType { expected: VocabType::Place, .. })));
	}

	#[test]
	fn unparsable_literals_are_kept_opaque() {
		let doc = json!({ "type": "Place", "latitude": "north", "units": 3 });
		let place = Place::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert!(place.latitude().is_some_and(|x| x.is_unknown()));
		assert!(place.units().is_some_and(|x| x.is_unknown()));
		assert_eq!(serde_json::Value::Object(place.serialize().unwrap()), doc);
	}

	#[test]
	fn properties_order_before_unknowns() {
		let plain = Place::new();
		let named = Place::new().set_name(Some(NameProperty::with("a".to_string())));
		let custom = Place::new().set_unknown("x", json!(1));
		assert!(plain.less_than(&named));
		assert!(plain.less_than(&custom));
		assert!(custom.less_than(&named));
	}
}
