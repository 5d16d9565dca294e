use crate::property::{
	AttachmentProperty, AttributedToProperty, AudienceProperty, BccProperty, BtoProperty,
	CcProperty, ContentMapProperty, ContentProperty, ContextProperty, DurationProperty,
	EndTimeProperty, GeneratorProperty, IconProperty, IdProperty, ImageProperty, InReplyToProperty,
	LocationProperty, NameMapProperty, NameProperty, ObjectProperty, PreviewProperty,
	PublishedProperty, RelationshipProperty, RepliesProperty, StartTimeProperty, SubjectProperty,
	SummaryMapProperty, SummaryProperty, TagProperty, ToProperty, UpdatedProperty, UrlProperty,
};

crate::vocabulary_object! {
	/// Describes a relationship between two individuals: `subject` is related to every `object`
	/// by `relationship`.
	pub struct Relationship {
		id: IdProperty,
		name: NameProperty,
		summary: SummaryProperty,
		content: ContentProperty,
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
		subject: SubjectProperty,
		object: ObjectProperty,
		relationship: RelationshipProperty,
		location: LocationProperty,
		preview: PreviewProperty,
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{jsonld::context_of, DecodeError, Namespaces, Property, Registry};

	#[test]
	fn nested_relationship() {
		let doc = json!({
			"type": "Relationship",
			"summary": "Sally is an acquaintance of John",
			"subject": { "type": "Mention", "href": "https://example.com/sally" },
			"relationship": "http://purl.org/vocab/relationship/acquaintanceOf",
			"object": [
				{ "type": "Mention", "href": "https://example.com/john" },
				{ "type": "Person", "name": "John" },
			],
		});
		let rel = Relationship::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert!(rel.subject().is_some_and(|s| s.is_mention()));
		assert!(rel.relationship().and_then(|r| r.at(0)).is_some_and(|r| r.is_iri()));
		let object = rel.object().unwrap();
		assert!(object.at(0).is_some_and(|o| o.is_mention()));
		assert!(object.at(1).is_some_and(|o| o.is_unknown()));
		assert_eq!(serde_json::Value::Object(rel.serialize().unwrap()), doc);
	}

	#[test]
	fn aliased_relationship() {
		let doc = json!({
			"type": "as:Relationship",
			"as:subject": "https://example.com/sally",
			"as:object": { "type": "as:Place", "as:name": "home" },
		});
		let rel = Relationship::deserialize(doc.as_object().unwrap(), &context_of("as"), &Registry::default()).unwrap();
		let place = rel.object().and_then(|o| o.at(0)).and_then(|o| o.get_place()).unwrap();
		assert_eq!(place.alias(), "as");
		assert_eq!(place.name().and_then(|n| n.get()).map(String::as_str), Some("home"));
		assert_eq!(rel.subject().map(|s| s.key()), Some("as:subject".to_string()));
		assert_eq!(serde_json::Value::Object(rel.serialize().unwrap()), doc);
	}

	#[test]
	fn addressing_round_trip() {
		let doc = json!({
			"type": "Relationship",
			"subject": "https://example.com/sally",
			"object": "https://example.com/john",
			"attributedTo": { "type": "Mention", "href": "https://example.com/sally" },
			"to": "https://example.com/john",
			"cc": ["https://example.com/sally/followers", "https://example.com/john/followers"],
			"summaryMap": { "en": "Sally knows John" },
			"startTime": "2010-06-01T00:00:00+01:00",
			"replies": "https://example.com/relationships/1/replies",
		});
		let rel = Relationship::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert!(rel.unknown_properties().is_empty());
		assert!(rel.attributed_to().and_then(|x| x.at(0)).is_some_and(|x| x.is_mention()));
		assert_eq!(rel.cc().map(|x| x.len()), Some(2));
		assert!(rel.replies().is_some_and(|x| x.is_iri()));
		assert_eq!(
			rel.start_time().and_then(|x| x.get()).map(|x| x.to_rfc3339()),
			Some("2010-06-01T00:00:00+01:00".to_string())
		);
		assert_eq!(serde_json::Value::Object(rel.serialize().unwrap()), doc);
	}

	#[test]
	fn array_type_must_list_relationship() {
		let doc = json!({ "type": ["Place", "Note"] });
		let res = Relationship::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default());
		assert!(matches!(res, Err(DecodeError::TypeNotListed(_))));
	}
}
