use crate::property::{
	AttributedToProperty, HeightProperty, HrefProperty, HreflangProperty, IdProperty,
	MediaTypeProperty, NameMapProperty, NameProperty, PreviewProperty, RelProperty,
	SummaryMapProperty, SummaryProperty, WidthProperty,
};

crate::vocabulary_object! {
	/// Qualified reference to a resource identified by an URL. Unlike an Object, a Link only
	/// describes how to reach the resource it points to.
	pub struct Link {
		id: IdProperty,
		href: HrefProperty,
		hreflang: HreflangProperty,
		media_type: MediaTypeProperty,
		name: NameProperty,
		name_map: NameMapProperty,
		rel: RelProperty,
		height: HeightProperty,
		width: WidthProperty,
		summary: SummaryProperty,
		summary_map: SummaryMapProperty,
		attributed_to: AttributedToProperty,
		preview: PreviewProperty,
	}
}

crate::vocabulary_object! {
	/// A Link referring to an actor, for example an `@` mention.
	pub struct Mention {
		id: IdProperty,
		href: HrefProperty,
		hreflang: HreflangProperty,
		media_type: MediaTypeProperty,
		name: NameProperty,
		name_map: NameMapProperty,
		rel: RelProperty,
		height: HeightProperty,
		width: WidthProperty,
		summary: SummaryProperty,
		summary_map: SummaryMapProperty,
		attributed_to: AttributedToProperty,
		preview: PreviewProperty,
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{jsonld::context_of, DecodeError, Namespaces, Property, Registry, StableOrder, VocabType};

	fn decode_link(doc: &serde_json::Value) -> Result<Link, DecodeError> {
		Link::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default())
	}

	#[test]
	fn round_trip() {
		let doc = json!({
			"type": "Link",
			"id": "https://example.com/links/1",
			"href": "https://example.com/image.png",
			"hreflang": "en",
			"mediaType": "image/png",
			"name": "an image",
			"rel": "canonical",
			"height": 100,
			"width": 200,
			"preview": { "type": "Link", "href": "https://example.com/thumb.png" },
		});
		let link = decode_link(&doc).unwrap();
		assert_eq!(link.height().and_then(|h| h.get()), Some(&100));
		assert_eq!(link.media_type().and_then(|m| m.get()).map(String::as_str), Some("image/png"));
		assert!(link.preview().and_then(|p| p.at(0)).is_some_and(|p| p.is_link()));
		assert!(link.unknown_properties().is_empty());

		let encoded = link.serialize().unwrap();
		assert_eq!(serde_json::Value::Object(encoded.clone()), doc);
		let again = Link::deserialize(&encoded, &Namespaces::new(), &Registry::default()).unwrap();
		assert!(!again.less_than(&link) && !link.less_than(&again));
		assert_eq!(again, link);
	}

	#[test]
	fn unknown_properties_are_kept_but_never_clobber() {
		let doc = json!({ "type": "Link", "href": "https://example.com", "customField": 42 });
		let link = decode_link(&doc).unwrap();
		assert_eq!(link.unknown_properties().get("customField"), Some(&json!(42)));
		assert_eq!(serde_json::Value::Object(link.serialize().unwrap()), doc);

		let link = link
			.set_unknown("href", json!("https://evil.example.com"))
			.set_unknown("type", json!("Person"));
		let encoded = link.serialize().unwrap();
		assert_eq!(encoded.get("href"), Some(&json!("https://example.com")));
		assert_eq!(encoded.get("type"), Some(&json!("Link")));
	}

	#[test]
	fn iris_keep_their_text() {
		let doc = json!({ "type": "Link", "href": "https://example.com", "preview": "HTTPS://Example.COM" });
		let link = decode_link(&doc).unwrap();
		assert_eq!(link.href().and_then(|h| h.get()).map(|x| x.as_str()), Some("https://example.com"));
		let preview = link.preview().and_then(|p| p.at(0)).and_then(|p| p.get_iri());
		assert_eq!(preview.map(|x| x.as_str()), Some("HTTPS://Example.COM"));
		assert_eq!(serde_json::Value::Object(link.serialize().unwrap()), doc);
	}

	#[test]
	fn attribution_and_language_maps() {
		let doc = json!({
			"type": "Link",
			"href": "https://example.com/a",
			"rel": ["canonical", "preview"],
			"nameMap": { "en": "a link", "it": "un collegamento" },
			"summaryMap": { "en": "nothing much" },
			"attributedTo": ["https://example.com/users/alice", { "type": "Mention", "href": "https://example.com/@bob" }],
		});
		let link = decode_link(&doc).unwrap();
		assert!(link.unknown_properties().is_empty());
		assert_eq!(link.rel().map(|r| r.len()), Some(2));
		assert_eq!(
			link.name_map().and_then(|n| n.get()).and_then(|m| m.get("it")).map(String::as_str),
			Some("un collegamento")
		);
		let attributed_to = link.attributed_to().unwrap();
		assert!(attributed_to.at(0).is_some_and(|x| x.is_iri()));
		assert!(attributed_to.at(1).is_some_and(|x| x.is_mention()));
		assert_eq!(serde_json::Value::Object(link.serialize().unwrap()), doc);
	}

	#[test]
	fn extra_types_round_trip() {
		let doc = json!({ "type": ["Link", "Hashtag"], "name": "#rust", "href": "https://example.com/tags/rust" });
		let link = decode_link(&doc).unwrap();
		assert_eq!(link.extra_types(), &["Hashtag".to_string()]);
		assert_eq!(serde_json::Value::Object(link.serialize().unwrap()), doc);
	}

	#[test]
	fn wrong_type_is_rejected() {
		let doc = json!({ "type": "Mention", "href": "https://example.com/@bob" });
		assert!(matches!(decode_link(&doc), Err(DecodeError::WrongType { expected: VocabType::Link, .. })));
		let mention = Mention::deserialize(doc.as_object().unwrap(), &Namespaces::new(), &Registry::default()).unwrap();
		assert_eq!(mention.vocab_type(), VocabType::Mention);
		assert!(matches!(decode_link(&json!({ "href": "https://example.com" })), Err(DecodeError::MissingType)));
	}

	#[test]
	fn aliased_document() {
		let doc = json!({
			"type": "as:Link",
			"as:href": "https://example.com/a",
			"as:preview": "https://example.com/preview",
			"href": "https://example.com/not-mine",
		});
		let link = Link::deserialize(doc.as_object().unwrap(), &context_of("as"), &Registry::default()).unwrap();
		assert_eq!(link.alias(), "as");
		assert_eq!(link.href().and_then(|h| h.get()).map(|x| x.as_str()), Some("https://example.com/a"));
		assert_eq!(link.href().map(|h| h.key()), Some("as:href".to_string()));
		// bare keys don't belong to the aliased namespace
		assert!(link.unknown_properties().contains_key("href"));
		assert_eq!(serde_json::Value::Object(link.serialize().unwrap()), doc);
		assert_eq!(link.jsonld_context(), context_of("as"));
	}

	#[test]
	fn built_with_setters() {
		let link = Link::new()
			.set_href(Some(HrefProperty::with("https://example.com/x".parse().unwrap())))
			.set_width(Some(WidthProperty::with(640)))
			.set_extra_types(vec!["Hashtag".to_string()]);
		assert_eq!(
			serde_json::Value::Object(link.serialize().unwrap()),
			json!({ "type": ["Link", "Hashtag"], "href": "https://example.com/x", "width": 640 })
		);

		let mut link = link.set_width(None);
		assert!(link.width().is_none());
		assert!(link.href_mut().is_some_and(|h| { h.clear(); !h.has_any() }));
		// present but empty properties emit nothing
		assert!(!link.serialize().unwrap().contains_key("href"));
	}

	#[test]
	fn relations() {
		let link = Link::new();
		let mention = Mention::new();
		assert!(link.is_extended_by("Mention"));
		assert!(mention.extends("Link"));
		assert!(link.is_disjoint_with("Place"));
		assert!(!mention.is_disjoint_with("Link"));
		assert_eq!(Link::PROPERTIES.len(), 13);
		assert!(Link::PROPERTIES.contains(&"mediaType"));
	}
}
