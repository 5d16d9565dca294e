crate::polymorphic! {
	/// on a relationship, the entity the relationship is about
	functional SubjectProperty("subject") as SubjectValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional ObjectProperty("object") as ObjectValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// kind of relationship between subject and object
	nonfunctional RelationshipProperty("relationship") as RelationshipValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional PreviewProperty("preview") as PreviewValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// one or more physical or logical locations associated with an object
	nonfunctional LocationProperty("location") as LocationValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// entities to which this object is attributed, like its authors
	nonfunctional AttributedToProperty("attributedTo") as AttributedToValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// primary public audience
	nonfunctional ToProperty("to") as ToValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional CcProperty("cc") as CcValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// private audience, not to be disclosed when delivering
	nonfunctional BtoProperty("bto") as BtoValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional BccProperty("bcc") as BccValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// total population of entities the object is relevant to
	nonfunctional AudienceProperty("audience") as AudienceValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// links to representations of the object
	nonfunctional UrlProperty("url") as UrlValue {
		Link, Mention,
	}
}

crate::polymorphic! {
	nonfunctional TagProperty("tag") as TagValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional AttachmentProperty("attachment") as AttachmentValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	nonfunctional IconProperty("icon") as IconValue {
		Link, Mention,
	}
}

crate::polymorphic! {
	nonfunctional ImageProperty("image") as ImageValue {
		Link, Mention,
	}
}

crate::polymorphic! {
	nonfunctional InReplyToProperty("inReplyTo") as InReplyToValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// context within which the object exists, like a thread
	nonfunctional ContextProperty("context") as ContextValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// entity that generated the object
	nonfunctional GeneratorProperty("generator") as GeneratorValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// collection of responses to this object
	functional RepliesProperty("replies") as RepliesValue {
		Collection, CollectionPage, OrderedCollection, OrderedCollectionPage,
	}
}
