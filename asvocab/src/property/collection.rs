crate::polymorphic! {
	/// next page of items
	functional NextProperty("next") as NextValue {
		CollectionPage, Link, Mention, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	/// previous page of items
	functional PrevProperty("prev") as PrevValue {
		CollectionPage, Link, Mention, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	/// page containing the most recently updated items
	functional CurrentProperty("current") as CurrentValue {
		CollectionPage, Link, Mention, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	functional FirstProperty("first") as FirstValue {
		CollectionPage, Link, Mention, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	functional LastProperty("last") as LastValue {
		CollectionPage, Link, Mention, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	/// collection a page belongs to
	functional PartOfProperty("partOf") as PartOfValue {
		Link, Collection, Mention, OrderedCollection,
	}
}

crate::polymorphic! {
	/// collection of actors followed by someone
	functional FollowingProperty("following") as FollowingValue {
		OrderedCollection, Collection, CollectionPage, OrderedCollectionPage,
	}
}

crate::polymorphic! {
	nonfunctional ItemsProperty("items") as ItemsValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}

crate::polymorphic! {
	/// same as items, but order is meaningful
	nonfunctional OrderedItemsProperty("orderedItems") as OrderedItemsValue {
		Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage, Place, Relationship,
	}
}
