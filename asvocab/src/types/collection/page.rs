use crate::property::{
	AttachmentProperty, AttributedToProperty, AudienceProperty, BccProperty, BtoProperty,
	CcProperty, ContextProperty, CurrentProperty, DurationProperty, EndTimeProperty, FirstProperty,
	GeneratorProperty, IconProperty, IdProperty, ImageProperty, InReplyToProperty, ItemsProperty,
	LastProperty, NameMapProperty, NameProperty, NextProperty, OrderedItemsProperty,
	PartOfProperty, PrevProperty, PreviewProperty, PublishedProperty, RepliesProperty,
	StartIndexProperty, StartTimeProperty, SummaryMapProperty, SummaryProperty, TagProperty,
	ToProperty, TotalItemsProperty, UpdatedProperty, UrlProperty,
};

crate::vocabulary_object! {
	/// Subset of the items of a Collection.
	pub struct CollectionPage {
		id: IdProperty,
		name: NameProperty,
		summary: SummaryProperty,
		published: PublishedProperty,
		updated: UpdatedProperty,
		name_map: NameMapProperty,
		summary_map: SummaryMapProperty,
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
		total_items: TotalItemsProperty,
		current: CurrentProperty,
		first: FirstProperty,
		last: LastProperty,
		items: ItemsProperty,
		preview: PreviewProperty,
		/// base collection this page belongs to
		part_of: PartOfProperty,
		next: NextProperty,
		prev: PrevProperty,
	}
}

crate::vocabulary_object! {
	pub struct OrderedCollectionPage {
		id: IdProperty,
		name: NameProperty,
		summary: SummaryProperty,
		published: PublishedProperty,
		updated: UpdatedProperty,
		name_map: NameMapProperty,
		summary_map: SummaryMapProperty,
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
		total_items: TotalItemsProperty,
		current: CurrentProperty,
		first: FirstProperty,
		last: LastProperty,
		ordered_items: OrderedItemsProperty,
		preview: PreviewProperty,
		part_of: PartOfProperty,
		next: NextProperty,
		prev: PrevProperty,
		/// relative position of the first item of this page within the whole collection
		start_index: StartIndexProperty,
	}
}
