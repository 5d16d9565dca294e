pub mod page;

use crate::property::{
	AttachmentProperty, AttributedToProperty, AudienceProperty, BccProperty, BtoProperty,
	CcProperty, ContextProperty, CurrentProperty, DurationProperty, EndTimeProperty, FirstProperty,
	GeneratorProperty, IconProperty, IdProperty, ImageProperty, InReplyToProperty, ItemsProperty,
	LastProperty, NameMapProperty, NameProperty, OrderedItemsProperty, PreviewProperty,
	PublishedProperty, RepliesProperty, StartTimeProperty, SummaryMapProperty, SummaryProperty,
	TagProperty, ToProperty, TotalItemsProperty, UpdatedProperty, UrlProperty,
};

crate::vocabulary_object! {
	/// Unordered set of items, possibly split in pages.
	pub struct Collection {
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
		/// total number of items in the logical view of the collection, which may be more than
		/// what is serialized in it
		total_items: TotalItemsProperty,
		current: CurrentProperty,
		first: FirstProperty,
		last: LastProperty,
		items: ItemsProperty,
		preview: PreviewProperty,
	}
}

crate::vocabulary_object! {
	/// Collection whose items are strictly ordered.
	pub struct OrderedCollection {
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
	}
}
