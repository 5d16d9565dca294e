use std::cmp::Ordering;

/// Arbitrary but stable total order, used to normalize non-functional properties.
///
/// Two values are considered equal when neither is [`less_than`](StableOrder::less_than) the
/// other: opaque values and unknown properties don't take part in it beyond being counted.
pub trait StableOrder {
	fn stable_cmp(&self, other: &Self) -> Ordering;

	fn less_than(&self, other: &Self) -> bool {
		self.stable_cmp(other).is_lt()
	}
}

// absent is less than anything else
impl<T: StableOrder> StableOrder for Option<T> {
	fn stable_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Some(a), Some(b)) => a.stable_cmp(b),
			(None, Some(_)) => Ordering::Less,
			(Some(_), None) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		}
	}
}
