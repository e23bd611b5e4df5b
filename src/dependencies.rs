use smallvec::SmallVec;

use crate::notifier::Subscription;

/// Subscriptions a derived cell holds on its sources.
///
/// Dropping the set unsubscribes from every source.
#[derive(Default)]
pub struct Dependencies {
	links: SmallVec<[Subscription; 4]>,
}

impl Dependencies {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn based_on(&mut self, subscription: Subscription) {
		self.links.push(subscription);
	}

	pub fn is_empty(&self) -> bool {
		self.links.is_empty()
	}
}
