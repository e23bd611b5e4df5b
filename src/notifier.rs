use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::value::ValueCell;
use crate::Result;

pub(crate) trait Listener: 'static {
	/// Called after the observed cell stored its new value.
	fn changed(&self) -> Result<()>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Link {
	/// An input mirroring the cell through `set_source`.
	Consumer,
	/// A combinator or an external callback.
	Subscriber,
}

struct Entry {
	id: u64,
	link: Link,
	listener: Weak<dyn Listener>,
}

/// Change channel of a single cell.
///
/// Listeners are held weakly: the channel reports who is listening but
/// never keeps a listener alive. Entries whose listener is gone are pruned
/// on the next notification, or right away when their [`Subscription`] drops.
#[derive(Default)]
pub struct Notifier {
	entries: RefCell<SmallVec<[Entry; 4]>>,
	next_id: Cell<u64>,
}

impl Notifier {
	pub fn new() -> Rc<Self> {
		Rc::new(Notifier::default())
	}

	pub(crate) fn subscribe(
		self: &Rc<Self>,
		link: Link,
		listener: Weak<dyn Listener>,
		keep: Option<Rc<dyn Listener>>,
	) -> Subscription {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.entries.borrow_mut().push(Entry { id, link, listener });

		Subscription {
			notifier: Rc::downgrade(self),
			id,
			_keep: keep,
		}
	}

	fn unsubscribe(&self, id: u64) {
		self.entries.borrow_mut().retain(|entry| entry.id != id);
	}

	/// Runs every live listener in registration order.
	///
	/// The listener list is snapshotted first, so listeners may subscribe or
	/// unsubscribe while the round is in progress. The first error stops the
	/// round and is returned to the mutating caller.
	pub(crate) fn notify(&self, name: &'static str) -> Result<()> {
		let listeners: SmallVec<[Rc<dyn Listener>; 4]> = {
			let mut entries = self.entries.borrow_mut();
			entries.retain(|entry| entry.listener.strong_count() > 0);
			entries
				.iter()
				.filter_map(|entry| entry.listener.upgrade())
				.collect()
		};

		tracing::trace!(cell = name, listeners = listeners.len(), "notify");

		for listener in listeners {
			listener.changed()?;
		}

		Ok(())
	}

	pub(crate) fn has(&self, link: Link) -> bool {
		self.entries
			.borrow()
			.iter()
			.any(|entry| entry.link == link && entry.listener.strong_count() > 0)
	}
}

/// Keeps a listener registered on a cell. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes right away"]
pub struct Subscription {
	notifier: Weak<Notifier>,
	id: u64,
	_keep: Option<Rc<dyn Listener>>,
}

impl Subscription {
	/// Subscription to a cell that never notifies.
	pub(crate) fn detached() -> Self {
		Subscription {
			notifier: Weak::new(),
			id: 0,
			_keep: None,
		}
	}

	pub fn is_active(&self) -> bool {
		self.notifier.strong_count() > 0
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(notifier) = self.notifier.upgrade() {
			notifier.unsubscribe(self.id);
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}

/// External callback, handed the value the cell holds at notification time.
pub(crate) struct Callback<T> {
	pub(crate) cell: Weak<dyn ValueCell<T>>,
	pub(crate) func: Box<dyn Fn(&T)>,
}

impl<T: 'static> Listener for Callback<T> {
	fn changed(&self) -> Result<()> {
		if let Some(cell) = self.cell.upgrade() {
			(self.func)(&cell.value());
		}
		Ok(())
	}
}
