use std::fmt::Debug;
use std::rc::{Rc, Weak};

use crate::addr::Addr;
use crate::combinators::Map;
use crate::notifier::{Callback, Link, Listener, Notifier, Subscription};
use crate::Const;

pub trait ValueCell<T>: 'static {
	/// Current value. Reading never mutates a cell, except for lazy cells
	/// which may fill their cache.
	fn value(&self) -> T;

	/// Change channel, `None` for cells that never change.
	fn notifier(&self) -> Option<&Rc<Notifier>>;

	fn name(&self) -> &'static str {
		"<unnamed>"
	}

	fn has_source(&self) -> bool {
		false
	}

	fn is_constant(&self) -> bool {
		false
	}

	fn inside_mutation(&self) -> bool {
		false
	}

	/// Whether reading this cell ends up reading the cell at `addr`
	/// through a chain of mirroring inputs.
	fn mirrors(&self, _addr: Addr) -> bool {
		false
	}
}

/// Shared, read-only handle to any cell.
pub struct Dep<T> {
	cell: Rc<dyn ValueCell<T>>,
}

impl<T> Clone for Dep<T> {
	fn clone(&self) -> Self {
		Dep {
			cell: self.cell.clone(),
		}
	}
}

impl<T> Dep<T>
where
	T: 'static,
{
	pub fn new(cell: Rc<dyn ValueCell<T>>) -> Self {
		Dep { cell }
	}

	pub fn constant(value: T) -> Self
	where
		T: Clone,
	{
		Const::new(value).into()
	}

	#[inline]
	pub fn value(&self) -> T {
		self.cell.value()
	}

	#[inline]
	pub fn name(&self) -> &'static str {
		self.cell.name()
	}

	/// Calls `func` after every effective change of this cell, with the
	/// value the cell holds at that moment.
	pub fn subscribe(&self, func: impl Fn(&T) + 'static) -> Subscription {
		let notifier = match self.cell.notifier() {
			Some(notifier) => notifier,
			None => return Subscription::detached(),
		};

		let callback: Rc<dyn Listener> = Rc::new(Callback {
			cell: Rc::downgrade(&self.cell),
			func: Box::new(func),
		});

		notifier.subscribe(Link::Subscriber, Rc::downgrade(&callback), Some(callback))
	}

	/// Derived cell holding `func` applied to this cell's value.
	pub fn map<R, F>(&self, func: F) -> Dep<R>
	where
		F: Fn(&T) -> R + 'static,
		R: Clone + PartialEq + 'static,
	{
		Map::new(self.clone(), func).dep()
	}

	pub fn has_change_subscribers(&self) -> bool {
		self.cell
			.notifier()
			.map_or(false, |notifier| notifier.has(Link::Subscriber))
	}

	pub fn has_consumers(&self) -> bool {
		self.cell
			.notifier()
			.map_or(false, |notifier| notifier.has(Link::Consumer))
	}

	pub fn has_source(&self) -> bool {
		self.cell.has_source()
	}

	pub fn is_connected(&self) -> bool {
		self.has_source() || self.has_consumers() || self.has_change_subscribers()
	}

	pub fn is_constant(&self) -> bool {
		self.cell.is_constant()
	}

	pub fn inside_mutation(&self) -> bool {
		self.cell.inside_mutation()
	}

	pub fn ptr_eq(&self, other: &Dep<T>) -> bool {
		self.addr() == other.addr()
	}

	pub(crate) fn addr(&self) -> Addr {
		Addr::of(&self.cell)
	}

	pub(crate) fn mirrors(&self, addr: Addr) -> bool {
		self.addr() == addr || self.cell.mirrors(addr)
	}

	pub(crate) fn link(&self, link: Link, listener: Weak<dyn Listener>) -> Subscription {
		match self.cell.notifier() {
			Some(notifier) => notifier.subscribe(link, listener, None),
			None => Subscription::detached(),
		}
	}
}

impl<T> Debug for Dep<T>
where
	T: Debug + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.value().fmt(f)
	}
}
