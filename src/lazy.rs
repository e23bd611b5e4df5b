use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::notifier::Notifier;
use crate::value::{Dep, ValueCell};

/// Pull-based cell computed on demand and cached until invalidated.
///
/// Lazy cells have no sources and never notify. They let state owned
/// elsewhere be read through the same [`Dep`] handle as reactive cells.
pub struct Lazy<T> {
	body: Rc<LazyBody<T>>,
}

impl<T> Clone for Lazy<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct LazyBody<T> {
	cached: RefCell<Option<T>>,
	func: Box<dyn Fn() -> T>,
	name: &'static str,
}

impl<T> Lazy<T>
where
	T: Clone + 'static,
{
	pub fn new(func: impl Fn() -> T + 'static) -> Self {
		Self::named("<unnamed>", func)
	}

	pub fn named(name: &'static str, func: impl Fn() -> T + 'static) -> Self {
		Lazy {
			body: Rc::new(LazyBody {
				cached: RefCell::new(None),
				func: Box::new(func),
				name,
			}),
		}
	}

	#[inline]
	pub fn value(&self) -> T {
		self.body.value()
	}

	/// Drops the cached value. The next read computes it again.
	pub fn invalidate(&self) {
		tracing::trace!(cell = self.body.name, "invalidate");
		self.body.cached.borrow_mut().take();
	}

	pub fn is_valid(&self) -> bool {
		self.body.cached.borrow().is_some()
	}

	pub fn dep(&self) -> Dep<T> {
		self.clone().into()
	}
}

impl<T> ValueCell<T> for LazyBody<T>
where
	T: Clone + 'static,
{
	fn value(&self) -> T {
		if let Some(value) = self.cached.borrow().as_ref() {
			return value.clone();
		}

		// The borrow is released while computing, so the callback may read
		// other cells freely. A panic leaves the cache empty.
		let value = (self.func)();
		*self.cached.borrow_mut() = Some(value.clone());
		value
	}

	fn notifier(&self) -> Option<&Rc<Notifier>> {
		None
	}

	fn name(&self) -> &'static str {
		self.name
	}
}

impl<T> From<Lazy<T>> for Dep<T>
where
	T: Clone + 'static,
{
	fn from(lazy: Lazy<T>) -> Self {
		Dep::new(lazy.body)
	}
}

impl<T> Debug for Lazy<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Lazy")
			.field("name", &self.body.name)
			.field("cached", &self.body.cached.borrow())
			.finish()
	}
}
