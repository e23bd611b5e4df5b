use std::fmt::Debug;
use std::rc::Rc;

use crate::notifier::Notifier;
use crate::value::{Dep, ValueCell};

/// A cell whose value never changes.
///
/// Constants keep no listener bookkeeping: subscribing to one is accepted
/// and simply never fires.
pub struct Const<T> {
	body: Rc<ConstBody<T>>,
}

impl<T> Clone for Const<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct ConstBody<T> {
	value: T,
	name: &'static str,
}

impl<T> Const<T>
where
	T: Clone + 'static,
{
	pub fn new(value: T) -> Self {
		Self::named("<unnamed>", value)
	}

	pub fn named(name: &'static str, value: T) -> Self {
		Const {
			body: Rc::new(ConstBody { value, name }),
		}
	}

	/// One constant per raw value, in order.
	pub fn array(values: impl IntoIterator<Item = T>) -> Vec<Dep<T>> {
		values.into_iter().map(|value| Const::new(value).into()).collect()
	}

	pub fn get(&self) -> &T {
		&self.body.value
	}

	pub fn dep(&self) -> Dep<T> {
		self.clone().into()
	}
}

impl<T> ValueCell<T> for ConstBody<T>
where
	T: Clone + 'static,
{
	fn value(&self) -> T {
		self.value.clone()
	}

	fn notifier(&self) -> Option<&Rc<Notifier>> {
		None
	}

	fn name(&self) -> &'static str {
		self.name
	}

	fn is_constant(&self) -> bool {
		true
	}
}

impl<T> From<Const<T>> for Dep<T>
where
	T: Clone + 'static,
{
	fn from(constant: Const<T>) -> Self {
		Dep::new(constant.body)
	}
}

impl<T> Debug for Const<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.body.value.fmt(f)
	}
}
