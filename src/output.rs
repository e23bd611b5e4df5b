use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use crate::mutation::Mutation;
use crate::notifier::Notifier;
use crate::value::{Dep, ValueCell};
use crate::Result;

/// Push-only cell written exclusively by its owner.
///
/// `Output` is the owner token and cannot be cloned; everybody else reads
/// through the [`Dep`] returned by [`Output::dep`]. Consumers that want to
/// follow it create an [`Input`](crate::Input) with this cell as source.
pub struct Output<T> {
	body: Rc<OutputBody<T>>,
}

struct OutputBody<T> {
	value: RefCell<T>,
	notifier: Rc<Notifier>,
	mutating: Cell<bool>,
	name: &'static str,
}

impl<T> Output<T>
where
	T: Clone + PartialEq + 'static,
{
	pub fn new(value: T) -> Self {
		Self::named("<unnamed>", value)
	}

	pub fn named(name: &'static str, value: T) -> Self {
		Output {
			body: Rc::new(OutputBody {
				value: RefCell::new(value),
				notifier: Notifier::new(),
				mutating: Cell::new(false),
				name,
			}),
		}
	}

	pub fn get(&self) -> T {
		self.body.value.borrow().clone()
	}

	/// Stores `value` and notifies when it differs from the current one.
	pub fn set(&self, value: T) -> Result<()> {
		if *self.body.value.borrow() == value {
			return Ok(());
		}

		let _mutation = Mutation::enter(&self.body.mutating, self.body.name)?;
		*self.body.value.borrow_mut() = value;
		self.body.notifier.notify(self.body.name)
	}

	pub fn dep(&self) -> Dep<T> {
		Dep::new(self.body.clone())
	}

	pub fn name(&self) -> &'static str {
		self.body.name
	}

	pub(crate) fn notifier(&self) -> &Rc<Notifier> {
		&self.body.notifier
	}

	pub(crate) fn inside_mutation(&self) -> bool {
		self.body.mutating.get()
	}
}

impl<T> ValueCell<T> for OutputBody<T>
where
	T: Clone + 'static,
{
	fn value(&self) -> T {
		self.value.borrow().clone()
	}

	fn notifier(&self) -> Option<&Rc<Notifier>> {
		Some(&self.notifier)
	}

	fn name(&self) -> &'static str {
		self.name
	}

	fn inside_mutation(&self) -> bool {
		self.mutating.get()
	}
}

impl<T> Debug for Output<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.body.value.borrow().fmt(f)
	}
}
