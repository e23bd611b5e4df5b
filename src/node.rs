use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::dependencies::Dependencies;
use crate::notifier::{Link, Listener, Notifier};
use crate::output::Output;
use crate::value::{Dep, ValueCell};
use crate::Result;

/// Pure function of the sources a combinator captured.
pub(crate) trait Compute: 'static {
	type Output: Clone + PartialEq + 'static;

	fn compute(&self) -> Self::Output;
}

/// Shared core of every combinator.
///
/// The node owns an [`Output`] and listens to each of its sources for its
/// whole lifetime. Any source notification recomputes the function and
/// hands the result to the output, which drops it when nothing changed.
pub(crate) struct Node<C: Compute> {
	body: Rc<NodeBody<C>>,
}

impl<C: Compute> Clone for Node<C> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

pub(crate) struct NodeBody<C: Compute> {
	func: C,
	output: Output<C::Output>,
	dependencies: RefCell<Dependencies>,
}

impl<C: Compute> Node<C> {
	pub fn new(name: &'static str, func: C) -> Self {
		let initial = func.compute();
		Node {
			body: Rc::new(NodeBody {
				func,
				output: Output::named(name, initial),
				dependencies: RefCell::new(Dependencies::new()),
			}),
		}
	}

	/// Registers `source` as a dependency. Does not recompute.
	pub fn depend_on<T: 'static>(&self, source: &Dep<T>) {
		let listener = Rc::downgrade(&self.body) as Weak<dyn Listener>;
		let subscription = source.link(Link::Subscriber, listener);
		self.body.dependencies.borrow_mut().based_on(subscription);
	}

	pub fn recompute(&self) -> Result<()> {
		self.body.changed()
	}

	pub fn func(&self) -> &C {
		&self.body.func
	}

	#[inline]
	pub fn value(&self) -> C::Output {
		self.body.output.get()
	}

	pub fn dep(&self) -> Dep<C::Output> {
		Dep::new(self.body.clone())
	}
}

impl<C: Compute> Listener for NodeBody<C> {
	fn changed(&self) -> Result<()> {
		let value = self.func.compute();
		self.output.set(value)
	}
}

impl<C: Compute> ValueCell<C::Output> for NodeBody<C> {
	fn value(&self) -> C::Output {
		self.output.get()
	}

	fn notifier(&self) -> Option<&Rc<Notifier>> {
		Some(self.output.notifier())
	}

	fn name(&self) -> &'static str {
		self.output.name()
	}

	fn has_source(&self) -> bool {
		!self.dependencies.borrow().is_empty()
	}

	fn inside_mutation(&self) -> bool {
		self.output.inside_mutation()
	}
}
