use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Choice<T> {
	condition: Dep<bool>,
	then: Dep<T>,
	otherwise: Dep<T>,
}

impl<T> Compute for Choice<T>
where
	T: Clone + PartialEq + 'static,
{
	type Output = T;

	fn compute(&self) -> T {
		if self.condition.value() {
			self.then.value()
		} else {
			self.otherwise.value()
		}
	}
}

/// Picks one of two branches depending on a condition.
///
/// The node listens to the condition and to both branches at all times.
/// A change on the inactive branch still recomputes, reads the active
/// branch and produces the same value, which the output then discards.
/// Flipping the condition therefore always sees the latest value of the
/// branch that becomes active.
pub struct If<T>
where
	T: Clone + PartialEq + 'static,
{
	node: Node<Choice<T>>,
}

impl<T> Clone for If<T>
where
	T: Clone + PartialEq + 'static,
{
	fn clone(&self) -> Self {
		Self {
			node: self.node.clone(),
		}
	}
}

impl<T> If<T>
where
	T: Clone + PartialEq + 'static,
{
	pub fn new(
		condition: impl Into<Dep<bool>>,
		then: impl Into<Dep<T>>,
		otherwise: impl Into<Dep<T>>,
	) -> Self {
		Self::named("if", condition, then, otherwise)
	}

	pub fn named(
		name: &'static str,
		condition: impl Into<Dep<bool>>,
		then: impl Into<Dep<T>>,
		otherwise: impl Into<Dep<T>>,
	) -> Self {
		let choice = Choice {
			condition: condition.into(),
			then: then.into(),
			otherwise: otherwise.into(),
		};
		let (condition, then, otherwise) = (
			choice.condition.clone(),
			choice.then.clone(),
			choice.otherwise.clone(),
		);

		let node = Node::new(name, choice);
		node.depend_on(&condition);
		node.depend_on(&then);
		node.depend_on(&otherwise);
		If { node }
	}

	#[inline]
	pub fn value(&self) -> T {
		self.node.value()
	}

	pub fn dep(&self) -> Dep<T> {
		self.node.dep()
	}
}

impl<T> From<If<T>> for Dep<T>
where
	T: Clone + PartialEq + 'static,
{
	fn from(cond: If<T>) -> Self {
		cond.node.dep()
	}
}
