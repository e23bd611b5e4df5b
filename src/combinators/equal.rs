use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Same<T> {
	left: Dep<T>,
	right: Dep<T>,
}

impl<T> Compute for Same<T>
where
	T: PartialEq + 'static,
{
	type Output = bool;

	fn compute(&self) -> bool {
		self.left.value() == self.right.value()
	}
}

/// `true` while both sources hold equal values.
pub struct Equal<T>
where
	T: PartialEq + 'static,
{
	node: Node<Same<T>>,
}

impl<T> Clone for Equal<T>
where
	T: PartialEq + 'static,
{
	fn clone(&self) -> Self {
		Self {
			node: self.node.clone(),
		}
	}
}

impl<T> Equal<T>
where
	T: PartialEq + 'static,
{
	pub fn new(left: impl Into<Dep<T>>, right: impl Into<Dep<T>>) -> Self {
		Self::named("equal", left, right)
	}

	pub fn named(name: &'static str, left: impl Into<Dep<T>>, right: impl Into<Dep<T>>) -> Self {
		let (left, right) = (left.into(), right.into());
		let node = Node::new(
			name,
			Same {
				left: left.clone(),
				right: right.clone(),
			},
		);
		node.depend_on(&left);
		node.depend_on(&right);
		Equal { node }
	}

	#[inline]
	pub fn value(&self) -> bool {
		self.node.value()
	}

	pub fn dep(&self) -> Dep<bool> {
		self.node.dep()
	}
}

impl<T> From<Equal<T>> for Dep<bool>
where
	T: PartialEq + 'static,
{
	fn from(equal: Equal<T>) -> Self {
		equal.node.dep()
	}
}
