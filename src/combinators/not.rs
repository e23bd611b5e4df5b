use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Negate {
	source: Dep<bool>,
}

impl Compute for Negate {
	type Output = bool;

	fn compute(&self) -> bool {
		!self.source.value()
	}
}

#[derive(Clone)]
pub struct Not {
	node: Node<Negate>,
}

impl Not {
	pub fn new(source: impl Into<Dep<bool>>) -> Self {
		Self::named("not", source)
	}

	pub fn named(name: &'static str, source: impl Into<Dep<bool>>) -> Self {
		let source = source.into();
		let node = Node::new(name, Negate { source: source.clone() });
		node.depend_on(&source);
		Not { node }
	}

	#[inline]
	pub fn value(&self) -> bool {
		self.node.value()
	}

	pub fn dep(&self) -> Dep<bool> {
		self.node.dep()
	}
}

impl From<Not> for Dep<bool> {
	fn from(not: Not) -> Self {
		not.node.dep()
	}
}
