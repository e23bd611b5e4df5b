use std::cell::RefCell;

use smallvec::SmallVec;

use crate::node::{Compute, Node};
use crate::{Dep, Input, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Op {
	All,
	Any,
}

pub(crate) struct Junction {
	op: Op,
	sources: RefCell<SmallVec<[Dep<bool>; 4]>>,
}

impl Compute for Junction {
	type Output = bool;

	fn compute(&self) -> bool {
		let sources = self.sources.borrow().clone();
		match self.op {
			Op::All => sources.iter().all(|source| source.value()),
			Op::Any => sources.iter().any(|source| source.value()),
		}
	}
}

fn build(
	name: &'static str,
	op: Op,
	sources: impl IntoIterator<Item = Dep<bool>>,
) -> Node<Junction> {
	let sources: SmallVec<[Dep<bool>; 4]> = sources.into_iter().collect();
	let node = Node::new(
		name,
		Junction {
			op,
			sources: RefCell::new(sources.clone()),
		},
	);

	for source in &sources {
		node.depend_on(source);
	}

	node
}

fn attach(node: &Node<Junction>, extra: Dep<bool>) -> Result<()> {
	tracing::debug!(cell = node.dep().name(), source = extra.name(), "attach extra source");
	node.func().sources.borrow_mut().push(extra.clone());
	node.depend_on(&extra);
	node.recompute()
}

/// What `proxy` currently follows: its source, or a snapshot of its value.
fn prior(proxy: &Input<bool>) -> Dep<bool> {
	proxy
		.source()
		.unwrap_or_else(|| Dep::constant(proxy.value()))
}

/// Logical conjunction of its sources. No sources yields `true`.
#[derive(Clone)]
pub struct And {
	node: Node<Junction>,
}

impl And {
	pub fn new(sources: impl IntoIterator<Item = Dep<bool>>) -> Self {
		Self::named("and", sources)
	}

	pub fn named(name: &'static str, sources: impl IntoIterator<Item = Dep<bool>>) -> Self {
		And {
			node: build(name, Op::All, sources),
		}
	}

	pub fn of(left: impl Into<Dep<bool>>, right: impl Into<Dep<bool>>) -> Self {
		Self::new([left.into(), right.into()])
	}

	/// Adds one more source to this node in place.
	///
	/// Consumers keep their subscription and only hear about it when the
	/// combined value actually changes.
	pub fn attach(&self, extra: impl Into<Dep<bool>>) -> Result<()> {
		attach(&self.node, extra.into())
	}

	/// Re-points `proxy` at the conjunction of what it followed so far and
	/// `extra`. Everything listening to `proxy` stays wired.
	pub fn extend(proxy: &Input<bool>, extra: impl Into<Dep<bool>>) -> Result<And> {
		let and = And::new([prior(proxy), extra.into()]);
		proxy.set_source(Some(and.dep()))?;
		Ok(and)
	}

	#[inline]
	pub fn value(&self) -> bool {
		self.node.value()
	}

	pub fn len(&self) -> usize {
		self.node.func().sources.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn dep(&self) -> Dep<bool> {
		self.node.dep()
	}
}

impl From<And> for Dep<bool> {
	fn from(and: And) -> Self {
		and.node.dep()
	}
}

/// Logical disjunction of its sources. No sources yields `false`.
#[derive(Clone)]
pub struct Or {
	node: Node<Junction>,
}

impl Or {
	pub fn new(sources: impl IntoIterator<Item = Dep<bool>>) -> Self {
		Self::named("or", sources)
	}

	pub fn named(name: &'static str, sources: impl IntoIterator<Item = Dep<bool>>) -> Self {
		Or {
			node: build(name, Op::Any, sources),
		}
	}

	pub fn of(left: impl Into<Dep<bool>>, right: impl Into<Dep<bool>>) -> Self {
		Self::new([left.into(), right.into()])
	}

	pub fn attach(&self, extra: impl Into<Dep<bool>>) -> Result<()> {
		attach(&self.node, extra.into())
	}

	pub fn extend(proxy: &Input<bool>, extra: impl Into<Dep<bool>>) -> Result<Or> {
		let or = Or::new([prior(proxy), extra.into()]);
		proxy.set_source(Some(or.dep()))?;
		Ok(or)
	}

	#[inline]
	pub fn value(&self) -> bool {
		self.node.value()
	}

	pub fn len(&self) -> usize {
		self.node.func().sources.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn dep(&self) -> Dep<bool> {
		self.node.dep()
	}
}

impl From<Or> for Dep<bool> {
	fn from(or: Or) -> Self {
		or.node.dep()
	}
}
