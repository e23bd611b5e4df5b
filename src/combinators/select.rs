use smallvec::SmallVec;

use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Pick<T> {
	index: Dep<i32>,
	candidates: SmallVec<[Dep<T>; 4]>,
	default: Dep<T>,
}

impl<T> Compute for Pick<T>
where
	T: Clone + PartialEq + 'static,
{
	type Output = T;

	fn compute(&self) -> T {
		usize::try_from(self.index.value())
			.ok()
			.and_then(|index| self.candidates.get(index))
			.unwrap_or(&self.default)
			.value()
	}
}

/// Value of the candidate at the current index, or of `default` when the
/// index is negative or past the end.
///
/// Every candidate, the default and the index stay subscribed for the
/// node's lifetime.
pub struct IndexedSelect<T>
where
	T: Clone + PartialEq + 'static,
{
	node: Node<Pick<T>>,
}

impl<T> Clone for IndexedSelect<T>
where
	T: Clone + PartialEq + 'static,
{
	fn clone(&self) -> Self {
		Self {
			node: self.node.clone(),
		}
	}
}

impl<T> IndexedSelect<T>
where
	T: Clone + PartialEq + 'static,
{
	pub fn new(
		index: impl Into<Dep<i32>>,
		candidates: impl IntoIterator<Item = Dep<T>>,
		default: impl Into<Dep<T>>,
	) -> Self {
		Self::named("indexed_select", index, candidates, default)
	}

	pub fn named(
		name: &'static str,
		index: impl Into<Dep<i32>>,
		candidates: impl IntoIterator<Item = Dep<T>>,
		default: impl Into<Dep<T>>,
	) -> Self {
		let pick = Pick {
			index: index.into(),
			candidates: candidates.into_iter().collect(),
			default: default.into(),
		};
		let index = pick.index.clone();
		let candidates = pick.candidates.clone();
		let default = pick.default.clone();

		let node = Node::new(name, pick);
		node.depend_on(&index);
		for candidate in &candidates {
			node.depend_on(candidate);
		}
		node.depend_on(&default);

		IndexedSelect { node }
	}

	#[inline]
	pub fn value(&self) -> T {
		self.node.value()
	}

	pub fn len(&self) -> usize {
		self.node.func().candidates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.node.func().candidates.is_empty()
	}

	pub fn dep(&self) -> Dep<T> {
		self.node.dep()
	}
}

impl<T> From<IndexedSelect<T>> for Dep<T>
where
	T: Clone + PartialEq + 'static,
{
	fn from(select: IndexedSelect<T>) -> Self {
		select.node.dep()
	}
}
