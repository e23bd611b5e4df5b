use std::hash::Hash;

use fxhash::FxHashSet;

use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Contains<T> {
	value: Dep<T>,
	members: FxHashSet<T>,
}

impl<T> Compute for Contains<T>
where
	T: Hash + Eq + 'static,
{
	type Output = bool;

	fn compute(&self) -> bool {
		self.members.contains(&self.value.value())
	}
}

/// `true` while the tested value belongs to a fixed set.
///
/// Only the tested value is reactive; the set is captured at construction.
pub struct Membership<T>
where
	T: Hash + Eq + 'static,
{
	node: Node<Contains<T>>,
}

impl<T> Clone for Membership<T>
where
	T: Hash + Eq + 'static,
{
	fn clone(&self) -> Self {
		Self {
			node: self.node.clone(),
		}
	}
}

impl<T> Membership<T>
where
	T: Hash + Eq + 'static,
{
	pub fn new(value: impl Into<Dep<T>>, members: impl IntoIterator<Item = T>) -> Self {
		Self::named("membership", value, members)
	}

	pub fn named(
		name: &'static str,
		value: impl Into<Dep<T>>,
		members: impl IntoIterator<Item = T>,
	) -> Self {
		let value = value.into();
		let node = Node::new(
			name,
			Contains {
				value: value.clone(),
				members: members.into_iter().collect(),
			},
		);
		node.depend_on(&value);
		Membership { node }
	}

	#[inline]
	pub fn value(&self) -> bool {
		self.node.value()
	}

	pub fn dep(&self) -> Dep<bool> {
		self.node.dep()
	}
}

impl<T> From<Membership<T>> for Dep<bool>
where
	T: Hash + Eq + 'static,
{
	fn from(membership: Membership<T>) -> Self {
		membership.node.dep()
	}
}
