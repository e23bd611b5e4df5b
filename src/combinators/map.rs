use crate::node::{Compute, Node};
use crate::Dep;

pub(crate) struct Apply<S, R> {
	source: Dep<S>,
	func: Box<dyn Fn(&S) -> R>,
}

impl<S, R> Compute for Apply<S, R>
where
	S: 'static,
	R: Clone + PartialEq + 'static,
{
	type Output = R;

	fn compute(&self) -> R {
		(self.func)(&self.source.value())
	}
}

pub(crate) struct Map<S, R>
where
	S: 'static,
	R: Clone + PartialEq + 'static,
{
	node: Node<Apply<S, R>>,
}

impl<S, R> Map<S, R>
where
	S: 'static,
	R: Clone + PartialEq + 'static,
{
	pub fn new(source: Dep<S>, func: impl Fn(&S) -> R + 'static) -> Self {
		let node = Node::new(
			"map",
			Apply {
				source: source.clone(),
				func: Box::new(func),
			},
		);
		node.depend_on(&source);
		Map { node }
	}

	pub fn dep(&self) -> Dep<R> {
		self.node.dep()
	}
}
