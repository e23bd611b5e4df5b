use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};

use crate::addr::Addr;
use crate::mutation::Mutation;
use crate::notifier::{Link, Listener, Notifier, Subscription};
use crate::value::{Dep, ValueCell};
use crate::{Error, Result};

/// Settable leaf cell, which can also mirror another cell.
///
/// Without a source the input holds its own value. With a source it reads
/// through to it and re-fires whenever the source changes. Detaching the
/// source freezes the input at the last value it observed.
pub struct Input<T> {
	body: Rc<InputBody<T>>,
}

impl<T> Clone for Input<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct InputBody<T> {
	inner: RefCell<InputInner<T>>,
	notifier: Rc<Notifier>,
	mutating: Cell<bool>,
	name: &'static str,
	this: Weak<InputBody<T>>,
}

struct InputInner<T> {
	own: T,
	/// Last value observers were told about.
	last: T,
	source: Option<Dep<T>>,
	link: Option<Subscription>,
	callback: Option<Subscription>,
}

impl<T> Default for Input<T>
where
	T: Default + Clone + PartialEq + 'static,
{
	fn default() -> Self {
		Input::new(Default::default())
	}
}

pub trait Toggle {
	fn toggle(&mut self);
}

impl Toggle for bool {
	fn toggle(&mut self) {
		*self = !*self
	}
}

impl<T> Input<T>
where
	T: Clone + PartialEq + 'static,
{
	pub fn new(value: T) -> Self {
		Self::named("<unnamed>", value)
	}

	pub fn named(name: &'static str, value: T) -> Self {
		Input {
			body: Rc::new_cyclic(|this| InputBody {
				inner: RefCell::new(InputInner {
					own: value.clone(),
					last: value,
					source: None,
					link: None,
					callback: None,
				}),
				notifier: Notifier::new(),
				mutating: Cell::new(false),
				name,
				this: this.clone(),
			}),
		}
	}

	/// Creates an input with `func` already subscribed to it. The
	/// subscription lives as long as the input.
	pub fn with_callback(value: T, func: impl Fn(&T) + 'static) -> Self {
		let input = Self::new(value);
		let subscription = input.dep().subscribe(func);
		input.body.inner.borrow_mut().callback = Some(subscription);
		input
	}

	#[inline]
	pub fn value(&self) -> T {
		self.body.value()
	}

	/// Stores `value` as the input's own value.
	///
	/// While a source is attached the source still wins, so this only
	/// notifies when the input has no source. Setting the value the input
	/// already holds is a no-op, even while a change is propagating.
	pub fn set(&self, value: T) -> Result<()> {
		self.replace(value).map(drop)
	}

	pub fn replace(&self, value: T) -> Result<T> {
		if self.body.inner.borrow().own == value {
			return Ok(value);
		}

		let _mutation = Mutation::enter(&self.body.mutating, self.body.name)?;
		let old = std::mem::replace(&mut self.body.inner.borrow_mut().own, value);
		self.body.refresh()?;
		Ok(old)
	}

	pub fn update(&self, func: impl FnOnce(&mut T)) -> Result<()> {
		let mut value = self.body.inner.borrow().own.clone();
		func(&mut value);
		self.set(value)
	}

	#[inline]
	pub fn toggle(&self) -> Result<()>
	where
		T: Toggle,
	{
		self.update(T::toggle)
	}

	pub fn source(&self) -> Option<Dep<T>> {
		self.body.inner.borrow().source.clone()
	}

	/// Attaches to `source`, or detaches when `None`.
	///
	/// The previous source is unsubscribed. The input then re-evaluates and
	/// notifies if the value it now derives differs from the last one it
	/// reported.
	pub fn set_source(&self, source: Option<Dep<T>>) -> Result<()> {
		let this = Addr::of_weak(&self.body.this);
		if let Some(source) = &source {
			if source.mirrors(this) {
				tracing::warn!(cell = self.body.name, "input would mirror itself");
				return Err(Error::SourceCycle {
					name: self.body.name,
				});
			}
		}

		let _mutation = Mutation::enter(&self.body.mutating, self.body.name)?;

		let (previous, link) = {
			let mut inner = self.body.inner.borrow_mut();
			(inner.source.take(), inner.link.take())
		};
		drop(link);

		if let Some(previous) = previous {
			let frozen = previous.value();
			self.body.inner.borrow_mut().own = frozen;
			tracing::debug!(cell = self.body.name, source = previous.name(), "detach");
		}

		if let Some(source) = source {
			let listener = self.body.this.clone() as Weak<dyn Listener>;
			let link = source.link(Link::Consumer, listener);
			tracing::debug!(cell = self.body.name, source = source.name(), "attach");

			let mut inner = self.body.inner.borrow_mut();
			inner.source = Some(source);
			inner.link = Some(link);
		}

		self.body.refresh()
	}

	pub fn has_source(&self) -> bool {
		self.body.inner.borrow().source.is_some()
	}

	pub fn name(&self) -> &'static str {
		self.body.name
	}

	pub fn dep(&self) -> Dep<T> {
		self.clone().into()
	}
}

impl<T> InputBody<T>
where
	T: Clone + PartialEq + 'static,
{
	fn value(&self) -> T {
		let source = self.inner.borrow().source.clone();
		match source {
			Some(source) => source.value(),
			None => self.inner.borrow().own.clone(),
		}
	}

	fn refresh(&self) -> Result<()> {
		let current = self.value();

		{
			let mut inner = self.inner.borrow_mut();
			if inner.last == current {
				return Ok(());
			}
			inner.last = current;
		}

		self.notifier.notify(self.name)
	}
}

impl<T> Listener for InputBody<T>
where
	T: Clone + PartialEq + 'static,
{
	fn changed(&self) -> Result<()> {
		let _mutation = Mutation::enter(&self.mutating, self.name)?;
		self.refresh()
	}
}

impl<T> ValueCell<T> for InputBody<T>
where
	T: Clone + PartialEq + 'static,
{
	fn value(&self) -> T {
		InputBody::value(self)
	}

	fn notifier(&self) -> Option<&Rc<Notifier>> {
		Some(&self.notifier)
	}

	fn name(&self) -> &'static str {
		self.name
	}

	fn has_source(&self) -> bool {
		self.inner.borrow().source.is_some()
	}

	fn inside_mutation(&self) -> bool {
		self.mutating.get()
	}

	fn mirrors(&self, addr: Addr) -> bool {
		let source = self.inner.borrow().source.clone();
		source.map_or(false, |source| source.mirrors(addr))
	}
}

impl<T> From<Input<T>> for Dep<T>
where
	T: Clone + PartialEq + 'static,
{
	fn from(input: Input<T>) -> Self {
		Dep::new(input.body)
	}
}

impl<T> Debug for Input<T>
where
	T: Clone + PartialEq + Debug + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.value().fmt(f)
	}
}
