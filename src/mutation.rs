use std::cell::Cell;

use crate::{Error, Result};

/// Marks a cell as being inside a mutation for as long as it lives.
///
/// Entering twice on the same flag means propagation looped back into the
/// cell that started it.
pub(crate) struct Mutation<'a> {
	flag: &'a Cell<bool>,
}

impl<'a> Mutation<'a> {
	pub fn enter(flag: &'a Cell<bool>, name: &'static str) -> Result<Self> {
		if flag.replace(true) {
			tracing::warn!(cell = name, "cyclic dependency detected");
			return Err(Error::Cycle { name });
		}

		Ok(Mutation { flag })
	}
}

impl Drop for Mutation<'_> {
	fn drop(&mut self) {
		self.flag.set(false);
	}
}
