use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// A cell was asked to mutate while it was still propagating
	/// its previous mutation.
	#[error("cyclic dependency detected while mutating `{name}`")]
	Cycle { name: &'static str },

	/// An input would end up mirroring itself.
	#[error("input `{name}` cannot use itself as a source")]
	SourceCycle { name: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
