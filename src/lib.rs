//! Dependent value cells.
//!
//! Leaves ([`Const`], [`Input`], [`Output`], [`Lazy`]) hold primitive state,
//! combinators ([`And`], [`Or`], [`Not`], [`Equal`], [`If`],
//! [`IndexedSelect`], [`Membership`]) derive new values from them. Mutating a
//! leaf re-evaluates every dependent combinator synchronously, depth first,
//! before the mutation returns. A cell only notifies when its value actually
//! changed.
//!
//! Upstream cells refer to their consumers weakly, so dropping the last
//! handle of a derived chain frees it even while its sources live on.

pub mod macros;

mod addr;
mod combinators;
mod r#const;
mod dependencies;
mod error;
mod input;
mod lazy;
mod mutation;
mod node;
mod notifier;
mod output;
mod value;

pub use addr::Addr;
pub use combinators::{And, Equal, If, IndexedSelect, Membership, Not, Or};
pub use error::{Error, Result};
pub use input::{Input, Toggle};
pub use lazy::Lazy;
pub use notifier::{Notifier, Subscription};
pub use output::Output;
pub use r#const::Const;
pub use value::{Dep, ValueCell};
