mod cond;
mod equal;
mod junction;
mod map;
mod membership;
mod not;
mod select;

pub use cond::If;
pub use equal::Equal;
pub use junction::{And, Or};
pub(crate) use map::Map;
pub use membership::Membership;
pub use not::Not;
pub use select::IndexedSelect;
