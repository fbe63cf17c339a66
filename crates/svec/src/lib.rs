#[macro_use]

mod macros;
pub mod capacity_policy;

mod allocator;
mod global_alloc;
mod errors;
mod block;
mod reserve_hint;
mod dyn_array;

pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::{CapacityPolicy, Doubling, Exact};
pub use block::Block;
pub use reserve_hint::{ReserveHint, reserve};
pub use dyn_array::DynArray;

pub type Result<T> = core::result::Result<T, CapacityError>;
