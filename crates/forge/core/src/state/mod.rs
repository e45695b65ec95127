//! Build state and the equipment records it is made of.
//!
//! Everything here is plain data. Transitions live in [`crate::engine`] and
//! derived numbers in [`crate::stats`].
pub mod types;

pub use types::*;
