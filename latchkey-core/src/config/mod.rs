//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware builds them from
//! their defaults; nothing is persisted.

pub mod types;

pub use types::*;
