//! Temperature sensor drivers

pub mod rtd;

pub use rtd::RtdDivider;
