//! Status indicator drivers

pub mod rgb;

pub use rgb::RgbIndicator;
