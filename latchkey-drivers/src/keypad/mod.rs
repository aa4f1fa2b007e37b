//! Keypad drivers

pub mod matrix;
pub mod scanner;

pub use matrix::PinMatrix;
pub use scanner::DebouncedScanner;
