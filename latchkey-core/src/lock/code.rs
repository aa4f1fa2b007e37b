//! Code entry accumulator

use heapless::Vec;

use crate::keypad::{Symbol, CODE_LEN};

/// Symbols entered since the last verification
#[derive(Debug, Clone, Default)]
pub struct EnteredCode {
    symbols: Vec<Symbol, CODE_LEN>,
}

impl EnteredCode {
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol
    ///
    /// Returns `true` once the code is complete. Symbols beyond a complete
    /// code are dropped; verify and clear before pushing more.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        let _ = self.symbols.push(symbol);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.symbols.is_full()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Compare a complete code element by element
    pub fn matches(&self, code: &[Symbol; CODE_LEN]) -> bool {
        self.is_complete() && self.symbols.as_slice() == code.as_slice()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}
