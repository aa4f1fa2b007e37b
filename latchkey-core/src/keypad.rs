//! Key matrix layout and the stored unlock code
//!
//! The keypad layout is compiled in:
//!
//! ```text
//!        col 0  col 1  col 2  col 3
//! row 0    1      2      3      A
//! row 1    4      5      6      B
//! row 2    7      8      9      C
//! row 3    *      0      #      D
//! ```

use core::fmt;

use latchkey_hal::{KEYPAD_COLS, KEYPAD_ROWS};
use latchkey_protocol::RELEASE_KEY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of symbols in an unlock code
pub const CODE_LEN: usize = 4;

/// One keypad character
///
/// Only bytes that appear on the key matrix can be turned into a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Symbol(u8);

/// Byte that has no key on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidSymbol(pub u8);

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no key for byte {:#04x}", self.0)
    }
}

impl Symbol {
    /// Symbol that re-locks the controller
    pub const RELEASE: Symbol = Symbol(RELEASE_KEY);

    /// Symbol for an ASCII byte, if the key matrix has such a key
    pub fn from_byte(byte: u8) -> Option<Self> {
        KEY_MATRIX.position(Symbol(byte)).map(|_| Symbol(byte))
    }

    /// ASCII byte sent on the bus for this symbol
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Check for the release key
    pub const fn is_release(self) -> bool {
        self.0 == RELEASE_KEY
    }
}

impl TryFrom<u8> for Symbol {
    type Error = InvalidSymbol;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Symbol::from_byte(byte).ok_or(InvalidSymbol(byte))
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.0
    }
}

/// Row/column to symbol lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    keys: [[Symbol; KEYPAD_COLS]; KEYPAD_ROWS],
}

impl KeyMatrix {
    const fn from_rows(rows: [&[u8; KEYPAD_COLS]; KEYPAD_ROWS]) -> Self {
        let mut keys = [[Symbol(0); KEYPAD_COLS]; KEYPAD_ROWS];
        let mut row = 0;
        while row < KEYPAD_ROWS {
            let mut col = 0;
            while col < KEYPAD_COLS {
                keys[row][col] = Symbol(rows[row][col]);
                col += 1;
            }
            row += 1;
        }
        Self { keys }
    }

    /// Symbol at a row and column
    pub fn symbol(&self, row: usize, col: usize) -> Option<Symbol> {
        self.keys.get(row)?.get(col).copied()
    }

    /// Row and column of a symbol
    pub fn position(&self, symbol: Symbol) -> Option<(usize, usize)> {
        self.keys.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&key| key == symbol)
                .map(|col| (row, col))
        })
    }

    /// Every symbol in scan order (row-major)
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.keys.iter().flatten().copied()
    }
}

/// Standard 4x4 membrane keypad
pub const KEY_MATRIX: KeyMatrix = KeyMatrix::from_rows([b"123A", b"456B", b"789C", b"*0#D"]);

/// Factory unlock code
pub const STORED_CODE: [Symbol; CODE_LEN] = [Symbol(b'3'), Symbol(b'9'), Symbol(b'4'), Symbol(b'D')];
