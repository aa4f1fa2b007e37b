//! Keypad matrix abstraction
//!
//! A 4x4 membrane keypad is wired as four column outputs and four row
//! inputs. Driving a column active connects every pressed key in that
//! column to its row line.

/// Number of row lines on the keypad
pub const KEYPAD_ROWS: usize = 4;

/// Number of column lines on the keypad
pub const KEYPAD_COLS: usize = 4;

/// Row/column keypad matrix
///
/// Implementations hide the electrical polarity: "active" always means the
/// column is selected or the row sees a pressed key, whatever the pin level.
pub trait KeypadMatrix {
    /// Select a column for reading
    ///
    /// Out-of-range columns are ignored.
    fn drive_column(&mut self, column: usize);

    /// Deselect a column
    fn release_column(&mut self, column: usize);

    /// Read all row lines
    ///
    /// Bit `n` is set when row `n` is active.
    fn read_rows(&mut self) -> u8;

    /// Check a single row line
    fn row_active(&mut self, row: usize) -> bool {
        row < KEYPAD_ROWS && self.read_rows() & (1 << row) != 0
    }
}
