//! GPIO-backed keypad matrix
//!
//! Columns are outputs idling high; selecting a column drives it low.
//! Rows are inputs with pull-ups, so a pressed key in the selected column
//! pulls its row low.

use latchkey_hal::{InputPin, KeypadMatrix, OutputPin, KEYPAD_COLS, KEYPAD_ROWS};

/// Keypad matrix on four row inputs and four column outputs
pub struct PinMatrix<R, C> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
}

impl<R: InputPin, C: OutputPin> PinMatrix<R, C> {
    /// Create a matrix with every column released
    pub fn new(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS]) -> Self {
        let mut matrix = Self { rows, cols };
        for col in matrix.cols.iter_mut() {
            col.set_high();
        }
        matrix
    }
}

impl<R: InputPin, C: OutputPin> KeypadMatrix for PinMatrix<R, C> {
    fn drive_column(&mut self, column: usize) {
        if let Some(col) = self.cols.get_mut(column) {
            col.set_low();
        }
    }

    fn release_column(&mut self, column: usize) {
        if let Some(col) = self.cols.get_mut(column) {
            col.set_high();
        }
    }

    fn read_rows(&mut self) -> u8 {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_low())
            .fold(0, |mask, (i, _)| mask | 1 << i)
    }
}
