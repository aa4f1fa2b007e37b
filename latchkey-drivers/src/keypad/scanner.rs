//! Debounced column scanner
//!
//! One pass drives each column in turn, waits for the lines to settle and
//! reads the rows. The first active row found is debounced by waiting and
//! re-reading; a confirmed press flashes the accept colour, then the
//! scanner waits for the key to be released before returning it.
//!
//! The release wait has no upper bound. A stuck key holds the caller in
//! `scan_once` until it is released.

use embedded_hal::delay::DelayNs;
use latchkey_core::config::KeypadTiming;
use latchkey_core::traits::{Indicator, Keypad};
use latchkey_core::{Symbol, KEY_MATRIX};
use latchkey_hal::{KeypadMatrix, KEYPAD_COLS, KEYPAD_ROWS};
use latchkey_protocol::IndicatorColor;

/// Blocking keypad scanner
pub struct DebouncedScanner<M, D> {
    matrix: M,
    delay: D,
    timing: KeypadTiming,
}

impl<M: KeypadMatrix, D: DelayNs> DebouncedScanner<M, D> {
    /// Create a scanner
    ///
    /// # Arguments
    /// - `matrix`: Keypad rows and columns
    /// - `delay`: Busy-wait delay source
    /// - `timing`: Settle, debounce and release poll intervals
    pub fn new(matrix: M, delay: D, timing: KeypadTiming) -> Self {
        Self {
            matrix,
            delay,
            timing,
        }
    }

    /// Release the matrix and delay
    pub fn free(self) -> (M, D) {
        (self.matrix, self.delay)
    }

    /// Scan one column
    fn scan_column<I: Indicator + ?Sized>(
        &mut self,
        col: usize,
        indicator: &mut I,
    ) -> Option<Symbol> {
        self.delay.delay_us(self.timing.settle_us);
        let rows = self.matrix.read_rows();
        let row = (0..KEYPAD_ROWS).find(|&row| rows & (1 << row) != 0)?;

        self.delay.delay_us(self.timing.debounce_us);
        if !self.matrix.row_active(row) {
            trace!("bounce at row {} col {}", row, col);
            return None;
        }

        indicator.set_color(IndicatorColor::Accept);
        let symbol = KEY_MATRIX.symbol(row, col);

        while self.matrix.row_active(row) {
            self.delay.delay_us(self.timing.release_poll_us);
        }
        symbol
    }
}

impl<M: KeypadMatrix, D: DelayNs> Keypad for DebouncedScanner<M, D> {
    fn scan_once<I: Indicator + ?Sized>(&mut self, indicator: &mut I) -> Option<Symbol> {
        for col in 0..KEYPAD_COLS {
            self.matrix.drive_column(col);
            let key = self.scan_column(col, indicator);
            self.matrix.release_column(col);

            if let Some(symbol) = key {
                debug!("key {}", symbol);
                return Some(symbol);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Matrix with keys held for a fixed number of row reads
    struct FakeMatrix {
        pressed: Vec<(usize, usize), 16>,
        driven: Option<usize>,
        reads: usize,
        release_after: usize,
        drives: usize,
        releases: usize,
    }

    impl FakeMatrix {
        fn idle() -> Self {
            Self {
                pressed: Vec::new(),
                driven: None,
                reads: 0,
                release_after: usize::MAX,
                drives: 0,
                releases: 0,
            }
        }

        fn pressed(keys: &[(usize, usize)], release_after: usize) -> Self {
            let mut matrix = Self::idle();
            matrix.pressed.extend_from_slice(keys).unwrap();
            matrix.release_after = release_after;
            matrix
        }
    }

    impl KeypadMatrix for FakeMatrix {
        fn drive_column(&mut self, column: usize) {
            assert!(self.driven.is_none(), "two columns driven");
            self.driven = Some(column);
            self.drives += 1;
        }

        fn release_column(&mut self, column: usize) {
            assert_eq!(self.driven, Some(column));
            self.driven = None;
            self.releases += 1;
        }

        fn read_rows(&mut self) -> u8 {
            self.reads += 1;
            if self.reads > self.release_after {
                self.pressed.clear();
            }
            let Some(driven) = self.driven else {
                return 0;
            };
            self.pressed
                .iter()
                .filter(|&&(_, col)| col == driven)
                .fold(0, |mask, &(row, _)| mask | 1 << row)
        }
    }

    #[derive(Default)]
    struct FakeDelay {
        total_ns: u64,
    }

    impl DelayNs for FakeDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[derive(Default)]
    struct FakeIndicator {
        accepts: usize,
    }

    impl Indicator for FakeIndicator {
        fn set_color(&mut self, color: IndicatorColor) {
            assert_eq!(color, IndicatorColor::Accept);
            self.accepts += 1;
        }
    }

    fn scanner(matrix: FakeMatrix) -> DebouncedScanner<FakeMatrix, FakeDelay> {
        DebouncedScanner::new(matrix, FakeDelay::default(), KeypadTiming::default())
    }

    fn symbol(byte: u8) -> Symbol {
        Symbol::from_byte(byte).unwrap()
    }

    #[test]
    fn test_idle_keypad_returns_none() {
        let mut scanner = scanner(FakeMatrix::idle());
        let mut indicator = FakeIndicator::default();
        for _ in 0..5 {
            assert_eq!(scanner.scan_once(&mut indicator), None);
        }
        let (matrix, delay) = scanner.free();
        assert_eq!(matrix.drives, 5 * KEYPAD_COLS);
        assert_eq!(matrix.releases, matrix.drives);
        assert_eq!(indicator.accepts, 0);
        // Only settle delays, never a debounce
        assert_eq!(delay.total_ns, 5 * KEYPAD_COLS as u64 * 100_000);
    }

    #[test]
    fn test_press_is_debounced_and_released() {
        // Key '6' at row 1, col 2, held for 10 reads
        let mut scanner = scanner(FakeMatrix::pressed(&[(1, 2)], 10));
        let mut indicator = FakeIndicator::default();

        assert_eq!(scanner.scan_once(&mut indicator), Some(symbol(b'6')));
        assert_eq!(indicator.accepts, 1);

        let (matrix, delay) = scanner.free();
        // Scan stopped at the pressed column
        assert_eq!(matrix.drives, 3);
        assert_eq!(matrix.releases, 3);
        assert!(matrix.driven.is_none());
        assert!(delay.total_ns >= 20_000_000);
    }

    #[test]
    fn test_bounce_is_ignored() {
        // Active on the first read of column 3 only
        let mut scanner = scanner(FakeMatrix::pressed(&[(0, 3)], 4));
        let mut indicator = FakeIndicator::default();

        assert_eq!(scanner.scan_once(&mut indicator), None);
        assert_eq!(indicator.accepts, 0);
    }

    #[test]
    fn test_bounce_continues_with_next_column() {
        // Seen on the first read of column 0, gone by the debounce re-read
        let mut scanner = scanner(FakeMatrix::pressed(&[(2, 0)], 1));
        let mut indicator = FakeIndicator::default();

        assert_eq!(scanner.scan_once(&mut indicator), None);
        let (matrix, _) = scanner.free();
        assert_eq!(matrix.drives, KEYPAD_COLS);
        assert_eq!(matrix.releases, KEYPAD_COLS);
    }

    #[test]
    fn test_first_key_in_scan_order_wins() {
        // '2' (row 0, col 1) and '#' (row 3, col 2) held together
        let mut scanner = scanner(FakeMatrix::pressed(&[(3, 2), (0, 1)], 20));
        let mut indicator = FakeIndicator::default();

        assert_eq!(scanner.scan_once(&mut indicator), Some(symbol(b'2')));
        assert_eq!(indicator.accepts, 1);
    }

    #[test]
    fn test_lowest_row_in_column_wins() {
        // '1' and '*' share column 0
        let mut scanner = scanner(FakeMatrix::pressed(&[(3, 0), (0, 0)], 20));
        let mut indicator = FakeIndicator::default();

        assert_eq!(scanner.scan_once(&mut indicator), Some(symbol(b'1')));
    }

    #[test]
    fn test_release_key() {
        let mut scanner = scanner(FakeMatrix::pressed(&[(3, 3)], 8));
        let mut indicator = FakeIndicator::default();

        let key = scanner.scan_once(&mut indicator).unwrap();
        assert!(key.is_release());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_single_key_is_found(row in 0usize..KEYPAD_ROWS, col in 0usize..KEYPAD_COLS, hold in 6usize..40) {
                let mut scanner = scanner(FakeMatrix::pressed(&[(row, col)], hold));
                let mut indicator = FakeIndicator::default();

                prop_assert_eq!(scanner.scan_once(&mut indicator), KEY_MATRIX.symbol(row, col));
                prop_assert_eq!(indicator.accepts, 1);
                let (matrix, _) = scanner.free();
                prop_assert!(matrix.driven.is_none());
            }
        }
    }
}
