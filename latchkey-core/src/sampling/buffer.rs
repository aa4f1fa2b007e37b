//! Fixed-size sample window

use heapless::Vec;

/// Readings averaged into one report
pub const SAMPLE_WINDOW: usize = 3;

/// Buffer of converted temperature readings
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    samples: Vec<f32, SAMPLE_WINDOW>,
}

impl SampleBuffer {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Store a reading
    ///
    /// Returns the number of buffered readings, or gives the reading back
    /// if the window is already full.
    pub fn push(&mut self, celsius: f32) -> Result<usize, f32> {
        self.samples.push(celsius)?;
        Ok(self.samples.len())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Arithmetic mean of the buffered readings, emptying the buffer
    pub fn take_mean(&mut self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        let mean = sum / self.samples.len() as f32;
        self.samples.clear();
        Some(mean)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
