//! Noise statistics over a window of raw field codes.
//!
//! Used for bench captures in continuous mode: fill a window, then look at
//! the spread. Square roots come from `micromath` and are approximate.

use heapless::Vec;
use micromath::F32Ext;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Stats {
    pub count: usize,
    pub mean: f32,
    /// Population standard deviation
    pub std_dev: f32,
    pub rms: f32,
}

/// Fixed-capacity buffer of 15-bit field codes.
pub struct SampleWindow<const N: usize> {
    samples: Vec<u16, N>,
}

impl<const N: usize> SampleWindow<N> {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Hands the code back when the window is already full.
    pub fn push(&mut self, code: u16) -> Result<(), u16> {
        self.samples.push(code)
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub fn stats(&self) -> Option<Stats> {
        if self.samples.is_empty() {
            return None;
        }
        let count = self.samples.len();
        let n = count as f32;

        let mean = self.samples.iter().map(|&s| f32::from(s)).sum::<f32>() / n;
        let variance = self
            .samples
            .iter()
            .map(|&s| {
                let d = f32::from(s) - mean;
                d * d
            })
            .sum::<f32>()
            / n;
        let mean_square = self
            .samples
            .iter()
            .map(|&s| f32::from(s) * f32::from(s))
            .sum::<f32>()
            / n;

        Some(Stats {
            count,
            mean,
            std_dev: F32Ext::sqrt(variance),
            rms: F32Ext::sqrt(mean_square),
        })
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
