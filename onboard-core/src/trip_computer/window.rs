use std::fmt;

use ringbuffer::{ConstGenericRingBuffer, RingBuffer};

/// Number of driving seconds covered by the range estimate.
pub const WINDOW_SECONDS: usize = 100;

/// Per-second consumption samples (litres per km) from the most recent driving seconds.
///
/// The window is seeded with a default consumption and stays full from then
/// on: each new sample evicts the oldest one.
pub struct ConsumptionWindow {
    samples: ConstGenericRingBuffer<f64, WINDOW_SECONDS>,
}

impl ConsumptionWindow {
    /// Creates a full window where every sample equals `litres_per_km`.
    #[must_use]
    pub fn filled_with(litres_per_km: f64) -> Self {
        let mut samples = ConstGenericRingBuffer::new();
        for _ in 0..WINDOW_SECONDS {
            samples.push(litres_per_km);
        }
        Self { samples }
    }

    /// Replaces the oldest sample with `litres_per_km`.
    pub fn push(&mut self, litres_per_km: f64) {
        self.samples.push(litres_per_km);
    }

    /// Mean of all samples in the window.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over the samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }
}

impl fmt::Debug for ConsumptionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumptionWindow")
            .field("len", &self.samples.len())
            .field("mean", &self.mean())
            .finish()
    }
}
