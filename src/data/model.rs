use std::fmt;
use std::sync::Arc;

use super::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sampling – uniform time axis
// ---------------------------------------------------------------------------

/// Uniform sampling of time: `count` samples, `delta` hours apart, the first
/// at `first` hours since 2004-09-01.
///
/// Interval and first time are single precision, as stored by both file
/// formats. `delta` is not validated; zero or negative intervals are carried
/// as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    count: usize,
    delta: f32,
    first: f32,
}

impl Sampling {
    pub fn new(count: usize, delta: f32, first: f32) -> Self {
        Sampling { count, delta, first }
    }

    /// Number of samples.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Interval between samples, in hours.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Time of sample 0, in hours.
    pub fn first(&self) -> f32 {
        self.first
    }

    /// Time of sample `i`, computed in double precision.
    pub fn value(&self, i: usize) -> f64 {
        self.first as f64 + i as f64 * self.delta as f64
    }

    /// Time of the final sample, if there is one.
    pub fn last(&self) -> Option<f64> {
        self.count.checked_sub(1).map(|i| self.value(i))
    }

    /// All sample times in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.value(i))
    }
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, delta {} h, first {} h",
            self.count, self.delta, self.first
        )
    }
}

// ---------------------------------------------------------------------------
// TiltSeries – one tilt value per sample
// ---------------------------------------------------------------------------

/// Measured tilts (microradians) on a uniform time axis.
///
/// The sampling is shared: series derived from another one without changing
/// the time axis hold the same `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltSeries {
    sampling: Arc<Sampling>,
    values: Vec<f32>,
}

impl TiltSeries {
    /// Pair a sampling with its values. The value count must match.
    pub fn new(sampling: Arc<Sampling>, values: Vec<f32>) -> Result<Self> {
        if values.len() != sampling.count() {
            return Err(Error::Shape {
                expected: sampling.count(),
                actual: values.len(),
            });
        }
        Ok(TiltSeries { sampling, values })
    }

    /// A series on the same sampling with new values of the same length.
    pub(crate) fn with_values(&self, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), self.values.len());
        TiltSeries {
            sampling: Arc::clone(&self.sampling),
            values,
        }
    }

    pub fn sampling(&self) -> &Arc<Sampling> {
        &self.sampling
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(time, tilt)` pairs for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sampling
            .values()
            .zip(self.values.iter())
            .map(|(t, &x)| (t, x as f64))
    }

    /// Whether both series use the very same sampling instance.
    pub fn shares_sampling(&self, other: &TiltSeries) -> bool {
        Arc::ptr_eq(&self.sampling, &other.sampling)
    }
}
