//! Fixed-capacity history series with a running maximum
//!
//! The aggregator delivers the last eight daily totals (grid consumption and
//! PV yield) as plain arrays. Each slot is addressed by an explicit index and
//! the maximum is raised at write time so graph axes can be auto-scaled
//! without rescanning the series.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Number of samples kept per history series.
pub const HISTORY_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History index {index} out of range (capacity: {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },
}

/// Rolling history of at most [`HISTORY_CAPACITY`] samples, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistorySeries {
    values: [f32; HISTORY_CAPACITY],
    max: f32,
}

impl HistorySeries {
    pub const fn new() -> Self {
        Self {
            values: [0.0; HISTORY_CAPACITY],
            max: 0.0,
        }
    }

    /// Write `value` into slot `index` and raise the running maximum.
    ///
    /// The maximum only ever moves upward, so overwriting a slot with a
    /// smaller value keeps the previous peak.
    pub fn record(&mut self, index: usize, value: f32) -> Result<(), HistoryError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                capacity: HISTORY_CAPACITY,
            })?;

        *slot = value;
        if value > self.max {
            self.max = value;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[f32; HISTORY_CAPACITY] {
        &self.values
    }

    /// Largest value ever recorded; 0 until a positive sample arrives.
    pub fn max(&self) -> f32 {
        self.max
    }

    pub const fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_running_max() {
        let mut series = HistorySeries::new();
        let samples = [3.03, 11.97, 2.24, 1.29, 3.05, 3.17, 1.5, 0.12];
        let mut expected = 0.0f32;

        for (i, value) in samples.iter().copied().enumerate() {
            series.record(i, value).unwrap();
            expected = expected.max(value);
            assert_eq!(series.max(), expected);
        }
        assert_eq!(series.max(), 11.97);
    }

    #[test]
    fn test_max_survives_lower_overwrite() {
        let mut series = HistorySeries::new();
        series.record(1, 18.2).unwrap();
        series.record(1, 4.0).unwrap();

        assert_eq!(series.get(1), Some(4.0));
        assert_eq!(series.max(), 18.2);
    }

    #[test]
    fn test_max_never_negative() {
        let mut series = HistorySeries::new();
        series.record(0, -5.0).unwrap();
        assert_eq!(series.max(), 0.0);
        assert!(series.values().iter().all(|v| *v <= series.max()));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut series = HistorySeries::new();
        let err = series.record(HISTORY_CAPACITY, 1.0).unwrap_err();
        assert_eq!(
            err,
            HistoryError::IndexOutOfRange {
                index: 8,
                capacity: 8
            }
        );
        assert_eq!(series.max(), 0.0);
    }
}
