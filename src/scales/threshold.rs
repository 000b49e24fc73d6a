use serde::Serialize;

use crate::error::{HeatmapError, Result};

/// Step function mapping a continuous value to one of `boundaries.len() + 1` outputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdScale<T> {
    boundaries: Vec<f64>,
    outputs: Vec<T>,
}

impl<T> ThresholdScale<T> {
    pub fn new(boundaries: Vec<f64>, outputs: Vec<T>) -> Result<Self> {
        if outputs.len() != boundaries.len() + 1 {
            return Err(HeatmapError::InvalidThresholds(format!(
                "{} boundaries need {} outputs, got {}",
                boundaries.len(),
                boundaries.len() + 1,
                outputs.len()
            )));
        }

        if boundaries.iter().any(|b| !b.is_finite()) {
            return Err(HeatmapError::InvalidThresholds(
                "boundaries must be finite".to_string(),
            ));
        }

        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(HeatmapError::InvalidThresholds(format!(
                "boundaries must be strictly ascending: {:?}",
                boundaries
            )));
        }

        Ok(Self {
            boundaries,
            outputs,
        })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Index of the output selected for `value`. A value equal to a boundary
    /// falls into the band above it; NaN selects the first output.
    pub fn index_of(&self, value: f64) -> usize {
        self.boundaries.partition_point(|b| *b <= value)
    }

    pub fn apply(&self, value: f64) -> &T {
        &self.outputs[self.index_of(value)]
    }
}

impl ThresholdScale<String> {
    /// Boundaries spaced evenly inside `[min, max]`, one fewer than `colors`.
    /// A flat range has no boundaries and maps everything to the first color.
    pub fn evenly_spaced(min: f64, max: f64, colors: Vec<String>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(HeatmapError::InvalidThresholds(
                "at least two colors are required".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(HeatmapError::InvalidThresholds(format!(
                "data range [{}, {}] is invalid",
                min, max
            )));
        }
        if max == min {
            return Self::new(Vec::new(), colors.into_iter().take(1).collect());
        }

        let steps = colors.len() as f64;
        let boundaries = (1..colors.len())
            .map(|i| min + i as f64 * (max - min) / steps)
            .collect();
        Self::new(boundaries, colors)
    }
}
