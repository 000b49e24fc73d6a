use serde::{Deserialize, Serialize};

use crate::models::sample::{RawSample, Sample};

/// The document served at the dataset URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawSample>,
}

/// An enriched dataset; never mutated after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Inclusive `(min, max)` year range, `None` when empty
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let min = self.samples.iter().map(|s| s.year).min()?;
        let max = self.samples.iter().map(|s| s.year).max()?;
        Some((min, max))
    }

    /// Inclusive `(min, max)` absolute temperature range, `None` when empty
    pub fn abs_extent(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        let min = self.samples.iter().map(|s| s.abs).fold(f64::INFINITY, f64::min);
        let max = self
            .samples
            .iter()
            .map(|s| s.abs)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_dataset_deserializes_wire_names() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;
        let raw: RawDataset = serde_json::from_str(json).unwrap();

        assert_eq!(raw.base_temperature, 8.66);
        assert_eq!(raw.monthly_variance.len(), 2);
        assert_eq!(raw.monthly_variance[1].month, 2);
    }

    #[test]
    fn test_extents() {
        let samples = [(1760, 5, 1.0), (1753, 1, -2.0), (1801, 12, 0.5)]
            .into_iter()
            .map(|(year, month, variance)| {
                Sample::from_raw(RawSample { year, month, variance }, 8.0).unwrap()
            })
            .collect();
        let dataset = Dataset {
            base_temperature: 8.0,
            samples,
        };

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.year_extent(), Some((1753, 1801)));
        assert_eq!(dataset.abs_extent(), Some((6.0, 9.0)));
    }

    #[test]
    fn test_empty_extents() {
        let dataset = Dataset {
            base_temperature: 8.0,
            samples: Vec::new(),
        };
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_extent(), None);
        assert_eq!(dataset.abs_extent(), None);
    }
}
