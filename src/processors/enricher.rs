use tracing::debug;

use crate::error::{HeatmapError, Result};
use crate::models::{Dataset, RawDataset, Sample};

/// Derives absolute temperatures and month names from a raw dataset
pub struct Enricher;

impl Enricher {
    pub fn new() -> Self {
        Self
    }

    /// Consume the raw document and produce the immutable dataset.
    /// Any sample with a month outside 1..=12 rejects the whole dataset.
    pub fn enrich(&self, raw: RawDataset) -> Result<Dataset> {
        if raw.monthly_variance.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        let base_temperature = raw.base_temperature;
        let samples = raw
            .monthly_variance
            .into_iter()
            .map(|sample| Sample::from_raw(sample, base_temperature))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Enriched {} samples against base temperature {}",
            samples.len(),
            base_temperature
        );

        Ok(Dataset {
            base_temperature,
            samples,
        })
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawSample;
    use crate::utils::constants::MONTHS;

    fn raw(samples: Vec<(i32, u32, f64)>) -> RawDataset {
        RawDataset {
            base_temperature: 8.66,
            monthly_variance: samples
                .into_iter()
                .map(|(year, month, variance)| RawSample { year, month, variance })
                .collect(),
        }
    }

    #[test]
    fn test_enrich_derives_fields() {
        let samples: Vec<(i32, u32, f64)> =
            (1..=12).map(|m| (1753, m, m as f64 * 0.25 - 2.0)).collect();
        let dataset = Enricher::new().enrich(raw(samples.clone())).unwrap();

        assert_eq!(dataset.len(), 12);
        for (sample, (year, month, variance)) in dataset.samples.iter().zip(samples) {
            assert_eq!(sample.year, year);
            assert_eq!(sample.abs, 8.66 + variance);
            assert_eq!(sample.month_name, MONTHS[(month - 1) as usize]);
        }
    }

    #[test]
    fn test_enrich_preserves_order() {
        let dataset = Enricher::new()
            .enrich(raw(vec![(1800, 3, 0.0), (1753, 1, 0.0), (1900, 2, 0.0)]))
            .unwrap();
        let years: Vec<i32> = dataset.samples.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1800, 1753, 1900]);
    }

    #[test]
    fn test_enrich_rejects_bad_month() {
        let result = Enricher::new().enrich(raw(vec![(1753, 1, 0.0), (1753, 0, 0.0)]));
        assert!(matches!(
            result,
            Err(HeatmapError::InvalidMonth { year: 1753, month: 0 })
        ));
    }

    #[test]
    fn test_enrich_rejects_empty() {
        let result = Enricher::new().enrich(raw(vec![]));
        assert!(matches!(result, Err(HeatmapError::EmptyDataset)));
    }
}
