use crate::error::{HeatmapError, Result};
use crate::models::{Dataset, Sample};
use crate::utils::constants::{CELSIUS, MONTHS};

#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub abs: f64,
    pub year: i32,
    pub month_name: &'static str,
}

impl Extreme {
    fn from_sample(sample: &Sample) -> Self {
        Self {
            abs: sample.abs,
            year: sample.year,
            month_name: sample.month_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMean {
    pub month_name: &'static str,
    pub mean_abs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_samples: usize,
    pub year_range: (i32, i32),
    pub base_temperature: f64,
    pub coldest: Extreme,
    pub warmest: Extreme,
    pub mean_abs: f64,
    pub coldest_month: MonthlyMean,
    pub warmest_month: MonthlyMean,
}

impl DatasetSummary {
    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Global Temperature Dataset Summary\n");
        summary.push_str("==================================\n\n");
        summary.push_str(&format!("Samples: {}\n", self.total_samples));
        summary.push_str(&format!(
            "Years: {} - {}\n",
            self.year_range.0, self.year_range.1
        ));
        summary.push_str(&format!(
            "Base temperature: {}{}\n\n",
            self.base_temperature, CELSIUS
        ));

        summary.push_str("Absolute temperature:\n");
        summary.push_str(&format!(
            "  Coldest: {:.2}{} ({} {})\n",
            self.coldest.abs, CELSIUS, self.coldest.month_name, self.coldest.year
        ));
        summary.push_str(&format!(
            "  Warmest: {:.2}{} ({} {})\n",
            self.warmest.abs, CELSIUS, self.warmest.month_name, self.warmest.year
        ));
        summary.push_str(&format!("  Mean: {:.2}{}\n\n", self.mean_abs, CELSIUS));

        summary.push_str("Calendar months (mean):\n");
        summary.push_str(&format!(
            "  Coldest: {} ({:.2}{})\n",
            self.coldest_month.month_name, self.coldest_month.mean_abs, CELSIUS
        ));
        summary.push_str(&format!(
            "  Warmest: {} ({:.2}{})",
            self.warmest_month.month_name, self.warmest_month.mean_abs, CELSIUS
        ));

        summary
    }
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &Dataset) -> Result<DatasetSummary> {
        let first = dataset.samples.first().ok_or(HeatmapError::EmptyDataset)?;
        let year_range = dataset.year_extent().ok_or(HeatmapError::EmptyDataset)?;

        let mut coldest = first;
        let mut warmest = first;
        let mut abs_sum = 0.0f64;
        let mut month_sums = [0.0f64; 12];
        let mut month_counts = [0usize; 12];

        for sample in &dataset.samples {
            // Strict comparisons keep the earliest sample on ties
            if sample.abs < coldest.abs {
                coldest = sample;
            }
            if sample.abs > warmest.abs {
                warmest = sample;
            }
            abs_sum += sample.abs;
            month_sums[sample.month_index()] += sample.abs;
            month_counts[sample.month_index()] += 1;
        }

        let monthly_means: Vec<MonthlyMean> = (0..12)
            .filter(|&i| month_counts[i] > 0)
            .map(|i| MonthlyMean {
                month_name: MONTHS[i],
                mean_abs: month_sums[i] / month_counts[i] as f64,
            })
            .collect();

        let coldest_month = monthly_means
            .iter()
            .min_by(|a, b| a.mean_abs.total_cmp(&b.mean_abs))
            .cloned()
            .ok_or(HeatmapError::EmptyDataset)?;
        let warmest_month = monthly_means
            .iter()
            .max_by(|a, b| a.mean_abs.total_cmp(&b.mean_abs))
            .cloned()
            .ok_or(HeatmapError::EmptyDataset)?;

        Ok(DatasetSummary {
            total_samples: dataset.len(),
            year_range,
            base_temperature: dataset.base_temperature,
            coldest: Extreme::from_sample(coldest),
            warmest: Extreme::from_sample(warmest),
            mean_abs: abs_sum / dataset.len() as f64,
            coldest_month,
            warmest_month,
        })
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
