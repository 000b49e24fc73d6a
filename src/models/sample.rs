use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};
use crate::utils::constants::MONTHS;

/// One entry of `monthlyVariance` as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

/// A raw sample with its derived absolute temperature and month name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
    pub abs: f64,
    pub month_name: &'static str,
}

/// Look up the calendar name for a 1-based month
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize))
        .copied()
}

impl Sample {
    pub fn from_raw(raw: RawSample, base_temperature: f64) -> Result<Self> {
        let month_name = month_name(raw.month).ok_or(HeatmapError::InvalidMonth {
            year: raw.year,
            month: raw.month,
        })?;

        Ok(Self {
            year: raw.year,
            month: raw.month,
            variance: raw.variance,
            abs: base_temperature + raw.variance,
            month_name,
        })
    }

    /// Zero-based month position, matching the order of `MONTHS`
    pub fn month_index(&self) -> usize {
        (self.month - 1) as usize
    }
}
