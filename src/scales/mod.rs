pub mod axis;
pub mod band;
pub mod linear;
pub mod threshold;

pub use axis::{Axis, AxisOrientation, Tick};
pub use band::BandScale;
pub use linear::LinearScale;
pub use threshold::ThresholdScale;

use tracing::debug;

use crate::error::{HeatmapError, Result};
use crate::models::Dataset;
use crate::settings::{ChartConfig, FillDomain};
use crate::utils::constants::MONTHS;

/// The scales derived once from an enriched dataset
#[derive(Debug, Clone)]
pub struct Scales {
    pub x: LinearScale,
    pub y: BandScale,
    pub fill: ThresholdScale<String>,
}

impl Scales {
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Result<Self> {
        let (min_year, max_year) = dataset.year_extent().ok_or(HeatmapError::EmptyDataset)?;

        let x = LinearScale::new((min_year as f64, max_year as f64), config.x_range());
        let y = BandScale::new(MONTHS, config.y_range());

        let fill = match config.fill.domain {
            FillDomain::Climate => {
                ThresholdScale::new(config.fill.thresholds.clone(), config.fill.colors.clone())?
            }
            FillDomain::Data => {
                let (min, max) = dataset.abs_extent().ok_or(HeatmapError::EmptyDataset)?;
                ThresholdScale::evenly_spaced(min, max, config.fill.colors.clone())?
            }
        };

        debug!(
            "Built scales: years {}..={}, {} fill boundaries ({:?} domain)",
            min_year,
            max_year,
            fill.boundaries().len(),
            config.fill.domain
        );

        Ok(Self { x, y, fill })
    }

    pub fn x_axis(&self, config: &ChartConfig) -> Axis {
        Axis::bottom(
            &self.x,
            config.x_tick_count,
            (0.0, config.height - config.margin.bottom),
        )
    }

    pub fn y_axis(&self, config: &ChartConfig) -> Axis {
        Axis::left(&self.y, (config.margin.left, 0.0))
    }
}
