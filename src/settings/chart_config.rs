use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::{HeatmapError, Result};
use crate::scales::ThresholdScale;
use crate::utils::constants::*;

/// Where the fill scale takes its boundaries from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillDomain {
    /// Fixed climate thresholds from the configuration
    Climate,
    /// Boundaries spaced evenly between the dataset's coldest and warmest sample
    Data,
}

/// How legend boundary labels are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum LegendLabels {
    /// Shortest rendering, padded with ".0" when it is under two characters
    Compat,
    /// Fixed number of decimals
    Fixed { precision: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Margin {
    #[validate(range(min = 0.0))]
    pub top: f64,
    #[validate(range(min = 0.0))]
    pub right: f64,
    #[validate(range(min = 0.0))]
    pub bottom: f64,
    #[validate(range(min = 0.0))]
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: DEFAULT_MARGIN_TOP,
            right: DEFAULT_MARGIN_RIGHT,
            bottom: DEFAULT_MARGIN_BOTTOM,
            left: DEFAULT_MARGIN_LEFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CellSize {
    #[validate(range(min = 0.1))]
    pub width: f64,
    #[validate(range(min = 0.1))]
    pub height: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub domain: FillDomain,
    pub thresholds: Vec<f64>,
    pub colors: Vec<String>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            domain: FillDomain::Climate,
            thresholds: CLIMATE_THRESHOLDS.to_vec(),
            colors: CLIMATE_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LegendConfig {
    /// Height of the strip added below the plot
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 1.0))]
    pub swatch_width: f64,
    #[validate(range(min = 1.0))]
    pub swatch_height: f64,
    pub labels: LegendLabels,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_LEGEND_HEIGHT,
            swatch_width: DEFAULT_SWATCH_WIDTH,
            swatch_height: DEFAULT_SWATCH_HEIGHT,
            labels: LegendLabels::Compat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TooltipConfig {
    #[validate(range(min = 0.0, max = 1.0))]
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub outline_color: String,
    #[validate(range(min = 0.0))]
    pub outline_width: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            opacity: TOOLTIP_VISIBLE_OPACITY,
            offset_x: TOOLTIP_OFFSET_X,
            offset_y: TOOLTIP_OFFSET_Y,
            outline_color: OUTLINE_COLOR.to_string(),
            outline_width: OUTLINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SourceConfig {
    #[validate(length(min = 1))]
    pub url: String,
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Immutable chart configuration handed to every pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartConfig {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
    #[validate(nested)]
    pub margin: Margin,
    #[validate(nested)]
    pub cell: CellSize,
    #[validate(range(min = 1))]
    pub x_tick_count: usize,
    pub fill: FillConfig,
    #[validate(nested)]
    pub legend: LegendConfig,
    #[validate(nested)]
    pub tooltip: TooltipConfig,
    #[validate(nested)]
    pub source: SourceConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: Margin::default(),
            cell: CellSize::default(),
            x_tick_count: DEFAULT_X_TICK_COUNT,
            fill: FillConfig::default(),
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Layer defaults, an optional config file, then `HEATMAP_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Loading chart configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: ChartConfig = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Field ranges plus the structural rules the derive cannot express
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        let (x0, x1) = self.x_range();
        if x1 <= x0 {
            return Err(HeatmapError::Config(format!(
                "Horizontal margins ({} + {}) leave no plot area in width {}",
                self.margin.left, self.margin.right, self.width
            )));
        }

        let (y0, y1) = self.y_range();
        if y1 <= y0 {
            return Err(HeatmapError::Config(format!(
                "Vertical margins ({} + {}) leave no plot area in height {}",
                self.margin.top, self.margin.bottom, self.height
            )));
        }

        ThresholdScale::new(self.fill.thresholds.clone(), self.fill.colors.clone())?;

        Ok(())
    }

    /// Horizontal pixel span of the plot area
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical pixel span of the plot area
    pub fn y_range(&self) -> (f64, f64) {
        (self.margin.top, self.height - self.margin.bottom)
    }

    /// Full canvas height including the legend strip
    pub fn canvas_height(&self) -> f64 {
        self.height + self.legend.height
    }

    pub fn with_fill_domain(mut self, domain: FillDomain) -> Self {
        self.fill.domain = domain;
        self
    }

    pub fn with_legend_labels(mut self, labels: LegendLabels) -> Self {
        self.legend.labels = labels;
        self
    }
}
