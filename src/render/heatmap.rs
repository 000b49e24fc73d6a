use serde::Serialize;
use tracing::info;

use crate::error::{HeatmapError, Result};
use crate::interaction::{TooltipContent, TooltipView};
use crate::models::{Dataset, Sample};
use crate::render::legend::LegendView;
use crate::scales::{Axis, Scales};
use crate::settings::ChartConfig;
use crate::utils::constants::{CELSIUS, CHART_TITLE};

/// One rectangle of the heat map with its resolved geometry and color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Month exactly as it arrived in the dataset (1-based)
    pub month: u32,
    pub year: i32,
    pub temp: f64,
    pub tooltip: TooltipContent,
}

/// Rendering directives for the whole chart, independent of the output format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub description: String,
    pub cells: Vec<CellView>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: LegendView,
    pub tooltip: TooltipView,
}

pub struct HeatmapRenderer<'a> {
    config: &'a ChartConfig,
}

impl<'a> HeatmapRenderer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, dataset: &Dataset) -> Result<ChartModel> {
        let scales = Scales::build(dataset, self.config)?;

        let cells = dataset
            .samples
            .iter()
            .map(|sample| self.cell(sample, &scales))
            .collect::<Result<Vec<_>>>()?;

        let (min_year, max_year) = dataset.year_extent().ok_or(HeatmapError::EmptyDataset)?;
        let description = format!(
            "{} - {}: base temperature {}{}",
            min_year, max_year, dataset.base_temperature, CELSIUS
        );

        let model = ChartModel {
            width: self.config.width,
            height: self.config.canvas_height(),
            title: CHART_TITLE.to_string(),
            description,
            x_axis: scales.x_axis(self.config),
            y_axis: scales.y_axis(self.config),
            legend: LegendView::build(&scales.fill, self.config),
            tooltip: TooltipView::hidden(),
            cells,
        };

        info!(
            "Rendered {} cells, {} legend swatches",
            model.cells.len(),
            model.legend.entries.len()
        );
        Ok(model)
    }

    fn cell(&self, sample: &Sample, scales: &Scales) -> Result<CellView> {
        let y = scales
            .y
            .apply(sample.month_name)
            .ok_or(HeatmapError::InvalidMonth {
                year: sample.year,
                month: sample.month,
            })?;

        Ok(CellView {
            x: scales.x.apply(sample.year as f64),
            y,
            width: self.config.cell.width,
            height: self.config.cell.height,
            fill: scales.fill.apply(sample.abs).clone(),
            month: sample.month,
            year: sample.year,
            temp: sample.abs,
            tooltip: TooltipContent::for_sample(sample),
        })
    }
}

impl ChartModel {
    /// Pair every cell with the sample it was drawn from
    pub fn cell_for<'d>(
        &self,
        dataset: &'d Dataset,
        index: usize,
    ) -> Option<(&CellView, &'d Sample)> {
        self.cells.get(index).zip(dataset.samples.get(index))
    }
}
