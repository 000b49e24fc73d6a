use serde::Serialize;

use crate::scales::ThresholdScale;
use crate::settings::{ChartConfig, LegendLabels};
use crate::utils::constants::{LEGEND_LABEL_OFFSET, LEGEND_TOP_PADDING};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Left edge of the swatch
    pub x: f64,
    pub boundary: f64,
    pub color: String,
    pub label: String,
}

/// Horizontal strip with one swatch per fill boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendView {
    pub swatch_y: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
    pub label_y: f64,
    pub entries: Vec<LegendEntry>,
}

impl LegendView {
    pub fn build(fill: &ThresholdScale<String>, config: &ChartConfig) -> Self {
        let swatch_width = config.legend.swatch_width;
        let swatch_y = config.height + LEGEND_TOP_PADDING;

        let entries = fill
            .boundaries()
            .iter()
            .enumerate()
            .map(|(i, &boundary)| LegendEntry {
                x: config.margin.left + i as f64 * swatch_width,
                boundary,
                color: fill.apply(boundary).clone(),
                label: format_legend_label(boundary, config.legend.labels),
            })
            .collect();

        Self {
            swatch_y,
            swatch_width,
            swatch_height: config.legend.swatch_height,
            label_y: swatch_y + config.legend.swatch_height + LEGEND_LABEL_OFFSET,
            entries,
        }
    }
}

/// Text printed under a legend swatch.
///
/// `Compat` prints the shortest decimal form and appends ".0" only when that
/// form is a single character, so `5` becomes `5.0` while `10` stays `10`.
pub fn format_legend_label(boundary: f64, style: LegendLabels) -> String {
    match style {
        LegendLabels::Compat => {
            let text = format!("{}", boundary);
            if text.chars().count() < 2 {
                format!("{}.0", text)
            } else {
                text
            }
        }
        LegendLabels::Fixed { precision } => format!("{:.*}", precision, boundary),
    }
}
