pub mod heatmap;
pub mod legend;

pub use heatmap::{CellView, ChartModel, HeatmapRenderer};
pub use legend::{format_legend_label, LegendEntry, LegendView};
