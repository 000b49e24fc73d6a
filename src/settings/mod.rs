pub mod chart_config;

pub use chart_config::{
    CellSize, ChartConfig, FillConfig, FillDomain, LegendConfig, LegendLabels, Margin,
    SourceConfig, TooltipConfig,
};
