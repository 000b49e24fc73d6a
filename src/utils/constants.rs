/// Dataset location
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Calendar month names, indexed by `month - 1`
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canvas dimensions
pub const DEFAULT_WIDTH: f64 = 1500.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;
pub const DEFAULT_MARGIN_TOP: f64 = 16.0;
pub const DEFAULT_MARGIN_RIGHT: f64 = 20.0;
pub const DEFAULT_MARGIN_BOTTOM: f64 = 28.0;
pub const DEFAULT_MARGIN_LEFT: f64 = 80.0;

/// Cell size
pub const DEFAULT_CELL_WIDTH: f64 = 6.0;
pub const DEFAULT_CELL_HEIGHT: f64 = 38.0;

/// Axis layout
pub const DEFAULT_X_TICK_COUNT: usize = 10;
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;

/// Legend layout
pub const DEFAULT_LEGEND_HEIGHT: f64 = 60.0;
pub const DEFAULT_SWATCH_WIDTH: f64 = 36.0;
pub const DEFAULT_SWATCH_HEIGHT: f64 = 18.0;
pub const LEGEND_TOP_PADDING: f64 = 8.0;
pub const LEGEND_LABEL_OFFSET: f64 = 14.0;

/// Climate thresholds in °C, ascending
pub const CLIMATE_THRESHOLDS: [f64; 10] = [2.8, 3.9, 5.0, 6.1, 7.2, 8.3, 9.5, 10.6, 11.7, 12.8];

/// Diverging palette, coldest first; one more entry than `CLIMATE_THRESHOLDS`
pub const CLIMATE_COLORS: [&str; 11] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61",
    "#f46d43", "#d73027", "#a50026",
];

/// Tooltip behaviour
pub const TOOLTIP_VISIBLE_OPACITY: f64 = 0.95;
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -100.0;
pub const OUTLINE_COLOR: &str = "black";
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Chart text
pub const CHART_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Unit suffix used in tooltip and summary text
pub const CELSIUS: &str = "℃";

/// Config environment prefix
pub const ENV_PREFIX: &str = "HEATMAP";
