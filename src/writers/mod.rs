pub mod html_writer;
pub mod svg_writer;

pub use html_writer::HtmlWriter;
pub use svg_writer::SvgWriter;

use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::render::ChartModel;
use crate::settings::TooltipConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Svg,
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Serialize a chart model in the requested format
pub fn render_to_string(
    model: &ChartModel,
    format: OutputFormat,
    tooltip: &TooltipConfig,
) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(SvgWriter::new().to_document(model)),
        OutputFormat::Html => HtmlWriter::new(tooltip).to_document(model),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(model)?),
    }
}

/// Write a chart model to `path`, creating parent directories as needed
pub fn write_chart(
    model: &ChartModel,
    format: OutputFormat,
    tooltip: &TooltipConfig,
    path: &Path,
) -> Result<usize> {
    let contents = render_to_string(model, format, tooltip)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, &contents)?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len())
}
