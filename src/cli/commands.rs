use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info, Level};

use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{HeatmapError, Result};
use crate::interaction::{InteractionHandler, Outline, PointerEvent, TooltipView};
use crate::models::Dataset;
use crate::processors::Enricher;
use crate::readers::{DataSource, DatasetLoader};
use crate::render::HeatmapRenderer;
use crate::settings::{ChartConfig, LegendLabels};
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::write_chart;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let result = execute(cli).await;
    if let Err(ref e) = result {
        error!("{}", e);
    }
    result
}

async fn execute(cli: Cli) -> Result<()> {
    let config = ChartConfig::load(cli.config.as_deref())?;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Render {
            source,
            output,
            format,
            fill_domain,
            legend_precision,
        } => {
            let mut config = config;
            if let Some(domain) = fill_domain {
                config = config.with_fill_domain(domain);
            }
            if let Some(precision) = legend_precision {
                config = config.with_legend_labels(LegendLabels::Fixed { precision });
            }
            config.check()?;

            let source = source.resolve(&config.source);
            let dataset = load_dataset(&source, &config, quiet).await?;

            let model = HeatmapRenderer::new(&config).render(&dataset)?;

            let output_file =
                output.unwrap_or_else(|| generate_default_output_filename(format.extension()));
            let bytes = write_chart(&model, format, &config.tooltip, &output_file)?;

            if !quiet {
                println!(
                    "Rendered {} cells ({} bytes) to {}",
                    model.cells.len(),
                    bytes,
                    output_file.display()
                );
            }
        }

        Commands::Info { source } => {
            let source = source.resolve(&config.source);
            let dataset = load_dataset(&source, &config, quiet).await?;

            let summary = DatasetAnalyzer::new().analyze(&dataset)?;
            println!("\n{}", summary.detailed_summary());
        }

        Commands::Hover {
            source,
            year,
            month,
            page_x,
            page_y,
        } => {
            let source = source.resolve(&config.source);
            let dataset = load_dataset(&source, &config, quiet).await?;

            let report = hover(&dataset, &config, year, month, PointerEvent::new(page_x, page_y))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HoverReport {
    pub cell: usize,
    pub tooltip: TooltipView,
    pub outline: Option<Outline>,
}

/// Replay a pointer-enter on the cell for `year`/`month`
pub fn hover(
    dataset: &Dataset,
    config: &ChartConfig,
    year: i32,
    month: u32,
    event: PointerEvent,
) -> Result<HoverReport> {
    let cell = dataset
        .samples
        .iter()
        .position(|s| s.year == year && s.month == month)
        .ok_or(HeatmapError::SampleNotFound { year, month })?;

    let mut handler = InteractionHandler::new(&config.tooltip);
    let tooltip = handler
        .pointer_enter(cell, &dataset.samples[cell], event)
        .clone();

    Ok(HoverReport {
        cell,
        tooltip,
        outline: handler.outline(cell),
    })
}

async fn load_dataset(source: &DataSource, config: &ChartConfig, quiet: bool) -> Result<Dataset> {
    let progress = ProgressReporter::new_spinner("Loading dataset...", quiet);
    let loader = DatasetLoader::new(&config.source)?;

    let raw = match loader.load(source, Some(&progress)).await {
        Ok(raw) => raw,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    let dataset = Enricher::new().enrich(raw)?;
    progress.finish_with_message(&format!("Loaded {} samples", dataset.len()));
    info!("Dataset ready: {} samples", dataset.len());

    Ok(dataset)
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let initialised = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    initialised
        .map_err(|e| HeatmapError::Config(format!("Failed to initialise logging: {}", e)))
}
