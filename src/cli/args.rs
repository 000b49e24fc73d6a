use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::readers::DataSource;
use crate::settings::{FillDomain, SourceConfig};
use crate::writers::OutputFormat;

#[derive(Parser)]
#[command(name = "temperature-heatmap")]
#[command(about = "Render global monthly land-surface temperatures as a heat map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress and summary output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Chart configuration file (TOML, YAML or JSON)"
    )]
    pub config: Option<PathBuf>,
}

/// Where to read the dataset from; defaults to the configured URL
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long, conflicts_with = "input", help = "Dataset URL [default: from configuration]")]
    pub url: Option<String>,

    #[arg(short, long, help = "Local dataset JSON file")]
    pub input: Option<PathBuf>,
}

impl SourceArgs {
    pub fn resolve(&self, config: &SourceConfig) -> DataSource {
        match (&self.input, &self.url) {
            (Some(path), _) => DataSource::File(path.clone()),
            (None, Some(url)) => DataSource::Url(url.clone()),
            (None, None) => DataSource::Url(config.url.clone()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the heat map to SVG, HTML or JSON
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/heatmap-{YYMMDD}.{format}]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        #[arg(long, value_enum, help = "Fill scale boundaries [default: from configuration]")]
        fill_domain: Option<FillDomain>,

        #[arg(long, help = "Print legend labels with a fixed number of decimals")]
        legend_precision: Option<usize>,
    },

    /// Display summary statistics for the dataset
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the tooltip a pointer over one cell would produce
    Hover {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        year: i32,

        #[arg(long, help = "Month, 1-12")]
        month: u32,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        page_x: f64,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        page_y: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "temperature-heatmap",
            "render",
            "--input",
            "data.json",
            "--format",
            "html",
            "--fill-domain",
            "data",
            "--legend-precision",
            "1",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                source,
                format,
                fill_domain,
                legend_precision,
                output,
            } => {
                assert_eq!(
                    source.resolve(&SourceConfig::default()),
                    DataSource::File(PathBuf::from("data.json"))
                );
                assert_eq!(format, OutputFormat::Html);
                assert_eq!(fill_domain, Some(FillDomain::Data));
                assert_eq!(legend_precision, Some(1));
                assert!(output.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_source_defaults_to_configured_url() {
        let cli = Cli::try_parse_from(["temperature-heatmap", "info"]).unwrap();
        match cli.command {
            Commands::Info { source } => {
                let config = SourceConfig::default();
                assert_eq!(source.resolve(&config), DataSource::Url(config.url.clone()));
            }
            _ => panic!("expected info"),
        }
    }

    #[test]
    fn test_url_and_input_conflict() {
        let result = Cli::try_parse_from([
            "temperature-heatmap",
            "info",
            "--url",
            "https://example.org/data.json",
            "--input",
            "data.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_hover() {
        let cli = Cli::try_parse_from([
            "temperature-heatmap",
            "-q",
            "hover",
            "--year",
            "1753",
            "--month",
            "1",
            "--page-y",
            "-20",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Commands::Hover {
                year,
                month,
                page_x,
                page_y,
                ..
            } => {
                assert_eq!((year, month), (1753, 1));
                assert_eq!(page_x, 0.0);
                assert_eq!(page_y, -20.0);
            }
            _ => panic!("expected hover"),
        }
    }
}
