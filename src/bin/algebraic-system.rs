use algebraic_system::{
    algebra::{Element, Encoding},
    analyze,
    utils::{load_json, parse_input},
    AnalysisConfig, JsonReporter, OutputFormat, Reporter, TextReporter,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "algebraic-system")]
#[command(author, version, about = "Check the properties of a finite algebraic system")]
struct Cli {
    /// File holding n, the n elements and the n*n table (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON analysis configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How table values are mapped back to positions
    #[arg(long, value_enum)]
    encoding: Option<EncodingArg>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Skip the per-element inverse listing
    #[arg(long)]
    no_inverses: bool,

    /// Treat elements as arbitrary symbols instead of integers (implies lookup encoding)
    #[arg(long)]
    symbols: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EncodingArg {
    /// Values are 0-based positions
    Positional,
    /// Values are looked up in the set
    Lookup,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Positional => Encoding::Positional,
            EncodingArg::Lookup => Encoding::Lookup,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Human-readable sections
    Text,
    /// A single JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let base = match &cli.config {
        Some(path) => load_json::<AnalysisConfig>(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None if cli.symbols => AnalysisConfig::lookup(),
        None => AnalysisConfig::default(),
    };
    let config = merge_config(&cli, base);
    config.validate()?;

    let text = read_input(cli.input.as_ref())?;
    let stdout = io::stdout().lock();

    if cli.symbols {
        run::<String, _>(&text, &config, stdout)
    } else {
        run::<i64, _>(&text, &config, stdout)
    }
}

/// Command-line flags take precedence over the loaded configuration
fn merge_config(cli: &Cli, mut config: AnalysisConfig) -> AnalysisConfig {
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding.into();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if cli.no_inverses {
        config.show_inverses = false;
    }
    if cli.symbols {
        config.encoding = Encoding::Lookup;
    }
    config
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn run<T, W>(text: &str, config: &AnalysisConfig, out: W) -> Result<()>
where
    T: Element + FromStr + Serialize,
    W: Write + 'static,
{
    let table = parse_input::<T>(text)
        .context("malformed input")?
        .with_encoding(config.encoding);
    config.check_order(table.order())?;
    tracing::debug!(?table, "parsed input");

    let analysis = analyze(&table).context("analysis failed")?;

    let mut reporter: Box<dyn Reporter<T>> = match config.format {
        OutputFormat::Text => {
            Box::new(TextReporter::new(out).with_inverses(config.show_inverses))
        }
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    };
    reporter.report(&analysis)?;

    Ok(())
}
