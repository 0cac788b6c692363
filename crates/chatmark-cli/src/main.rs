use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{ChartSpec, Directive, Engine, find_directives, prepare_inline_text};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Inspect the blocks, inline spans and charts of a chat answer")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Vocabulary file (defaults to ~/.config/chatmark/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Split the answer into content blocks
    Blocks {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Resolve inline spans of the whole input as one fragment
    Spans {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Normalize a chart payload
    Chart {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// List `[name:{...}]` directive tags, normalizing chart payloads
    Directives {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct DirectiveReport<'a> {
    #[serde(flatten)]
    directive: Directive<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<ChartSpec>,
    /// Why a `chart` payload could not be normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> DirectiveReport<'a> {
    fn new(directive: Directive<'a>, engine: &Engine) -> Self {
        let (chart, error) = if directive.name == "chart" {
            match engine.charts.try_normalize(directive.payload) {
                Ok(spec) => (Some(spec), None),
                Err(err) => (None, Some(format!("Chart configuration error: {err}"))),
            }
        } else {
            (None, None)
        };
        Self {
            directive,
            chart,
            error,
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        return io::read_to_string(io::stdin()).context("Failed to read stdin");
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        log::info!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };
    let path = Config::expand_path(path);
    match Config::load_from_path(&path)? {
        Some(config) => Ok(config),
        None => bail!("Config file not found: {}", path.display()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let engine = Engine::new(&config.rules).context("Invalid vocabulary in config")?;

    match cli.command {
        Command::Blocks { input } => {
            let text = read_input(&input)?;
            print_json(&engine.blocks.parse(&text))
        }
        Command::Spans { input } => {
            let text = read_input(&input)?;
            let prepared = prepare_inline_text(&text);
            print_json(&engine.inline.segments(&prepared))
        }
        Command::Chart { input } => {
            let text = read_input(&input)?;
            let spec = engine
                .charts
                .try_normalize(text.as_str())
                .context("Chart configuration error")?;
            print_json(&spec)
        }
        Command::Directives { input } => {
            let text = read_input(&input)?;
            let reports: Vec<DirectiveReport> = find_directives(&text)
                .into_iter()
                .map(|directive| DirectiveReport::new(directive, &engine))
                .collect();
            print_json(&reports)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    run(cli)
}
