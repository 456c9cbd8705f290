//! Tinta CLI
//!
//! Resolves a palette from `tinta.toml` and/or a hue query and writes the
//! design token tree as JSON or CSS custom properties.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tinta_theme::ToneName;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, SchemeSelection, TintaConfig, CONFIG_FILE};

/// Design token generator for semantic color palettes
#[derive(Parser)]
#[command(name = "tinta", about, version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the token tree and write it out
    Build {
        /// Config file or directory containing tinta.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Hue query, e.g. "primary=d946ef;lightest:fdf4ff&caution=f59e09;300"
        #[arg(short, long)]
        query: Option<String>,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Color schemes to emit (overrides config)
        #[arg(short, long, value_enum)]
        scheme: Option<SchemeSelection>,
        /// Output file (default: config output.path, then stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the tint ladder of one tone
    Scale {
        /// Tone name (default, transparent, primary, positive, caution, critical)
        tone: String,
        /// Config file or directory containing tinta.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Hue query applied on top of the config
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Write a starter tinta.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Overwrite an existing tinta.toml
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            config,
            query,
            format,
            scheme,
            out,
        } => cmd_build(config.as_deref(), query.as_deref(), format, scheme, out),
        Command::Scale { tone, config, query } => {
            cmd_scale(&tone, config.as_deref(), query.as_deref())
        }
        Command::Init { path, force } => cmd_init(&path, force),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<TintaConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    TintaConfig::load(path, &cwd)
}

fn cmd_build(
    config_path: Option<&Path>,
    query: Option<&str>,
    format: Option<OutputFormat>,
    scheme: Option<SchemeSelection>,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let palette = render::resolve_palette(&config, query)?;

    let format = format.unwrap_or(config.output.format);
    let scheme = scheme.unwrap_or(config.output.scheme);
    let output = render::build(&palette, format, scheme)?;

    match out.or(config.output.path) {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {:?} tokens to {}", format, path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn cmd_scale(tone: &str, config_path: Option<&Path>, query: Option<&str>) -> Result<()> {
    let tone: ToneName = tone.parse()?;
    let config = load_config(config_path)?;
    let palette = render::resolve_palette(&config, query)?;

    print!("{}", render::render_scale(&palette, tone));
    Ok(())
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, TintaConfig::starter().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Created {}", path.display());
    Ok(())
}
