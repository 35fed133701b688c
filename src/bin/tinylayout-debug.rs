// src/bin/tinylayout-debug.rs
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use tinylayout::{load_document, render_json, render_tree, ReportOptions};
use tinylayout::tinylayout_core::MonospaceMeasurer;
use tinylayout::tinylayout_layout::{AlignmentRule, BoxLayoutEngine, LayoutEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

#[derive(Parser)]
#[command(name = "tinylayout-debug")]
#[command(about = "Lay out a JSON element tree and print the computed boxes")]
struct Args {
    /// Path to the JSON document to lay out
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Advance of every character for the monospace measurer
    #[arg(long, default_value_t = 8)]
    char_width: i16,

    /// Height of one line of text
    #[arg(long, default_value_t = 16)]
    line_height: i16,

    /// Use the historical align-self / align-items rule
    #[arg(long)]
    legacy_alignment: bool,

    /// List wrapped lines under each text element
    #[arg(long)]
    show_lines: bool,

    /// Show color values in hex format
    #[arg(long)]
    show_colors: bool,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable per-node layout tracing
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")?;

    let mut document = load_document(&args.file)?;
    info!(
        "Loaded {} ({} elements)",
        args.file.display(),
        document.root.node_count()
    );

    if let Err(e) = document.root.validate() {
        warn!("Document failed validation, laying out anyway: {}", e);
    }

    let mut config = document.config;
    if args.legacy_alignment {
        config.alignment = AlignmentRule::Legacy;
    }
    if args.debug {
        config.debug = true;
    }

    let measurer = MonospaceMeasurer::new(args.char_width, args.line_height);
    let mut engine = BoxLayoutEngine::with_config(config);
    engine.compute_layout(&mut document.root, &measurer);

    let output_text = match args.format {
        OutputFormat::Tree => render_tree(
            &document.root,
            &ReportOptions {
                show_lines: args.show_lines,
                show_colors: args.show_colors,
            },
        ),
        OutputFormat::Json => render_json(&document.root)?,
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file.display()))?;
        info!("Output written to: {}", output_file.display());
    } else {
        print!("{}", output_text);
    }

    Ok(())
}
