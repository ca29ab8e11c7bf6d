//! gem-inspect - print a summary of a `.gem` design and optionally export STL.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gem_format::{DecodeOptions, GemDecoder};
use gem_preview::{stl, DesignReport, PreviewSettings, SceneInput};

#[derive(Parser, Debug)]
#[command(name = "gem-inspect")]
#[command(about = "Inspect gem faceting designs", long_about = None)]
struct Cli {
    /// Design file (.gem)
    input: PathBuf,

    /// Replicate facets by the design's recorded symmetry
    #[arg(long)]
    expand_symmetry: bool,

    /// Write the triangulated design to this STL file
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Write ASCII STL instead of binary
    #[arg(long, requires = "stl")]
    ascii: bool,

    /// Print the decoded model as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Preview settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log decoder diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .without_time()
        .compact()
        .init();

    let options = if cli.expand_symmetry {
        DecodeOptions::expand_symmetry()
    } else {
        DecodeOptions::as_stored()
    };
    let model = GemDecoder::new(options)
        .load_file(&cli.input)
        .with_context(|| format!("failed to decode {}", cli.input.display()))?;

    let settings = match &cli.settings {
        Some(path) => PreviewSettings::load(path).context("failed to load preview settings")?,
        None => PreviewSettings::default(),
    };
    let scene = SceneInput::new(&model, settings);
    info!(
        opacity = scene.settings.opacity,
        reflectivity = scene.settings.reflectivity,
        "preview settings"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", DesignReport::from_model(&model));
    }

    if let Some(out) = &cli.stl {
        let fallback = cli
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("design");
        let name = scene.display_title(fallback);
        let bytes = if cli.ascii {
            stl::export_ascii_stl(&scene.mesh, name)?.into_bytes()
        } else {
            stl::export_binary_stl(&scene.mesh, name)?
        };
        std::fs::write(out, bytes).with_context(|| format!("failed to write {}", out.display()))?;
        info!(
            path = %out.display(),
            triangles = scene.mesh.triangle_count(),
            "wrote STL"
        );
    }

    Ok(())
}
