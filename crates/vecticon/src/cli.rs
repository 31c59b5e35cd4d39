//! The `vecticon` command-line tool.
//!
//! Commands write to any [`Write`] so they can be driven from tests.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use vecticon_graphics::{to_path_data, validate, Brush, ValidationReport, VectorIcon};
use vecticon_pack::{export_vector_icons, IconHandle, IconRegistry, PackConfig};

#[derive(Debug, Parser)]
#[command(name = "vecticon")]
#[command(version)]
#[command(about = "List, inspect, check and export vector icons")]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every icon with its size and path count
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print an icon's properties and path data
    Show {
        /// Icon name
        name: String,
    },
    /// Check every icon for structural problems
    Lint {
        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,
    },
    /// Write icons as SVG files
    Export {
        /// Output directory (defaults to export.output_dir from the config)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Icons to export (defaults to all)
        names: Vec<String>,
    },
}

/// Loaded configuration plus the registry built from it.
pub struct Session {
    pub config: PackConfig,
    pub registry: IconRegistry,
}

impl Session {
    /// Load the configuration file, if any, and the manifests it lists.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => PackConfig::load(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => PackConfig::default(),
        };
        let registry = IconRegistry::from_config(&config.registry, config.lint.to_options())
            .context("failed to load icon manifests")?;
        Ok(Self { config, registry })
    }

    fn handles(&self) -> Vec<IconHandle> {
        self.registry
            .names()
            .iter()
            .filter_map(|name| self.registry.get(name))
            .collect()
    }
}

/// Whether a command succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Run a parsed command.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome> {
    let ctx = Session::load(cli.config.as_ref())?;
    match &cli.command {
        Command::List { json } => list(&ctx, *json, out),
        Command::Show { name } => show(&ctx, name, out),
        Command::Lint { strict } => lint(&ctx, *strict, out),
        Command::Export { out: dir, names } => export(&ctx, dir.as_ref(), names, out),
    }
}

#[derive(Debug, Serialize)]
struct IconSummary<'a> {
    name: &'a str,
    width: f32,
    height: f32,
    viewport_width: f32,
    viewport_height: f32,
    paths: usize,
    builtin: bool,
}

impl<'a> IconSummary<'a> {
    fn new(handle: &'a IconHandle) -> Self {
        Self {
            name: handle.name(),
            width: handle.width(),
            height: handle.height(),
            viewport_width: handle.viewport_width(),
            viewport_height: handle.viewport_height(),
            paths: handle.path_count(),
            builtin: handle.is_builtin(),
        }
    }
}

fn list(ctx: &Session, json: bool, out: &mut impl Write) -> Result<Outcome> {
    let handles = ctx.handles();
    let summaries: Vec<IconSummary<'_>> = handles.iter().map(IconSummary::new).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(Outcome::Success);
    }

    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(4).max(4);
    writeln!(out, "{:<width$}  {:>9}  {:>9}  {:>5}", "NAME", "SIZE", "VIEWPORT", "PATHS")?;
    for s in &summaries {
        writeln!(
            out,
            "{:<width$}  {:>9}  {:>9}  {:>5}{}",
            s.name,
            format!("{}x{}", s.width, s.height),
            format!("{}x{}", s.viewport_width, s.viewport_height),
            s.paths,
            if s.builtin { "" } else { "  (manifest)" },
        )?;
    }
    Ok(Outcome::Success)
}

fn show(ctx: &Session, name: &str, out: &mut impl Write) -> Result<Outcome> {
    let handle = ctx.registry.require(name)?;
    let icon: &VectorIcon = &handle;

    writeln!(out, "name:         {}", icon.name())?;
    writeln!(out, "size:         {}x{}", icon.width(), icon.height())?;
    writeln!(out, "viewport:     {}x{}", icon.viewport_width(), icon.viewport_height())?;
    writeln!(out, "auto mirror:  {}", icon.auto_mirror())?;
    if let Some(tint) = icon.tint_color() {
        writeln!(out, "tint:         {tint}")?;
    }
    if let Some(bounds) = icon.bounds() {
        writeln!(
            out,
            "bounds:       ({}, {})-({}, {})",
            bounds.left(),
            bounds.top(),
            bounds.right(),
            bounds.bottom()
        )?;
    }
    writeln!(out, "source:       {}", if handle.is_builtin() { "built-in" } else { "manifest" })?;

    for (i, path) in icon.paths().enumerate() {
        writeln!(out)?;
        match path.name() {
            Some(name) => writeln!(out, "path {i} ({name})")?,
            None => writeln!(out, "path {i}")?,
        }
        if let Some(fill) = path.fill() {
            writeln!(out, "  fill:       {}", describe_brush(fill))?;
            writeln!(out, "  fill rule:  {}", path.fill_rule().as_svg())?;
        }
        if let Some(stroke) = path.stroke() {
            writeln!(
                out,
                "  stroke:     {} width {} cap {} join {}",
                describe_brush(&stroke.brush),
                stroke.width,
                stroke.cap.as_svg(),
                stroke.join.as_svg()
            )?;
        }
        writeln!(out, "  data:       {}", to_path_data(path.nodes()))?;
    }
    Ok(Outcome::Success)
}

fn describe_brush(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => color.to_string(),
        Brush::LinearGradient(g) => format!("linear gradient, {} stops", g.stops.len()),
        Brush::RadialGradient(g) => format!("radial gradient, {} stops", g.stops.len()),
    }
}

fn lint(ctx: &Session, strict: bool, out: &mut impl Write) -> Result<Outcome> {
    let options = ctx.config.lint.to_options();
    let reports: Vec<ValidationReport> = ctx
        .handles()
        .iter()
        .map(|handle| validate(handle, &options))
        .collect();

    let mut errors = 0;
    let mut warnings = 0;
    for report in &reports {
        for issue in &report.issues {
            writeln!(out, "{}: {}", report.icon, issue)?;
        }
        errors += report.errors().count();
        warnings += report.warnings().count();
    }
    writeln!(
        out,
        "checked {} icons: {} errors, {} warnings",
        reports.len(),
        errors,
        warnings
    )?;

    if errors > 0 || (strict && warnings > 0) {
        warn!(errors, warnings, strict, "lint failed");
        Ok(Outcome::Failure)
    } else {
        Ok(Outcome::Success)
    }
}

fn export(
    ctx: &Session,
    dir: Option<&PathBuf>,
    names: &[String],
    out: &mut impl Write,
) -> Result<Outcome> {
    let Some(dir) = dir.or(ctx.config.export.output_dir.as_ref()) else {
        bail!("no output directory: pass --out or set export.output_dir in the configuration");
    };

    let handles = if names.is_empty() {
        ctx.handles()
    } else {
        let mut handles: Vec<IconHandle> = Vec::with_capacity(names.len());
        for name in names {
            let handle = ctx.registry.require(name)?;
            // The same icon named twice is written once
            if !handles.iter().any(|h| std::ptr::eq(&**h, &*handle)) {
                handles.push(handle);
            }
        }
        handles
    };

    let summary = export_vector_icons(
        handles.iter().map(|h| &**h),
        dir,
        &ctx.config.export.to_options(),
    )
    .with_context(|| format!("failed to export icons to {}", dir.display()))?;

    info!(icons = summary.files.len(), dir = %dir.display(), "export finished");
    writeln!(
        out,
        "wrote {} icons ({} bytes) to {}",
        summary.files.len(),
        summary.bytes,
        dir.display()
    )?;
    Ok(Outcome::Success)
}
