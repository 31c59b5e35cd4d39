//! The command-line commands driven against a configuration on disk.

use std::fs;
use std::path::Path;

use clap::Parser;
use vecticon::cli::{run, Cli, Outcome};

const MANIFEST: &str = r##"
[[icon]]
name = "Hexagon"
width = 24.0
height = 24.0

[[icon.path]]
data = "M12 2L21 7V17L12 22L3 17V7Z"
fill = "#FF3C8CFA"

[[icon]]
name = "Overflow"
width = 24.0
height = 24.0

[[icon.path]]
data = "M-8 -8H32V32H-8Z"
fill = "#FFFFFFFF"
"##;

const UNCLOSED: &str = r##"
[[icon]]
name = "Open"
width = 24.0
height = 24.0

[[icon.path]]
data = "M2 2L22 2L12 20"
fill = "#FFFFFFFF"
"##;

fn write_config(dir: &Path, manifest: &str) -> String {
    fs::write(dir.join("extra.toml"), manifest).unwrap();
    let config = dir.join("vecticon.toml");
    fs::write(
        &config,
        "[registry]\nmanifests = [\"extra.toml\"]\n\n[export]\noutput_dir = \"svg\"\npretty = false\n",
    )
    .unwrap();
    config.to_string_lossy().into_owned()
}

fn run_args(args: &[&str]) -> anyhow::Result<(Outcome, String)> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let outcome = run(&cli, &mut out)?;
    Ok((outcome, String::from_utf8(out).unwrap()))
}

#[test]
fn test_list_includes_manifest_icons() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), MANIFEST);

    let (outcome, text) = run_args(&["vecticon", "--config", &config, "list"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    let hexagon = text.lines().find(|l| l.starts_with("Hexagon")).unwrap();
    assert!(hexagon.ends_with("(manifest)"));
    // Built-ins come first
    let last = text.lines().last().unwrap();
    assert!(last.starts_with("Overflow"));
}

#[test]
fn test_lint_warnings_fail_only_when_strict() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), MANIFEST);

    let (outcome, text) = run_args(&["vecticon", "--config", &config, "lint"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert!(text.contains("Overflow: warning"));
    assert!(text.contains("0 errors, 1 warnings"));

    let (outcome, _) = run_args(&["vecticon", "--config", &config, "lint", "--strict"]).unwrap();
    assert_eq!(outcome, Outcome::Failure);
}

#[test]
fn test_lint_errors_fail() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), UNCLOSED);

    let (outcome, text) = run_args(&["vecticon", "--config", &config, "lint"]).unwrap();
    assert_eq!(outcome, Outcome::Failure);
    assert!(text.contains("Open: error: path 0"));
}

#[test]
fn test_export_uses_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), MANIFEST);

    let (outcome, text) =
        run_args(&["vecticon", "--config", &config, "export", "Hexagon", "copy"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert!(text.starts_with("wrote 2 icons"));

    let svg_dir = dir.path().join("svg");
    let hexagon = fs::read_to_string(svg_dir.join("Hexagon.svg")).unwrap();
    assert!(!hexagon.contains('\n'));
    assert!(hexagon.contains(r##"fill="#3C8CFA""##));
    assert!(svg_dir.join("Copy.svg").exists());
}

#[test]
fn test_export_out_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("elsewhere");

    let (_, text) = run_args(&[
        "vecticon",
        "export",
        "--out",
        out.to_str().unwrap(),
        "Report",
        "report",
    ])
    .unwrap();
    assert!(text.starts_with("wrote 1 icons"));
    let report = fs::read_to_string(out.join("Report.svg")).unwrap();
    assert!(report.contains(r#"viewBox="0 0 20 20""#));
}

#[test]
fn test_export_unknown_icon() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("svg");

    let err = run_args(&["vecticon", "export", "--out", out.to_str().unwrap(), "Nope"])
        .unwrap_err();
    assert!(err.to_string().contains("unknown icon 'Nope'"));
    assert!(!out.exists());
}

#[test]
fn test_missing_config_reports_chain() {
    let err = run_args(&["vecticon", "--config", "/nonexistent/vecticon.toml", "list"])
        .unwrap_err();
    assert!(err.to_string().starts_with("failed to load configuration"));
    assert!(err.chain().count() >= 2);
}
