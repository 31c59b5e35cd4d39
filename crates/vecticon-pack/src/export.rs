//! Writing icons to SVG files.

use std::collections::hash_map::{Entry, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use vecticon_graphics::{to_svg_document_with, SvgOptions, VectorIcon};

use crate::catalog::{icon, IconId};
use crate::error::{PackError, PackResult};
use crate::logging::targets;

/// Options for SVG export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent the SVG markup.
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// What an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, in export order.
    pub files: Vec<PathBuf>,
    /// Total bytes written.
    pub bytes: u64,
}

/// Write built-in icons as `<name>.svg` files into `dir`.
///
/// The directory is created if needed. Existing files are overwritten.
pub fn export_icons(
    ids: &[IconId],
    dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> PackResult<ExportSummary> {
    export_vector_icons(ids.iter().map(|&id| icon(id)), dir, options)
}

/// Write any icons as `<name>.svg` files into `dir`.
///
/// Fails with [`PackError::ExportCollision`] before writing anything when two
/// names map to the same file.
pub fn export_vector_icons<'a>(
    icons: impl IntoIterator<Item = &'a VectorIcon>,
    dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> PackResult<ExportSummary> {
    let dir = dir.as_ref();
    let planned = plan_files(icons)?;
    fs::create_dir_all(dir).map_err(|e| PackError::io(dir, e))?;

    let svg_options = SvgOptions {
        pretty: options.pretty,
    };
    let mut summary = ExportSummary::default();
    for (file, icon) in planned {
        let path = dir.join(file);
        let document = to_svg_document_with(icon, &svg_options);
        fs::write(&path, &document).map_err(|e| PackError::io(&path, e))?;
        tracing::debug!(target: targets::EXPORT, path = %path.display(), "wrote icon");
        summary.bytes += document.len() as u64;
        summary.files.push(path);
    }

    tracing::info!(
        target: targets::EXPORT,
        dir = %dir.display(),
        icons = summary.files.len(),
        bytes = summary.bytes,
        "exported icons"
    );
    Ok(summary)
}

fn plan_files<'a>(
    icons: impl IntoIterator<Item = &'a VectorIcon>,
) -> PackResult<Vec<(String, &'a VectorIcon)>> {
    let mut planned: Vec<(String, &'a VectorIcon)> = Vec::new();
    let mut owners: HashMap<String, &'a str> = HashMap::new();
    for icon in icons {
        let file = file_name(icon.name());
        // Case-insensitive file systems would merge names differing only in case
        match owners.entry(file.to_lowercase()) {
            Entry::Occupied(entry) => {
                return Err(PackError::ExportCollision {
                    file,
                    first: entry.get().to_string(),
                    second: icon.name().to_string(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(icon.name());
            }
        }
        planned.push((file, icon));
    }
    Ok(planned)
}

/// File name for an icon, with path separators and other unsafe characters
/// replaced.
pub fn file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        "icon.svg".to_string()
    } else {
        format!("{stem}.svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecticon_graphics::{Color, PathStyle};

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Copy"), "Copy.svg");
        assert_eq!(file_name("../etc/passwd"), "_etc_passwd.svg");
        assert_eq!(file_name("a b"), "a_b.svg");
        assert_eq!(file_name(""), "icon.svg");
    }

    #[test]
    fn test_colliding_file_names_rejected() {
        let square = |name: &str| {
            VectorIcon::builder(name, 24.0, 24.0, 24.0, 24.0)
                .path(PathStyle::fill(Color::WHITE), |p| {
                    p.add_rect(2.0, 2.0, 22.0, 22.0);
                })
                .build()
        };
        let spaced = square("a b");
        let underscored = square("a_b");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("svg");

        let err = export_vector_icons([&spaced, &underscored], &out, &ExportOptions::default())
            .unwrap_err();
        match err {
            PackError::ExportCollision { file, first, second } => {
                assert_eq!(file, "a_b.svg");
                assert_eq!(first, "a b");
                assert_eq!(second, "a_b");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());

        let upper = square("A_B");
        assert!(matches!(
            export_vector_icons([&underscored, &upper], &out, &ExportOptions::default()),
            Err(PackError::ExportCollision { .. })
        ));
    }

    #[test]
    fn test_export_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/icons");

        let summary = export_icons(
            &[IconId::Copy, IconId::Report],
            &out,
            &ExportOptions::default(),
        )
        .unwrap();

        assert_eq!(summary.files, vec![out.join("Copy.svg"), out.join("Report.svg")]);
        let copy = fs::read_to_string(out.join("Copy.svg")).unwrap();
        assert!(copy.starts_with("<svg"));
        assert!(copy.contains(r#"viewBox="0 0 16 16""#));
        assert!(copy.contains(r#"fill-rule="evenodd""#));
        assert_eq!(
            summary.bytes,
            summary.files.iter().map(|f| fs::metadata(f).unwrap().len()).sum::<u64>()
        );
    }
}
