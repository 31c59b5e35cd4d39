//! Structural checks for vector icons.

use std::fmt;

use crate::path::PathNode;
use crate::types::Rect;
use crate::vector::{VectorGroup, VectorIcon, VectorNode};

/// Options for [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationOptions {
    /// Allowed overshoot past each viewport edge, as a fraction of the
    /// viewport size.
    pub viewport_tolerance: f32,
    /// Report filled subpaths without a `Close` as errors.
    pub require_closed_fills: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            viewport_tolerance: 0.25,
            require_closed_fills: true,
        }
    }
}

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What an issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    UnclosedFill,
    NonFiniteCoordinate,
    InvalidDimensions,
    InvalidGradient,
    EmptyPath,
    Invisible,
    OutsideViewport,
}

impl IssueKind {
    /// The severity this kind of issue is reported with.
    pub fn severity(self) -> Severity {
        match self {
            Self::UnclosedFill
            | Self::NonFiniteCoordinate
            | Self::InvalidDimensions
            | Self::InvalidGradient => Severity::Error,
            Self::EmptyPath | Self::Invisible | Self::OutsideViewport => Severity::Warning,
        }
    }
}

/// A single problem found in an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    /// Depth-first index of the offending path, if the issue concerns one.
    pub path_index: Option<usize>,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_index {
            Some(index) => write!(f, "{}: path {}: {}", self.severity, index, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// All issues found in one icon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub icon: String,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when there are no errors. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// True when there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }

    fn push(&mut self, kind: IssueKind, path_index: Option<usize>, message: impl Into<String>) {
        self.issues.push(Issue {
            kind,
            severity: kind.severity(),
            path_index,
            message: message.into(),
        });
    }
}

/// Check an icon for structural problems.
pub fn validate(icon: &VectorIcon, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport {
        icon: icon.name().to_string(),
        issues: Vec::new(),
    };

    if !icon.default_size().is_valid() || !icon.viewport().is_valid() {
        report.push(
            IssueKind::InvalidDimensions,
            None,
            format!(
                "size {}x{} and viewport {}x{} must be positive and finite",
                icon.width(),
                icon.height(),
                icon.viewport_width(),
                icon.viewport_height()
            ),
        );
    }

    let mut finite = true;
    for (index, path) in icon.paths().enumerate() {
        let nodes = path.nodes();

        if nodes.is_empty() {
            report.push(IssueKind::EmptyPath, Some(index), "path has no nodes");
            continue;
        }

        if !path.is_filled() && !path.is_stroked() {
            report.push(IssueKind::Invisible, Some(index), "path has neither fill nor stroke");
        }

        if let Some(node) = nodes.iter().find(|n| !n.is_finite()) {
            finite = false;
            report.push(
                IssueKind::NonFiniteCoordinate,
                Some(index),
                format!("'{}' command has a non-finite argument", node.command()),
            );
        }

        let brushes = path.fill().into_iter().chain(path.stroke().map(|s| &s.brush));
        for brush in brushes {
            if let Err(err) = brush.check() {
                report.push(IssueKind::InvalidGradient, Some(index), err.to_string());
            }
        }

        if options.require_closed_fills && path.is_filled() && has_unclosed_subpath(nodes) {
            report.push(
                IssueKind::UnclosedFill,
                Some(index),
                "filled subpath is not closed",
            );
        }
    }

    if !groups_finite(icon.root()) {
        finite = false;
        report.push(
            IssueKind::NonFiniteCoordinate,
            None,
            "a group transform or clip has a non-finite value",
        );
    }

    // Bounds of non-finite geometry are meaningless.
    if finite && icon.viewport().is_valid() {
        check_viewport(icon, options.viewport_tolerance, &mut report);
    }

    report
}

fn groups_finite(group: &VectorGroup) -> bool {
    group.style().is_finite()
        && group.children().iter().all(|child| match child {
            VectorNode::Path(_) => true,
            VectorNode::Group(inner) => groups_finite(inner),
        })
}

fn check_viewport(icon: &VectorIcon, tolerance: f32, report: &mut ValidationReport) {
    let viewport = Rect::new(0.0, 0.0, icon.viewport_width(), icon.viewport_height());
    let allowed = viewport.inflate(
        icon.viewport_width() * tolerance,
        icon.viewport_height() * tolerance,
    );

    let Some(bounds) = icon.bounds() else {
        return;
    };
    if allowed.contains_rect(&bounds) {
        return;
    }

    // Name the first path that escapes; group transforms are already folded
    // into the icon bounds, so fall back to an icon-level issue.
    let offender = icon
        .paths()
        .position(|p| p.bounds().is_some_and(|b| !allowed.contains_rect(&b)));
    report.push(
        IssueKind::OutsideViewport,
        offender,
        format!(
            "bounds ({}, {})-({}, {}) exceed the {}x{} viewport",
            bounds.left(),
            bounds.top(),
            bounds.right(),
            bounds.bottom(),
            icon.viewport_width(),
            icon.viewport_height()
        ),
    );
}

/// Whether any subpath draws something and is never closed.
///
/// A move starts a new subpath; drawing after a close reopens one at the
/// close point.
pub fn has_unclosed_subpath(nodes: &[PathNode]) -> bool {
    let mut drawing = false;
    for node in nodes {
        match node {
            PathNode::Close => drawing = false,
            n if n.is_move() => {
                if drawing {
                    return true;
                }
            }
            _ => drawing = true,
        }
    }
    drawing
}
