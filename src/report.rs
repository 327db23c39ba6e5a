//! Human-readable error reports.
//!
//! The interpreter core only classifies failures; this module turns an
//! [`ErrorKind`], a column and the offending input into text for a terminal.
//! All settings travel in an explicit [`ReportConfig`].

use std::fmt;

use colored::{Color, Colorize};

use crate::{
    diagnostics::{Diagnostic, print_error_pointer},
    error::{Error, ErrorKind},
};

/// The purpose of a line of output, which selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Error headings and carets.
    Error,
    /// The echoed input.
    Info,
    /// Recommendations.
    Warning,
    /// Successful results.
    Success,
    /// Detailed messages.
    Trace,
}

/// The color used for each [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Error headings and pointers. Red by default.
    pub error:   Color,
    /// The echoed input. Blue by default.
    pub info:    Color,
    /// Recommendations. Yellow by default.
    pub warning: Color,
    /// Evaluated results. Green by default.
    pub success: Color,
    /// Error messages and details. Cyan by default.
    pub trace:   Color,
}

impl Palette {
    /// Returns the color assigned to `role`.
    #[must_use]
    pub const fn color(&self, role: Role) -> Color {
        match role {
            Role::Error => self.error,
            Role::Info => self.info,
            Role::Warning => self.warning,
            Role::Success => self.success,
            Role::Trace => self.trace,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { error:   Color::Red,
               info:    Color::Blue,
               warning: Color::Yellow,
               success: Color::Green,
               trace:   Color::Cyan, }
    }
}

/// Settings for a [`Reporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Whether to emit color at all.
    pub color:   bool,
    /// Colors per role.
    pub palette: Palette,
    /// A template applied to every line. The first `{}` is replaced by the
    /// line; a template without `{}` leaves lines unchanged.
    pub format:  Option<String>,
}

impl ReportConfig {
    /// A configuration without color or template.
    #[must_use]
    pub fn plain() -> Self {
        Self { color: false,
               ..Self::default() }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { color:   true,
               palette: Palette::default(),
               format:  None, }
    }
}

/// Everything needed to describe one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    /// The text that failed.
    pub input:    &'a str,
    /// The classified kind.
    pub kind:     ErrorKind,
    /// Zero-based column of the problem.
    pub position: usize,
    /// An optional detailed message.
    pub message:  Option<String>,
}

impl<'a> Report<'a> {
    /// Creates a report without a detailed message.
    #[must_use]
    pub const fn new(input: &'a str, kind: ErrorKind, position: usize) -> Self {
        Self { input,
               kind,
               position,
               message: None }
    }

    /// Creates a report for an evaluation error.
    #[must_use]
    pub fn from_error(input: &'a str, error: &Error) -> Self {
        Self { message: Some(error.to_string()),
               ..Self::new(input, error.kind(), error.position()) }
    }

    /// Creates a report for a structural defect.
    #[must_use]
    pub fn from_diagnostic(input: &'a str, diagnostic: &Diagnostic) -> Self {
        Self { message: Some(diagnostic.to_string()),
               ..Self::new(input, diagnostic.kind, diagnostic.position) }
    }
}

/// Renders reports and results according to a [`ReportConfig`].
///
/// # Example
/// ```
/// use arithmos::{
///     error::ErrorKind,
///     report::{Report, ReportConfig, Reporter},
/// };
///
/// let reporter = Reporter::new(ReportConfig::plain());
/// let text = reporter.render(&Report::new("[1 2", ErrorKind::UnmatchedBracket, 4));
///
/// assert_eq!(text,
///            "Error: SyntaxError:UnmatchedBracket\n\
///             Input: [1 2\n\
///             \x20          ^\n\
///             Recommendation: Ensure all brackets are closed properly.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

/// Width of the `Input: ` label, so the caret lines up with the input.
const INPUT_LABEL: &str = "Input: ";

impl Reporter {
    /// Creates a reporter with `config`.
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Applies the template and the color for `role` to one line.
    #[must_use]
    pub fn paint(&self, text: &str, role: Role) -> String {
        let text = match &self.config.format {
            Some(template) if template.contains("{}") => template.replacen("{}", text, 1),
            _ => text.to_string(),
        };

        if self.config.color {
            text.color(self.config.palette.color(role)).to_string()
        } else {
            text
        }
    }

    /// Renders a failure as several lines, without a trailing newline.
    #[must_use]
    pub fn render(&self, report: &Report<'_>) -> String {
        let mut lines = vec![self.paint(&format!("Error: {}", report.kind), Role::Error),
                             self.paint(&format!("{INPUT_LABEL}{}", report.input), Role::Info),
                             self.paint(&format!("{}{}",
                                                 " ".repeat(INPUT_LABEL.len()),
                                                 print_error_pointer(report.position)),
                                        Role::Error),];
        if let Some(message) = &report.message {
            lines.push(self.paint(message, Role::Trace));
        }
        lines.push(self.paint(&format!("Recommendation: {}", report.kind.recommendation()),
                              Role::Warning));

        lines.join("\n")
    }

    /// Renders a successful result.
    #[must_use]
    pub fn render_value(&self, value: &impl fmt::Display) -> String {
        self.paint(&value.to_string(), Role::Success)
    }
}
