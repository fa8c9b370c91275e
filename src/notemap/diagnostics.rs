//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts warnings carrying [`Spanned`](super::span::Spanned)
//! byte ranges into `ariadne::Report` values without modifying the warning
//! type definitions. Ariadne derives row/column positions from the byte
//! offsets on its own.
//!
//! # Usage Example
//!
//! ```rust
//! use notemap_rs::notemap::{diagnostics::emit_notemap_warnings, parse_notemap};
//!
//! let source = "2 140 4\n1010\n";
//! let output = parse_notemap(source);
//!
//! // Output all warnings.
//! emit_notemap_warnings("chart.nmap", source, &output.warnings);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use super::NotemapWarningWithRange;

/// Simple source container that holds the filename and source text.
/// Ariadne will automatically handle row/column calculations from byte
/// offsets.
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned warnings to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert the warning to an ariadne Report, using `src` for the
    /// filename. Ariadne handles the row/column calculation.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Builds a single-label report over the given byte range of `src`.
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    message: &str,
    label: String,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(message)
        .with_label(
            Label::new((filename, range))
                .with_message(label)
                .with_color(color),
        )
        .finish()
}

/// Convenience method: batch render a warning list to stdout.
///
/// Creates the [`SimpleSource`] and prints one diagnostic per warning.
///
/// # Usage Example
///
/// ```rust
/// use notemap_rs::notemap::{NotemapWarningWithRange, diagnostics::emit_notemap_warnings};
///
/// let source = "2 140 4\n1010\n1111\n";
/// let warnings: Vec<NotemapWarningWithRange> = vec![/* warnings obtained from parsing */];
/// emit_notemap_warnings("chart.nmap", source, &warnings);
/// ```
pub fn emit_notemap_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a NotemapWarningWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let report = warning.to_report(&simple);
        let _ = report.print((name.to_string(), ariadne_source.clone()));
    }
}
