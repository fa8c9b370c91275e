//! The parser module of note map (.nmap) files.
//!
//! A note map file carries one header line and one raw line per note stream.
//! The header declares three space-separated integers: the stream count, the
//! BPM and the stream length. Each following line is normalized into a
//! binary string of exactly the declared length, one character per
//! time-step.
//!
//! `header` module reads the header line into a [`header::Header`] record.
//! `stream` module normalizes one raw line into a [`stream::NoteStream`].
//! `fs` module exposes the path-based entry points over both.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `String` to input).
//! - Recognize `\n` and `\r\n` line terminators only; a lone `\r` is an
//!   ordinary character, so classic-Mac-ended sources parse as one line.
//! - Never fail over malformed content: degraded input yields zeroed values
//!   and a warning, so callers always receive a fully shaped result.
//! - Do not support editing note map source text.

pub mod cursor;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod fs;
pub mod header;
pub mod model;
pub mod prelude;
pub mod span;
pub mod stream;

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Report, ReportKind};

#[cfg(feature = "diagnostics")]
use self::diagnostics::{SimpleSource, ToAriadne, build_report};
use self::{
    cursor::Cursor,
    header::{Header, HeaderParseOutput, HeaderWarning},
    model::Notemap,
    span::{Spanned, SpannedExt},
    stream::{NoteStream, StreamWarning},
};

/// A warning occurred when parsing the note map file.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotemapWarning {
    /// A warning comes from reading the header line.
    #[error("Warn: header: {0}")]
    Header(#[from] HeaderWarning),
    /// A warning comes from reading the stream lines.
    #[error("Warn: stream: {0}")]
    Stream(#[from] StreamWarning),
}

/// A note map warning with position information.
pub type NotemapWarningWithRange = Spanned<NotemapWarning>;

/// Output of parsing a note map file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct NotemapOutput {
    /// The parsed note map data.
    pub notemap: Notemap,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<NotemapWarningWithRange>,
}

/// Parse a note map file from source text.
///
/// Parsing never fails: a malformed header degrades to the all-zero
/// [`Header`], a missing stream line degrades to an all-`'0'` stream, and
/// every degraded branch is reported in [`NotemapOutput::warnings`]. Input
/// past the declared stream count is ignored.
///
/// # Example
///
/// ```
/// use notemap_rs::notemap::{NotemapOutput, parse_notemap};
///
/// let source = "2 140 4\n1 0 1 0\n2222\n";
/// let NotemapOutput { notemap, warnings } = parse_notemap(source);
/// assert_eq!(notemap.header.stream_count, 2);
/// assert_eq!(notemap.header.bpm, 140);
/// assert_eq!(notemap.streams[0].as_str(), "1010");
/// assert_eq!(notemap.streams[1].as_str(), "1111");
/// assert_eq!(warnings, vec![]);
/// ```
pub fn parse_notemap(source: &str) -> NotemapOutput {
    let mut cursor = Cursor::new(source);

    let HeaderParseOutput {
        header,
        header_warnings,
    } = Header::parse(&mut cursor);

    let mut warnings: Vec<NotemapWarningWithRange> = header_warnings
        .into_iter()
        .map(|warning| warning.map(NotemapWarning::from))
        .collect();

    let mut streams = vec![];
    for index in 0..header.stream_count {
        let raw = match cursor.next_line_with_range() {
            Some((_, line)) => line,
            None => {
                let at = cursor.index();
                warnings.push(
                    NotemapWarning::from(StreamWarning::MissingLine { index })
                        .into_spanned(at..at),
                );
                ""
            }
        };
        streams.push(NoteStream::normalize(raw, header.stream_length));
    }

    NotemapOutput {
        notemap: Notemap { header, streams },
        warnings,
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for NotemapWarningWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let (color, label) = match self.content() {
            NotemapWarning::Header(warning) => (Color::Blue, warning.to_string()),
            NotemapWarning::Stream(warning) => (Color::Cyan, warning.to_string()),
        };
        build_report(
            src,
            ReportKind::Warning,
            self.as_range(),
            &self.content().to_string(),
            label,
            color,
        )
    }
}
