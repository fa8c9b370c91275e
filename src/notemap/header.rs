//! Header line of a note map file.
//!
//! The header is the first line of the source: three space-separated
//! integers declaring the stream count, the BPM and the stream length, in
//! that order. Reading it is fail-soft: any failure yields the all-zero
//! [`Header`] together with one warning naming the cause, so a malformed
//! file degrades to an empty chart instead of aborting the parse.

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use super::{
    cursor::Cursor,
    span::{Spanned, SpannedExt},
};

/// Which of the three header fields a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderField {
    /// The first field, how many stream lines follow.
    StreamCount,
    /// The second field, the tempo in beats per minute.
    Bpm,
    /// The third field, the normalized length of every stream.
    StreamLength,
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StreamCount => write!(f, "stream count"),
            Self::Bpm => write!(f, "BPM"),
            Self::StreamLength => write!(f, "stream length"),
        }
    }
}

/// A warning occurred when reading the header line.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderWarning {
    /// The source ended before a header line could be read.
    #[error("expected the header line but found end of input")]
    MissingLine,
    /// The header line held fewer than three fields.
    #[error("expected 3 header fields, found {found}")]
    TooFewFields {
        /// How many space-separated fields the line actually held.
        found: usize,
    },
    /// One of the first three fields was not an integer.
    #[error("{field} field is not an integer: {token:?}")]
    NotAnInteger {
        /// The field the token was read for.
        field: HeaderField,
        /// The offending token text.
        token: String,
    },
}

/// The header record of a note map file.
///
/// All three values come from one space-delimited line. On any read failure
/// the whole record is zero, which drives the stream loop zero times and
/// yields an empty chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// How many stream lines follow the header.
    pub stream_count: usize,
    /// Tempo of the chart in beats per minute.
    pub bpm: i64,
    /// Length of every normalized stream, in time-steps.
    pub stream_length: usize,
}

/// Output of reading the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct HeaderParseOutput {
    /// The parsed header, all-zero when degraded.
    pub header: Header,
    /// Warnings that occurred while reading the header line.
    pub header_warnings: Vec<Spanned<HeaderWarning>>,
}

impl Header {
    /// Reads the header line from `cursor`.
    ///
    /// Consumes exactly one line when any input remains. Fields past the
    /// third are ignored. Never fails: the degraded result is the all-zero
    /// header plus one warning.
    pub fn parse(cursor: &mut Cursor<'_>) -> HeaderParseOutput {
        let Some((range, line)) = cursor.next_line_with_range() else {
            let at = cursor.index();
            return Self::degraded(HeaderWarning::MissingLine.into_spanned(at..at));
        };

        let Some((count_token, bpm_token, length_token)) = line.split(' ').next_tuple() else {
            let found = line.split(' ').count();
            return Self::degraded(HeaderWarning::TooFewFields { found }.into_spanned(range));
        };

        // Token spans follow from the single-space separator rule.
        let count_start = range.start;
        let bpm_start = count_start + count_token.len() + 1;
        let length_start = bpm_start + bpm_token.len() + 1;

        let parsed = parse_field::<usize>(
            count_token,
            HeaderField::StreamCount,
            count_start..count_start + count_token.len(),
        )
        .and_then(|stream_count| {
            parse_field::<i64>(bpm_token, HeaderField::Bpm, bpm_start..bpm_start + bpm_token.len())
                .map(|bpm| (stream_count, bpm))
        })
        .and_then(|(stream_count, bpm)| {
            parse_field::<usize>(
                length_token,
                HeaderField::StreamLength,
                length_start..length_start + length_token.len(),
            )
            .map(|stream_length| (stream_count, bpm, stream_length))
        });

        match parsed {
            Ok((stream_count, bpm, stream_length)) => HeaderParseOutput {
                header: Self {
                    stream_count,
                    bpm,
                    stream_length,
                },
                header_warnings: vec![],
            },
            Err(warning) => Self::degraded(warning),
        }
    }

    /// The fail-soft branch: all-zero header, one warning on record.
    fn degraded(warning: Spanned<HeaderWarning>) -> HeaderParseOutput {
        HeaderParseOutput {
            header: Self::default(),
            header_warnings: vec![warning],
        }
    }
}

fn parse_field<T: FromStr>(
    token: &str,
    field: HeaderField,
    span: std::ops::Range<usize>,
) -> Result<T, Spanned<HeaderWarning>> {
    token.parse().map_err(|_| {
        HeaderWarning::NotAnInteger {
            field,
            token: token.to_owned(),
        }
        .into_spanned(span)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_line(line: &str) -> HeaderParseOutput {
        Header::parse(&mut Cursor::new(line))
    }

    #[test]
    fn parses_three_fields() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("2 140 4");
        assert_eq!(
            header,
            Header {
                stream_count: 2,
                bpm: 140,
                stream_length: 4,
            }
        );
        assert_eq!(header_warnings, vec![]);
    }

    #[test]
    fn ignores_fields_past_the_third() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("1 90 8 trailing junk");
        assert_eq!(
            header,
            Header {
                stream_count: 1,
                bpm: 90,
                stream_length: 8,
            }
        );
        assert_eq!(header_warnings, vec![]);
    }

    #[test]
    fn empty_source_degrades_to_zero() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("");
        assert_eq!(header, Header::default());
        assert_eq!(
            header_warnings,
            vec![HeaderWarning::MissingLine.into_spanned(0..0)]
        );
    }

    #[test]
    fn short_line_degrades_to_zero() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("2 140");
        assert_eq!(header, Header::default());
        assert_eq!(
            header_warnings,
            vec![HeaderWarning::TooFewFields { found: 2 }.into_spanned(0..5)]
        );
    }

    #[test]
    fn non_numeric_field_zeroes_the_whole_header() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("2 fast 4");
        assert_eq!(header, Header::default());
        assert_eq!(
            header_warnings,
            vec![
                HeaderWarning::NotAnInteger {
                    field: HeaderField::Bpm,
                    token: "fast".to_owned(),
                }
                .into_spanned(2..6)
            ]
        );
    }

    #[test]
    fn negative_stream_count_is_not_an_integer_field() {
        let HeaderParseOutput {
            header,
            header_warnings,
        } = parse_line("-1 140 4");
        assert_eq!(header, Header::default());
        assert_eq!(
            header_warnings,
            vec![
                HeaderWarning::NotAnInteger {
                    field: HeaderField::StreamCount,
                    token: "-1".to_owned(),
                }
                .into_spanned(0..2)
            ]
        );
    }

    #[test]
    fn consumes_only_the_first_line() {
        let mut cursor = Cursor::new("2 140 4\n1010\n");
        let HeaderParseOutput { header, .. } = Header::parse(&mut cursor);
        assert_eq!(header.stream_count, 2);
        assert_eq!(cursor.next_line(), Some("1010"));
    }
}
