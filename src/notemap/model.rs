//! In-memory note map model.

use super::{header::Header, stream::NoteStream};

/// A parsed note map: the header record and one normalized stream per
/// declared lane.
///
/// `streams` always holds exactly `header.stream_count` entries, each of
/// exactly `header.stream_length` characters, in input order. The model is
/// not mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notemap {
    /// The header record of the file.
    pub header: Header,
    /// Normalized note streams, in input order.
    pub streams: Vec<NoteStream>,
}

impl Notemap {
    /// Tempo of the chart in beats per minute.
    #[must_use]
    pub const fn bpm(&self) -> i64 {
        self.header.bpm
    }

    /// The streams as plain binary string slices, in input order.
    #[must_use]
    pub fn stream_strings(&self) -> Vec<&str> {
        self.streams.iter().map(NoteStream::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accessors_read_through_to_the_header() {
        let notemap = Notemap {
            header: Header {
                stream_count: 2,
                bpm: 140,
                stream_length: 4,
            },
            streams: vec![
                NoteStream::normalize("1 0 1 0", 4),
                NoteStream::normalize("2222", 4),
            ],
        };
        assert_eq!(notemap.bpm(), 140);
        assert_eq!(notemap.stream_strings(), vec!["1010", "1111"]);
    }
}
