//! Note stream normalization.
//!
//! One raw line of the source becomes one [`NoteStream`]: a binary string
//! of exactly the declared stream length, one character per time-step.

use itertools::Itertools;
use thiserror::Error;

/// A warning occurred when reading the stream lines.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamWarning {
    /// The source ended before the declared stream line could be read.
    #[error("expected stream line {index} but found end of input")]
    MissingLine {
        /// Zero-based index of the missing stream.
        index: usize,
    },
}

/// Code points whose numeric value is exactly zero: the zero of every
/// Unicode decimal-digit run, plus the zero-valued number forms. Any other
/// non-space character counts as note-present.
const ZERO_VALUED: &[char] = &[
    '0',
    '\u{0660}', // Arabic-Indic
    '\u{06F0}', // Extended Arabic-Indic
    '\u{07C0}', // Nko
    '\u{0966}', // Devanagari
    '\u{09E6}', // Bengali
    '\u{0A66}', // Gurmukhi
    '\u{0AE6}', // Gujarati
    '\u{0B66}', // Oriya
    '\u{0BE6}', // Tamil
    '\u{0C66}', // Telugu
    '\u{0CE6}', // Kannada
    '\u{0D66}', // Malayalam
    '\u{0DE6}', // Sinhala Lith
    '\u{0E50}', // Thai
    '\u{0ED0}', // Lao
    '\u{0F20}', // Tibetan
    '\u{1040}', // Myanmar
    '\u{1090}', // Myanmar Shan
    '\u{17E0}', // Khmer
    '\u{1810}', // Mongolian
    '\u{1946}', // Limbu
    '\u{19D0}', // New Tai Lue
    '\u{1A80}', // Tai Tham Hora
    '\u{1A90}', // Tai Tham Tham
    '\u{1B50}', // Balinese
    '\u{1BB0}', // Sundanese
    '\u{1C40}', // Lepcha
    '\u{1C50}', // Ol Chiki
    '\u{2070}', // superscript zero
    '\u{2080}', // subscript zero
    '\u{24EA}', // circled zero
    '\u{3007}', // ideographic number zero
    '\u{A620}', // Vai
    '\u{A8D0}', // Saurashtra
    '\u{A900}', // Kayah Li
    '\u{A9D0}', // Javanese
    '\u{A9F0}', // Myanmar Tai Laing
    '\u{AA50}', // Cham
    '\u{ABF0}', // Meetei Mayek
    '\u{FF10}', // fullwidth
    '\u{104A0}', // Osmanya
    '\u{10D30}', // Hanifi Rohingya
    '\u{11066}', // Brahmi
    '\u{110F0}', // Sora Sompeng
    '\u{11136}', // Chakma
    '\u{111D0}', // Sharada
    '\u{112F0}', // Khudawadi
    '\u{11450}', // Newa
    '\u{114D0}', // Tirhuta
    '\u{11650}', // Modi
    '\u{116C0}', // Takri
    '\u{11730}', // Ahom
    '\u{118E0}', // Warang Citi
    '\u{11950}', // Dives Akuru
    '\u{11C50}', // Bhaiksuki
    '\u{11D50}', // Masaram Gondi
    '\u{11DA0}', // Gunjala Gondi
    '\u{16A60}', // Mro
    '\u{16B50}', // Pahawh Hmong
    '\u{1D7CE}', // mathematical bold
    '\u{1D7D8}', // mathematical double-struck
    '\u{1D7E2}', // mathematical sans-serif
    '\u{1D7EC}', // mathematical sans-serif bold
    '\u{1D7F6}', // mathematical monospace
    '\u{1E140}', // Nyiakeng Puachue Hmong
    '\u{1E2F0}', // Wancho
    '\u{1E950}', // Adlam
    '\u{1FBF0}', // segmented
];

/// Returns true when the numeric value of `c` is exactly zero.
fn is_zero_valued(c: char) -> bool {
    ZERO_VALUED.contains(&c)
}

/// One normalized note lane: a fixed-length string of `'0'`/`'1'`
/// characters over time-steps.
///
/// The length is always exactly the stream length the header declared,
/// regardless of the raw input, so consumers never need to length-check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteStream(String);

impl NoteStream {
    /// Normalizes one raw line into a stream of exactly `target_length`
    /// time-steps.
    ///
    /// Space characters are skipped without consuming a slot. A character
    /// whose numeric value is exactly zero (the zero digit of any Unicode
    /// script) becomes `'0'`; every other character, digit or not, becomes
    /// `'1'` (note present). The mapped buffer is then truncated, or
    /// right-padded with `'0'`, to `target_length`.
    ///
    /// ```
    /// use notemap_rs::notemap::stream::NoteStream;
    ///
    /// assert_eq!(NoteStream::normalize("1 0 1 0", 4).as_str(), "1010");
    /// assert_eq!(NoteStream::normalize("2222", 4).as_str(), "1111");
    /// assert_eq!(NoteStream::normalize("10", 6).as_str(), "100000");
    /// assert_eq!(NoteStream::normalize("111111", 2).as_str(), "11");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str, target_length: usize) -> Self {
        let digits = raw
            .chars()
            .filter(|&c| c != ' ')
            .map(|c| if is_zero_valued(c) { '0' } else { '1' })
            .pad_using(target_length, |_| '0')
            .take(target_length)
            .collect();
        Self(digits)
    }

    /// The stream as a binary string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Takes the binary string out of the stream.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of time-steps in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the stream has zero time-steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when a note is present at `step`, or `None` past the
    /// end of the stream.
    #[must_use]
    pub fn note_at(&self, step: usize) -> Option<bool> {
        self.0.as_bytes().get(step).map(|&b| b == b'1')
    }
}

impl AsRef<str> for NoteStream {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_zero_digits_to_rest() {
        assert_eq!(NoteStream::normalize("1010", 4).as_str(), "1010");
        assert_eq!(NoteStream::normalize("0000", 4).as_str(), "0000");
    }

    #[test]
    fn collapses_nonzero_digits_to_note() {
        assert_eq!(NoteStream::normalize("2222", 4).as_str(), "1111");
        assert_eq!(NoteStream::normalize("9081", 4).as_str(), "1011");
    }

    #[test]
    fn skips_spaces_without_consuming_a_slot() {
        assert_eq!(NoteStream::normalize("1 0 1 0", 4).as_str(), "1010");
        assert_eq!(NoteStream::normalize("    ", 4).as_str(), "0000");
    }

    #[test]
    fn non_digit_characters_count_as_note_present() {
        assert_eq!(NoteStream::normalize("x.#0", 4).as_str(), "1110");
        // Tab is an ordinary character, not a separator.
        assert_eq!(NoteStream::normalize("\t0", 2).as_str(), "10");
    }

    #[test]
    fn zero_valued_unicode_digits_are_rests() {
        // Fullwidth and Arabic-Indic zeros carry numeric value zero.
        assert_eq!(NoteStream::normalize("\u{ff10}", 1).as_str(), "0");
        assert_eq!(NoteStream::normalize("\u{0660}\u{0661}", 2).as_str(), "01");
        assert_eq!(NoteStream::normalize("\u{0966}1", 2).as_str(), "01");
        // Nonzero digits of any script collapse to note-present.
        assert_eq!(NoteStream::normalize("\u{ff11}", 1).as_str(), "1");
    }

    #[test]
    fn pads_short_lines_with_rests() {
        assert_eq!(NoteStream::normalize("10", 6).as_str(), "100000");
        assert_eq!(NoteStream::normalize("", 3).as_str(), "000");
    }

    #[test]
    fn truncates_long_lines() {
        assert_eq!(NoteStream::normalize("111111", 2).as_str(), "11");
        // Spaces are removed before the length is reconciled.
        assert_eq!(NoteStream::normalize("1 1 0 1 1", 3).as_str(), "110");
    }

    #[test]
    fn zero_target_length_yields_the_empty_stream() {
        let stream = NoteStream::normalize("1111", 0);
        assert_eq!(stream.as_str(), "");
        assert!(stream.is_empty());
    }

    #[test]
    fn note_at_reads_single_steps() {
        let stream = NoteStream::normalize("10", 3);
        assert_eq!(stream.note_at(0), Some(true));
        assert_eq!(stream.note_at(1), Some(false));
        assert_eq!(stream.note_at(2), Some(false));
        assert_eq!(stream.note_at(3), None);
    }
}
