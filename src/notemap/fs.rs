//! Path-based entry points over the note map parser.
//!
//! Opening the file is the only operation here that can fail; everything
//! past a successful read follows the fail-soft parsing policy of
//! [`parse_notemap`].

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{
    NotemapOutput,
    cursor::Cursor,
    header::{Header, HeaderParseOutput},
    parse_notemap,
};

/// An error occurred when opening or reading a note map file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReadError {
    /// The path did not resolve to a readable file.
    #[error("note map file not found: {}", path.display())]
    NotFound {
        /// The path that failed to resolve.
        path: PathBuf,
    },
    /// Any other I/O failure while opening or reading the file.
    #[error("failed to read note map file {}: {source}", path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

fn read_source(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Reads and parses the note map file at `path`.
///
/// The file is read whole and released before parsing begins. Only
/// resource errors fail the call; malformed content flows into
/// [`NotemapOutput::warnings`].
///
/// # Errors
///
/// Returns [`ReadError::NotFound`] when `path` does not resolve to a file,
/// or [`ReadError::Io`] for any other open/read-time failure.
pub fn read_notemap(path: impl AsRef<Path>) -> Result<NotemapOutput, ReadError> {
    let source = read_source(path.as_ref())?;
    Ok(parse_notemap(&source))
}

/// Reads only the BPM field from the header of the note map file at `path`.
///
/// Opens the file independently of [`read_notemap`] and parses the header
/// line only; no stream line is normalized. Header warnings are dropped
/// here, so a malformed header silently reads as BPM 0 — use
/// [`read_notemap`] when the warnings matter.
///
/// # Errors
///
/// Same failure conditions as [`read_notemap`].
pub fn read_bpm(path: impl AsRef<Path>) -> Result<i64, ReadError> {
    let source = read_source(path.as_ref())?;
    let HeaderParseOutput { header, .. } = Header::parse(&mut Cursor::new(&source));
    Ok(header.bpm)
}
