//! The note map file parser, feeding chart generators with a tempo and
//! fixed-length binary note streams.
//!
//! A note map file is a plain-text chart description: one header line of
//! three space-separated integers (stream count, BPM, stream length),
//! followed by one raw line per note stream. Parsing normalizes every
//! stream line to exactly the declared length, with each time-step encoded
//! as `'0'` (rest) or `'1'` (note).
//!
//! ```
//! use notemap_rs::notemap::{NotemapOutput, parse_notemap};
//!
//! let source = "2 140 4\n1 0 1 0\n2222\n";
//! let NotemapOutput { notemap, warnings } = parse_notemap(source);
//! assert_eq!(notemap.header.bpm, 140);
//! assert_eq!(notemap.streams[0].as_str(), "1010");
//! assert_eq!(notemap.streams[1].as_str(), "1111");
//! assert_eq!(warnings, vec![]);
//! ```

pub mod notemap;
