//! Positional wrapper for warnings produced while reading note map source.
//!
//! - [`Spanned`] is a generic wrapper that attaches a source byte span to a
//!   value.
//! - [`SpannedExt`] provides an extension method to wrap any value with a
//!   span.

/// A generic wrapper that attaches a source byte span to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spanned<T> {
    /// Wrapped content value.
    content: T,
    /// Start byte index in the source string (0-based, inclusive).
    start: usize,
    /// End byte index in the source string (0-based, exclusive).
    end: usize,
}

impl<T> Spanned<T> {
    /// Wraps `content` with the span `[start, end)`.
    pub const fn new(content: T, start: usize, end: usize) -> Self {
        Self {
            content,
            start,
            end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Takes the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the start byte index of the span.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end byte index of the span.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the span as a half-open byte range.
    pub const fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Maps the content of the wrapper, keeping the span.
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned::new(f(self.content), self.start, self.end)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at indices [{}, {})",
            self.content, self.start, self.end
        )
    }
}

impl<T: std::error::Error + 'static> std::error::Error for Spanned<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods to attach spans to values.
pub trait SpannedExt {
    /// Wraps `self` with the given byte range.
    fn into_spanned(self, range: std::ops::Range<usize>) -> Spanned<Self>
    where
        Self: Sized,
    {
        Spanned::new(self, range.start, range.end)
    }
}

impl<T> SpannedExt for T {}
