//! Utility module with griseo's errors.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=3` for [`Level`](crate::style::Level)s of color support;
///   * `0..=15` for index values of [`AnsiColor`](crate::style::AnsiColor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An unknown style name.
///
/// This error indicates a dynamic style lookup with a name that denotes
/// neither a modifier, nor a foreground color, nor a background color. The
/// typed builder methods on [`Chain`](crate::Chain) cannot fail this way;
/// only [`Chain::style`](crate::Chain::style) can.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStyleError {
    name: String,
}

impl UnknownStyleError {
    /// Create a new unknown-style error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the offending style name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for UnknownStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("`{}` does not name a style", self.name))
    }
}

impl std::error::Error for UnknownStyleError {}
