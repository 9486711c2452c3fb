//! Application of resolved styles to text.
//!
//! A [`Formatter`] captures one resolved chain's opening and closing escape
//! sequences and wraps payloads in them without corrupting the result under
//! nesting or line breaks. The three fixups happen in a fixed order: nested
//! closes are patched first, then the payload is wrapped, and only then are
//! line breaks re-styled, so that the wrapping sequences participate in the
//! line-break fixup as well.

use crate::style::StyleSpec;

/// A reusable text styler for one resolved style combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Formatter {
    open: String,
    close: String,
}

impl Formatter {
    /// Create a new formatter from the specification's escape sequences.
    pub fn new(spec: &StyleSpec) -> Self {
        Self {
            open: spec.open(),
            close: spec.close(),
        }
    }

    /// Style the given payload.
    pub fn format(&self, text: &str) -> String {
        if self.open.is_empty() && self.close.is_empty() {
            return text.to_string();
        }

        let has_break = text.contains('\n');

        // A nested use of this library may have emitted our own closing
        // sequence inside the payload. Reopen right after every such close,
        // left to right, so the outer style neither leaks nor ends early.
        // A single pass over the payload bounds the work by its length.
        let text = if !self.close.is_empty() && text.contains(&self.close) {
            let reopen = format!("{}{}", self.close, self.open);
            text.replace(&self.close, &reopen)
        } else {
            text.to_string()
        };

        let mut wrapped =
            String::with_capacity(self.open.len() + text.len() + self.close.len());
        wrapped.push_str(&self.open);
        wrapped.push_str(&text);
        wrapped.push_str(&self.close);

        if has_break {
            self.reopen_line_breaks(&wrapped)
        } else {
            wrapped
        }
    }

    /// Close the style before and reopen it after every `\r*\n` line break,
    /// so color state cannot bleed across lines when output is buffered,
    /// wrapped, or interleaved with other streams.
    fn reopen_line_breaks(&self, wrapped: &str) -> String {
        let mut out = String::with_capacity(wrapped.len());
        for piece in wrapped.split_inclusive('\n') {
            match piece.strip_suffix('\n') {
                Some(stripped) => {
                    let content = stripped.trim_end_matches('\r');
                    out.push_str(content);
                    out.push_str(&self.close);
                    out.push_str(&piece[content.len()..]);
                    out.push_str(&self.open);
                }
                None => out.push_str(piece),
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn red() -> Formatter {
        Formatter {
            open: "\x1b[31m".to_string(),
            close: "\x1b[39m".to_string(),
        }
    }

    #[test]
    fn test_plain_wrap() {
        assert_eq!(red().format("foo"), "\x1b[31mfoo\x1b[39m");
        assert_eq!(red().format(""), "\x1b[31m\x1b[39m");
    }

    #[test]
    fn test_nested_close_reopens() {
        // An inner close must be followed by a reopen of the outer style.
        assert_eq!(
            red().format("foo\x1b[39mbar"),
            "\x1b[31mfoo\x1b[39m\x1b[31mbar\x1b[39m"
        );
        // Replacement is left to right and non-overlapping.
        assert_eq!(
            red().format("a\x1b[39mb\x1b[39mc"),
            "\x1b[31ma\x1b[39m\x1b[31mb\x1b[39m\x1b[31mc\x1b[39m"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(
            red().format("hello\nworld"),
            "\x1b[31mhello\x1b[39m\n\x1b[31mworld\x1b[39m"
        );
        assert_eq!(
            red().format("hello\r\nworld"),
            "\x1b[31mhello\x1b[39m\r\n\x1b[31mworld\x1b[39m"
        );
        // A trailing break still closes before and reopens after itself.
        assert_eq!(
            red().format("hello\n"),
            "\x1b[31mhello\x1b[39m\n\x1b[31m\x1b[39m"
        );
    }
}
