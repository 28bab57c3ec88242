//! Span model definitions
//!
//! Templates address text as half-open `[start, end)` ranges while the host
//! editor expects `(start, length)`. Every conversion between the two goes
//! through [`to_text_span`].

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` in a template or host buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `offset` falls inside the span.
    /// A zero-width span contains only its own start offset.
    pub fn contains(&self, offset: usize) -> bool {
        if self.is_empty() {
            offset == self.start
        } else {
            self.start <= offset && offset < self.end
        }
    }
}

/// Host text range expressed as `(start, length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Convert a template [`Span`] to a host [`TextSpan`].
///
/// An inverted span (`end < start`) yields a zero-length range instead of
/// underflowing.
pub fn to_text_span(span: Span) -> TextSpan {
    TextSpan {
        start: span.start,
        length: span.end.saturating_sub(span.start),
    }
}

impl From<Span> for TextSpan {
    fn from(span: Span) -> Self {
        to_text_span(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_span() {
        let text_span = to_text_span(Span::new(10, 14));
        assert_eq!(text_span, TextSpan::new(10, 4));
    }

    #[test]
    fn test_to_text_span_zero_width() {
        let text_span = to_text_span(Span::new(7, 7));
        assert_eq!(text_span.start, 7);
        assert_eq!(text_span.length, 0);
    }

    #[test]
    fn test_to_text_span_inverted_does_not_underflow() {
        let text_span = to_text_span(Span::new(9, 3));
        assert_eq!(text_span, TextSpan::new(9, 0));
    }

    #[test]
    fn test_start_and_length_hold_for_many_spans() {
        for start in 0..20 {
            for width in 0..5 {
                let span = Span::new(start, start + width);
                let text_span = TextSpan::from(span);
                assert_eq!(text_span.start, span.start);
                assert_eq!(text_span.length, span.end - span.start);
            }
        }
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(4, 8);
        assert!(span.contains(4));
        assert!(span.contains(7));
        assert!(!span.contains(8));
        assert!(!span.contains(3));

        let empty = Span::new(5, 5);
        assert!(empty.contains(5));
        assert!(!empty.contains(6));
    }
}
