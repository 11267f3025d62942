// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when validating segment inputs.

use core::fmt;

/// A segment input that cannot be stacked.
///
/// Returned by [`SegInput::validate`](crate::SegInput::validate) and
/// [`SegHierarchy::try_add_segs`](crate::SegHierarchy::try_add_segs).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InvalidSegment<T> {
    /// A span end or the thickness is NaN or infinite.
    NonFinite {
        /// Caller-side index of the input.
        index: usize,
        /// Span start as given.
        span_start: T,
        /// Span end as given.
        span_end: T,
        /// Thickness as given.
        thickness: T,
    },
    /// `span_start` is not strictly below `span_end`.
    EmptySpan {
        /// Caller-side index of the input.
        index: usize,
        /// Offending span start.
        span_start: T,
        /// Offending span end.
        span_end: T,
    },
    /// Thickness is zero or negative.
    NonPositiveThickness {
        /// Caller-side index of the input.
        index: usize,
        /// Offending thickness.
        thickness: T,
    },
}

impl<T> InvalidSegment<T> {
    /// Caller-side index of the rejected input.
    pub const fn index(&self) -> usize {
        match self {
            Self::NonFinite { index, .. }
            | Self::EmptySpan { index, .. }
            | Self::NonPositiveThickness { index, .. } => *index,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for InvalidSegment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                index,
                span_start,
                span_end,
                thickness,
            } => write!(
                f,
                "segment {index} has a non-finite value in span {span_start:?}..{span_end:?} \
                 or thickness {thickness:?}"
            ),
            Self::EmptySpan {
                index,
                span_start,
                span_end,
            } => write!(
                f,
                "segment {index} has an empty span {span_start:?}..{span_end:?}"
            ),
            Self::NonPositiveThickness { index, thickness } => {
                write!(f, "segment {index} has non-positive thickness {thickness:?}")
            }
        }
    }
}

impl<T: fmt::Debug> core::error::Error for InvalidSegment<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_segment() {
        let err = InvalidSegment::EmptySpan {
            index: 4,
            span_start: 3_i64,
            span_end: 1,
        };
        assert_eq!(err.to_string(), "segment 4 has an empty span 3..1");
        assert_eq!(err.index(), 4);

        let err = InvalidSegment::NonPositiveThickness {
            index: 2,
            thickness: 0_i64,
        };
        assert_eq!(err.to_string(), "segment 2 has non-positive thickness 0");

        let err = InvalidSegment::NonFinite {
            index: 7,
            span_start: 0.0_f64,
            span_end: 1.0,
            thickness: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "segment 7 has a non-finite value in span 0.0..1.0 or thickness inf"
        );
        assert_eq!(err.index(), 7);
    }
}
