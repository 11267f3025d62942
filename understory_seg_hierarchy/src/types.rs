// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment inputs, placed entries, output rectangles, and the scalar they are measured in.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::error::InvalidSegment;

/// Numeric scalar used on both the span axis and the stacking axis.
///
/// Only the operations the sweep needs are required. Float coordinates must be
/// finite; NaN and infinities never pass [`SegInput::validate`].
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Add two scalar values, or `None` if the sum leaves the representable range.
    fn checked_add(a: Self, b: Self) -> Option<Self>;

    /// Whether `v` is a finite value. Always true for integers.
    fn is_finite(v: Self) -> bool;

    /// Zero value for the scalar type.
    fn zero() -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn checked_add(a: Self, b: Self) -> Option<Self> {
        let sum = a + b;
        sum.is_finite().then_some(sum)
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn checked_add(a: Self, b: Self) -> Option<Self> {
        let sum = a + b;
        sum.is_finite().then_some(sum)
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Scalar for i32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn checked_add(a: Self, b: Self) -> Option<Self> {
        a.checked_add(b)
    }

    #[inline]
    fn is_finite(_: Self) -> bool {
        true
    }

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn checked_add(a: Self, b: Self) -> Option<Self> {
        a.checked_add(b)
    }

    #[inline]
    fn is_finite(_: Self) -> bool {
        true
    }

    #[inline]
    fn zero() -> Self {
        0
    }
}

/// A segment to be stacked, as supplied by the caller.
///
/// The span is half-open: `span_start..span_end`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegInput<T> {
    /// Caller-side index of the segment. Not required to be unique.
    pub index: usize,
    /// Start of the span on the primary axis (inclusive).
    pub span_start: T,
    /// End of the span on the primary axis (exclusive).
    pub span_end: T,
    /// Extent on the stacking axis.
    pub thickness: T,
    /// Accepted for compatibility with older callers. Placement ignores it.
    pub force_absolute: bool,
}

impl<T> SegInput<T> {
    /// Create a segment input.
    pub const fn new(index: usize, span_start: T, span_end: T, thickness: T) -> Self {
        Self {
            index,
            span_start,
            span_end,
            thickness,
            force_absolute: false,
        }
    }
}

impl<T: Scalar> SegInput<T> {
    /// Check that every value is finite, the span is non-empty, and the thickness is positive.
    pub fn validate(&self) -> Result<(), InvalidSegment<T>> {
        if ![self.span_start, self.span_end, self.thickness]
            .into_iter()
            .all(T::is_finite)
        {
            return Err(InvalidSegment::NonFinite {
                index: self.index,
                span_start: self.span_start,
                span_end: self.span_end,
                thickness: self.thickness,
            });
        }
        if !lt(self.span_start, self.span_end) {
            return Err(InvalidSegment::EmptySpan {
                index: self.index,
                span_start: self.span_start,
                span_end: self.span_end,
            });
        }
        if !lt(T::zero(), self.thickness) {
            return Err(InvalidSegment::NonPositiveThickness {
                index: self.index,
                thickness: self.thickness,
            });
        }
        Ok(())
    }
}

/// A slice of a [`SegInput`] that was placed or hidden.
///
/// The span equals the input's span, or a sub-range of it once the input has
/// been resliced around a blocking neighbor. The thickness is always the input's.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegEntry<T> {
    /// The input this entry was sliced from.
    pub seg: SegInput<T>,
    /// Start of this slice (inclusive).
    pub span_start: T,
    /// End of this slice (exclusive).
    pub span_end: T,
    /// Extent on the stacking axis, copied from the input.
    pub thickness: T,
}

impl<T: Copy> SegEntry<T> {
    /// The whole input as a single entry.
    pub fn from_input(seg: SegInput<T>) -> Self {
        Self {
            seg,
            span_start: seg.span_start,
            span_end: seg.span_end,
            thickness: seg.thickness,
        }
    }

    /// Caller-side index of the owning input.
    pub const fn index(&self) -> usize {
        self.seg.index
    }

    /// The same entry restricted to `span_start..span_end`.
    pub(crate) fn slice(&self, span_start: T, span_end: T) -> Self {
        Self {
            span_start,
            span_end,
            ..*self
        }
    }
}

/// A placed entry as emitted by [`SegHierarchy::to_rects`](crate::SegHierarchy::to_rects).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegRect<T> {
    /// The input this rectangle was sliced from.
    pub seg: SegInput<T>,
    /// Start of the rectangle on the primary axis (inclusive).
    pub span_start: T,
    /// End of the rectangle on the primary axis (exclusive).
    pub span_end: T,
    /// Extent on the stacking axis.
    pub thickness: T,
    /// 1-based part number among all rectangles sharing [`SegInput::index`].
    pub part_index: usize,
    /// Stacking-axis coordinate of the level holding this rectangle.
    pub level_coord: T,
}

impl<T: Copy> SegRect<T> {
    /// Caller-side index of the owning input.
    pub const fn index(&self) -> usize {
        self.seg.index
    }
}

/// Intersection of two half-open spans, or `None` if they do not overlap.
///
/// Spans that merely touch (`a.1 == b.0`) do not overlap.
pub fn intersect_spans<T: Scalar>(a: (T, T), b: (T, T)) -> Option<(T, T)> {
    let start = max_t(a.0, b.0);
    let end = min_t(a.1, b.1);
    lt(start, end).then_some((start, end))
}

/// Smallest span covering both half-open spans.
pub fn join_spans<T: Scalar>(a: (T, T), b: (T, T)) -> (T, T) {
    (min_t(a.0, b.0), max_t(a.1, b.1))
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_and_inverted_spans() {
        let empty = SegInput::new(3, 2_i64, 2, 1);
        assert_eq!(
            empty.validate(),
            Err(InvalidSegment::EmptySpan {
                index: 3,
                span_start: 2,
                span_end: 2
            })
        );
        assert!(SegInput::new(0, 5_i64, 1, 1).validate().is_err());
        assert!(SegInput::new(0, 0_i64, 1, 1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_thickness() {
        assert_eq!(
            SegInput::new(1, 0.0_f64, 1.0, 0.0).validate(),
            Err(InvalidSegment::NonPositiveThickness {
                index: 1,
                thickness: 0.0
            })
        );
        assert!(SegInput::new(1, 0.0_f64, 1.0, -2.0).validate().is_err());
        assert!(SegInput::new(1, 0.0_f64, 1.0, f64::NAN).validate().is_err());
        assert!(SegInput::new(1, f64::NAN, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn validate_rejects_infinite_values() {
        assert_eq!(
            SegInput::new(2, 0.0_f64, 1.0, f64::INFINITY).validate(),
            Err(InvalidSegment::NonFinite {
                index: 2,
                span_start: 0.0,
                span_end: 1.0,
                thickness: f64::INFINITY
            })
        );
        assert!(
            SegInput::new(0, f64::NEG_INFINITY, 1.0, 1.0)
                .validate()
                .is_err()
        );
        assert!(
            SegInput::new(0, 0.0_f32, f32::INFINITY, 1.0)
                .validate()
                .is_err()
        );
        assert!(SegInput::new(0, 0.0_f64, f64::MAX, 1.0).validate().is_ok());
    }

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(<i64 as Scalar>::checked_add(i64::MAX - 1, 1), Some(i64::MAX));
        assert_eq!(<i64 as Scalar>::checked_add(i64::MAX, 1), None);
        assert_eq!(<i32 as Scalar>::add(i32::MAX, 1), i32::MAX);
        assert_eq!(<f64 as Scalar>::checked_add(1.5, 2.0), Some(3.5));
        assert_eq!(<f64 as Scalar>::checked_add(f64::MAX, f64::MAX), None);
    }

    #[test]
    fn touching_spans_do_not_intersect() {
        assert_eq!(intersect_spans((0, 2), (2, 4)), None);
        assert_eq!(intersect_spans((0, 3), (2, 4)), Some((2, 3)));
        assert_eq!(intersect_spans((1, 2), (0, 5)), Some((1, 2)));
        assert_eq!(join_spans((0, 3), (2, 6)), (0, 6));
    }

    #[test]
    fn slice_keeps_owner_and_thickness() {
        let e = SegEntry::from_input(SegInput::new(7, 0_i32, 10, 3));
        let s = e.slice(4, 6);
        assert_eq!(s.index(), 7);
        assert_eq!((s.span_start, s.span_end, s.thickness), (4, 6, 3));
        assert_eq!(s.seg, e.seg);
    }
}
