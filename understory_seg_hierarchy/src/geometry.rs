// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of output rectangles to Kurbo geometry.

use kurbo::Rect;

use crate::types::SegRect;

/// Which screen axis the span runs along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SpanAxis {
    /// Spans run along x and levels stack downward along y, as in a day grid.
    #[default]
    Horizontal,
    /// Spans run along y and levels stack rightward along x, as in a time grid.
    Vertical,
}

impl SegRect<f64> {
    /// The rectangle in layout units, with the span mapped onto `axis`.
    pub fn to_rect(&self, axis: SpanAxis) -> Rect {
        let level_end = self.level_coord + self.thickness;
        match axis {
            SpanAxis::Horizontal => {
                Rect::new(self.span_start, self.level_coord, self.span_end, level_end)
            }
            SpanAxis::Vertical => {
                Rect::new(self.level_coord, self.span_start, level_end, self.span_end)
            }
        }
    }
}
