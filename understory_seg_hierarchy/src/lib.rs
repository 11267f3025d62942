// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_seg_hierarchy --heading-base-level=0

//! Understory Seg Hierarchy: greedy stacking of spanned segments into collision-free levels.
//!
//! Each segment covers a half-open span on a primary axis and has a thickness on a secondary
//! (stacking) axis. [`SegHierarchy`] places segments one at a time, in the order given, at the
//! lowest stacking coordinate where they intersect nothing already placed. The typical consumer
//! is a calendar that draws multi-day events as rows that must not overlap.
//!
//! - Insert segments with [`SegHierarchy::add_segs`] (or [`SegHierarchy::try_add_segs`] to
//!   validate first). Whatever could not be placed comes back as hidden [`SegEntry`] values.
//! - Flatten the result with [`SegHierarchy::to_rects`] into [`SegRect`]s carrying a level
//!   coordinate and a 1-based part index per segment.
//! - Cap the layout with [`HierarchyOptions::max_coord`] and [`HierarchyOptions::max_stack_cnt`].
//! - With [`HierarchyOptions::allow_reslicing`], a segment that breaks a cap is split around the
//!   neighbor that blocked it, so the parts that fit are still shown.
//! - Cluster hidden entries for "+N more" controls with [`group_intersecting_entries`].
//!
//! The sweep is a single deterministic pass per segment. It is not a bin packer and does not
//! look for a globally minimal arrangement; input order is priority.
//!
//! # Example
//!
//! ```rust
//! use understory_seg_hierarchy::{HierarchyOptions, SegHierarchy, SegInput};
//!
//! // Week row: at most two stacked events per day column, splitting the rest.
//! let mut hierarchy: SegHierarchy<i64> = SegHierarchy::with_options(HierarchyOptions {
//!     allow_reslicing: true,
//!     max_stack_cnt: Some(2),
//!     ..Default::default()
//! });
//!
//! let hidden = hierarchy.add_segs(&[
//!     SegInput::new(0, 0, 3, 1), // Mon..Wed
//!     SegInput::new(1, 1, 2, 1), // Tue
//!     SegInput::new(2, 0, 5, 1), // Mon..Fri
//! ]);
//!
//! // Monday and Wednesday..Friday of event 2 fit; Tuesday is full.
//! assert_eq!(hidden.len(), 1);
//! assert_eq!((hidden[0].span_start, hidden[0].span_end), (1, 2));
//!
//! let rects = hierarchy.to_rects();
//! let parts: Vec<_> = rects
//!     .iter()
//!     .filter(|r| r.index() == 2)
//!     .map(|r| (r.span_start, r.span_end, r.part_index))
//!     .collect();
//! assert_eq!(parts, [(0, 1, 1), (2, 5, 2)]);
//! ```
//!
//! ## Features
//!
//! - `kurbo`: `SegRect<f64>::to_rect` for turning output into `kurbo::Rect`s.
//! - `std` / `libm`: forwarded to Kurbo.
//! - `tracing`: trace-level events for every placement, split, and hidden entry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
#[cfg(feature = "kurbo")]
pub mod geometry;
pub mod group;
pub mod hierarchy;
pub mod search;
pub mod types;

pub use error::InvalidSegment;
#[cfg(feature = "kurbo")]
pub use geometry::SpanAxis;
pub use group::{SegEntryGroup, group_intersecting_entries};
pub use hierarchy::{HierarchyOptions, SegHierarchy, SegInsertion};
pub use search::{SearchHit, search_by_key};
pub use types::{Scalar, SegEntry, SegInput, SegRect, intersect_spans, join_spans};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn hidden_entries_feed_more_groups() {
        let mut h: SegHierarchy<i64> = SegHierarchy::with_options(HierarchyOptions {
            max_stack_cnt: Some(1),
            ..Default::default()
        });
        let hidden = h.add_segs(&[
            SegInput::new(0, 0, 7, 1),
            SegInput::new(1, 0, 2, 1),
            SegInput::new(2, 1, 3, 1),
            SegInput::new(3, 5, 6, 1),
        ]);
        assert_eq!(hidden.len(), 3);

        let groups = group_intersecting_entries(&hidden);
        let counts: Vec<_> = groups
            .iter()
            .map(|g| (g.span_start, g.span_end, g.entries.len()))
            .collect();
        assert_eq!(counts, [(0, 3, 2), (5, 6, 1)]);
    }

    #[test]
    fn duplicate_indices_share_part_numbering() {
        let mut h = SegHierarchy::new();
        h.add_segs(&[
            SegInput::new(5, 0, 2, 1),
            SegInput::new(5, 0, 2, 1),
            SegInput::new(5, 4, 6, 1),
        ]);
        let parts: Vec<_> = h
            .to_rects()
            .iter()
            .map(|r| (r.span_start, r.level_coord, r.part_index))
            .collect();
        assert_eq!(parts, [(0, 0, 1), (4, 0, 2), (0, 1, 3)]);
    }

    #[test]
    fn legacy_flag_does_not_affect_placement() {
        let plain = [SegInput::new(0, 0, 4, 2), SegInput::new(1, 1, 3, 2)];
        let mut flagged = plain;
        for s in &mut flagged {
            s.force_absolute = true;
        }
        let mut a = SegHierarchy::new();
        let mut b = SegHierarchy::new();
        a.add_segs(&plain);
        b.add_segs(&flagged);
        let coords = |h: &SegHierarchy<i32>| -> Vec<_> {
            h.to_rects()
                .iter()
                .map(|r| (r.index(), r.level_coord))
                .collect()
        };
        assert_eq!(coords(&a), coords(&b));
    }
}
