// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stacking hierarchy: collision sweep, commit, reslicing, and flattening.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::InvalidSegment;
use crate::search::search_by_key;
use crate::types::{Scalar, SegEntry, SegInput, SegRect, intersect_spans, le, lt};

/// Caps and reslicing behavior of a [`SegHierarchy`].
///
/// Fixed for the lifetime of the hierarchy; see [`SegHierarchy::with_options`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HierarchyOptions<T> {
    /// Split a rejected entry around its blocking neighbor so the parts that fit are still placed.
    pub allow_reslicing: bool,
    /// Upper bound on `level_coord + thickness` for every placed entry.
    pub max_coord: Option<T>,
    /// Upper bound (exclusive) on the stacking depth of every placed entry.
    ///
    /// `Some(1)` allows only entries with nothing beneath them.
    pub max_stack_cnt: Option<usize>,
}

impl<T> Default for HierarchyOptions<T> {
    fn default() -> Self {
        Self {
            allow_reslicing: false,
            max_coord: None,
            max_stack_cnt: None,
        }
    }
}

/// Result of the collision sweep for one candidate entry.
///
/// Produced by [`SegHierarchy::find_insertion`]; nothing is mutated until it is committed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegInsertion<T> {
    /// Lowest stacking coordinate at which the candidate is clear of every placed entry.
    pub level_coord: T,
    /// Index of the level the candidate lands in.
    pub level: usize,
    /// Whether a new level is created at `level` (otherwise the existing level there is joined).
    pub creates_level: bool,
    /// Entries of the target level overlapping the candidate's span:
    /// `lateral_start..lateral_end`.
    ///
    /// The range is empty whenever the candidate clears the level, and
    /// `lateral_end` is where it is inserted to keep the level ascending by span.
    pub lateral_start: usize,
    /// End of the overlapping range; the commit position within the level.
    pub lateral_end: usize,
    /// False when `level_coord + thickness` does not fit in the scalar's range.
    ///
    /// Such a candidate is never committed.
    pub in_range: bool,
    /// The last (deepest) placed entry that pushed the candidate upward.
    pub touching_entry: Option<SegEntry<T>>,
    /// Stacking depth of the candidate: `touching_entry`'s depth plus one, or zero.
    pub stack_cnt: usize,
}

#[derive(Copy, Clone, Debug)]
struct Placed<T> {
    entry: SegEntry<T>,
    stack_cnt: usize,
}

/// Greedy stacking of spanned segments into collision-free levels.
///
/// Segments are placed one at a time, in the order given, at the lowest
/// coordinate where they do not intersect anything already placed. Earlier
/// segments therefore win lower coordinates. Segments that would break a
/// configured cap are reported back as hidden entries, optionally after being
/// split around the neighbor that blocked them.
///
/// ## Invariants
///
/// - Level coordinates are strictly ascending.
/// - Entries within a level are ascending by span and pairwise disjoint.
/// - Every placed entry remembers the stacking depth found when it was placed.
///
/// A hierarchy is a sequential structure; independent layouts need independent instances.
#[derive(Clone, Debug)]
pub struct SegHierarchy<T> {
    options: HierarchyOptions<T>,
    level_coords: Vec<T>,
    entries_by_level: Vec<Vec<Placed<T>>>, // parallel with level_coords
}

impl<T: Scalar> Default for SegHierarchy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SegHierarchy<T> {
    /// Create an empty hierarchy with no caps and reslicing disabled.
    pub fn new() -> Self {
        Self::with_options(HierarchyOptions::default())
    }

    /// Create an empty hierarchy with the given caps and reslicing behavior.
    pub fn with_options(options: HierarchyOptions<T>) -> Self {
        Self {
            options,
            level_coords: Vec::new(),
            entries_by_level: Vec::new(),
        }
    }

    /// The options this hierarchy was created with.
    pub fn options(&self) -> &HierarchyOptions<T> {
        &self.options
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.level_coords.len()
    }

    /// Stacking coordinate of every level, ascending.
    pub fn level_coords(&self) -> &[T] {
        &self.level_coords
    }

    /// Entries placed at `level`, ascending by span. Empty if `level` is out of range.
    pub fn entries_at_level(&self, level: usize) -> impl Iterator<Item = &SegEntry<T>> + '_ {
        self.entries_by_level
            .get(level)
            .into_iter()
            .flatten()
            .map(|p| &p.entry)
    }

    /// True if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.level_coords.is_empty()
    }

    /// Remove every placed entry, keeping the options.
    pub fn clear(&mut self) {
        self.level_coords.clear();
        self.entries_by_level.clear();
    }

    /// Place `inputs` in order and return every entry, whole or split, that could not be placed.
    ///
    /// Inputs must have `span_start < span_end` and a positive thickness; use
    /// [`try_add_segs`](Self::try_add_segs) to check that first.
    pub fn add_segs(&mut self, inputs: &[SegInput<T>]) -> Vec<SegEntry<T>> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("add_segs", count = inputs.len()).entered();

        let mut hidden = Vec::new();
        for seg in inputs {
            debug_assert!(seg.validate().is_ok(), "invalid segment input: {seg:?}");
            self.insert_entry(SegEntry::from_input(*seg), &mut hidden);
        }
        hidden
    }

    /// Validate all `inputs`, then place them like [`add_segs`](Self::add_segs).
    ///
    /// On error nothing is placed.
    pub fn try_add_segs(
        &mut self,
        inputs: &[SegInput<T>],
    ) -> Result<Vec<SegEntry<T>>, InvalidSegment<T>> {
        inputs.iter().try_for_each(SegInput::validate)?;
        Ok(self.add_segs(inputs))
    }

    /// Place one entry, pushing whatever could not be placed onto `hidden`.
    ///
    /// Returns how many parts of `entry` were placed: `0`, `1`, or more after reslicing.
    pub fn insert_entry(&mut self, entry: SegEntry<T>, hidden: &mut Vec<SegEntry<T>>) -> usize {
        let insertion = self.find_insertion(&entry);
        if self.is_insertion_valid(&insertion, &entry) {
            self.insert_entry_at(entry, &insertion);
            1
        } else {
            self.handle_invalid_insertion(&insertion, entry, hidden)
        }
    }

    fn is_insertion_valid(&self, insertion: &SegInsertion<T>, entry: &SegEntry<T>) -> bool {
        let HierarchyOptions {
            max_coord,
            max_stack_cnt,
            ..
        } = self.options;
        insertion.in_range
            && max_coord.is_none_or(|max| le(T::add(insertion.level_coord, entry.thickness), max))
            && max_stack_cnt.is_none_or(|max| insertion.stack_cnt < max)
    }

    fn handle_invalid_insertion(
        &mut self,
        insertion: &SegInsertion<T>,
        entry: SegEntry<T>,
        hidden: &mut Vec<SegEntry<T>>,
    ) -> usize {
        match insertion.touching_entry {
            Some(barrier) if self.options.allow_reslicing => {
                self.split_entry(entry, &barrier, hidden, false)
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = entry.index(), ?entry, "hidden");
                hidden.push(entry);
                0
            }
        }
    }

    /// Place the parts of `entry` on either side of `barrier`.
    ///
    /// The part under the barrier is hidden along with whatever the sides could
    /// not place. If neither side placed anything, `entry` is hidden whole
    /// unless `force_split` is set.
    fn split_entry(
        &mut self,
        entry: SegEntry<T>,
        barrier: &SegEntry<T>,
        hidden: &mut Vec<SegEntry<T>>,
        force_split: bool,
    ) -> usize {
        #[cfg(feature = "tracing")]
        tracing::trace!(index = entry.index(), ?entry, ?barrier, "reslicing");

        let mut part_cnt = 0;
        let mut split_hidden = Vec::new();

        if lt(entry.span_start, barrier.span_start) {
            part_cnt += self.insert_entry(
                entry.slice(entry.span_start, barrier.span_start),
                &mut split_hidden,
            );
        }
        if lt(barrier.span_end, entry.span_end) {
            part_cnt += self.insert_entry(
                entry.slice(barrier.span_end, entry.span_end),
                &mut split_hidden,
            );
        }

        let covered = intersect_spans(
            (entry.span_start, entry.span_end),
            (barrier.span_start, barrier.span_end),
        );
        match covered {
            Some((start, end)) if part_cnt > 0 || force_split => {
                hidden.push(entry.slice(start, end));
                hidden.append(&mut split_hidden);
                part_cnt
            }
            _ => {
                hidden.push(entry);
                0
            }
        }
    }

    fn insert_entry_at(&mut self, entry: SegEntry<T>, insertion: &SegInsertion<T>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            index = entry.index(),
            ?entry,
            level_coord = ?insertion.level_coord,
            stack_cnt = insertion.stack_cnt,
            "placed"
        );

        let placed = Placed {
            entry,
            stack_cnt: insertion.stack_cnt,
        };
        if insertion.creates_level {
            self.level_coords.insert(insertion.level, insertion.level_coord);
            self.entries_by_level.insert(insertion.level, vec![placed]);
        } else {
            self.entries_by_level[insertion.level].insert(insertion.lateral_end, placed);
        }
    }

    /// Run the collision sweep for `new_entry` without placing it.
    ///
    /// Levels are visited once, lowest first, while the level's coordinate is
    /// below the candidate's current top. Every laterally overlapping entry
    /// that also intersects the candidate on the stacking axis pushes the
    /// candidate up to that entry's far edge.
    pub fn find_insertion(&self, new_entry: &SegEntry<T>) -> SegInsertion<T> {
        let thickness = new_entry.thickness;
        let mut res_coord = T::zero();
        let mut res_top = T::checked_add(res_coord, thickness);
        let mut touching: Option<&Placed<T>> = None;

        'levels: for (&level_coord, entries) in
            self.level_coords.iter().zip(&self.entries_by_level)
        {
            match res_top {
                Some(top) if lt(level_coord, top) => {}
                _ => break,
            }
            let mut lateral =
                search_by_key(entries, new_entry.span_start, |p| p.entry.span_end).past_exact();
            while let Some(placed) = entries.get(lateral)
                && lt(placed.entry.span_start, new_entry.span_end)
            {
                // Placed entries always fit, so their far edge does too.
                let far_edge = T::add(level_coord, placed.entry.thickness);
                let Some(top) = res_top else {
                    break 'levels;
                };
                if lt(res_coord, far_edge) && lt(level_coord, top) {
                    touching = Some(placed);
                    res_coord = far_edge;
                    res_top = T::checked_add(res_coord, thickness);
                }
                lateral += 1;
            }
        }

        let level = self.level_coords.partition_point(|&c| lt(c, res_coord));
        let joins = self.level_coords.get(level).is_some_and(|&c| c == res_coord);
        let (lateral_start, lateral_end) = if joins {
            let entries = &self.entries_by_level[level];
            let start =
                search_by_key(entries, new_entry.span_start, |p| p.entry.span_end).past_exact();
            let overlapping = entries[start..]
                .iter()
                .take_while(|p| lt(p.entry.span_start, new_entry.span_end))
                .count();
            (start, start + overlapping)
        } else {
            (0, 0)
        };

        SegInsertion {
            level_coord: res_coord,
            level,
            creates_level: !joins,
            lateral_start,
            lateral_end,
            in_range: res_top.is_some(),
            touching_entry: touching.map(|p| p.entry),
            stack_cnt: touching.map_or(0, |p| p.stack_cnt + 1),
        }
    }

    /// Flatten placed entries into rectangles, lowest level first, then by span.
    ///
    /// Part indices count up from 1 per [`SegInput::index`] in output order.
    pub fn to_rects(&self) -> Vec<SegRect<T>> {
        let mut rects = Vec::new();
        let mut part_cnts: HashMap<usize, usize> = HashMap::new();

        for (&level_coord, entries) in self.level_coords.iter().zip(&self.entries_by_level) {
            for Placed { entry, .. } in entries {
                let part_cnt = part_cnts.entry(entry.index()).or_insert(0);
                *part_cnt += 1;
                rects.push(SegRect {
                    seg: entry.seg,
                    span_start: entry.span_start,
                    span_end: entry.span_end,
                    thickness: entry.thickness,
                    part_index: *part_cnt,
                    level_coord,
                });
            }
        }
        rects
    }
}
