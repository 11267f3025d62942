// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping of hidden entries for overflow affordances.
//!
//! A renderer typically shows one "+N more" control per cluster of hidden
//! entries rather than one per entry. [`group_intersecting_entries`] builds
//! those clusters: entries whose spans overlap, directly or through a chain of
//! other entries, end up in the same group.

use alloc::vec::Vec;

use crate::types::{Scalar, SegEntry, intersect_spans, join_spans};

/// Entries whose spans transitively overlap, with the span covering all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct SegEntryGroup<T> {
    /// Start of the joined span (inclusive).
    pub span_start: T,
    /// End of the joined span (exclusive).
    pub span_end: T,
    /// Member entries, earlier groups' members first.
    pub entries: Vec<SegEntry<T>>,
}

/// Cluster `entries` by span overlap.
///
/// Each entry absorbs every existing group it overlaps. Groups come out in
/// the order their last member was added; touching spans stay separate.
pub fn group_intersecting_entries<T: Scalar>(entries: &[SegEntry<T>]) -> Vec<SegEntryGroup<T>> {
    let mut groups: Vec<SegEntryGroup<T>> = Vec::new();

    for entry in entries {
        let mut hungry = SegEntryGroup {
            span_start: entry.span_start,
            span_end: entry.span_end,
            entries: Vec::new(),
        };
        let mut eaten = Vec::new();

        groups.retain_mut(|group| {
            let overlaps = intersect_spans(
                (group.span_start, group.span_end),
                (hungry.span_start, hungry.span_end),
            )
            .is_some();
            if overlaps {
                (hungry.span_start, hungry.span_end) = join_spans(
                    (group.span_start, group.span_end),
                    (hungry.span_start, hungry.span_end),
                );
                eaten.append(&mut group.entries);
            }
            !overlaps
        });

        eaten.push(*entry);
        hungry.entries = eaten;
        groups.push(hungry);
    }
    groups
}
