// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day grid with an event limit.
//!
//! Lay out one week row of all-day events with at most three rows per day,
//! split events that do not fit, and compute "+N more" links.
//!
//! Run:
//! - `cargo run -p understory_demos --example seg_hierarchy_day_grid`

use kurbo::Rect;
use understory_seg_hierarchy::{
    HierarchyOptions, SegHierarchy, SegInput, SpanAxis, group_intersecting_entries,
};

const DAY_WIDTH: f64 = 120.0;
const ROW_HEIGHT: f64 = 22.0;
const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn main() {
    // (title, first day, last day exclusive), longest first as a calendar would sort them.
    let events = [
        ("Conference", 1.0, 5.0),
        ("Vacation", 3.0, 7.0),
        ("Sprint", 0.0, 4.0),
        ("Standup", 2.0, 3.0),
        ("Review", 2.0, 3.0),
        ("Lunch", 4.0, 5.0),
    ];
    let inputs: Vec<SegInput<f64>> = events
        .iter()
        .enumerate()
        .map(|(i, &(_, start, end))| SegInput::new(i, start, end, 1.0))
        .collect();

    let mut hierarchy = SegHierarchy::with_options(HierarchyOptions {
        allow_reslicing: true,
        max_stack_cnt: Some(3),
        ..Default::default()
    });
    let hidden = hierarchy
        .try_add_segs(&inputs)
        .expect("events have non-empty spans");

    for rect in hierarchy.to_rects() {
        let title = events[rect.index()].0;
        let unit = rect.to_rect(SpanAxis::Horizontal);
        let px = Rect::new(
            unit.x0 * DAY_WIDTH,
            unit.y0 * ROW_HEIGHT,
            unit.x1 * DAY_WIDTH,
            unit.y1 * ROW_HEIGHT,
        );
        println!("{title} (part {}): {px:?}", rect.part_index);
    }

    for group in group_intersecting_entries(&hidden) {
        let titles: Vec<&str> = group.entries.iter().map(|e| events[e.index()].0).collect();
        println!(
            "+{} more on {}..{}: {titles:?}",
            group.entries.len(),
            DAYS[group.span_start as usize],
            DAYS[group.span_end as usize - 1],
        );
    }
}
