// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seg hierarchy basics.
//!
//! Stack a handful of mixed-thickness segments and print where they land.
//!
//! Run:
//! - `cargo run -p understory_demos --example seg_hierarchy_basics`

use understory_seg_hierarchy::{SegEntry, SegHierarchy, SegInput};

fn main() {
    let inputs = [
        SegInput::new(0, 0, 3, 2),
        SegInput::new(1, 0, 1, 1),
        SegInput::new(2, 1, 2, 10),
        SegInput::new(3, 2, 3, 1),
        SegInput::new(4, 3, 4, 10),
        SegInput::new(5, 4, 5, 1),
    ];
    let mut hierarchy: SegHierarchy<i64> = SegHierarchy::new();
    let hidden = hierarchy.add_segs(&inputs);
    assert!(hidden.is_empty(), "nothing is capped");

    // Preview the wide segment before committing it.
    let wide = SegInput::new(6, 0, 5, 2);
    let preview = hierarchy.find_insertion(&SegEntry::from_input(wide));
    println!(
        "segment 6 would land at {} with stacking depth {}",
        preview.level_coord, preview.stack_cnt
    );
    hierarchy.add_segs(&[wide]);

    println!("levels: {:?}", hierarchy.level_coords());
    for rect in hierarchy.to_rects() {
        println!(
            "seg {}.{}: span {}..{} at {} (thickness {})",
            rect.index(),
            rect.part_index,
            rect.span_start,
            rect.span_end,
            rect.level_coord,
            rect.thickness
        );
    }
}
