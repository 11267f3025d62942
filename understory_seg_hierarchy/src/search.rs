// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary search over span-ordered sequences.

/// Where a key falls in an ordered sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// Index of the matching item, or the index the key would be inserted at.
    pub index: usize,
    /// Whether the item at `index` has exactly the searched key.
    pub exact: bool,
}

impl SearchHit {
    /// First index whose key is strictly greater than the searched key.
    ///
    /// Keys in a level are span ends, so an exact hit is an entry that ends
    /// where the candidate starts. That is adjacency, not overlap.
    pub const fn past_exact(self) -> usize {
        self.index + self.exact as usize
    }
}

/// Locate `value` in `items`, which must be ascending by `key`.
///
/// Keys are expected to be distinct, as span ends within one level are.
pub fn search_by_key<I, T, F>(items: &[I], value: T, key: F) -> SearchHit
where
    T: PartialOrd + Copy,
    F: Fn(&I) -> T,
{
    let miss = |index| SearchHit {
        index,
        exact: false,
    };

    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return miss(0);
    };
    if value < key(first) {
        return miss(0);
    }
    if value > key(last) {
        return miss(items.len());
    }

    let mut start = 0;
    let mut end = items.len();
    while start < end {
        let middle = start + (end - start) / 2;
        let middle_value = key(&items[middle]);
        if value < middle_value {
            end = middle;
        } else if value > middle_value {
            start = middle + 1;
        } else {
            return SearchHit {
                index: middle,
                exact: true,
            };
        }
    }
    miss(start)
}
