//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::bitset::STATE_CAPACITY;

pub(crate) fn ensure_state_index(index: usize) {
    if index >= STATE_CAPACITY {
        panic!(
            "StateSet: index {index} out of range (capacity is {STATE_CAPACITY}, \
             callers must check automaton size before building subsets)"
        );
    }
}
