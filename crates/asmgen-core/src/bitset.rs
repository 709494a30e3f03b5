//! Fixed-width bit-set over NFA state ids.
//!
//! Subset construction keys DFA states by the set of NFA states they stand
//! for, so the set must be cheap to hash and compare. The width is fixed at
//! [`STATE_CAPACITY`]; an automaton with more states cannot be determinized.

use std::fmt;

/// Number of distinct state ids a [`StateSet`] can hold.
pub const STATE_CAPACITY: usize = 1024;

const WORD_BITS: usize = u64::BITS as usize;
const WORDS: usize = STATE_CAPACITY / WORD_BITS;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    words: [u64; WORDS],
}

impl Default for StateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSet {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Set containing exactly `index`.
    pub fn singleton(index: usize) -> Self {
        let mut set = Self::new();
        set.set(index, true);
        set
    }

    pub fn set(&mut self, index: usize, value: bool) {
        let (word, mask) = Self::locate(index);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    pub fn get(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    pub fn set_all(&mut self, value: bool) {
        let fill = if value { u64::MAX } else { 0 };
        self.words = [fill; WORDS];
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut words = self.words;
        for (word, rhs) in words.iter_mut().zip(other.words) {
            *word |= rhs;
        }
        Self { words }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let mut words = self.words;
        for (word, rhs) in words.iter_mut().zip(other.words) {
            *word &= rhs;
        }
        Self { words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }

    fn locate(index: usize) -> (usize, u64) {
        crate::invariants::ensure_state_index(index);
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for StateSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.set(index, true);
        }
        set
    }
}
