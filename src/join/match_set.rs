//! Per-call record of which probed rows matched at least once.

/// Fixed-size bitset over row positions of one table.
#[derive(Debug, Clone)]
pub struct MatchSet {
    bits: Vec<u64>,
    len: usize,
}

impl MatchSet {
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < self.len);
        self.bits[position / 64] |= 1u64 << (position % 64);
    }

    pub fn contains(&self, position: usize) -> bool {
        position < self.len && self.bits[position / 64] & (1u64 << (position % 64)) != 0
    }

    /// Positions never inserted, ascending.
    pub fn unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&position| !self.contains(position))
    }
}
