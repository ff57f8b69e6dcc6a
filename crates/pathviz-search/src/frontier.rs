use std::collections::BinaryHeap;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `(f, seq)` first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set: a priority queue keyed by `(f, insertion sequence)` plus a
/// membership table indexed by cell.
///
/// Sequence numbers are handed out once and never reused, so among equal
/// f-scores the earliest insertion wins.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    members: Vec<bool>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: vec![false; cells],
            next_seq: 0,
        }
    }

    /// Insert cell `idx` with priority `f`. The caller checks membership
    /// first; a cell is never queued twice.
    pub(crate) fn push(&mut self, idx: usize, f: i32) {
        debug_assert!(!self.members[idx], "cell {idx} queued twice");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.members[idx] = true;
        self.heap.push(Entry { f, seq, idx });
    }

    /// Remove and return the best entry.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        let entry = self.heap.pop()?;
        self.members[entry.idx] = false;
        Some(entry)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.members[idx]
    }

    /// Total insertions so far.
    #[inline]
    pub(crate) fn insertions(&self) -> u64 {
        self.next_seq
    }
}
