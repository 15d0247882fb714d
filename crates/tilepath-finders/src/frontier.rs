//! The search frontier (open list): an indexed binary min-heap.
//!
//! Entries are addressed by flat cell index. A position table maps every
//! cell to its slot in the heap, which makes decrease-key O(log n) without
//! leaving stale duplicates behind.

use std::cmp::Ordering;

const ABSENT: usize = usize::MAX;

/// Priority of a frontier entry.
///
/// Ordered by ascending `f`, then ascending `h`, then discovery order.
#[derive(Clone, Copy, Debug)]
struct Key {
    f: f64,
    h: f64,
    seq: u64,
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

#[derive(Clone, Copy, Debug)]
struct Entry {
    idx: usize,
    key: Key,
}

/// Min-heap of cells keyed by `(f, h, discovery order)` with decrease-key.
#[derive(Debug, Clone)]
pub struct Frontier {
    heap: Vec<Entry>,
    pos: Vec<usize>,
    next_seq: u64,
}

impl Frontier {
    /// Create a frontier able to hold any of `cells` cell indices.
    pub fn new(cells: usize) -> Self {
        Self {
            heap: Vec::new(),
            pos: vec![ABSENT; cells],
            next_seq: 0,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `idx` is currently in the frontier.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.pos.get(idx).is_some_and(|&p| p != ABSENT)
    }

    /// Insert `idx` with priority `f` and tie-breaker `h`. If `idx` is
    /// already present its priority is updated instead.
    pub fn push(&mut self, idx: usize, f: f64, h: f64) {
        if self.contains(idx) {
            self.update(idx, f, h);
            return;
        }
        let key = Key {
            f,
            h,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        let slot = self.heap.len();
        self.heap.push(Entry { idx, key });
        self.pos[idx] = slot;
        self.sift_up(slot);
    }

    /// Lower the priority of an entry already in the frontier. Keeps its
    /// discovery order. Does nothing if `idx` is absent.
    pub fn decrease_key(&mut self, idx: usize, f: f64, h: f64) {
        if self.contains(idx) {
            self.update(idx, f, h);
        }
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.pos[top.idx] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top.idx)
    }

    /// The entry with the lowest priority and its `f`, without removing it.
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.first().map(|e| (e.idx, e.key.f))
    }

    fn update(&mut self, idx: usize, f: f64, h: f64) {
        let slot = self.pos[idx];
        let old = self.heap[slot].key;
        let key = Key { f, h, seq: old.seq };
        self.heap[slot].key = key;
        if key < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].idx] = a;
        self.pos[self.heap[b].idx] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].key >= self.heap[parent].key {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].key < self.heap[left].key {
                right
            } else {
                left
            };
            if self.heap[child].key >= self.heap[slot].key {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
