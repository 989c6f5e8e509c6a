use std::{cmp::Ordering, collections::BinaryHeap};

use crate::model::NodeId;


/// Entry on the open list
/// Ordering is a total order: lowest f first, then lowest h, then earliest insertion
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub node: NodeId,
    pub g: f64, // cost at the time the entry was pushed
    pub h: f64,
    f: f64,
    seq: u64, // insertion counter
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the max-heap pops the cheapest entry
        other.f.total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}


/// Discovered but not yet expanded nodes, cheapest f on top
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenList {

    pub fn push(&mut self, node: NodeId, g: f64, h: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { node, g, h, f: g + h, seq });
    }

    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
