use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(tentative distance, vertex index)` entries
///
/// There is no decrease-key: a vertex whose distance improves is pushed
/// again, and the superseded entry stays in the heap until it is popped.
/// Callers detect such stale entries by comparing the popped distance with
/// their authoritative distance record. Equal distances pop in ascending
/// vertex index order.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Float + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> Frontier<W>
where
    W: Float + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a vertex with its tentative distance
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance.into_inner()))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, vertex))| (*vertex, distance.into_inner()))
    }
}

impl<W> Default for Frontier<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
