use grid_util::point::Point;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    point: Point,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element, so every key is compared reversed: smallest
        // estimate first, then smallest cost, then the earliest pushed entry
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-first frontier of points keyed by an estimated total cost and the cost so far. Entries
/// with equal keys come out in insertion order, which keeps searches deterministic. A point may
/// be pushed again after its cost improved; callers skip the stale entries when they pop them.
pub(crate) struct CostQueue<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    pushed: usize,
}

impl<K: Ord + Copy + Zero> CostQueue<K> {
    /// A queue holding only `start` at zero cost.
    pub fn new(start: Point) -> CostQueue<K> {
        let mut queue = CostQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        };
        queue.push(start, Zero::zero(), Zero::zero());
        queue
    }

    pub fn push(&mut self, point: Point, estimated_cost: K, cost: K) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.pushed,
            point,
        });
        self.pushed += 1;
    }

    /// Removes the entry with the smallest key and returns its point and cost so far.
    pub fn pop(&mut self) -> Option<(Point, K)> {
        self.heap.pop().map(|holder| (holder.point, holder.cost))
    }
}
