// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Search state
//!
//! A `Node` is one snapshot of the branch-and-bound search: the slots still
//! pending (each with its remaining eligible workers), the commitments made
//! so far, and the violation score over both. Nodes have value semantics:
//! branching clones a parent into independent children, so sibling branches
//! never observe each other's mutations and backtracking needs no undo
//! logic.

use crate::{eligibility::eligible_workers, score::violation_score};
use roster_model::{
    index::{SlotIndex, WorkerIndex},
    model::Model,
};
use smallvec::SmallVec;

/// The workers still eligible for one pending slot, most constrained first.
/// Shrinks monotonically as a branch commits workers elsewhere.
pub type EligibleWorkers = SmallVec<[WorkerIndex; 8]>;

/// A committed (slot, worker) pair. Immutable for its branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignmentRecord {
    slot: SlotIndex,
    worker: WorkerIndex,
}

impl AssignmentRecord {
    #[inline]
    pub fn new(slot: SlotIndex, worker: WorkerIndex) -> Self {
        Self { slot, worker }
    }

    #[inline]
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    #[inline]
    pub fn worker(&self) -> WorkerIndex {
        self.worker
    }
}

impl std::fmt::Display for AssignmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssignmentRecord({} -> {})", self.slot, self.worker)
    }
}

/// A slot awaiting assignment together with its remaining eligible workers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSlot {
    slot: SlotIndex,
    eligible: EligibleWorkers,
}

impl PendingSlot {
    #[inline]
    pub fn new(slot: SlotIndex, eligible: EligibleWorkers) -> Self {
        Self { slot, eligible }
    }

    #[inline]
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// The workers still eligible for this slot within the current branch.
    #[inline]
    pub fn eligible(&self) -> &[WorkerIndex] {
        &self.eligible
    }

    #[inline]
    pub fn num_eligible(&self) -> usize {
        self.eligible.len()
    }

    /// Removes `worker` from the eligible list if present. Lists only ever
    /// shrink; they never grow back within a branch.
    #[inline]
    pub(crate) fn remove_worker(&mut self, worker: WorkerIndex) {
        self.eligible.retain(|&mut candidate| candidate != worker);
    }
}

/// One search state: pending slots, committed assignments, and the
/// violation score over their union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pending: Vec<PendingSlot>,
    assigned: Vec<AssignmentRecord>,
    score: u32,
}

impl Node {
    /// Creates a node from its parts, computing the violation score over
    /// `assigned ∪ pending`.
    pub fn new(pending: Vec<PendingSlot>, assigned: Vec<AssignmentRecord>) -> Self {
        let score = violation_score(
            assigned
                .iter()
                .map(|record| record.worker())
                .chain(pending.iter().flat_map(|slot| slot.eligible().iter().copied())),
        );

        Self {
            pending,
            assigned,
            score,
        }
    }

    /// Builds the root node for a model: every slot pending with its
    /// eligible workers, ordered so the slots with the fewest options come
    /// first. Nothing assigned yet.
    pub fn root(model: &Model) -> Self {
        let mut pending: Vec<PendingSlot> = (0..model.num_slots())
            .map(|index| {
                let slot = SlotIndex::new(index);
                PendingSlot::new(slot, eligible_workers(model, slot))
            })
            .collect();

        // Stable: slots with equal option counts keep declaration order.
        pending.sort_by_key(|slot| slot.num_eligible());

        Self::new(pending, Vec::new())
    }

    /// The slots not yet committed in this branch.
    #[inline]
    pub fn pending(&self) -> &[PendingSlot] {
        &self.pending
    }

    /// The commitments made so far in this branch.
    #[inline]
    pub fn assigned(&self) -> &[AssignmentRecord] {
        &self.assigned
    }

    /// The violation score over `assigned ∪ pending`.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The minimum eligible-list length among pending slots, or `None` if
    /// nothing is pending. A complexity of 0 means some pending slot can
    /// never be filled in this branch.
    #[inline]
    pub fn complexity(&self) -> Option<usize> {
        self.pending.iter().map(|slot| slot.num_eligible()).min()
    }

    /// A node is a solution iff nothing is pending and the score is 0.
    /// Both conditions are required: an empty pending set with a nonzero
    /// score means the commitments themselves collide.
    #[inline]
    pub fn is_solution(&self) -> bool {
        self.pending.is_empty() && self.score == 0
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node(pending: {}, assigned: {}, score: {})",
            self.pending.len(),
            self.assigned.len(),
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::model::ModelBuilder;

    fn wi(i: usize) -> WorkerIndex {
        WorkerIndex::new(i)
    }

    fn ps(slot: usize, workers: &[usize]) -> PendingSlot {
        PendingSlot::new(
            SlotIndex::new(slot),
            workers.iter().map(|&w| WorkerIndex::new(w)).collect(),
        )
    }

    fn ar(slot: usize, worker: usize) -> AssignmentRecord {
        AssignmentRecord::new(SlotIndex::new(slot), WorkerIndex::new(worker))
    }

    #[test]
    fn test_score_over_pending_only() {
        let pending = vec![
            ps(0, &[2]),
            ps(1, &[1]),
            ps(2, &[4]),
            ps(3, &[7, 3]),
            ps(4, &[5]),
            ps(5, &[6]),
            ps(6, &[8, 3]),
            ps(7, &[9]),
            ps(8, &[6]),
            ps(9, &[2]),
        ];
        let node = Node::new(pending, Vec::new());

        assert_eq!(node.score(), 3);
        assert_eq!(node.complexity(), Some(1));
        assert!(!node.is_solution());
    }

    #[test]
    fn test_score_over_assigned_and_pending() {
        let pending = vec![
            ps(3, &[7, 3]),
            ps(6, &[8, 3]),
            ps(7, &[9]),
            ps(8, &[6]),
            ps(9, &[2]),
        ];
        let assigned = vec![ar(0, 2), ar(1, 6), ar(2, 4), ar(4, 5), ar(5, 6)];
        let node = Node::new(pending, assigned);

        assert_eq!(node.score(), 4);
    }

    #[test]
    fn test_empty_node_is_a_solution() {
        let node = Node::new(Vec::new(), Vec::new());
        assert_eq!(node.score(), 0);
        assert_eq!(node.complexity(), None);
        assert!(node.is_solution());
    }

    #[test]
    fn test_colliding_commitments_are_not_a_solution() {
        let node = Node::new(Vec::new(), vec![ar(0, 3), ar(1, 3)]);
        assert_eq!(node.score(), 1);
        assert!(!node.is_solution());
    }

    #[test]
    fn test_complexity_is_the_minimum_list_length() {
        let node = Node::new(vec![ps(0, &[1, 2, 3]), ps(1, &[4, 5]), ps(2, &[])], Vec::new());
        assert_eq!(node.complexity(), Some(0));

        let node = Node::new(vec![ps(0, &[1, 2, 3]), ps(1, &[4, 5])], Vec::new());
        assert_eq!(node.complexity(), Some(2));
    }

    #[test]
    fn test_remove_worker_shrinks_the_list() {
        let mut slot = ps(0, &[1, 2, 3]);
        slot.remove_worker(wi(2));
        assert_eq!(slot.eligible(), &[wi(1), wi(3)]);

        // Removing an absent worker is a no-op.
        slot.remove_worker(wi(9));
        assert_eq!(slot.eligible(), &[wi(1), wi(3)]);
    }

    #[test]
    fn test_root_builds_eligibility_lists_for_every_slot() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(3, "Room1");
        builder.add_worker(2, "GM1", [3]);
        let model = builder.build().expect("model should build");

        let root = Node::root(&model);

        assert_eq!(root.pending().len(), 1);
        assert_eq!(root.pending()[0].slot(), SlotIndex::new(0));
        assert_eq!(root.pending()[0].eligible(), &[wi(0)]);
        assert!(root.assigned().is_empty());
        assert_eq!(root.score(), 0);
    }

    #[test]
    fn test_root_orders_slots_by_option_count() {
        let mut builder = ModelBuilder::new();
        builder
            .add_slot(1, "Wide")
            .add_slot(2, "Narrow")
            .add_slot(3, "Middle");
        builder
            .add_worker(10, "A", [1, 2, 3])
            .add_worker(11, "B", [1, 3])
            .add_worker(12, "C", [1]);
        let model = builder.build().expect("model should build");

        let root = Node::root(&model);

        // Slot id 2 has one option, slot id 3 two, slot id 1 three.
        let ids: Vec<u32> = root
            .pending()
            .iter()
            .map(|slot| model.slot_id(slot.slot()))
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
