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

//! Eligible-worker queries
//!
//! For a given slot, computes the workers qualified to fill it, ordered
//! ascending by the size of each worker's full declared qualification set.
//! A worker trained for few slots has few alternative placements, so it is
//! offered first; flexible workers are kept in reserve. Ties keep worker
//! declaration order.

use crate::node::EligibleWorkers;
use roster_model::{
    index::{SlotIndex, WorkerIndex},
    model::Model,
};

/// Returns the workers qualified for `slot`, most constrained first.
///
/// Pure function, O(workers) per call plus the sort.
///
/// # Panics
///
/// In debug builds, panics if `slot` is out of bounds for the model.
pub fn eligible_workers(model: &Model, slot: SlotIndex) -> EligibleWorkers {
    debug_assert!(
        slot.get() < model.num_slots(),
        "called `eligible_workers` with slot index out of bounds: the len is {} but the index is {}",
        model.num_slots(),
        slot.get()
    );

    let mut workers: EligibleWorkers = (0..model.num_workers())
        .map(WorkerIndex::new)
        .filter(|&worker| model.is_worker_qualified(worker, slot))
        .collect();

    // Stable sort: equal counts keep declaration order.
    workers.sort_by_key(|&worker| model.worker_qualification_count(worker));
    workers
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::model::ModelBuilder;

    fn wi(i: usize) -> WorkerIndex {
        WorkerIndex::new(i)
    }

    #[test]
    fn test_filters_by_slot_qualification() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(4, "The Metro").add_slot(6, "The Creed");
        builder
            .add_worker(2, "GM2", [4, 10])
            .add_worker(3, "GM3", [10, 4, 6])
            .add_worker(1, "GM1", [4]);
        let model = builder.build().expect("model should build");

        // Only GM3 is trained for slot id 6 (slot index 1).
        let workers = eligible_workers(&model, SlotIndex::new(1));
        assert_eq!(workers.as_slice(), &[wi(1)]);
    }

    #[test]
    fn test_orders_by_declared_qualification_count_ascending() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(4, "The Metro");
        builder
            .add_worker(2, "GM2", [4, 10])
            .add_worker(3, "GM3", [10, 4, 6])
            .add_worker(1, "GM1", [4]);
        let model = builder.build().expect("model should build");

        // All three are trained for slot id 4; GM1 (1 room) first,
        // then GM2 (2 rooms), then GM3 (3 rooms).
        let workers = eligible_workers(&model, SlotIndex::new(0));
        assert_eq!(workers.as_slice(), &[wi(2), wi(0), wi(1)]);
    }

    #[test]
    fn test_out_of_run_qualifications_still_widen_a_worker() {
        // Both workers can staff the only slot, but Mia is declared for
        // four more rooms outside this run and must come second.
        let mut builder = ModelBuilder::new();
        builder.add_slot(5, "The Catacombs");
        builder
            .add_worker(16, "Mia", [1, 3, 7, 5, 8])
            .add_worker(3, "David", [5]);
        let model = builder.build().expect("model should build");

        let workers = eligible_workers(&model, SlotIndex::new(0));
        assert_eq!(workers.as_slice(), &[wi(1), wi(0)]);
    }

    #[test]
    fn test_unqualified_slot_yields_empty_list() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(9, "The Earthquake");
        builder.add_worker(1, "John", [2, 3]);
        let model = builder.build().expect("model should build");

        let workers = eligible_workers(&model, SlotIndex::new(0));
        assert!(workers.is_empty());
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(11, "The Far West");
        builder
            .add_worker(11, "James", [11])
            .add_worker(13, "William", [11]);
        let model = builder.build().expect("model should build");

        let workers = eligible_workers(&model, SlotIndex::new(0));
        assert_eq!(workers.as_slice(), &[wi(0), wi(1)]);
    }
}
