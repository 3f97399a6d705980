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

//! Structural feasibility pre-check
//!
//! Before any search, the union of all workers' in-run qualification sets
//! is compared against the set of slots requiring staffing. A slot outside
//! that union can never be filled, so the search is skipped entirely and
//! the caller gets the offending slot ids instead of paying for a full
//! failed search. O(workers + slots).

use fixedbitset::FixedBitSet;
use roster_model::{
    index::{SlotIndex, WorkerIndex},
    model::Model,
};

/// Returns the external ids (ascending) of every slot that no declared
/// worker is qualified for. An empty result means the pre-check passes.
pub fn unstaffable_slots(model: &Model) -> Vec<u32> {
    let mut coverage = FixedBitSet::with_capacity(model.num_slots());
    for index in 0..model.num_workers() {
        coverage.union_with(model.worker_qualifications(WorkerIndex::new(index)));
    }

    let mut slot_ids: Vec<u32> = (0..model.num_slots())
        .filter(|&index| !coverage.contains(index))
        .map(|index| model.slot_id(SlotIndex::new(index)))
        .collect();

    slot_ids.sort_unstable();
    slot_ids
}
