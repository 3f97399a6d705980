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

use crate::{
    index::{SlotIndex, WorkerIndex},
    model::Model,
};

/// A complete, conflict-free assignment of workers to slots.
///
/// This struct uses a Structure of Arrays (SoA) layout.
/// Data is indexed directly by `SlotIndex` (i.e., index `i` holds the worker
/// assigned to slot `i`). Every worker index appears at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The assigned worker for each slot.
    /// `workers[s]` is the worker assigned to slot `s`.
    workers: Vec<WorkerIndex>,
}

/// One rendered row of an assignment: external ids and labels resolved
/// through the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignmentRow<'a> {
    pub slot_id: u32,
    pub slot_label: &'a str,
    pub worker_id: u32,
    pub worker_label: &'a str,
}

impl Assignment {
    /// Constructs a new `Assignment` from the per-slot worker vector.
    pub fn new(workers: Vec<WorkerIndex>) -> Self {
        Self { workers }
    }

    /// Returns the assigned worker for a specific slot.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `slot_index` is out of bounds.
    #[inline]
    pub fn worker_for_slot(&self, slot_index: SlotIndex) -> WorkerIndex {
        let index = slot_index.get();
        debug_assert!(
            index < self.num_slots(),
            "called `Assignment::worker_for_slot` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            index
        );

        self.workers[index]
    }

    /// Returns the number of slots in this assignment.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.workers.len()
    }

    /// Returns a slice of assigned workers for all slots.
    #[inline]
    pub fn workers(&self) -> &[WorkerIndex] {
        &self.workers
    }

    /// Resolves the assignment into rows of external ids and labels, one per
    /// slot, in slot-index order.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the model's slot count does not match this
    /// assignment.
    pub fn rows<'a>(&'a self, model: &'a Model) -> Vec<AssignmentRow<'a>> {
        debug_assert_eq!(
            self.num_slots(),
            model.num_slots(),
            "called `Assignment::rows` with a model of {} slots for an assignment of {} slots",
            model.num_slots(),
            self.num_slots()
        );

        self.workers
            .iter()
            .enumerate()
            .map(|(index, &worker)| {
                let slot = SlotIndex::new(index);
                AssignmentRow {
                    slot_id: model.slot_id(slot),
                    slot_label: model.slot_label(slot),
                    worker_id: model.worker_id(worker),
                    worker_label: model.worker_label(worker),
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Summary")?;

        if self.num_slots() == 0 {
            writeln!(f, "   (No slots assigned)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Slot", "Worker")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (index, worker) in self.workers.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", index, worker.get())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;

    fn si(i: usize) -> SlotIndex {
        SlotIndex::new(i)
    }

    fn wi(i: usize) -> WorkerIndex {
        WorkerIndex::new(i)
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let assignment = Assignment::new(vec![wi(2), wi(0), wi(1)]);

        assert_eq!(assignment.num_slots(), 3);
        assert_eq!(assignment.workers(), &[wi(2), wi(0), wi(1)]);
        assert_eq!(assignment.worker_for_slot(si(0)), wi(2));
        assert_eq!(assignment.worker_for_slot(si(1)), wi(0));
        assert_eq!(assignment.worker_for_slot(si(2)), wi(1));
    }

    #[test]
    fn test_empty_assignment_is_valid() {
        let assignment = Assignment::new(Vec::new());
        assert_eq!(assignment.num_slots(), 0);
        assert_eq!(assignment.workers(), &[]);
    }

    #[test]
    fn test_rows_resolve_ids_and_labels_through_model() {
        let mut builder = ModelBuilder::new();
        builder.add_slot(4, "The Metro").add_slot(10, "The Haunted Cinema");
        builder
            .add_worker(2, "Alice", [4, 10])
            .add_worker(6, "Sophia", [7, 10]);
        let model = builder.build().expect("model should build");

        // Slot 4 -> Sophia, slot 10 -> Alice.
        let assignment = Assignment::new(vec![wi(1), wi(0)]);
        let rows = assignment.rows(&model);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].slot_id, 4);
        assert_eq!(rows[0].slot_label, "The Metro");
        assert_eq!(rows[0].worker_id, 6);
        assert_eq!(rows[0].worker_label, "Sophia");
        assert_eq!(rows[1].slot_id, 10);
        assert_eq!(rows[1].worker_id, 2);
        assert_eq!(rows[1].worker_label, "Alice");
    }

    #[test]
    fn test_display_formatting_example() {
        let assignment = Assignment::new(vec![wi(1), wi(0)]);

        let displayed = format!("{}", assignment);

        let mut expected = String::new();
        expected.push_str("Assignment Summary\n");
        expected.push_str("   Slot       | Worker    \n");
        expected.push_str("   -----------+-----------\n");
        expected.push_str("   0          | 1         \n");
        expected.push_str("   1          | 0         \n");
        assert_eq!(displayed, expected);
    }
}
