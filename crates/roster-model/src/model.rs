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
    err::{DuplicateSlotIdError, DuplicateWorkerIdError, ModelError},
    index::{SlotIndex, WorkerIndex},
};
use fixedbitset::FixedBitSet;
use std::collections::{HashMap, HashSet};

/// The immutable data model describing slots, workers, and qualifications.
///
/// This struct holds all pre-validated, queryable data:
/// - `slot_ids[slot]` / `slot_labels[slot]`: external identity and opaque
///   label of each slot.
/// - `worker_ids[worker]` / `worker_labels[worker]`: external identity and
///   opaque label of each worker.
/// - `qualifications[worker]`: a bitset over slot indices marking the slots
///   this worker may fill **within this run**.
/// - `qualification_counts[worker]`: the size of the worker's full declared
///   qualification set. Declared entries that reference no slot of this run
///   still count here; they only drop out of the in-run bitset. The solver
///   orders eligible workers by this number (fewest alternatives first).
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated
///   `Model`.
#[derive(Clone)]
pub struct Model {
    slot_ids: Vec<u32>,                // len = num_slots
    slot_labels: Vec<String>,          // len = num_slots
    worker_ids: Vec<u32>,              // len = num_workers
    worker_labels: Vec<String>,        // len = num_workers
    qualifications: Vec<FixedBitSet>,  // len = num_workers, capacity = num_slots
    qualification_counts: Vec<usize>,  // len = num_workers
}

impl Model {
    /// Returns the number of slots in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roster_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::new();
    /// builder.add_slot(1, "The Heist").add_slot(2, "The Kidnapping");
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_slots(), 2);
    /// ```
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slot_ids.len()
    }

    /// Returns the number of workers in the model.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.worker_ids.len()
    }

    /// Returns the external id of the specified slot.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `slot_index` is not in `0..num_slots()`.
    #[inline]
    pub fn slot_id(&self, slot_index: SlotIndex) -> u32 {
        let index = slot_index.get();
        debug_assert!(
            index < self.num_slots(),
            "called `Model::slot_id` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            index
        );

        self.slot_ids[index]
    }

    /// Returns the label of the specified slot.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `slot_index` is not in `0..num_slots()`.
    #[inline]
    pub fn slot_label(&self, slot_index: SlotIndex) -> &str {
        let index = slot_index.get();
        debug_assert!(
            index < self.num_slots(),
            "called `Model::slot_label` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            index
        );

        &self.slot_labels[index]
    }

    /// Returns the external id of the specified worker.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `worker_index` is not in `0..num_workers()`.
    #[inline]
    pub fn worker_id(&self, worker_index: WorkerIndex) -> u32 {
        let index = worker_index.get();
        debug_assert!(
            index < self.num_workers(),
            "called `Model::worker_id` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            index
        );

        self.worker_ids[index]
    }

    /// Returns the label of the specified worker.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `worker_index` is not in `0..num_workers()`.
    #[inline]
    pub fn worker_label(&self, worker_index: WorkerIndex) -> &str {
        let index = worker_index.get();
        debug_assert!(
            index < self.num_workers(),
            "called `Model::worker_label` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            index
        );

        &self.worker_labels[index]
    }

    /// Returns `true` if the specified worker is qualified for the specified
    /// slot within this run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roster_model::model::ModelBuilder;
    /// # use roster_model::index::{SlotIndex, WorkerIndex};
    ///
    /// let mut builder = ModelBuilder::new();
    /// builder.add_slot(4, "The Metro");
    /// builder.add_worker(2, "Alice", [4, 10]);
    /// let model = builder.build().unwrap();
    /// assert!(model.is_worker_qualified(WorkerIndex::new(0), SlotIndex::new(0)));
    /// ```
    ///
    /// # Panics
    ///
    /// In debug builds, panics if either index is out of bounds.
    #[inline]
    pub fn is_worker_qualified(&self, worker_index: WorkerIndex, slot_index: SlotIndex) -> bool {
        debug_assert!(
            worker_index.get() < self.num_workers(),
            "called `Model::is_worker_qualified` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            worker_index.get()
        );
        debug_assert!(
            slot_index.get() < self.num_slots(),
            "called `Model::is_worker_qualified` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            slot_index.get()
        );

        self.qualifications[worker_index.get()].contains(slot_index.get())
    }

    /// Returns the in-run qualification bitset of the specified worker.
    /// Bit `i` is set iff the worker may fill the slot with index `i`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `worker_index` is not in `0..num_workers()`.
    #[inline]
    pub fn worker_qualifications(&self, worker_index: WorkerIndex) -> &FixedBitSet {
        let index = worker_index.get();
        debug_assert!(
            index < self.num_workers(),
            "called `Model::worker_qualifications` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            index
        );

        &self.qualifications[index]
    }

    /// Returns the size of the worker's full declared qualification set.
    ///
    /// This counts every distinct slot id the worker was declared qualified
    /// for, including ids that name no slot of this run. A worker trained
    /// for many rooms is flexible even when only some of those rooms are
    /// staffed today, and the eligibility ordering relies on that.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `worker_index` is not in `0..num_workers()`.
    #[inline]
    pub fn worker_qualification_count(&self, worker_index: WorkerIndex) -> usize {
        let index = worker_index.get();
        debug_assert!(
            index < self.num_workers(),
            "called `Model::worker_qualification_count` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            index
        );

        self.qualification_counts[index]
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("slot_ids", &self.slot_ids)
            .field("slot_labels", &self.slot_labels)
            .field("worker_ids", &self.worker_ids)
            .field("worker_labels", &self.worker_labels)
            .field("qualification_counts", &self.qualification_counts)
            .finish()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_slots: {}, num_workers: {})",
            self.num_slots(),
            self.num_workers()
        )
    }
}

/// A mutable builder for [`Model`].
///
/// The builder accepts external ids and labels in declaration order and
/// densifies them into typed indices at build time. Nothing is assumed to
/// exist until declared: a worker with no qualification entry matching a
/// declared slot simply cannot fill anything in this run.
///
/// # Examples
///
/// ```rust
/// # use roster_model::model::ModelBuilder;
///
/// let mut builder = ModelBuilder::new();
/// builder.add_slot(1, "The Heist");
/// builder.add_worker(7, "Mia", [1, 3, 7]);
/// let model = builder.build().unwrap();
/// assert_eq!(model.num_slots(), 1);
/// assert_eq!(model.num_workers(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    slots: Vec<(u32, String)>,
    workers: Vec<(u32, String, Vec<u32>)>,
}

impl ModelBuilder {
    /// Creates a new, empty `ModelBuilder`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            workers: Vec::new(),
        }
    }

    /// Returns the number of slots declared so far.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of workers declared so far.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Declares a slot with the given external id and label.
    ///
    /// Slot indices are handed out in declaration order.
    #[inline]
    pub fn add_slot<L>(&mut self, id: u32, label: L) -> &mut Self
    where
        L: Into<String>,
    {
        self.slots.push((id, label.into()));
        self
    }

    /// Declares a worker with the given external id, label, and qualified
    /// slot ids.
    ///
    /// Qualification entries that reference no declared slot are legal: they
    /// contribute to the worker's declared qualification count but not to
    /// in-run eligibility.
    #[inline]
    pub fn add_worker<L, I>(&mut self, id: u32, label: L, qualified_slot_ids: I) -> &mut Self
    where
        L: Into<String>,
        I: IntoIterator<Item = u32>,
    {
        self.workers
            .push((id, label.into(), qualified_slot_ids.into_iter().collect()));
        self
    }

    /// Validates the declared input and builds the immutable [`Model`].
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if two slots or two workers share an
    /// external id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roster_model::model::ModelBuilder;
    /// # use roster_model::err::ModelError;
    ///
    /// let mut builder = ModelBuilder::new();
    /// builder.add_slot(1, "The Heist").add_slot(1, "The Metro");
    /// assert!(matches!(
    ///     builder.build(),
    ///     Err(ModelError::DuplicateSlotId(_))
    /// ));
    /// ```
    pub fn build(&self) -> Result<Model, ModelError> {
        let mut slot_index_by_id: HashMap<u32, usize> = HashMap::with_capacity(self.slots.len());
        for (index, (id, _)) in self.slots.iter().enumerate() {
            if slot_index_by_id.insert(*id, index).is_some() {
                return Err(DuplicateSlotIdError::new(*id).into());
            }
        }

        let mut seen_worker_ids: HashSet<u32> = HashSet::with_capacity(self.workers.len());
        for (id, _, _) in self.workers.iter() {
            if !seen_worker_ids.insert(*id) {
                return Err(DuplicateWorkerIdError::new(*id).into());
            }
        }

        let num_slots = self.slots.len();
        let mut qualifications = Vec::with_capacity(self.workers.len());
        let mut qualification_counts = Vec::with_capacity(self.workers.len());

        for (_, _, declared) in self.workers.iter() {
            let mut bits = FixedBitSet::with_capacity(num_slots);
            let mut distinct: Vec<u32> = Vec::with_capacity(declared.len());
            for &slot_id in declared {
                if distinct.contains(&slot_id) {
                    continue;
                }
                distinct.push(slot_id);
                if let Some(&slot_index) = slot_index_by_id.get(&slot_id) {
                    bits.insert(slot_index);
                }
            }
            qualifications.push(bits);
            qualification_counts.push(distinct.len());
        }

        Ok(Model {
            slot_ids: self.slots.iter().map(|(id, _)| *id).collect(),
            slot_labels: self.slots.iter().map(|(_, label)| label.clone()).collect(),
            worker_ids: self.workers.iter().map(|(id, _, _)| *id).collect(),
            worker_labels: self
                .workers
                .iter()
                .map(|(_, label, _)| label.clone())
                .collect(),
            qualifications,
            qualification_counts,
        })
    }
}
