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

//! # Roster Model
//!
//! **The Core Domain Model for the Roster Assignment Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! slot staffing problem: a fixed set of concurrent slots, a fixed set of
//! workers, and per-worker qualification sets restricting which slots each
//! worker may fill. It serves as the data interchange layer between the
//! problem definition (user input) and the solving engine (`roster_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Strongly-typed wrappers (`SlotIndex`, `WorkerIndex`) to
//!   prevent logical indexing errors.
//! * **`model`**: The `Model` (immutable, optimized for solving) and
//!   `ModelBuilder` (mutable, optimized for configuration).
//! * **`solution`**: The output format: one worker per slot, renderable as
//!   (slot id, slot label, worker id, worker label) rows.
//! * **`err`**: Construction errors surfaced by the builder.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally
//!     use a `SlotIndex` to access a worker.
//! 2.  **Dense Layout**: External ids are densified once at build time;
//!     qualification sets become bitsets over slot indices so the solver
//!     never touches a hash map in its inner loop.
//! 3.  **Fail-Fast**: The builder validates inputs eagerly so the solver
//!     never encounters an invalid model.

pub mod err;
pub mod index;
pub mod model;
pub mod solution;
