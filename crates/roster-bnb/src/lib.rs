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

//! Roster-BnB: branch-and-bound for slot staffing
//!
//! High-level crate that implements a deterministic, feasibility-first
//! branch-and-bound search assigning one worker to every slot under
//! per-worker qualification constraints. The solver stops at the first
//! feasible assignment; there is no objective to optimize.
//!
//! Core flow
//! - Provide a `roster_model::model::Model`.
//! - Optionally compose `roster_search` monitors (time limit, step budget,
//!   interrupt, logging).
//! - Run `bnb::BnbSolver::solve` and inspect the `SolverOutcome`.
//!
//! Design highlights
//! - A structural feasibility pre-check runs before any search and reports
//!   every slot no worker could ever staff.
//! - Branching always attacks the most constrained pending slots first: the
//!   node *complexity* is the minimum eligible-list length, and only slots
//!   at that minimum are expanded.
//! - Constraint propagation removes a committed worker from every other
//!   pending slot's eligible list; a list running empty kills the candidate
//!   immediately.
//! - A violation score (excess worker occurrences across the node) must
//!   strictly decrease on every surviving step, which bounds the search
//!   without any iteration cap.
//! - Branching is copy-on-write: every child owns its own pending/assigned
//!   data, so backtracking needs no undo logic.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `node`: the immutable-per-step search state.
//! - `eligibility`: eligible-worker queries and ordering.
//! - `score`: the violation scorer.
//! - `precheck`: the structural feasibility test.

pub mod bnb;
pub mod eligibility;
pub mod node;
pub mod precheck;
pub mod score;
