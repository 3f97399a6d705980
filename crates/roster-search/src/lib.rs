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

//! # Roster Search
//!
//! Engine-agnostic search infrastructure for the roster assignment solver.
//!
//! This crate owns everything a search engine reports or consults that is
//! not the search algorithm itself:
//!
//! - `result`: solver outcomes (`SolverResult`, `TerminationReason`,
//!   `SolverOutcome`).
//! - `stats`: lightweight counters and timing collected during a run.
//! - `monitor`: the `SearchMonitor` trait and a library of monitors for
//!   observing and controlling a running search (time limits, step budgets,
//!   external interrupts, logging, composition).
//!
//! Monitors are the cancellation mechanism of the engine: the search
//! consults `SearchMonitor::search_command` at every step and terminates
//! with a distinguished aborted outcome when any monitor requests it.

pub mod monitor;
pub mod result;
pub mod stats;
