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

//! Periodic progress logging through `tracing`.
//!
//! Emits an `info` line every `log_interval` (gated by a step bitmask so the
//! clock is not read on every step), plus lifecycle lines on enter, solution
//! and exit. Install a `tracing` subscriber in the host application to see
//! the output; the monitor itself never configures one.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use roster_model::{model::Model, solution::Assignment};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct LogMonitor {
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    start_time: Instant,
    last_log_time: Instant,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            log_interval,
            clock_check_mask,
            steps: 0,
            start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 0xFFF)
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, model: &Model) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        info!(
            "search started: {} slots, {} workers",
            model.num_slots(),
            model.num_workers()
        );
    }

    fn on_exit_search(&mut self) {
        info!(
            "search finished after {:.2?} ({} steps)",
            self.start_time.elapsed(),
            self.steps
        );
    }

    fn on_solution_found(&mut self, assignment: &Assignment) {
        info!(
            "solution found after {:.2?}: {} slots staffed",
            self.start_time.elapsed(),
            assignment.num_slots()
        );
    }

    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            info!(
                "search in progress: {} steps, {:.1}s elapsed",
                self.steps,
                self.start_time.elapsed().as_secs_f32()
            );
            self.last_log_time = Instant::now();
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_monitor_never_terminates() {
        let mut mon = LogMonitor::default();
        for _ in 0..100 {
            mon.on_step();
        }
        assert!(matches!(mon.search_command(), SearchCommand::Continue));
    }

    #[test]
    fn test_enter_resets_step_counter() {
        let mut builder = roster_model::model::ModelBuilder::new();
        builder.add_slot(1, "Room1");
        let model = builder.build().expect("model should build");

        let mut mon = LogMonitor::default();
        mon.on_step();
        mon.on_step();
        mon.on_enter_search(&model);
        assert_eq!(mon.steps, 0);
    }
}
