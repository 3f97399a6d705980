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

//! # Step Limit Monitor
//!
//! A monitor that terminates the search after a fixed number of steps.
//! A step is one node expansion, so the budget bounds the explored tree
//! size independently of wall-clock speed. Useful for reproducible
//! cancellation in tests and for callers that need a deterministic cap.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use roster_model::{model::Model, solution::Assignment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLimitMonitor {
    step_limit: u64,
    steps: u64,
}

impl StepLimitMonitor {
    /// Creates a new `StepLimitMonitor` with the given step budget.
    /// The search terminates once the budget is spent.
    #[inline]
    pub fn new(step_limit: u64) -> Self {
        Self {
            step_limit,
            steps: 0,
        }
    }

    /// Returns the number of steps observed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl SearchMonitor for StepLimitMonitor {
    fn name(&self) -> &str {
        "StepLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model) {
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _assignment: &Assignment) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.steps >= self.step_limit {
            return SearchCommand::Terminate("step limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_the_budget() {
        let mut mon = StepLimitMonitor::new(3);
        mon.on_step();
        mon.on_step();
        assert!(matches!(mon.search_command(), SearchCommand::Continue));
    }

    #[test]
    fn test_terminates_once_budget_is_spent() {
        let mut mon = StepLimitMonitor::new(2);
        mon.on_step();
        mon.on_step();
        match mon.search_command() {
            SearchCommand::Terminate(msg) => assert_eq!(msg, "step limit reached"),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_budget_terminates_immediately() {
        let mon = StepLimitMonitor::new(0);
        assert!(matches!(mon.search_command(), SearchCommand::Terminate(_)));
    }

    #[test]
    fn test_on_enter_search_resets_counter() {
        let mut builder = roster_model::model::ModelBuilder::new();
        builder.add_slot(1, "Room1");
        let model = builder.build().expect("model should build");

        let mut mon = StepLimitMonitor::new(5);
        mon.on_step();
        mon.on_step();
        mon.on_enter_search(&model);
        assert_eq!(mon.steps(), 0);
    }
}
