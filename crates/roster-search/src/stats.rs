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

use std::time::Duration;

/// Statistics collected during the execution of the assignment solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Total subtrees exhausted without a solution.
    pub backtracks: u64,
    /// Total distinct (slot, worker) branching candidates generated.
    pub decisions_generated: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Candidates discarded because a slot lost its last eligible worker or
    /// a batch of forced commits collided on one worker.
    pub prunings_dead_end: u64,
    /// Candidates discarded because the violation score failed to strictly
    /// decrease while slots were still pending.
    pub prunings_no_progress: u64,
    /// Total solutions found during the search (0 or 1; the search halts at
    /// the first).
    pub solutions_found: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl SolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_decision_generated(&mut self) {
        self.decisions_generated = self.decisions_generated.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_pruning_dead_end(&mut self) {
        self.prunings_dead_end = self.prunings_dead_end.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_no_progress(&mut self) {
        self.prunings_no_progress = self.prunings_no_progress.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Roster Solver Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:            {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Decisions generated:   {}", self.decisions_generated)?;
        writeln!(f, "  Prunings (dead end):   {}", self.prunings_dead_end)?;
        writeln!(f, "  Prunings (no progress):{}", self.prunings_no_progress)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats = SolverStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.decisions_generated, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.prunings_dead_end, 0);
        assert_eq!(stats.prunings_no_progress, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = SolverStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_backtrack();
        stats.on_decision_generated();
        stats.on_pruning_dead_end();
        stats.on_pruning_no_progress();
        stats.on_solution_found();

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.decisions_generated, 1);
        assert_eq!(stats.prunings_dead_end, 1);
        assert_eq!(stats.prunings_no_progress, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_depth_update_keeps_maximum() {
        let mut stats = SolverStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(7);
        stats.on_depth_update(5);
        assert_eq!(stats.max_depth, 7);
    }

    #[test]
    fn test_set_total_time() {
        let mut stats = SolverStatistics::default();
        stats.set_total_time(Duration::from_millis(150));
        assert_eq!(stats.time_total, Duration::from_millis(150));
    }
}
