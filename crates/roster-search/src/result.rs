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

use crate::stats::SolverStatistics;
use roster_model::solution::Assignment;

/// The result of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult {
    /// A complete, conflict-free assignment was found.
    Solved(Assignment),
    /// The problem is structurally infeasible: the contained external slot
    /// ids (ascending) can never be staffed by any declared worker. The
    /// search itself never ran.
    Unstaffable(Vec<u32>),
    /// The whole search tree was explored without finding an assignment.
    Exhausted,
    /// The solver terminated early (limit, interrupt) without finding a
    /// solution and without proving exhaustion.
    Unknown,
}

impl SolverResult {
    /// Returns the assignment if one was found.
    #[inline]
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolverResult::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Solved(assignment) => {
                write!(f, "Solved(slots={})", assignment.num_slots())
            }
            SolverResult::Unstaffable(slot_ids) => {
                write!(f, "Slots will never be staffed {:?}", slot_ids)
            }
            SolverResult::Exhausted => write!(f, "Exhausted"),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the solver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A feasible assignment was found; the search halts at the first one.
    SolutionFound,
    /// The pre-check proved the problem infeasible before any search.
    InfeasibilityProven,
    /// Every branch from the root was pruned or dead-ended.
    SearchExhausted,
    /// A search limit or interrupt fired. The string names the cause.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::SolutionFound => write!(f, "Solution Found"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::SearchExhausted => write!(f, "Search Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination: the result value, the reason the
/// run stopped, and the statistics collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    result: SolverResult,
    termination_reason: TerminationReason,
    statistics: SolverStatistics,
}

impl SolverOutcome {
    #[inline]
    pub fn solved(assignment: Assignment, statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Solved(assignment),
            termination_reason: TerminationReason::SolutionFound,
            statistics,
        }
    }

    #[inline]
    pub fn unstaffable(slot_ids: Vec<u32>, statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Unstaffable(slot_ids),
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    #[inline]
    pub fn exhausted(statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Exhausted,
            termination_reason: TerminationReason::SearchExhausted,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Unknown,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Returns `true` if the run produced an assignment.
    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(self.result, SolverResult::Solved(_))
    }

    /// Returns `true` if the run proved there is no assignment, either
    /// structurally or by exhausting the search tree.
    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self.result,
            SolverResult::Unstaffable(_) | SolverResult::Exhausted
        )
    }
}

impl std::fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverOutcome(result: {}, reason: {})",
            self.result, self.termination_reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::index::WorkerIndex;

    fn stats() -> SolverStatistics {
        SolverStatistics::default()
    }

    #[test]
    fn test_solved_outcome_carries_assignment_and_reason() {
        let assignment = Assignment::new(vec![WorkerIndex::new(0)]);
        let outcome = SolverOutcome::solved(assignment.clone(), stats());

        assert!(outcome.has_solution());
        assert!(!outcome.is_infeasible());
        assert_eq!(outcome.result().assignment(), Some(&assignment));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::SolutionFound
        );
    }

    #[test]
    fn test_unstaffable_outcome_names_slot_ids() {
        let outcome = SolverOutcome::unstaffable(vec![1, 7], stats());

        assert!(!outcome.has_solution());
        assert!(outcome.is_infeasible());
        match outcome.result() {
            SolverResult::Unstaffable(ids) => assert_eq!(ids, &[1, 7]),
            other => panic!("expected Unstaffable, got {:?}", other),
        }
        assert_eq!(
            format!("{}", outcome.result()),
            "Slots will never be staffed [1, 7]"
        );
    }

    #[test]
    fn test_exhausted_outcome_has_no_solution_and_no_reason_payload() {
        let outcome = SolverOutcome::exhausted(stats());

        assert!(!outcome.has_solution());
        assert!(outcome.is_infeasible());
        assert_eq!(outcome.result(), &SolverResult::Exhausted);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::SearchExhausted
        );
    }

    #[test]
    fn test_aborted_outcome_is_neither_solved_nor_infeasible() {
        let outcome = SolverOutcome::aborted("time limit reached", stats());

        assert!(!outcome.has_solution());
        assert!(!outcome.is_infeasible());
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }
}
