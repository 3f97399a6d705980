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

//! Branch-and-bound solver for the slot staffing problem.
//!
//! This module implements the search engine that explores feasible
//! worker-to-slot assignments until the first complete, conflict-free
//! assignment is found or the tree is exhausted. The engine always expands
//! the most constrained pending slots (minimum eligible-list length), and a
//! committed worker is propagated out of every other pending slot's list
//! before a child is accepted.
//!
//! Every branching step returns an explicit [`StepOutcome`] tag instead of
//! signaling through errors: a pruned candidate is an expected, frequent
//! event, local to one branch, and recovered from by trying the next
//! sibling. Only the upfront structural pre-check and the exhaustion of the
//! whole tree are surfaced to the caller.
//!
//! Children are value copies of their parent. Sibling branches share
//! nothing mutable, so backtracking is simply returning from a recursive
//! call. Memory is proportional to the recursion depth times the node size;
//! siblings are discarded as soon as their subtree returns.

use crate::{
    node::{AssignmentRecord, Node, PendingSlot},
    precheck::unstaffable_slots,
    score::violation_score,
};
use roster_model::{index::WorkerIndex, model::Model, solution::Assignment};
use roster_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::SolverOutcome,
    stats::SolverStatistics,
};
use tracing::debug;

/// The result of one branching step.
///
/// The driver inspects the tag: `Committed` children are explored
/// depth-first, `Dead` and `NoProgress` candidates are discarded and the
/// search moves on to the next sibling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The commitments were applied and propagated; the child is viable so
    /// far.
    Committed(Node),
    /// The candidate is inconsistent: propagation emptied a pending slot's
    /// eligible list, or a batch of forced commits collided on one worker.
    Dead,
    /// The candidate failed to strictly reduce the violation score while
    /// slots remain pending. Exploring it further could cycle, so it is
    /// abandoned.
    NoProgress,
}

/// Batch-commits every pending slot that has exactly one eligible worker
/// left, producing the single deterministic child of a complexity-1 node.
///
/// The parent is never modified; the child owns independent copies of the
/// pending and assigned data.
pub fn commit_forced(parent: &Node) -> StepOutcome {
    let picks: Vec<(usize, WorkerIndex)> = parent
        .pending()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.num_eligible() == 1)
        .map(|(position, slot)| (position, slot.eligible()[0]))
        .collect();

    debug_assert!(
        !picks.is_empty(),
        "called `commit_forced` on a node without forced slots"
    );

    commit(parent, &picks)
}

/// Commits a single (slot, worker) pair, identified by the slot's position
/// in `parent.pending()`, producing one fan-out candidate of a
/// complexity-n node.
///
/// # Panics
///
/// In debug builds, panics if `position` is out of bounds or `worker` is
/// not eligible for the slot at that position.
pub fn commit_one(parent: &Node, position: usize, worker: WorkerIndex) -> StepOutcome {
    debug_assert!(
        position < parent.pending().len(),
        "called `commit_one` with position out of bounds: the len is {} but the position is {}",
        parent.pending().len(),
        position
    );
    debug_assert!(
        parent.pending()[position].eligible().contains(&worker),
        "called `commit_one` with worker {} not eligible for the slot at position {}",
        worker,
        position
    );

    commit(parent, &[(position, worker)])
}

/// The shared branching step: commit the picked (slot, worker) pairs,
/// propagate the committed workers out of the remaining eligible lists, and
/// apply the pruning rules in order: emptiness, commitment collision,
/// monotonic progress.
fn commit(parent: &Node, picks: &[(usize, WorkerIndex)]) -> StepOutcome {
    let mut assigned = parent.assigned().to_vec();
    for &(position, worker) in picks {
        assigned.push(AssignmentRecord::new(
            parent.pending()[position].slot(),
            worker,
        ));
    }

    let mut pending: Vec<PendingSlot> = parent
        .pending()
        .iter()
        .enumerate()
        .filter(|(position, _)| !picks.iter().any(|&(picked, _)| picked == *position))
        .map(|(_, slot)| slot.clone())
        .collect();

    // A worker used once is unavailable everywhere else in this branch.
    for &(_, worker) in picks {
        for slot in pending.iter_mut() {
            slot.remove_worker(worker);
            if slot.num_eligible() == 0 {
                return StepOutcome::Dead;
            }
        }
    }

    // Two forced commits in the same batch may still have demanded the same
    // worker; that cannot be repaired by further pruning.
    if violation_score(assigned.iter().map(|record| record.worker())) != 0 {
        return StepOutcome::Dead;
    }

    let child = Node::new(pending, assigned);
    if !child.pending().is_empty() && child.score() >= parent.score() {
        return StepOutcome::NoProgress;
    }

    StepOutcome::Committed(child)
}

/// A feasibility-first branch-and-bound solver for the slot staffing
/// problem.
///
/// The engine is stateless between runs; every `solve` call builds its own
/// search session. It stops at the first feasible assignment: there is no
/// objective to optimize and no enumeration of further solutions.
#[derive(Clone, Copy, Debug, Default)]
pub struct BnbSolver;

impl BnbSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model, consulting `monitor` at every step.
    ///
    /// The run terminates with one of four outcomes: a solved assignment,
    /// a structural infeasibility naming every unstaffable slot id, an
    /// exhausted search tree, or an abort requested by the monitor.
    pub fn solve<M>(&mut self, model: &Model, monitor: M) -> SolverOutcome
    where
        M: SearchMonitor,
    {
        let session = SearchSession::new(model, monitor);
        session.run()
    }
}

/// The status a subtree exploration returns to its parent.
enum ExploreStatus {
    /// A solution node was reached; the search halts, remaining siblings
    /// are abandoned.
    Solved(Node),
    /// Every branch of the subtree was pruned or dead-ended.
    Exhausted,
    /// A monitor requested termination.
    Aborted(String),
}

/// A search session for the solver, encapsulating the state and logic of a
/// single run.
struct SearchSession<'a, M> {
    model: &'a Model,
    monitor: M,
    stats: SolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, M> SearchSession<'a, M>
where
    M: SearchMonitor,
{
    #[inline]
    fn new(model: &'a Model, monitor: M) -> Self {
        Self {
            model,
            monitor,
            stats: SolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the session: pre-check, root construction, depth-first search,
    /// outcome finalization.
    fn run(mut self) -> SolverOutcome {
        self.monitor.on_enter_search(self.model);
        debug!(
            "starting search: {} slots, {} workers",
            self.model.num_slots(),
            self.model.num_workers()
        );

        // Structural infeasibility is decided once, before any search.
        let unstaffable = unstaffable_slots(self.model);
        if !unstaffable.is_empty() {
            debug!("pre-check failed: slots {:?} can never be staffed", unstaffable);
            self.stats.set_total_time(self.start_time.elapsed());
            self.monitor.on_exit_search();
            return SolverOutcome::unstaffable(unstaffable, self.stats);
        }

        let root = Node::root(self.model);
        let status = self.explore(root, 1);

        match status {
            ExploreStatus::Solved(node) => {
                self.stats.on_solution_found();
                let assignment = assignment_from(&node, self.model.num_slots());
                debug!(
                    "solution found: {} slots staffed, {} nodes explored",
                    assignment.num_slots(),
                    self.stats.nodes_explored
                );
                self.monitor.on_solution_found(&assignment);
                self.stats.set_total_time(self.start_time.elapsed());
                self.monitor.on_exit_search();
                SolverOutcome::solved(assignment, self.stats)
            }
            ExploreStatus::Exhausted => {
                debug!(
                    "search exhausted without a solution: {} nodes explored",
                    self.stats.nodes_explored
                );
                self.stats.set_total_time(self.start_time.elapsed());
                self.monitor.on_exit_search();
                SolverOutcome::exhausted(self.stats)
            }
            ExploreStatus::Aborted(reason) => {
                debug!("search aborted: {}", reason);
                self.stats.set_total_time(self.start_time.elapsed());
                self.monitor.on_exit_search();
                SolverOutcome::aborted(reason, self.stats)
            }
        }
    }

    /// Explores the subtree rooted at `node` depth-first. The node is owned
    /// by this call; children are independent copies, so returning is all
    /// the backtracking there is.
    fn explore(&mut self, node: Node, depth: u64) -> ExploreStatus {
        self.stats.on_node_explored();
        self.stats.on_depth_update(depth);
        self.monitor.on_step();

        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            return ExploreStatus::Aborted(reason);
        }

        if node.is_solution() {
            return ExploreStatus::Solved(node);
        }

        let children = self.expand(&node);
        for child in children {
            match self.explore(child, depth + 1) {
                ExploreStatus::Exhausted => continue,
                terminal => return terminal,
            }
        }

        self.stats.on_backtrack();
        ExploreStatus::Exhausted
    }

    /// Generates the surviving children of `node` in generation order:
    /// the single forced batch at complexity 1, or one candidate per
    /// (staged slot × eligible worker) at complexity ≥ 2.
    fn expand(&mut self, node: &Node) -> Vec<Node> {
        let Some(complexity) = node.complexity() else {
            // Nothing pending but not a solution: the commitments collide
            // and no step can repair them.
            return Vec::new();
        };

        if complexity == 0 {
            // A pending slot ran out of workers; the branch is dead.
            self.stats.on_pruning_dead_end();
            return Vec::new();
        }

        if complexity == 1 {
            for slot in node.pending() {
                if slot.num_eligible() == 1 {
                    self.stats.on_decision_generated();
                }
            }
            return match commit_forced(node) {
                StepOutcome::Committed(child) => vec![child],
                StepOutcome::Dead => {
                    self.stats.on_pruning_dead_end();
                    Vec::new()
                }
                StepOutcome::NoProgress => {
                    self.stats.on_pruning_no_progress();
                    Vec::new()
                }
            };
        }

        let mut children = Vec::new();
        for (position, slot) in node.pending().iter().enumerate() {
            if slot.num_eligible() != complexity {
                continue;
            }
            for &worker in slot.eligible() {
                self.stats.on_decision_generated();
                match commit_one(node, position, worker) {
                    StepOutcome::Committed(child) => children.push(child),
                    StepOutcome::Dead => self.stats.on_pruning_dead_end(),
                    StepOutcome::NoProgress => self.stats.on_pruning_no_progress(),
                }
            }
        }
        children
    }
}

/// Converts a solution node into the per-slot assignment.
///
/// # Panics
///
/// In debug builds, panics if the node does not commit every slot exactly
/// once.
fn assignment_from(node: &Node, num_slots: usize) -> Assignment {
    debug_assert_eq!(
        node.assigned().len(),
        num_slots,
        "called `assignment_from` with {} records for {} slots",
        node.assigned().len(),
        num_slots
    );

    let mut workers = vec![WorkerIndex::new(0); num_slots];
    let mut filled = vec![false; num_slots];
    for record in node.assigned() {
        let index = record.slot().get();
        debug_assert!(
            !filled[index],
            "called `assignment_from` with slot {} committed twice",
            record.slot()
        );
        workers[index] = record.worker();
        filled[index] = true;
    }
    debug_assert!(
        filled.iter().all(|&f| f),
        "called `assignment_from` with uncommitted slots"
    );

    Assignment::new(workers)
}
