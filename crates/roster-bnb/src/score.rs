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

//! The violation scorer
//!
//! The single metric that drives pruning and solution detection. Given every
//! worker occurrence across a set of per-slot candidate lists, it counts the
//! excess appearances of each worker beyond its first. A score of 0 means no
//! worker is demanded more than once; together with an empty pending set it
//! certifies a solution.

use roster_model::index::WorkerIndex;
use rustc_hash::FxHashMap;

/// Counts the excess appearances of each worker beyond its first occurrence.
///
/// The input is the flattened sequence of worker occurrences across any
/// combination of candidate lists (pending, assigned, or both; an assigned
/// record contributes its single worker). An empty input scores 0.
///
/// # Examples
///
/// ```rust
/// # use roster_bnb::score::violation_score;
/// # use roster_model::index::WorkerIndex;
///
/// let workers = [2usize, 1, 4, 7, 3, 5, 6, 8, 3, 9, 6, 2].map(WorkerIndex::new);
/// // Workers 2, 3 and 6 each appear twice: one excess occurrence each.
/// assert_eq!(violation_score(workers), 3);
/// ```
pub fn violation_score<I>(worker_occurrences: I) -> u32
where
    I: IntoIterator<Item = WorkerIndex>,
{
    let mut counts: FxHashMap<WorkerIndex, u32> = FxHashMap::default();
    for worker in worker_occurrences {
        *counts.entry(worker).or_insert(0) += 1;
    }

    counts.values().map(|&count| count - 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wi(i: usize) -> WorkerIndex {
        WorkerIndex::new(i)
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(violation_score(std::iter::empty()), 0);
    }

    #[test]
    fn test_all_distinct_scores_zero() {
        let workers = [wi(1), wi(2), wi(3)];
        assert_eq!(violation_score(workers), 0);
    }

    #[test]
    fn test_counts_excess_occurrences_only() {
        // Candidate lists [2], [1], [4], [7, 3], [5], [6], [8, 3], [9],
        // [6], [2] flattened: 2, 3 and 6 repeat once each.
        let workers = [
            wi(2),
            wi(1),
            wi(4),
            wi(7),
            wi(3),
            wi(5),
            wi(6),
            wi(8),
            wi(3),
            wi(9),
            wi(6),
            wi(2),
        ];
        assert_eq!(violation_score(workers), 3);
    }

    #[test]
    fn test_triple_occurrence_counts_twice() {
        let workers = [wi(5), wi(5), wi(5)];
        assert_eq!(violation_score(workers), 2);
    }

    #[test]
    fn test_assigned_and_pending_mix() {
        // Assigned singletons 2, 6, 4, 5, 6 plus pending lists
        // [7, 3], [8, 3], [9], [6], [2]: worker 6 appears three times,
        // workers 2 and 3 twice each.
        let workers = [
            wi(2),
            wi(6),
            wi(4),
            wi(5),
            wi(6),
            wi(7),
            wi(3),
            wi(8),
            wi(3),
            wi(9),
            wi(6),
            wi(2),
        ];
        assert_eq!(violation_score(workers), 4);
    }
}
