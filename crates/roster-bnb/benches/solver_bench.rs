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

use criterion::{criterion_group, criterion_main, Criterion};
use roster_bnb::bnb::BnbSolver;
use roster_model::model::{Model, ModelBuilder};
use roster_search::monitor::no_op::NoOperationMonitor;
use std::hint::black_box;

/// The real-world-sized sample draw: 12 rooms, 13 trained workers,
/// perfect matching exists.
fn feasible_instance() -> Model {
    let mut builder = ModelBuilder::new();
    builder
        .add_slot(1, "Le Braquage à la francaise")
        .add_slot(2, "Le Braquage de casino")
        .add_slot(3, "L'Enlèvement")
        .add_slot(4, "Le Métro")
        .add_slot(5, "Les Catacombes")
        .add_slot(6, "Assassin's Creed")
        .add_slot(7, "L'Avion")
        .add_slot(8, "La Mission spatiale")
        .add_slot(9, "Le Tremblement de terre")
        .add_slot(10, "Le Cinéma hanté")
        .add_slot(11, "Le Farwest")
        .add_slot(12, "Mission secrète");
    builder
        .add_worker(12, "Isabella", [7, 4, 12])
        .add_worker(2, "Alice", [4, 10])
        .add_worker(6, "Sophia", [7, 10])
        .add_worker(4, "Emily", [8, 6, 2, 7])
        .add_worker(10, "Emma", [5, 4])
        .add_worker(3, "David", [5])
        .add_worker(15, "Benjamin", [8, 4])
        .add_worker(19, "Alexandre", [9, 2, 8])
        .add_worker(8, "Olivia", [3, 9])
        .add_worker(1, "John", [2, 3])
        .add_worker(16, "Mia", [1, 3, 7, 5, 8])
        .add_worker(14, "Ava", [9])
        .add_worker(11, "James", [11]);
    builder.build().expect("model should build")
}

fn bench_solve_feasible(c: &mut Criterion) {
    let model = feasible_instance();

    c.bench_function("solve_12x13_feasible", |b| {
        b.iter(|| {
            let mut solver = BnbSolver::new();
            let outcome = solver.solve(black_box(&model), NoOperationMonitor::new());
            black_box(outcome)
        })
    });
}

fn bench_root_construction(c: &mut Criterion) {
    let model = feasible_instance();

    c.bench_function("root_node_12x13", |b| {
        b.iter(|| black_box(roster_bnb::node::Node::root(black_box(&model))))
    });
}

criterion_group!(benches, bench_solve_feasible, bench_root_construction);
criterion_main!(benches);
