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

//! Session planner demo.
//!
//! Draws a random set of gamemasters from the sample roster, asks the
//! solver to staff every room, and prints either the resulting plan or the
//! reason no plan exists. Pass a seed as the first argument to reproduce a
//! draw; logging is controlled through `RUST_LOG`.

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roster_bnb::bnb::BnbSolver;
use roster_model::model::{Model, ModelBuilder};
use roster_search::monitor::log::LogMonitor;
use roster_search::result::SolverResult;
use tracing_subscriber::EnvFilter;

/// The sample rooms: (id, name).
const ROOMS: [(u32, &str); 12] = [
    (1, "Le Braquage à la francaise"),
    (2, "Le Braquage de casino"),
    (3, "L'Enlèvement"),
    (4, "Le Métro"),
    (5, "Les Catacombes"),
    (6, "Assassin's Creed"),
    (7, "L'Avion"),
    (8, "La Mission spatiale"),
    (9, "Le Tremblement de terre"),
    (10, "Le Cinéma hanté"),
    (11, "Le Farwest"),
    (12, "Mission secrète"),
];

/// The sample gamemasters: (id, name, trained room ids).
const GAMEMASTERS: [(u32, &str, &[u32]); 20] = [
    (1, "John", &[2, 3]),
    (2, "Alice", &[4, 10]),
    (3, "David", &[5]),
    (4, "Emily", &[8, 6, 2, 7]),
    (5, "Michael", &[9, 1, 4, 3, 11, 8, 6, 12]),
    (6, "Sophia", &[7, 10]),
    (7, "Daniel", &[8]),
    (8, "Olivia", &[3, 9]),
    (9, "Matthew", &[2, 6, 1, 7, 3, 4]),
    (10, "Emma", &[5, 4]),
    (11, "James", &[11]),
    (12, "Isabella", &[7, 4, 12]),
    (13, "William", &[11]),
    (14, "Ava", &[9]),
    (15, "Benjamin", &[8, 4]),
    (16, "Mia", &[1, 3, 7, 5, 8]),
    (17, "Ethan", &[4, 2]),
    (18, "Charlotte", &[10]),
    (19, "Alexandre", &[9, 2, 8]),
    (20, "Harper", &[1, 12]),
];

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Draws one gamemaster per room from the sample roster and builds the
/// model for this session.
fn draw_model(seed: u64) -> Model {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let draw: Vec<&(u32, &str, &[u32])> = GAMEMASTERS
        .choose_multiple(&mut rng, ROOMS.len())
        .collect();

    let mut builder = ModelBuilder::new();
    for (id, name) in ROOMS.iter() {
        builder.add_slot(*id, *name);
    }
    for (id, name, trained_rooms) in draw.iter() {
        builder.add_worker(*id, *name, trained_rooms.iter().copied());
    }

    builder
        .build()
        .expect("the sample roster has no duplicate ids")
}

fn main() {
    enable_tracing();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    println!("-- Session planner --\n");

    let model = draw_model(seed);
    tracing::info!(
        "drew {} gamemasters for {} rooms (seed {})",
        model.num_workers(),
        model.num_slots(),
        seed
    );

    let mut solver = BnbSolver::new();
    let outcome = solver.solve(&model, LogMonitor::default());

    match outcome.result() {
        SolverResult::Solved(assignment) => {
            println!("Plan found:\n");
            println!("{:<4} | {:<28} | {:<4} | {:<12}", "Room", "Session", "GM", "Name");
            println!("{:-<4}-+-{:-<28}-+-{:-<4}-+-{:-<12}", "", "", "", "");
            for row in assignment.rows(&model) {
                println!(
                    "{:<4} | {:<28} | {:<4} | {:<12}",
                    row.slot_id, row.slot_label, row.worker_id, row.worker_label
                );
            }
        }
        SolverResult::Unstaffable(slot_ids) => {
            println!("Rooms will never be staffed {:?}", slot_ids);
        }
        SolverResult::Exhausted => {
            println!("No assignment exists for this draw.");
        }
        SolverResult::Unknown => {
            println!("The search was aborted: {}", outcome.termination_reason());
        }
    }

    println!("\n{}", outcome.statistics());
}
