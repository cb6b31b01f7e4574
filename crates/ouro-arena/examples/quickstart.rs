//! Ouro Quickstart: a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a seeded arena with the builder
//!   2. Randomizing the population and reading a census
//!   3. Advancing contests in rounds and watching populations drift
//!   4. Sharing the arena with a background contest thread
//!   5. Rendering a terrain snapshot as an ASCII map
//!
//! Run with:
//!   cargo run --example quickstart

use std::sync::Arc;
use std::thread;

use ouro_arena::{Arena, Terrain};

// ─── Arena parameters ───────────────────────────────────────────

const NUM_BREEDS: u8 = 5;
const SIZE: u32 = 28;
const SEED: u64 = 42;

/// One glyph per breed, reused in map rendering.
const GLYPHS: [char; 5] = ['.', 'o', 'x', '#', '@'];

// ─── Rendering helpers ──────────────────────────────────────────

fn print_census(label: &str, terrain: &Terrain) {
    println!("  {label:<18} {:?}", terrain.census());
}

fn print_map(terrain: &Terrain) {
    for row in terrain.rows() {
        let line: String = row
            .iter()
            .map(|breed| GLYPHS[usize::from(breed.0)])
            .collect();
        println!("  {line}");
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Ouro Quickstart ===\n");

    // 1. Build a seeded arena: 5 breeds on a 28x28 torus.
    let arena = Arena::builder()
        .num_breeds(NUM_BREEDS)
        .size(SIZE)
        .seed(SEED)
        .build()?;
    println!(
        "Arena: {}x{} torus, {} breeds, seed {}",
        arena.size(),
        arena.size(),
        arena.num_breeds(),
        SEED
    );

    // 2. Randomize the population.
    arena.init();
    print_census("after init:", &arena.snapshot());

    // 3. Run contests in rounds; populations chase each other cyclically.
    println!("\nRunning contests...");
    for round in 1..=4 {
        arena.advance(25_000);
        print_census(&format!("round {round}:"), &arena.snapshot());
    }

    // 4. Share the arena with a background thread and observe it live.
    //    Snapshots interleave between contests, so each census below is
    //    a complete, consistent grid from some point mid-run.
    println!("\nObserving while a background thread advances...");
    let arena = Arc::new(arena);
    let worker = {
        let arena = Arc::clone(&arena);
        thread::spawn(move || arena.advance(200_000))
    };
    for observation in 1..=3 {
        print_census(&format!("observation {observation}:"), &arena.snapshot());
        thread::yield_now();
    }
    worker.join().expect("contest thread panicked");
    print_census("after join:", &arena.snapshot());

    // 5. Render the final terrain.
    let terrain = arena.snapshot();
    println!("\nFinal terrain ({} breeds as {:?}):", NUM_BREEDS, GLYPHS);
    print_map(&terrain);

    println!("\nDone.");
    Ok(())
}
