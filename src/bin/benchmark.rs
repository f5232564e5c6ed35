use std::time::{Duration, Instant};

use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};

use bmssp::algorithm::dijkstra::dijkstra;
use bmssp::algorithm::driver::{BmsspSssp, SsspOptions};
use bmssp::graph::generators::generate_random;
use bmssp::CsrGraph;

fn time_it<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn run_one(size: usize, edge_factor: f64, rng: &mut StdRng) {
    let graph: CsrGraph = generate_random(size, edge_factor, rng);

    let ((dijkstra_dist, _), dijkstra_time) = time_it(|| dijkstra(&graph, 0, false));
    let (bmssp_out, bmssp_time) =
        time_it(|| BmsspSssp::run_always(&graph, &SsspOptions::new(0)).expect("source 0 in range"));

    let mismatches = dijkstra_dist
        .iter()
        .zip(bmssp_out.dist.iter())
        .filter(|(a, b)| (*a - *b).abs() > 1e-9 && !(a.is_infinite() && b.is_infinite()))
        .count();
    let reachable = bmssp_out.dist.iter().filter(|d| d.is_finite()).count();
    let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64().max(1e-9);

    println!(
        "{:>10} vertices | {:>7} reachable | dijkstra {:>9?} | bmssp {:>9?} | {} | {}",
        size,
        reachable,
        dijkstra_time,
        bmssp_time,
        format!("{speedup:.2}x").green(),
        if mismatches == 0 {
            "distances agree".dimmed()
        } else {
            format!("{mismatches} MISMATCHES").red().dimmed()
        }
    );
}

fn main() {
    env_logger::init();

    println!(
        "{}",
        "BMSSP demo: Dijkstra vs BMSSP on random graphs".bold()
    );
    println!("{}", "=".repeat(70));

    let sizes = [1_000usize, 10_000, 50_000, 100_000];
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &sizes {
        run_one(size, edge_factor, &mut rng);
    }
}
