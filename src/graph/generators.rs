//! Random and structured CSR graph generators used by tests, benchmarks, and the
//! demo binary. Not part of the core's public contract — these build a
//! [`CsrGraph`] directly rather than going through a mutable adjacency-list graph.

use rand::Rng;

use super::builder::build_csr;
use super::csr::CsrGraph;

/// Generates a random directed graph with `n` vertices and approximately
/// `edge_factor * n` edges, weights uniform in `[1.0, 100.0)`.
pub fn generate_random(n: usize, edge_factor: f64, rng: &mut impl Rng) -> CsrGraph {
    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let w = rng.gen_range(1.0..100.0);
            edges.push((u, v, w));
        }
    }
    build_csr(n, edges).expect("generated edges are always in range")
}

/// Generates an 8-connected `width x height` grid graph; cardinal moves cost `1.0`,
/// diagonal moves cost `1.4`.
pub fn generate_grid(width: usize, height: usize) -> CsrGraph {
    let n = width * height;
    let mut edges = Vec::new();
    let directions: [(i32, i32, f64); 8] = [
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];
    for y in 0..height {
        for x in 0..width {
            let u = y * width + x;
            for &(dx, dy, cost) in &directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                    let v = ny as usize * width + nx as usize;
                    edges.push((u, v, cost));
                }
            }
        }
    }
    build_csr(n, edges).expect("grid edges are always in range")
}
