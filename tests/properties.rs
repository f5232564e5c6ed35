//! Property tests over random graphs, checked against the universal invariants and
//! the Dijkstra oracle.

use rand::{rngs::StdRng, SeedableRng};

use bmssp::algorithm::dijkstra::dijkstra;
use bmssp::graph::generators::generate_random;
use bmssp::{BmsspSssp, CsrGraph, SsspOptions};

const EPS: f64 = 1e-9;

fn random_graphs() -> Vec<CsrGraph> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..8)
        .map(|i| {
            let n = 10 + i * 23;
            generate_random(n, 3.0, &mut rng)
        })
        .collect()
}

#[test]
fn non_negativity() {
    for g in random_graphs() {
        let out = BmsspSssp::run_always(&g, &SsspOptions::new(0)).unwrap();
        for &d in &out.dist {
            if d.is_finite() {
                assert!(d >= 0.0);
            }
        }
    }
}

#[test]
fn source_has_zero_distance_and_no_predecessor() {
    for g in random_graphs() {
        let opts = SsspOptions::new(0).with_predecessors(true);
        let out = BmsspSssp::run_always(&g, &opts).unwrap();
        assert_eq!(out.dist[0], 0.0);
        assert_eq!(out.pred.unwrap()[0], -1);
    }
}

#[test]
fn triangle_inequality_holds_on_every_edge() {
    for g in random_graphs() {
        let out = BmsspSssp::run_always(&g, &SsspOptions::new(0)).unwrap();
        for u in 0..g.vertex_count() {
            if !out.dist[u].is_finite() {
                continue;
            }
            for (v, w) in g.out_edges(u) {
                assert!(out.dist[v] <= out.dist[u] + w + EPS);
            }
        }
    }
}

#[test]
fn predecessor_coherence() {
    for g in random_graphs() {
        let opts = SsspOptions::new(0).with_predecessors(true);
        let out = BmsspSssp::run_always(&g, &opts).unwrap();
        let pred = out.pred.unwrap();
        for v in 1..g.vertex_count() {
            if !out.dist[v].is_finite() {
                continue;
            }
            assert_ne!(pred[v], -1, "reachable vertex {v} has no predecessor");
            let p = pred[v] as usize;
            let edge_weight = g
                .out_edges(p)
                .find(|&(to, _)| to == v)
                .map(|(_, w)| w)
                .expect("predecessor edge must exist in the graph");
            assert!((out.dist[p] + edge_weight - out.dist[v]).abs() < EPS);
        }
    }
}

#[test]
fn oracle_equivalence_against_dijkstra() {
    for g in random_graphs() {
        let (oracle_dist, _) = dijkstra(&g, 0, false);
        let out = BmsspSssp::run_always(&g, &SsspOptions::new(0)).unwrap();
        for v in 0..g.vertex_count() {
            let a = oracle_dist[v];
            let b = out.dist[v];
            if a.is_infinite() || b.is_infinite() {
                assert_eq!(a.is_infinite(), b.is_infinite(), "vertex {v}");
            } else {
                assert!((a - b).abs() < EPS, "vertex {v}: dijkstra={a} bmssp={b}");
            }
        }
    }
}

#[test]
fn monotone_parameters_leave_distances_unchanged() {
    for g in random_graphs() {
        let baseline = BmsspSssp::run(&g, &SsspOptions::new(0)).unwrap();
        for k in [2usize, 3, 5, 8] {
            let opts = SsspOptions::new(0).with_k_steps(k);
            let out = BmsspSssp::run(&g, &opts).unwrap();
            for v in 0..g.vertex_count() {
                let a = baseline.dist[v];
                let b = out.dist[v];
                if a.is_infinite() || b.is_infinite() {
                    assert_eq!(a.is_infinite(), b.is_infinite());
                } else {
                    assert!((a - b).abs() < EPS);
                }
            }
        }
    }
}

#[test]
fn idempotent_across_repeated_runs() {
    for g in random_graphs() {
        let opts = SsspOptions::new(0);
        let first = BmsspSssp::run(&g, &opts).unwrap();
        let second = BmsspSssp::run(&g, &opts).unwrap();
        assert_eq!(first.dist, second.dist);
    }
}
