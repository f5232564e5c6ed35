//! FindPivots: reduces a seed set `S` to a small witness set `P` whose tight-forest
//! subtrees are large enough to be worth recursing on.

use std::collections::{HashMap, HashSet};

use crate::graph::CsrGraph;

use super::relax::relax_edge;

/// Tight-edge tolerance used only here.
const EPS: f64 = 1e-12;

/// Result of a `find_pivots` call: the pivot set `P` and the full witness set `W`
/// discovered during the bounded relaxation rounds.
pub struct FindPivotsResult {
    pub pivots: Vec<usize>,
    pub witness: Vec<usize>,
}

/// Runs `k` rounds of bounded Bellman-Ford relaxation from `seeds`, then reduces the
/// discovered witness set `W` to pivots via tight-forest subtree sizes.
pub fn find_pivots(
    graph: &CsrGraph,
    dist: &mut [f64],
    mut pred: Option<&mut [Option<usize>]>,
    bound: f64,
    seeds: &[usize],
    k: usize,
) -> FindPivotsResult {
    let mut in_witness: HashSet<usize> = seeds.iter().copied().collect();
    let mut witness: Vec<usize> = seeds.to_vec();
    let mut frontier: Vec<usize> = seeds.to_vec();

    for _ in 0..k {
        let mut next = Vec::new();
        for &u in &frontier {
            for (v, w) in graph.out_edges(u) {
                if let Some(_nd) =
                    relax_edge(dist, pred.as_deref_mut(), u, v, w, true, Some(bound))
                {
                    if in_witness.insert(v) {
                        witness.push(v);
                        next.push(v);
                    }
                }
            }
        }

        if witness.len() > k * seeds.len() {
            return FindPivotsResult {
                pivots: seeds.to_vec(),
                witness,
            };
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    let pivots = tight_forest_pivots(graph, dist, seeds, &witness, k);
    FindPivotsResult { pivots, witness }
}

/// Builds the tight forest on `witness` and returns the subset of `seeds` whose
/// subtree (rooted at a seed with no in-forest parent) has size `>= k`.
fn tight_forest_pivots(
    graph: &CsrGraph,
    dist: &[f64],
    seeds: &[usize],
    witness: &[usize],
    k: usize,
) -> Vec<usize> {
    let w_set: HashSet<usize> = witness.iter().copied().collect();
    let mut parent: HashMap<usize, usize> = HashMap::new();

    for &u in witness {
        for (v, w) in graph.out_edges(u) {
            if !w_set.contains(&v) {
                continue;
            }
            if (dist[u] + w - dist[v]).abs() > EPS {
                continue;
            }
            match parent.get(&v) {
                Some(&existing) if dist[existing] <= dist[u] => {}
                _ => {
                    parent.insert(v, u);
                }
            }
        }
    }

    let mut ordered: Vec<usize> = witness.to_vec();
    ordered.sort_by(|&a, &b| dist[a].partial_cmp(&dist[b]).expect("non-NaN distance"));

    let mut size: HashMap<usize, usize> = witness.iter().map(|&v| (v, 1usize)).collect();
    for &v in &ordered {
        if let Some(&p) = parent.get(&v) {
            let v_size = *size.get(&v).unwrap_or(&1);
            *size.entry(p).or_insert(1) += v_size;
        }
    }

    seeds
        .iter()
        .copied()
        .filter(|s| !parent.contains_key(s) && *size.get(s).unwrap_or(&1) >= k)
        .collect()
}
