//! The BMSSP recursion itself: at level `l >= 1`, narrows a seed set via
//! [`find_pivots`], drains a [`PartialSortQueue`] of discovered bands, and closes
//! each level with a completion-propagation pass over the witness set.

use std::collections::HashSet;

use log::{debug, trace};

use crate::data_structures::{DistanceHeap, PartialSortQueue};
use crate::graph::CsrGraph;

use super::base_case::base_case;
use super::find_pivots::{find_pivots, FindPivotsResult};
use super::relax::relax_edge;

/// Parameters threaded through every recursive call: `k` governs base-case and
/// find-pivots sizing, `t` governs the PSQ's per-level capacity growth.
#[derive(Debug, Clone, Copy)]
pub struct BmsspParams {
    pub k: usize,
    pub t: usize,
}

/// `bmssp(l, B, S) -> (B', U)`. Level `0` delegates to [`base_case`]; level
/// `l >= 1` runs the pivot/PSQ loop followed by completion propagation.
pub fn bmssp(
    graph: &CsrGraph,
    dist: &mut [f64],
    mut pred: Option<&mut [Option<usize>]>,
    params: &BmsspParams,
    level: usize,
    bound: f64,
    seeds: &[usize],
) -> (f64, Vec<usize>) {
    if level == 0 {
        return base_case(graph, dist, pred, bound, seeds, params.k);
    }

    trace!(
        "bmssp: level={} bound={} seeds={}",
        level,
        bound,
        seeds.len()
    );

    let FindPivotsResult { pivots, witness } =
        find_pivots(graph, dist, pred.as_deref_mut(), bound, seeds, params.k);
    let pivots = if pivots.is_empty() {
        seeds.to_vec()
    } else {
        pivots
    };

    let m = psq_capacity(level, params.t);
    let mut queue = PartialSortQueue::new(m, bound);
    for &x in &pivots {
        queue.insert(x, dist[x]);
    }

    let mut accumulated: HashSet<usize> = HashSet::new();

    loop {
        let (si, bi) = queue.pull();
        if si.is_empty() {
            break;
        }

        let (b_prime_i, ui) = bmssp(graph, dist, pred.as_deref_mut(), params, level - 1, bi, &si);
        accumulated.extend(ui.iter().copied());

        let mut batch = Vec::new();
        for &u in &ui {
            for (v, w) in graph.out_edges(u) {
                let Some(nd) = relax_edge(dist, pred.as_deref_mut(), u, v, w, true, None) else {
                    continue;
                };
                if bi <= nd && nd < bound {
                    queue.insert(v, nd);
                } else if b_prime_i <= nd && nd < bi {
                    batch.push((v, nd));
                }
            }
        }
        queue.batch_prepend(batch);

        let si_reinsert: Vec<(usize, f64)> = si
            .iter()
            .copied()
            .filter(|&x| dist[x] >= b_prime_i && dist[x] < bi)
            .map(|x| (x, dist[x]))
            .collect();
        queue.batch_prepend(si_reinsert);
    }

    let b_prime_out = bound;
    let extra_w: Vec<usize> = witness
        .iter()
        .copied()
        .filter(|&x| dist[x] < b_prime_out)
        .collect();

    completion_pass(graph, dist, pred.as_deref_mut(), &extra_w, b_prime_out);
    accumulated.extend(extra_w);

    debug!(
        "bmssp: level={} completed with {} vertices",
        level,
        accumulated.len()
    );

    (b_prime_out, accumulated.into_iter().collect())
}

/// Bounded multi-source Dijkstra seeded from `seeds`, run to exhaustion under
/// `bound` (no settlement cap, unlike [`base_case`]) — the pass required to
/// propagate distances fully within the witness set before returning to the
/// parent level.
fn completion_pass(
    graph: &CsrGraph,
    dist: &mut [f64],
    mut pred: Option<&mut [Option<usize>]>,
    seeds: &[usize],
    bound: f64,
) {
    let mut heap = DistanceHeap::new();
    for &s in seeds {
        heap.push(s, dist[s]);
    }
    let mut visited = vec![false; graph.vertex_count()];

    while let Some((u, du)) = heap.pop() {
        if du > dist[u] || visited[u] {
            continue;
        }
        visited[u] = true;

        for (v, w) in graph.out_edges(u) {
            if dist[u] + w >= bound {
                continue;
            }
            if let Some(nd) = relax_edge(dist, pred.as_deref_mut(), u, v, w, false, Some(bound)) {
                heap.push(v, nd);
            }
        }
    }
}

/// `M ~= 2^((l-1) * ceil(t/4))`, clamped to the `usize` range and floored at 4:
/// any positive `M >= 4` that grows monotonically with `l` preserves correctness,
/// this is simply a known-working choice.
fn psq_capacity(level: usize, t: usize) -> usize {
    let exp = level.saturating_sub(1) * t.div_ceil(4);
    let shift = u32::try_from(exp).unwrap_or(u32::MAX);
    1usize.checked_shl(shift).unwrap_or(usize::MAX).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build_csr;

    #[test]
    fn psq_capacity_is_monotone_and_floored() {
        assert_eq!(psq_capacity(1, 4), 4);
        assert!(psq_capacity(2, 4) >= psq_capacity(1, 4));
        assert!(psq_capacity(3, 8) >= psq_capacity(2, 8));
    }

    #[test]
    fn level_zero_delegates_to_base_case() {
        let g = build_csr(3, vec![(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let mut dist = vec![f64::INFINITY; 3];
        dist[0] = 0.0;
        let params = BmsspParams { k: 2, t: 4 };

        let (_, u) = bmssp(&g, &mut dist, None, &params, 0, f64::INFINITY, &[0]);
        assert!(u.contains(&0));
    }

    #[test]
    fn recursion_settles_a_small_chain() {
        let g = build_csr(4, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
        let mut dist = vec![f64::INFINITY; 4];
        dist[0] = 0.0;
        let mut pred: Vec<Option<usize>> = vec![None; 4];
        let params = BmsspParams { k: 2, t: 4 };

        bmssp(&g, &mut dist, Some(&mut pred), &params, 2, f64::INFINITY, &[0]);

        assert_eq!(dist, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
