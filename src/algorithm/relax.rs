//! The relaxation primitive shared by every component that tightens `dist`/`pred`:
//! [`BaseCase`](super::base_case), [`find_pivots`](super::find_pivots), the BMSSP main
//! loop, and the completion-propagation pass.

/// Attempts to relax edge `u -> v` of weight `w` against the shared `dist`/`pred`
/// arrays, returning `Some(nd)` when the edge "counts" (per `eq_ok`), `None` otherwise.
///
/// `dist[u]` must already be finite; an infinite `dist[u]` aborts the edge (the vertex
/// was never reached). When `bound` is set, edges with `nd >= bound` are skipped.
///
/// `pred` is only written on a strict improvement (`nd < dist[v]`); `eq_ok` widens the
/// acceptance test to `nd <= dist[v]` without ever writing when `nd == dist[v]` exactly
/// — ties never move a predecessor, they just let the caller credit the visit.
pub fn relax_edge(
    dist: &mut [f64],
    mut pred: Option<&mut [Option<usize>]>,
    u: usize,
    v: usize,
    w: f64,
    eq_ok: bool,
    bound: Option<f64>,
) -> Option<f64> {
    if !dist[u].is_finite() {
        return None;
    }
    let nd = dist[u] + w;
    if let Some(b) = bound {
        if nd >= b {
            return None;
        }
    }

    let accepted = if eq_ok { nd <= dist[v] } else { nd < dist[v] };
    if !accepted {
        return None;
    }

    if nd < dist[v] {
        dist[v] = nd;
        if let Some(p) = pred.as_deref_mut() {
            p[v] = Some(u);
        }
    }
    Some(nd)
}
