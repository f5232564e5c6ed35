//! The public call surface: parameter selection from `n`, the small-graph
//! Dijkstra shortcut, and the `SsspOptions` / `SsspOutput` builder pair.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::CsrGraph;

use super::bmssp::{bmssp, BmsspParams};
use super::dijkstra::dijkstra;

/// Output of a completed SSSP run. `pred[v] == -1` means "no predecessor" — either
/// `v` is the source or `v` is unreachable.
#[derive(Debug, Clone)]
pub struct SsspOutput {
    pub dist: Vec<f64>,
    pub pred: Option<Vec<i64>>,
}

/// Builder for a single SSSP call. `k_steps` and `pivot_factor` are reserved
/// overrides: `k_steps` replaces the driver's computed `k` (still floored at
/// 2); `pivot_factor` is accepted but currently has no observable effect.
#[derive(Debug, Clone)]
pub struct SsspOptions {
    source: usize,
    return_predecessors: bool,
    k_steps: Option<usize>,
    pivot_factor: Option<f64>,
}

impl SsspOptions {
    pub fn new(source: usize) -> Self {
        SsspOptions {
            source,
            return_predecessors: false,
            k_steps: None,
            pivot_factor: None,
        }
    }

    pub fn with_predecessors(mut self, yes: bool) -> Self {
        self.return_predecessors = yes;
        self
    }

    pub fn with_k_steps(mut self, k: usize) -> Self {
        self.k_steps = Some(k);
        self
    }

    /// Reserved for a future pivot-selection heuristic; accepted and ignored.
    pub fn with_pivot_factor(mut self, factor: f64) -> Self {
        self.pivot_factor = Some(factor);
        self
    }

    pub fn source(&self) -> usize {
        self.source
    }
}

/// The BMSSP single-source shortest path algorithm.
#[derive(Debug, Default)]
pub struct BmsspSssp;

impl BmsspSssp {
    /// Computes `dist`/`pred` from `options.source`, running the small-graph Dijkstra
    /// shortcut when the asymptotic win cannot materialize.
    pub fn run(graph: &CsrGraph, options: &SsspOptions) -> Result<SsspOutput> {
        Self::run_with_shortcut(graph, options, true)
    }

    /// Like [`run`](Self::run), but always executes the BMSSP recursion, bypassing
    /// the small-graph shortcut. Exists for tests that must exercise BMSSP itself
    /// rather than its fallback.
    pub fn run_always(graph: &CsrGraph, options: &SsspOptions) -> Result<SsspOutput> {
        Self::run_with_shortcut(graph, options, false)
    }

    fn run_with_shortcut(
        graph: &CsrGraph,
        options: &SsspOptions,
        allow_shortcut: bool,
    ) -> Result<SsspOutput> {
        let n = graph.vertex_count();
        if options.source >= n {
            return Err(Error::InvalidSource {
                source: options.source,
                n,
            });
        }

        let (k, t, l) = compute_params(n, options.k_steps);

        if allow_shortcut && (n < 2 || (l == 1 && k >= n)) {
            debug!(
                "sssp: n={} too small for BMSSP to pay off, falling back to Dijkstra",
                n
            );
            let (dist, pred) = dijkstra(graph, options.source, options.return_predecessors);
            return Ok(SsspOutput {
                dist,
                pred: pred.map(to_sentinel),
            });
        }

        debug!("sssp: n={} k={} t={} L={}", n, k, t, l);

        let mut dist = vec![f64::INFINITY; n];
        dist[options.source] = 0.0;
        let mut pred_storage: Option<Vec<Option<usize>>> =
            options.return_predecessors.then(|| vec![None; n]);

        let params = BmsspParams { k, t };
        bmssp(
            graph,
            &mut dist,
            pred_storage.as_deref_mut(),
            &params,
            l,
            f64::INFINITY,
            &[options.source],
        );

        Ok(SsspOutput {
            dist,
            pred: pred_storage.map(to_sentinel),
        })
    }
}

fn to_sentinel(pred: Vec<Option<usize>>) -> Vec<i64> {
    pred.into_iter()
        .map(|p| p.map_or(-1, |v| v as i64))
        .collect()
}

/// `ell = max(1, ln max(2, n))`, `k = max(2, floor(ell^(1/3)))` (or the `k_steps`
/// override, still floored at 2), `t = max(1, floor(ell^(2/3)))`,
/// `L = max(1, ceil(ell / t))`.
fn compute_params(n: usize, k_override: Option<usize>) -> (usize, usize, usize) {
    let ell = (n.max(2) as f64).ln().max(1.0);
    let k = k_override
        .unwrap_or_else(|| ell.powf(1.0 / 3.0).floor() as usize)
        .max(2);
    let t = (ell.powf(2.0 / 3.0).floor() as usize).max(1);
    let l = (ell / t as f64).ceil().max(1.0) as usize;
    (k, t, l)
}
