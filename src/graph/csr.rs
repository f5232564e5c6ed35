use crate::error::{Error, Result};

/// Compressed Sparse Row representation of a directed, non-negative-weight graph.
///
/// `CsrGraph` is a read-only record: `n` vertices, `m` edges, `row_ptr` of length
/// `n + 1`, and parallel `cols`/`weights` arrays of length `m`. The out-edges of
/// vertex `u` occupy `cols[row_ptr[u]..row_ptr[u+1]]` (and the matching slice of
/// `weights`). Invariants are established once by [`CsrGraph::new`]/the builder and
/// assumed everywhere else in the core — none of `bmssp`, `find_pivots`, or
/// `base_case` re-validates them.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    n: usize,
    directed: bool,
    row_ptr: Vec<usize>,
    cols: Vec<usize>,
    weights: Vec<f64>,
}

impl CsrGraph {
    /// Builds a CSR graph from raw arrays, validating the input contract:
    /// `row_ptr[0] == 0`, `row_ptr[n] == m`, `row_ptr` non-decreasing, every
    /// column in `[0, n)`, every weight finite and non-negative.
    pub fn new(
        n: usize,
        row_ptr: Vec<usize>,
        cols: Vec<usize>,
        weights: Vec<f64>,
        directed: bool,
    ) -> Result<Self> {
        let m = cols.len();
        if weights.len() != m {
            return Err(Error::MalformedGraph(format!(
                "cols has length {} but weights has length {}",
                m,
                weights.len()
            )));
        }
        if row_ptr.len() != n + 1 {
            return Err(Error::InvalidRowPtrLength {
                actual: row_ptr.len(),
                expected: n + 1,
            });
        }
        if row_ptr[0] != 0 {
            return Err(Error::RowPtrStartNonZero(row_ptr[0]));
        }
        if row_ptr[n] != m {
            return Err(Error::RowPtrEndMismatch {
                actual: row_ptr[n],
                expected: m,
            });
        }
        for i in 0..n {
            if row_ptr[i] > row_ptr[i + 1] {
                return Err(Error::RowPtrNotMonotone(i));
            }
        }
        for &v in &cols {
            if v >= n {
                return Err(Error::InvalidEndpoint(v, n));
            }
        }
        for &w in &weights {
            if !w.is_finite() {
                return Err(Error::NonFiniteWeight);
            }
            if w < 0.0 {
                return Err(Error::NegativeWeight(w));
            }
        }

        Ok(CsrGraph {
            n,
            directed,
            row_ptr,
            cols,
            weights,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.cols.len()
    }

    /// Out-edges of `u` as `(destination, weight)` pairs.
    #[inline]
    pub fn out_edges(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let (start, end) = self.edge_range(u);
        self.cols[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }

    /// Index range `[row_ptr[u], row_ptr[u+1])` into `cols`/`weights` for vertex `u`.
    #[inline]
    pub fn edge_range(&self, u: usize) -> (usize, usize) {
        (self.row_ptr[u], self.row_ptr[u + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_graph() {
        let g = CsrGraph::new(3, vec![0, 2, 3, 3], vec![1, 2, 2], vec![1.0, 2.0, 3.0], true).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        let out: Vec<_> = g.out_edges(0).collect();
        assert_eq!(out, vec![(1, 1.0), (2, 2.0)]);
    }

    #[test]
    fn rejects_bad_row_ptr_length() {
        assert!(CsrGraph::new(2, vec![0, 1], vec![1], vec![1.0], true).is_err());
    }

    #[test]
    fn rejects_non_monotone_row_ptr() {
        assert!(CsrGraph::new(2, vec![0, 2, 1], vec![1, 0], vec![1.0, 1.0], true).is_err());
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        assert!(CsrGraph::new(2, vec![0, 1, 1], vec![5], vec![1.0], true).is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(CsrGraph::new(2, vec![0, 1, 1], vec![1], vec![-1.0], true).is_err());
    }

    #[test]
    fn rejects_non_finite_weight() {
        assert!(CsrGraph::new(2, vec![0, 1, 1], vec![1], vec![f64::NAN], true).is_err());
    }
}
