use std::collections::VecDeque;

/// Partial-Sorting Queue (PSQ): a priority-queue-like structure whose hot path is
/// "pull roughly the `M` smallest pairs", not "pop the single minimum". Sorting is
/// amortized per block instead of per element, which is what lets the BMSSP
/// recursion avoid the `Ω(n log n)` floor of a global heap.
///
/// Keyed by vertex id, ordered by an `f64` value. Duplicate keys are allowed while
/// queued; [`PartialSortQueue::pull`] resolves them by keeping the smallest value
/// seen per key.
#[derive(Debug)]
pub struct PartialSortQueue {
    /// Soft per-block capacity, and the pull cap.
    m: usize,
    /// Fallback bound returned by `pull` once the queue is empty.
    b: f64,
    /// Ordered block sequence; earlier blocks hold smaller values.
    blocks: VecDeque<Vec<(usize, f64)>>,
    /// Total number of stored pairs (not unique keys).
    size: usize,
}

impl PartialSortQueue {
    /// Creates an empty queue parameterized by pull cap `m` and fallback bound `b`.
    pub fn new(m: usize, b: f64) -> Self {
        let m = m.max(1);
        PartialSortQueue {
            m,
            b,
            blocks: VecDeque::new(),
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Inserts a single `(key, val)` pair.
    ///
    /// Finds the first block whose current last element has `val >=` the incoming
    /// value (an empty block counts, since it trivially satisfies this), or appends
    /// a fresh block at the end. If that block overflows `M`, it is sorted and split
    /// at the median.
    pub fn insert(&mut self, key: usize, val: f64) {
        let idx = self
            .blocks
            .iter()
            .position(|block| block.last().map_or(true, |&(_, v)| v >= val));

        match idx {
            Some(idx) => self.blocks[idx].push((key, val)),
            None => self.blocks.push_back(vec![(key, val)]),
        }
        self.size += 1;

        let idx = idx.unwrap_or(self.blocks.len() - 1);
        if self.blocks[idx].len() > self.m {
            self.split_block(idx);
        }
    }

    fn split_block(&mut self, idx: usize) {
        let block = &mut self.blocks[idx];
        block.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("non-NaN distance"));
        let mid = block.len() / 2;
        let upper_half = block.split_off(mid);
        self.blocks.insert(idx + 1, upper_half);
    }

    /// Batch-prepends `pairs`, whose contract is that every value is strictly less
    /// than every value currently queued. Any pair violating that contract is routed
    /// through [`insert`](Self::insert) instead of corrupting the block order.
    ///
    /// The remaining (genuinely smaller) pairs are chunked into groups of `ceil(M/2)`,
    /// each chunk sorted ascending, and the chunks are prepended in ascending order
    /// so the block sequence invariant (earlier blocks hold smaller values) holds.
    pub fn batch_prepend(&mut self, pairs: Vec<(usize, f64)>) {
        if pairs.is_empty() {
            return;
        }

        let current_min = self.current_min();
        let (mut valid, violators): (Vec<_>, Vec<_>) =
            pairs.into_iter().partition(|&(_, v)| v < current_min);

        for (key, val) in violators {
            self.insert(key, val);
        }

        if valid.is_empty() {
            return;
        }

        valid.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("non-NaN distance"));
        let chunk_size = (self.m + 1) / 2;
        let mut new_blocks: Vec<Vec<(usize, f64)>> = valid
            .chunks(chunk_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        self.size += new_blocks.iter().map(|b| b.len()).sum::<usize>();

        for block in new_blocks.drain(..).rev() {
            self.blocks.push_front(block);
        }
    }

    /// Returns the true minimum value among every pair currently queued, or the
    /// fallback bound `B` if the queue is empty. Correctness over micro-optimization:
    /// a block is only guaranteed sorted immediately after a split, so this scans
    /// every block rather than trusting each block's first element.
    fn current_min(&self) -> f64 {
        if self.is_empty() {
            self.b
        } else {
            self.true_min()
        }
    }

    /// Pulls up to `M` pairs with the smallest values, front-to-back in block order.
    /// Deduplicates by key (keeping the smallest value per key) and returns the
    /// resulting key set together with the true minimum of whatever remains (or `B`
    /// if the queue is now empty).
    pub fn pull(&mut self) -> (Vec<usize>, f64) {
        if self.is_empty() {
            return (Vec::new(), self.b);
        }

        let mut collected = Vec::with_capacity(self.m);
        while collected.len() < self.m {
            let Some(block) = self.blocks.front_mut() else {
                break;
            };
            let remaining = self.m - collected.len();
            if block.len() <= remaining {
                let block = self.blocks.pop_front().unwrap();
                self.size -= block.len();
                collected.extend(block);
            } else {
                let tail = block.split_off(block.len() - remaining);
                self.size -= tail.len();
                collected.extend(tail);
            }
        }

        let mut best: std::collections::HashMap<usize, f64> = std::collections::HashMap::new();
        for (key, val) in collected {
            best
                .entry(key)
                .and_modify(|existing| {
                    if val < *existing {
                        *existing = val;
                    }
                })
                .or_insert(val);
        }
        let keys: Vec<usize> = best.into_keys().collect();

        (keys, self.current_min())
    }

    fn true_min(&self) -> f64 {
        self.blocks
            .iter()
            .flat_map(|block| block.iter().map(|&(_, v)| v))
            .fold(f64::INFINITY, f64::min)
    }
}
