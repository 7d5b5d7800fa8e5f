//! Combinatorial generators: index permutations via the cycle algorithm,
//! permutation projection onto element slices, and Cartesian product via
//! odometer arithmetic.

use log::{debug, warn};

use super::core::{Sequence, SequenceExt};

// ================================
// Index permutations
// ================================

/// Cursor over every ordered arrangement of `r` indices drawn from
/// `{0, …, n-1}`, amortized O(1) per step after the first.
///
/// `indices` starts as `0..n` and `cycles` as `n, n-1, …, n-r+1`. Each
/// step scans positions `r-1` down to `0`: decrement `cycles[i]`; on zero,
/// rotate `indices[i..]` left by one and reset `cycles[i] = n - i`;
/// otherwise swap `indices[i]` with `indices[len - cycles[i]]` and stop.
/// Scan exhaustion ends the stream.
///
/// [`indices`](Self::indices) borrows the live prefix with zero
/// allocation; the [`Sequence`] impl clones it per yield.
pub struct IndexPermutations {
    r: usize,
    n: usize,
    first: bool,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    valid: bool,
}

impl IndexPermutations {
    /// The arrangement moved to by the last successful advance.
    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.r]
    }
}

impl Sequence for IndexPermutations {
    type Item = Vec<usize>;

    fn advance(&mut self) -> bool {
        if !self.valid {
            return false;
        }
        if self.first {
            self.first = false;
            return true;
        }
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = self.n - i;
            } else {
                let j = self.indices.len() - self.cycles[i];
                self.indices.swap(i, j);
                return true;
            }
        }
        self.valid = false;
        false
    }

    fn current(&mut self) -> Vec<usize> {
        self.indices[..self.r].to_vec()
    }
}

/// Permutations of `r` indices out of `n`. `r > n` yields an empty
/// sequence immediately.
pub fn index_permutations(n: usize, r: usize) -> IndexPermutations {
    if r > n {
        warn!("index_permutations: r={} exceeds n={}, yielding empty sequence", r, n);
    }
    let cycles = if r <= n {
        (n - r + 1..=n).rev().collect()
    } else {
        Vec::new()
    };
    IndexPermutations {
        r,
        n,
        first: true,
        indices: (0..n).collect(),
        cycles,
        valid: r <= n,
    }
}

fn apply_permutation<T: Clone>(pool: &[T], permutation: &[usize], out: &mut Vec<T>) {
    out.clear();
    out.extend(permutation.iter().map(|&index| pool[index].clone()));
}

// ================================
// Permutation projection
// ================================

/// Projects the index stream onto real elements through one reused
/// scratch buffer: zero allocations per step.
///
/// This is the in-place variant of the projection: the buffer backing
/// [`current_slice`](Self::current_slice) is overwritten by the next
/// [`advance`](Self::advance), and the borrow checker makes holding a
/// stale window impossible. For an owning, allocate-per-yield stream see
/// [`safe_permutations_of`].
pub struct PermutationsOf<T> {
    state: IndexPermutations,
    pool: Vec<T>,
    scratch: Vec<T>,
}

impl<T: Clone> PermutationsOf<T> {
    pub fn advance(&mut self) -> bool {
        if !self.state.advance() {
            return false;
        }
        let permutation = self.state.indices();
        apply_permutation(&self.pool, permutation, &mut self.scratch);
        true
    }

    /// The arrangement moved to by the last successful advance, valid
    /// until the next one.
    pub fn current_slice(&self) -> &[T] {
        &self.scratch
    }
}

pub fn permutations_of<T: Clone>(elements: &[T], r: usize) -> PermutationsOf<T> {
    PermutationsOf {
        state: index_permutations(elements.len(), r),
        pool: elements.to_vec(),
        scratch: Vec::with_capacity(r),
    }
}

/// Owning projection of the index stream: every yield is a freshly
/// allocated `Vec`, safe to hold across advances.
pub struct SafePermutationsOf<T> {
    state: IndexPermutations,
    pool: Vec<T>,
    item: Option<Vec<T>>,
}

impl<T: Clone> Sequence for SafePermutationsOf<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        if !self.state.advance() {
            return false;
        }
        let permutation = self.state.indices();
        let mut out = Vec::with_capacity(permutation.len());
        apply_permutation(&self.pool, permutation, &mut out);
        self.item = Some(out);
        true
    }

    fn current(&mut self) -> Vec<T> {
        self.item.take().expect("current() called without a successful advance()")
    }
}

pub fn safe_permutations_of<T: Clone>(elements: &[T], r: usize) -> SafePermutationsOf<T> {
    SafePermutationsOf {
        state: index_permutations(elements.len(), r),
        pool: elements.to_vec(),
        item: None,
    }
}

// ================================
// Cartesian product
// ================================

/// Cartesian product by odometer arithmetic: one index per materialized
/// pool, the rightmost varying fastest (the last input is the innermost
/// loop). Exhausted once the carry propagates past the leftmost pool.
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    done: bool,
    item: Option<Vec<T>>,
}

impl<T: Clone> Sequence for Product<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let tuple = self
            .indices
            .iter()
            .zip(&self.pools)
            .map(|(&index, pool)| pool[index].clone())
            .collect();
        let mut carry = true;
        for i in (0..self.indices.len()).rev() {
            self.indices[i] += 1;
            if self.indices[i] >= self.pools[i].len() {
                self.indices[i] = 0;
            } else {
                carry = false;
                break;
            }
        }
        self.done = carry;
        self.item = Some(tuple);
        true
    }

    fn current(&mut self) -> Vec<T> {
        self.item.take().expect("current() called without a successful advance()")
    }
}

/// Cartesian product of any number of finite sequences. Each input is
/// materialized into a fixed pool exactly once, up front. An empty pool
/// empties the whole product; zero inputs yield a single empty tuple.
pub fn product<S: Sequence>(seqs: Vec<S>) -> Product<S::Item> {
    let pools: Vec<Vec<S::Item>> = seqs.into_iter().map(|seq| seq.to_vec()).collect();
    debug!(
        "product: materialized {} pools ({} tuples)",
        pools.len(),
        pools.iter().map(Vec::len).product::<usize>()
    );
    let done = pools.iter().any(Vec::is_empty);
    Product {
        indices: vec![0; pools.len()],
        pools,
        done,
        item: None,
    }
}
