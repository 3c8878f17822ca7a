//! Lazy enumeration of fixed-size index subsets.

/// Iterator over the size-`k` subsets of `0..n`, produced as strictly
/// increasing index vectors in lexicographic order.
///
/// Yields exactly `C(n, k)` subsets and then `None`, idempotently. When
/// `k > n` there are no subsets; when `k == 0` there is exactly one, the
/// empty subset.
///
/// # Example
///
/// ```
/// use cribrs::Combinations;
///
/// let subsets: Vec<_> = Combinations::new(3, 2).collect();
/// assert_eq!(subsets, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    next: Option<Vec<usize>>,
}

impl Combinations {
    /// Creates an enumerator of the size-`k` subsets of `0..n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        let next = (k <= n).then(|| (0..k).collect());
        Self { n, k, next }
    }

    /// Returns `C(n, k)`, the number of subsets [`new`](Self::new) will
    /// produce for the same arguments.
    #[must_use]
    pub fn count_of(n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k);
        let mut count = 1u64;
        for i in 0..k {
            // exact at every step: the running product of i + 1 consecutive
            // integers is divisible by (i + 1)!
            count = count * (n - i) as u64 / (i + 1) as u64;
        }
        count
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;

        // find the rightmost position that can still advance
        let mut pos = self.k;
        while pos > 0 && current[pos - 1] == pos - 1 + self.n - self.k {
            pos -= 1;
        }
        if pos > 0 {
            let mut succ = current.clone();
            succ[pos - 1] += 1;
            for p in pos..self.k {
                succ[p] = succ[p - 1] + 1;
            }
            self.next = Some(succ);
        }

        Some(current)
    }
}
