//! String similarity scoring.
//!
//! The matcher depends only on the [`Similarity`] trait:
//!
//! - `ratio(a, b)`: whole-string similarity in `[0, 100]`.
//! - `partial_ratio(a, b)`: best similarity between the shorter string and
//!   any same-length window of the longer one, in `[0, 100]`.
//!
//! Two implementations ship. [`IndelSimilarity`] is the default and scores
//! `100 · 2·LCS / (|a| + |b|)`, i.e. edit distance with insertions and
//! deletions only. [`LevenshteinSimilarity`] uses `strsim`'s normalized
//! Levenshtein distance. Both compare Unicode scalar values and are
//! case-sensitive; callers fold case first.

/// A fuzzy string scorer with the `0..=100` contract described above.
pub trait Similarity: Send + Sync {
    /// Whole-string similarity.
    fn ratio(&self, a: &str, b: &str) -> f64;

    /// Best-aligning substring similarity.
    ///
    /// The shorter string is compared against every window of the longer
    /// string, including windows clipped at either end, and the best
    /// [`ratio`](Similarity::ratio) wins.
    fn partial_ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

        if short.is_empty() {
            return if long.is_empty() { 100.0 } else { 0.0 };
        }

        let needle: String = short.iter().collect();
        let m = short.len();
        let n = long.len();
        let mut best = 0.0_f64;

        let mut score = |window: &[char]| {
            let window: String = window.iter().collect();
            best = best.max(self.ratio(&needle, &window));
        };

        for end in 1..m {
            score(&long[..end]);
        }
        for start in 0..=(n - m) {
            score(&long[start..start + m]);
        }
        for start in (n - m + 1)..n {
            score(&long[start..]);
        }

        best
    }
}

/// Indel-distance similarity (longest common subsequence based).
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelSimilarity;

impl Similarity for IndelSimilarity {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 100.0;
        }
        let lcs = lcs_len(&a, &b);
        100.0 * (2 * lcs) as f64 / total as f64
    }
}

/// Normalized Levenshtein similarity via `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinSimilarity;

impl Similarity for LevenshteinSimilarity {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        100.0 * strsim::normalized_levenshtein(a, b)
    }
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
