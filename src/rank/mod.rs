//! Deduplication, length filtering, bucketing and final ordering.

mod bucket;

use std::cmp::Reverse;
use std::collections::BTreeSet;

pub use bucket::{Bucket, classify};

/// Inclusive bounds on candidate length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Always false when `min > max`.
    pub fn contains(&self, word: &str) -> bool {
        let len = word.chars().count();
        self.min <= len && len <= self.max
    }
}

/// What to do with the unpaired tail when two buckets are interleaved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pairing {
    /// Append the leftover entries of the longer bucket after the pairs.
    #[default]
    KeepTail,
    /// Stop when the shorter bucket runs out.
    Strict,
}

/// Collapse duplicates and drop anything outside `bounds`.
///
/// The set is ordered, which fixes the tie order of the later sorts.
pub fn dedupe<I>(candidates: I, bounds: LengthBounds) -> BTreeSet<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(|word| bounds.contains(word))
        .collect()
}

pub fn ord_sum(word: &str) -> u64 {
    word.chars().map(|c| u64::from(c as u32)).sum()
}

/// Candidates split into buckets, each sorted by ascending length and then
/// descending code-point sum.
#[derive(Debug, Default)]
pub struct Ranking {
    buckets: [Vec<String>; 6],
}

impl Ranking {
    pub fn new(words: BTreeSet<String>) -> Self {
        let mut ranking = Ranking::default();
        for word in words {
            ranking.buckets[classify(&word).index()].push(word);
        }
        for bucket in &mut ranking.buckets {
            // Stable, so lexicographic set order breaks the remaining ties.
            bucket.sort_by_cached_key(|w| (w.chars().count(), Reverse(ord_sum(w))));
        }
        ranking
    }

    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        &self.buckets[bucket.index()]
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric, alpha lower, then `alnum_lower`/`alpha_mixed` interleaved,
    /// then `alnum_mixed`/`special` interleaved.
    pub fn into_sequence(self, pairing: Pairing) -> impl Iterator<Item = String> {
        let [numeric, alpha_lower, alpha_mixed, alnum_lower, alnum_mixed, special] = self.buckets;
        numeric
            .into_iter()
            .chain(alpha_lower)
            .chain(interleave(alnum_lower, alpha_mixed, pairing))
            .chain(interleave(alnum_mixed, special, pairing))
    }
}

fn interleave(
    first: Vec<String>,
    second: Vec<String>,
    pairing: Pairing,
) -> impl Iterator<Item = String> {
    let mut paired = 2 * first.len().min(second.len());
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    let mut take_first = true;

    std::iter::from_fn(move || {
        if paired > 0 {
            paired -= 1;
            let next = if take_first { first.next() } else { second.next() };
            take_first = !take_first;
            return next;
        }
        match pairing {
            Pairing::KeepTail => first.next().or_else(|| second.next()),
            Pairing::Strict => None,
        }
    })
}
