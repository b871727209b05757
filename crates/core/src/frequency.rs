//! Frequency counts over a column of values.

use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

/// Occurrence counts kept in first-appearance order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Eq + Hash> {
    counts: IndexMap<T, usize>,
}

impl<T: Eq + Hash> FrequencyTable<T> {
    /// Number of distinct values seen.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent value.
    ///
    /// Ties go to the value that appeared first in the input.
    #[must_use]
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<(&T, usize)> = None;

        for (value, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((value, count)),
            }
        }

        best.map(|(value, _)| value)
    }

    /// `(value, count)` pairs by descending count, ties in first-appearance order.
    #[must_use]
    pub fn value_counts(&self) -> Vec<(&T, usize)> {
        self.counts
            .iter()
            .map(|(value, &count)| (value, count))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counts = IndexMap::new();
        for value in iter {
            *counts.entry(value).or_insert(0) += 1;
        }

        Self { counts }
    }
}
