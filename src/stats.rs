// src/stats.rs

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use crate::category::WordClass;

/// End-of-run aggregates. Per-class maps iterate in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInfo {
    pub word_count: usize,
    pub distinct_word_count: usize,
    pub word_per_category: BTreeMap<WordClass, usize>,
    pub distinct_word_per_category: BTreeMap<WordClass, usize>,
    pub new_word_count: usize,
    pub new_word_per_category: BTreeMap<WordClass, usize>,
    pub file_count: usize,
    pub time_spent: Duration,
    pub time_waited: Duration,
}

impl RunInfo {
    /// Copy with both timings zeroed, for comparing runs.
    pub fn without_timings(&self) -> RunInfo {
        RunInfo {
            time_spent: Duration::ZERO,
            time_waited: Duration::ZERO,
            ..self.clone()
        }
    }
}

/// Incremental recorder. Every counter moves exactly once per event.
#[derive(Debug, Default)]
pub struct RunStats {
    info: RunInfo,
    seen: HashSet<String>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_new_word(&mut self, class: &WordClass) {
        self.info.new_word_count += 1;
        *self.info.new_word_per_category.entry(class.clone()).or_insert(0) += 1;
    }

    pub fn record_wait(&mut self, waited: Duration) {
        self.info.time_waited += waited;
    }

    /// Counts one emitted occurrence of `word`.
    pub fn record_word(&mut self, word: &str, class: &WordClass) {
        self.info.word_count += 1;
        *self.info.word_per_category.entry(class.clone()).or_insert(0) += 1;
        if !self.seen.contains(word) {
            self.seen.insert(word.to_string());
            self.info.distinct_word_count += 1;
            *self
                .info
                .distinct_word_per_category
                .entry(class.clone())
                .or_insert(0) += 1;
        }
    }

    pub fn finish(mut self, file_count: usize, time_spent: Duration) -> RunInfo {
        self.info.file_count = file_count;
        self.info.time_spent = time_spent;
        self.info
    }
}
