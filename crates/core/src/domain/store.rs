// Quote Store - immutable in-memory collection

use super::catalog::builtin_records;
use super::error::{DomainError, Result};
use super::quote::{Category, QuoteId, QuoteRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Read-only quote collection, built once and shared behind an `Arc`.
///
/// Order is insertion order. There are no mutation methods.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    records: Vec<QuoteRecord>,
}

/// Counts per classification field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_quotes: usize,
    pub categories: BTreeMap<String, usize>,
    pub time_periods: BTreeMap<String, usize>,
    pub moods: BTreeMap<String, usize>,
}

impl QuoteStore {
    /// Build a store, rejecting duplicate ids, blank text and an empty list.
    pub fn new(records: Vec<QuoteRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DomainError::EmptyStore);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DomainError::DuplicateId(record.id));
            }
            if record.text.trim().is_empty() {
                return Err(DomainError::EmptyText(record.id));
            }
        }

        Ok(Self { records })
    }

    /// Store holding the shipped catalog
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_records())
    }

    pub fn all(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed store; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: QuoteId) -> Option<&QuoteRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct categories present in the store, in enumeration order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.records.iter().any(|r| r.category == *c))
            .collect()
    }

    pub fn statistics(&self) -> StoreStatistics {
        let mut stats = StoreStatistics {
            total_quotes: self.records.len(),
            categories: BTreeMap::new(),
            time_periods: BTreeMap::new(),
            moods: BTreeMap::new(),
        };

        for record in &self.records {
            *stats
                .categories
                .entry(record.category.as_str().to_string())
                .or_default() += 1;
            *stats
                .time_periods
                .entry(record.time_of_day.as_str().to_string())
                .or_default() += 1;
            *stats.moods.entry(record.mood.as_str().to_string()).or_default() += 1;
        }

        stats
    }
}
