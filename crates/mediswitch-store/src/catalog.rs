//! Immutable in-memory catalog with case-insensitive name lookup.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use mediswitch_core::Result;
use mediswitch_ingest::distinct_forms;

use crate::loader;
use crate::types::{CatalogStats, ItemRecord};

/// Ordered, immutable list of item records.
///
/// Names are not guaranteed unique; every lookup by name resolves to the
/// first record in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemRecord>,
    /// Lowercased names, parallel to `items`.
    names_lower: Vec<String>,
}

impl Catalog {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        let names_lower = items.iter().map(|i| i.name.to_lowercase()).collect();
        Self { items, names_lower }
    }

    /// Load a catalog from a CSV file.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(loader::load_csv(path)?))
    }

    /// Load a catalog from CSV data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(loader::read_records(reader)?))
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn get(&self, idx: usize) -> Option<&ItemRecord> {
        self.items.get(idx)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first record whose name equals `name`, ignoring case.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.names_lower.iter().position(|n| *n == needle)
    }

    /// Whether the record at `idx` carries `name`, ignoring case.
    pub fn name_matches(&self, idx: usize, name_lower: &str) -> bool {
        self.names_lower.get(idx).is_some_and(|n| n == name_lower)
    }

    /// First record whose name equals `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ItemRecord> {
        self.position_of(name).map(|i| &self.items[i])
    }

    /// Names containing `query` (case-insensitive), in catalog order, at most `limit`.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.names_lower
            .iter()
            .zip(&self.items)
            .filter(|(lower, _)| lower.contains(&needle))
            .map(|(_, item)| item.name.as_str())
            .take(limit)
            .collect()
    }

    /// Item count, distinct companies, average rating and form tags present.
    ///
    /// The average rating is the mean, over items with at least one review
    /// percentage, of that item's mean review percentage.
    pub fn stats(&self) -> CatalogStats {
        let companies: HashSet<&str> = self
            .items
            .iter()
            .filter_map(|i| i.company.as_deref())
            .collect();

        let ratings: Vec<f64> = self.items.iter().filter_map(ItemRecord::mean_review).collect();
        let avg_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        };

        CatalogStats {
            num_medicines: self.items.len(),
            total_companies: companies.len(),
            avg_rating,
            medicine_types: distinct_forms(self.items.iter().map(|i| i.name.as_str())),
        }
    }
}
