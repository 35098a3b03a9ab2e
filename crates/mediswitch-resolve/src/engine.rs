//! Content-based recommendation over a prebuilt similarity index.

use std::time::Instant;

use mediswitch_core::config::DEFAULT_MAX_RESULTS;
use mediswitch_core::Result;
use mediswitch_index::SimilarityIndex;
use mediswitch_ingest::{build_combined_text, FormTag};
use mediswitch_store::{Catalog, ItemRecord};
use tracing::{debug, info};

use crate::types::Recommendation;

/// Catalog plus similarity index, built once and read-only afterwards.
///
/// `recommend` takes `&self` and touches no shared mutable state, so one
/// engine behind an `Arc` serves any number of concurrent queries.
pub struct RecommendationEngine {
    catalog: Catalog,
    index: SimilarityIndex,
    /// Form tag of every catalog item, parallel to the catalog.
    forms: Vec<Option<FormTag>>,
    max_results: usize,
}

impl RecommendationEngine {
    /// Build the similarity index over the combined text of every item.
    pub fn build(catalog: Catalog) -> Result<Self> {
        let started = Instant::now();
        let corpus: Vec<String> = catalog.items().iter().map(build_combined_text).collect();
        let index = SimilarityIndex::build(&corpus)?;
        let forms = catalog
            .items()
            .iter()
            .map(|item| Self::classify(&item.name))
            .collect();

        info!(
            "Recommendation engine ready: {} items in {:?}",
            catalog.len(),
            started.elapsed()
        );
        Ok(Self {
            catalog,
            index,
            forms,
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    /// Override the number of recommendations returned per query.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Derive the dosage form of an item name.
    pub fn classify(name: &str) -> Option<FormTag> {
        mediswitch_ingest::classify(name)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Items similar to `query_name`, best excellent-review first.
    ///
    /// Candidates are taken in descending similarity (catalog order on ties)
    /// and kept only when they share the query's form tag, its exact
    /// composition and, if the query has one, its exact dosage. Scanning
    /// stops once `max_results` are kept; those are then re-sorted by
    /// excellent review percentage. An unknown name yields an empty list.
    pub fn recommend(&self, query_name: &str) -> Vec<Recommendation> {
        let Some(idx) = self.catalog.position_of(query_name) else {
            debug!("No catalog item named {:?}", query_name);
            return Vec::new();
        };
        let Some(row) = self.index.similarity_row(idx) else {
            return Vec::new();
        };

        let query = &self.catalog.items()[idx];
        let query_form = self.forms[idx];
        let query_lower = query_name.to_lowercase();

        // The query and any duplicate of its name are never candidates.
        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|(j, _)| !self.catalog.name_matches(*j, &query_lower))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut results: Vec<Recommendation> = ranked
            .iter()
            .filter(|(j, _)| self.accepts(*j, query, query_form))
            .take(self.max_results)
            .map(|&(j, _)| Recommendation::from(&self.catalog.items()[j]))
            .collect();

        results.sort_by(|a, b| b.excellent_review.total_cmp(&a.excellent_review));

        debug!(
            "{:?} (form={:?}): {} recommendations",
            query_name,
            query_form,
            results.len()
        );
        results
    }

    fn accepts(&self, j: usize, query: &ItemRecord, query_form: Option<FormTag>) -> bool {
        let candidate = &self.catalog.items()[j];
        if self.forms[j] != query_form || candidate.composition != query.composition {
            return false;
        }
        match query.dosage.as_deref() {
            Some(dosage) => candidate.dosage.as_deref() == Some(dosage),
            None => true,
        }
    }
}
