//! Pairwise cosine similarity over TF-IDF vectors.

use std::time::Instant;

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::info;

use crate::tfidf::{SparseVector, TfIdfModel};
use mediswitch_core::{Error, Result};

/// Dense `N × N` cosine similarity matrix over a corpus.
///
/// Entries lie in `[0, 1]`. The matrix is symmetric; the diagonal is `1.0`
/// for documents with at least one indexed term and `0.0` for documents
/// with none. Scores are accumulated in `f64` and stored as `f32`, so two
/// nearly equal scores may compare equal and fall back to catalog order.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    model: TfIdfModel,
    matrix: Array2<f32>,
}

impl SimilarityIndex {
    /// Vectorize `corpus` and compute every pairwise similarity.
    pub fn build<S: AsRef<str>>(corpus: &[S]) -> Result<Self> {
        let started = Instant::now();
        let n = corpus.len();
        n.checked_mul(n)
            .filter(|cells| *cells <= isize::MAX as usize / std::mem::size_of::<f32>())
            .ok_or_else(|| Error::Index(format!("Corpus of {} documents is too large", n)))?;

        let (model, vectors) = TfIdfModel::fit_transform(corpus);
        let matrix = cosine_matrix(&vectors, model.vocabulary_size());

        info!(
            "Similarity index built: {} documents, {} terms, {:?}",
            n,
            model.vocabulary_size(),
            started.elapsed()
        );
        Ok(Self { model, matrix })
    }

    /// Similarity of document `i` against every document, itself included.
    pub fn similarity_row(&self, i: usize) -> Option<ArrayView1<'_, f32>> {
        (i < self.len()).then(|| self.matrix.row(i))
    }

    pub fn similarity(&self, i: usize, j: usize) -> Option<f32> {
        self.matrix.get((i, j)).copied()
    }

    pub fn matrix(&self) -> ArrayView2<'_, f32> {
        self.matrix.view()
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }
}

/// Row-by-row products through per-term posting lists, so each row costs
/// only the postings of the terms its document contains.
///
/// Every entry (i, j) sums the same shared-term products in the same
/// ascending term order as (j, i), which keeps the matrix exactly symmetric.
fn cosine_matrix(vectors: &[SparseVector], vocabulary_size: usize) -> Array2<f32> {
    let n = vectors.len();
    let mut postings: Vec<Vec<(usize, f64)>> = vec![Vec::new(); vocabulary_size];
    for (doc, vector) in vectors.iter().enumerate() {
        for (term, weight) in vector.iter() {
            postings[term].push((doc, weight));
        }
    }

    let mut matrix = Array2::<f32>::zeros((n, n));
    let mut scores = vec![0.0f64; n];
    let mut touched: Vec<usize> = Vec::new();

    for (i, vector) in vectors.iter().enumerate() {
        if vector.is_zero() {
            continue;
        }
        for (term, weight) in vector.iter() {
            for &(j, other) in &postings[term] {
                if scores[j] == 0.0 {
                    touched.push(j);
                }
                scores[j] += weight * other;
            }
        }

        let mut row = matrix.row_mut(i);
        for &j in &touched {
            row[j] = scores[j].clamp(0.0, 1.0) as f32;
            scores[j] = 0.0;
        }
        touched.clear();
        row[i] = 1.0;
    }
    matrix
}
