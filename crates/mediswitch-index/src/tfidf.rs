//! TF-IDF vectorizer with a vocabulary frozen at fit time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use mediswitch_ingest::tokenize;

/// Sparse, L2-normalized document vector. Indices are ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl SparseVector {
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product of two sparse vectors (merge over sorted indices).
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut a, mut b) = (0, 0);
        let mut sum = 0.0;
        while a < self.indices.len() && b < other.indices.len() {
            match self.indices[a].cmp(&other.indices[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[a] * other.values[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and IDF weights learned from a corpus.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    /// term → dimension, assigned in sorted term order
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Learn the vocabulary and IDF weights of `corpus` and return the
    /// vector of every document.
    ///
    /// IDF uses the smoothed form `ln((1 + n) / (1 + df)) + 1`, so a term
    /// present in every document still carries weight 1.
    pub fn fit_transform<S: AsRef<str>>(corpus: &[S]) -> (Self, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let counts: Vec<BTreeMap<usize, f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf: BTreeMap<usize, f64> = BTreeMap::new();
                for token in tokens {
                    *tf.entry(vocabulary[token.as_str()]).or_insert(0.0) += 1.0;
                }
                for idx in tf.keys() {
                    doc_freq[*idx] += 1;
                }
                tf
            })
            .collect();

        let n = corpus.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let model = Self { vocabulary, idf };
        let vectors = counts.iter().map(|tf| model.weigh(tf)).collect();
        (model, vectors)
    }

    /// Vectorize new text against the frozen vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut tf: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        self.weigh(&tf)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    fn weigh(&self, tf: &BTreeMap<usize, f64>) -> SparseVector {
        let mut indices = Vec::with_capacity(tf.len());
        let mut values = Vec::with_capacity(tf.len());
        for (&idx, &count) in tf {
            indices.push(idx);
            values.push(count * self.idf[idx]);
        }
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in values.iter_mut() {
                *v /= norm;
            }
        }
        SparseVector { indices, values }
    }
}
