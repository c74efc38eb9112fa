use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::tokenizer::term_counts;

pub type DocId = usize;

/// One posting: a document and how many times the word occurs in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub doc_id: DocId,
    pub count: usize,
}

#[derive(Default)]
struct IndexState {
    docs: Arc<Vec<String>>,
    freq_dictionary: HashMap<String, Vec<Entry>>,
}

/// In-memory inverted index over a document sequence.
///
/// A single reader/writer lock guards both the document sequence and the
/// postings map: readers (`word_postings`, `frequency_dictionary`) take it
/// shared, rebuild's clear and merge sections take it exclusive. Within a
/// posting list every `doc_id` is unique, and entries are stored in
/// ascending `doc_id` order because merges land in document order.
#[derive(Default)]
pub struct InvertedIndex {
    state: RwLock<IndexState>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document base and reindex from scratch.
    ///
    /// The old postings and the new document sequence swap under one
    /// exclusive section before any counting starts, so workers see a
    /// sequence that cannot change underneath them. Counting then fans out
    /// over rayon's pool, one task per document, with no shared mutation;
    /// each document's local counts merge into the shared map under a
    /// short exclusive section of their own. Returns only after every
    /// merge has landed.
    pub fn update_document_base(&self, input_docs: Vec<String>) {
        let docs = Arc::new(input_docs);
        {
            let mut state = self.state.write();
            state.freq_dictionary.clear();
            state.docs = Arc::clone(&docs);
        }
        tracing::info!(num_docs = docs.len(), "updating document base");

        // Tokenize and count outside the lock; the pool bounds fan-out to
        // available parallelism regardless of corpus size.
        let local_counts: Vec<HashMap<String, usize>> =
            docs.par_iter().map(|text| term_counts(text)).collect();

        // Merge in ascending doc_id order, one exclusive section per
        // document, so posting lists never need a sort pass.
        for (doc_id, counts) in local_counts.into_iter().enumerate() {
            let mut state = self.state.write();
            for (word, count) in counts {
                state
                    .freq_dictionary
                    .entry(word)
                    .or_default()
                    .push(Entry { doc_id, count });
            }
        }

        let unique_words = self.state.read().freq_dictionary.len();
        tracing::info!(unique_words, "indexing complete");
    }

    /// Postings for `word`, as a copy. Unknown words yield an empty list.
    pub fn word_postings(&self, word: &str) -> Vec<Entry> {
        let state = self.state.read();
        state
            .freq_dictionary
            .get(word)
            .cloned()
            .unwrap_or_default()
    }

    /// Sum of `count` across all of `word`'s postings.
    pub fn total_word_count(&self, word: &str) -> usize {
        let state = self.state.read();
        state
            .freq_dictionary
            .get(word)
            .map(|entries| entries.iter().map(|e| e.count).sum())
            .unwrap_or(0)
    }

    /// Copy of the current document sequence.
    pub fn all_documents(&self) -> Vec<String> {
        self.state.read().docs.as_ref().clone()
    }

    /// Read-only view of the full word -> postings mapping. Holds the
    /// shared lock for the lifetime of the guard.
    pub fn frequency_dictionary(&self) -> MappedRwLockReadGuard<'_, HashMap<String, Vec<Entry>>> {
        RwLockReadGuard::map(self.state.read(), |state| &state.freq_dictionary)
    }
}
