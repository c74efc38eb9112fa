use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::index::{DocId, InvertedIndex};
use crate::tokenizer::tokenize;

/// One ranked match: the document and its relevance relative to the best
/// match of the same query, in `(0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelativeIndex {
    pub doc_id: DocId,
    pub rank: f32,
}

impl PartialEq for RelativeIndex {
    fn eq(&self, other: &Self) -> bool {
        self.doc_id == other.doc_id && (self.rank - other.rank).abs() < f32::EPSILON
    }
}

/// Conjunctive ("AND") ranking engine over an [`InvertedIndex`].
///
/// Holds a read-only handle to the index; searching never mutates it.
pub struct SearchServer {
    index: Arc<InvertedIndex>,
}

impl SearchServer {
    pub fn new(index: Arc<InvertedIndex>) -> Self {
        Self { index }
    }

    /// Answer each query with a ranked list of documents containing every
    /// unique word of that query. One output list per input query, in
    /// order; queries with no match yield an empty list.
    pub fn search(&self, queries: &[String]) -> Vec<Vec<RelativeIndex>> {
        queries
            .iter()
            .map(|query| {
                let unique_words = self.unique_words_rarest_first(query);
                let relevance = self.absolute_relevance(&unique_words);
                ranked_results(&relevance)
            })
            .collect()
    }

    /// Deduplicate the query's words and order them ascending by global
    /// term frequency. Processing the rarest word first keeps the
    /// candidate set as small as possible during intersection.
    fn unique_words_rarest_first(&self, query: &str) -> Vec<String> {
        let unique: HashSet<&str> = tokenize(query).into_iter().collect();
        let mut words: Vec<String> = unique.into_iter().map(str::to_string).collect();
        words.sort_unstable_by(|a, b| {
            self.index
                .total_word_count(a)
                .cmp(&self.index.total_word_count(b))
                .then_with(|| a.cmp(b))
        });
        words
    }

    /// Intersect posting lists in rarity order, accumulating per-document
    /// term frequency sums. The result maps exactly the documents that
    /// contain every word to their absolute relevance.
    fn absolute_relevance(&self, unique_words: &[String]) -> HashMap<DocId, usize> {
        let Some((rarest, rest)) = unique_words.split_first() else {
            return HashMap::new();
        };

        // Seed the candidate set from the rarest word; if even that word
        // matches nothing, no document can satisfy the conjunction.
        let rare_entries = self.index.word_postings(rarest);
        if rare_entries.is_empty() {
            return HashMap::new();
        }
        let mut relevance: HashMap<DocId, usize> = rare_entries
            .iter()
            .map(|entry| (entry.doc_id, entry.count))
            .collect();

        for word in rest {
            let entries = self.index.word_postings(word);
            let docs_with_word: HashSet<DocId> =
                entries.iter().map(|entry| entry.doc_id).collect();

            for entry in &entries {
                if let Some(score) = relevance.get_mut(&entry.doc_id) {
                    *score += entry.count;
                }
            }
            relevance.retain(|doc_id, _| docs_with_word.contains(doc_id));

            if relevance.is_empty() {
                return relevance;
            }
        }

        relevance
    }
}

/// Normalize absolute relevance into ranks in `(0, 1]` and order the
/// results: descending rank, ties broken by ascending `doc_id`.
fn ranked_results(relevance: &HashMap<DocId, usize>) -> Vec<RelativeIndex> {
    let max_abs = relevance.values().copied().max().unwrap_or(0);
    if max_abs == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RelativeIndex> = relevance
        .iter()
        .map(|(&doc_id, &abs)| RelativeIndex {
            doc_id,
            rank: abs as f32 / max_abs as f32,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        if (a.rank - b.rank).abs() > f32::EPSILON {
            b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal)
        } else {
            a.doc_id.cmp(&b.doc_id)
        }
    });
    ranked
}
