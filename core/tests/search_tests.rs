use lexfind_core::{InvertedIndex, RelativeIndex, SearchServer};
use std::sync::Arc;

fn server_over(docs: &[&str]) -> SearchServer {
    let index = Arc::new(InvertedIndex::new());
    index.update_document_base(docs.iter().map(|d| d.to_string()).collect());
    SearchServer::new(index)
}

#[test]
fn conjunctive_match_requires_every_word() {
    let server = server_over(&[
        "milk sugar salt",
        "milk a milk b milk c milk d",
        "salt water and sugar",
    ]);

    // Only doc 0 contains both "milk" and "sugar".
    let results = server.search(&["milk sugar".to_string()]);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0],
        vec![RelativeIndex { doc_id: 0, rank: 1.0 }]
    );
}

#[test]
fn empty_query_yields_empty_result() {
    let server = server_over(&["milk sugar salt"]);
    let results = server.search(&["".to_string()]);
    assert_eq!(results, vec![vec![]]);
}

#[test]
fn absent_word_disqualifies_every_document() {
    let server = server_over(&["milk sugar salt", "salt water"]);
    let results = server.search(&["milk banana".to_string()]);
    assert_eq!(results, vec![vec![]]);
}

#[test]
fn best_match_is_normalized_to_one() {
    let server = server_over(&[
        "milk milk milk sugar",
        "milk sugar",
        "sugar only here",
    ]);

    let results = server.search(&["milk sugar".to_string()]);
    let ranked = &results[0];
    assert_eq!(ranked.len(), 2);
    assert!((ranked[0].rank - 1.0).abs() < f32::EPSILON);
    assert_eq!(ranked[0].doc_id, 0);
    for hit in ranked {
        assert!(hit.rank > 0.0 && hit.rank <= 1.0);
    }
}

#[test]
fn results_sort_descending_by_rank() {
    let server = server_over(&[
        "ale ale beer",
        "ale beer beer beer",
        "ale beer",
    ]);

    let results = server.search(&["ale beer".to_string()]);
    let ranked = &results[0];
    assert_eq!(ranked.len(), 3);
    // doc 1 scores 4, doc 0 scores 3, doc 2 scores 2.
    assert_eq!(ranked[0], RelativeIndex { doc_id: 1, rank: 1.0 });
    assert_eq!(ranked[1], RelativeIndex { doc_id: 0, rank: 0.75 });
    assert_eq!(ranked[2], RelativeIndex { doc_id: 2, rank: 0.5 });
}

#[test]
fn equal_ranks_break_ties_by_ascending_doc_id() {
    let server = server_over(&["tea cup", "cup tea", "tea cup"]);

    let results = server.search(&["tea cup".to_string()]);
    let ranked = &results[0];
    assert_eq!(ranked.len(), 3);
    let ids: Vec<usize> = ranked.iter().map(|r| r.doc_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    for hit in ranked {
        assert!((hit.rank - 1.0).abs() < f32::EPSILON);
    }
}

#[test]
fn duplicate_query_words_count_once() {
    let server = server_over(&["milk sugar", "milk milk sugar"]);

    let once = server.search(&["milk sugar".to_string()]);
    let twice = server.search(&["milk milk sugar sugar".to_string()]);
    assert_eq!(once, twice);
}

#[test]
fn one_result_list_per_query_in_order() {
    let server = server_over(&["milk sugar salt", "salt water"]);

    let results = server.search(&[
        "water".to_string(),
        "banana".to_string(),
        "milk".to_string(),
    ]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], vec![RelativeIndex { doc_id: 1, rank: 1.0 }]);
    assert!(results[1].is_empty());
    assert_eq!(results[2], vec![RelativeIndex { doc_id: 0, rank: 1.0 }]);
}

#[test]
fn search_after_rebuild_sees_new_corpus() {
    let index = Arc::new(InvertedIndex::new());
    index.update_document_base(vec!["old words".to_string()]);
    let server = SearchServer::new(Arc::clone(&index));
    assert_eq!(server.search(&["old".to_string()]), vec![vec![
        RelativeIndex { doc_id: 0, rank: 1.0 }
    ]]);

    index.update_document_base(vec!["fresh words".to_string()]);
    assert_eq!(server.search(&["old".to_string()]), vec![vec![]]);
    assert_eq!(server.search(&["fresh".to_string()]), vec![vec![
        RelativeIndex { doc_id: 0, rank: 1.0 }
    ]]);
}
