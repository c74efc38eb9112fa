use std::collections::HashMap;

/// Split raw text on whitespace into word tokens. Case and punctuation are
/// preserved exactly as written; "Milk" and "milk," are distinct words.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count occurrences of each distinct word in `text`.
pub fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in tokenize(text) {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}
