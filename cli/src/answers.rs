use anyhow::{Context, Result};
use lexfind_core::RelativeIndex;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Render one answer object per query result, keyed by synthesized
/// sequential ids ("request001", "request002", ...), and write the
/// `answers.json` document.
pub fn write_answers(
    path: &Path,
    results: &[Vec<RelativeIndex>],
    max_responses: usize,
) -> Result<()> {
    let document = render_answers(results, max_responses);
    let pretty = serde_json::to_string_pretty(&document)?;
    fs::write(path, pretty).with_context(|| format!("error writing {}", path.display()))?;
    Ok(())
}

fn render_answers(results: &[Vec<RelativeIndex>], max_responses: usize) -> Value {
    let mut answers = Map::new();
    for (i, ranked) in results.iter().enumerate() {
        let request_id = format!("request{:03}", i + 1);
        answers.insert(request_id, render_answer(ranked, max_responses));
    }
    json!({ "answers": answers })
}

/// Truncate to the response limit here, at the presentation boundary;
/// the ranking engine always returns the full list.
fn render_answer(ranked: &[RelativeIndex], max_responses: usize) -> Value {
    let matches = &ranked[..ranked.len().min(max_responses)];
    match matches {
        [] => json!({ "result": false }),
        [only] => json!({
            "result": true,
            "docid": only.doc_id,
            "rank": round3(only.rank),
        }),
        _ => {
            let relevance: Vec<Value> = matches
                .iter()
                .map(|m| json!({ "docid": m.doc_id, "rank": round3(m.rank) }))
                .collect();
            json!({ "result": true, "relevance": relevance })
        }
    }
}

/// Ranks are rendered with 3 decimal digits, rounded to nearest.
fn round3(rank: f32) -> f64 {
    (f64::from(rank) * 1000.0).round() / 1000.0
}
