use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RequestsFile {
    #[serde(default)]
    requests: Vec<String>,
}

/// Read the query list from `requests.json`. A missing or malformed file
/// is not fatal: the engine proceeds with zero requests.
pub fn read_requests(path: &Path) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not read requests file");
            return Vec::new();
        }
    };
    match serde_json::from_str::<RequestsFile>(&raw) {
        Ok(file) => {
            tracing::info!(count = file.requests.len(), "loaded requests");
            file.requests
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "error decoding requests file");
            Vec::new()
        }
    }
}
