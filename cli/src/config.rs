use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config files carrying a different version are rejected at startup.
pub const APP_VERSION: &str = "1.0";

fn default_max_responses() -> usize {
    5
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    config: Option<ConfigSection>,
    #[serde(default)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigSection {
    name: Option<String>,
    version: Option<String>,
    #[serde(default = "default_max_responses")]
    max_responses: usize,
}

/// Validated engine configuration: the response limit and the document
/// file paths that exist on disk, in config order.
#[derive(Debug)]
pub struct Config {
    pub name: Option<String>,
    pub max_responses: usize,
    pub file_paths: Vec<PathBuf>,
}

impl Config {
    /// Load and validate `config.json`. Missing file, malformed JSON, a
    /// missing `config` section, and a version mismatch are all fatal;
    /// listed files that do not exist are warned about and skipped.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file is missing: {}", path.display());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let parsed: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("error decoding JSON from {}", path.display()))?;

        let Some(section) = parsed.config else {
            bail!("config file is empty");
        };

        match section.name.as_deref() {
            Some(name) if !name.is_empty() => tracing::info!(name, "starting engine"),
            _ => tracing::warn!("'name' field is missing in config, starting unnamed engine"),
        }

        let version = section.version.unwrap_or_default();
        if version != APP_VERSION {
            bail!(
                "config.json has incorrect file version: app version {APP_VERSION}, config version {version}"
            );
        }

        let mut file_paths = Vec::with_capacity(parsed.files.len());
        for file in parsed.files {
            if file.exists() {
                file_paths.push(file);
            } else {
                tracing::warn!(path = %file.display(), "file not found, skipping");
            }
        }
        tracing::info!(
            num_files = file_paths.len(),
            "configuration loaded"
        );

        Ok(Self {
            name: section.name,
            max_responses: section.max_responses,
            file_paths,
        })
    }

    /// Read every configured file into a string, in order; position i of
    /// the returned sequence becomes `doc_id = i`. Unreadable files are
    /// warned about and skipped.
    pub fn read_documents(&self) -> Vec<String> {
        let mut documents = Vec::with_capacity(self.file_paths.len());
        for path in &self.file_paths {
            match fs::read_to_string(path) {
                Ok(content) => documents.push(content),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "could not read file, skipping");
                }
            }
        }
        documents
    }
}
