//! Dataset loading: JSON in, normalized tree out.
//!
//! # Responsibility
//! - Parse the camelCase JSON export of a family tree and run the repair
//!   pass, so callers only ever hold normalized trees.
//! - Log every repair as a structured warning event.
//!
//! # Invariants
//! - The raw data is a parameter, never an ambient global; callers own the
//!   returned tree.
//! - Duplicate JSON keys follow map semantics: the last record wins.

use crate::normalize::{normalize, Normalized};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loader error: the file could not be read, or the JSON did not match the
/// tree shape. Relationship-level problems are never errors; they come back
/// as normalization warnings.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "dataset is not a valid family tree: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a family tree from JSON text and normalizes it.
pub fn load_tree_from_str(raw: &str) -> LoadResult<Normalized> {
    let tree = serde_json::from_str(raw)?;
    let normalized = normalize(tree);

    for warning in &normalized.warnings {
        warn!("event=dataset_warning module=loader status=repaired detail={warning}");
    }
    info!(
        "event=dataset_loaded module=loader status=ok persons={} warnings={}",
        normalized.tree.len(),
        normalized.warnings.len()
    );

    Ok(normalized)
}

/// Reads a dataset file and normalizes it.
pub fn load_tree_from_path(path: &Path) -> LoadResult<Normalized> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_tree_from_str(&raw)
}
