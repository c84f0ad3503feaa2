//! Error types
//!
//! The vertex model, groups and registry are infallible. Errors only come
//! from loading a dataset and from parsing category identifiers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a vertex dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be read
    #[error("Could not access dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a well-formed document
    #[error("Malformed dataset: {0}")]
    Malformed(String),

    /// The dataset was read but holds no vertices. Not fatal: callers
    /// usually carry on with an empty registry.
    #[error("Dataset contains no vertices")]
    EmptyDataset,
}

impl LoadError {
    /// Whether the application can keep running on an empty model.
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, LoadError::EmptyDataset)
    }
}

/// Result type for dataset loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// A string that does not name a category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category identifier: {0:?}")]
pub struct ParseCategoryError(pub String);
