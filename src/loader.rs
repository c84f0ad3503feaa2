//! Dataset loading.
//!
//! Reads a JSON rendition of the RGN dataset. Two shapes are accepted:
//!
//! ```json
//! [ { "name": "...", "latitude": "...", "longitude": "...",
//!     "altitude": "...", "type": "...", "order": "..." } ]
//! ```
//!
//! or the same array under a `"vg"` key, mirroring `<rgn><vg>…</vg></rgn>`.
//! Field values may be strings or numbers; see [`RawRecord`].
//!
//! A document with no records is reported as [`LoadError::EmptyDataset`].
//! The application is expected to continue with an empty [`Registry`] in
//! that case:
//!
//! ```rust
//! use rgn_vertices::{loader, Registry};
//!
//! let registry = loader::load_registry_str(r#"{"vg": []}"#).unwrap_or_default();
//! assert!(registry.is_empty());
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::{LoadError, Result};
use crate::record::{RawRecord, VertexRecord};
use crate::registry::Registry;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<RawRecord>),
    Rgn { vg: Vec<RawRecord> },
}

/// Parse a JSON document into vertex records.
pub fn load_str(json: &str) -> Result<Vec<VertexRecord>> {
    let document: Document =
        serde_json::from_str(json).map_err(|e| LoadError::Malformed(e.to_string()))?;
    let raw = match document {
        Document::List(records) | Document::Rgn { vg: records } => records,
    };

    if raw.is_empty() {
        warn!("Dataset contains no vertices");
        return Err(LoadError::EmptyDataset);
    }

    let records: Vec<VertexRecord> = raw.iter().map(RawRecord::parse).collect();
    info!("Loaded {} vertex records", records.len());
    Ok(records)
}

/// Read and parse a JSON dataset file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<VertexRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&json)
}

/// Parse a JSON document straight into a populated registry.
pub fn load_registry_str(json: &str) -> Result<Registry> {
    Ok(load_str(json)?.into_iter().collect())
}

/// Read a JSON dataset file straight into a populated registry.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry> {
    Ok(load_file(path)?.into_iter().collect())
}
