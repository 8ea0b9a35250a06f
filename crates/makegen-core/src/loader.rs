//! Loading of metadata documents and policy files.

use std::fs;
use std::path::{Path, PathBuf};

use makegen_model::{ArtifactRecord, MetadataDocument, PolicyConfig};
use tracing::{debug, info_span};

use crate::error::{MakegenError, Result};

/// Parse one metadata document. `path` is only used for error reporting.
pub fn parse_document(text: &str, path: &Path) -> Result<Vec<ArtifactRecord>> {
    let document: MetadataDocument =
        serde_yaml::from_str(text).map_err(|source| MakegenError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.datasets)
}

/// Load every document and concatenate their records in argument order.
///
/// The first unreadable or malformed document aborts the whole load.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ArtifactRecord>> {
    let span = info_span!("load", documents = paths.len());
    let _guard = span.enter();
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| MakegenError::io(path, e))?;
        let loaded = parse_document(&text, path)?;
        debug!(path = %path.display(), records = loaded.len(), "loaded metadata document");
        records.extend(loaded);
    }
    Ok(records)
}

/// Load a TOML policy file. Keys it omits keep their defaults.
pub fn load_policy(path: &Path) -> Result<PolicyConfig> {
    let text = fs::read_to_string(path).map_err(|e| MakegenError::io(path, e))?;
    toml::from_str(&text).map_err(|source| MakegenError::Policy {
        path: PathBuf::from(path),
        source,
    })
}
