//! Artifact records as they appear in dataset metadata documents.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// File type of a single artifact.
///
/// Only GAF and GPAD drive target generation; GPI and anything else is
/// carried through so the grouping still sees it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ArtifactKind {
    Gaf,
    Gpad,
    Gpi,
    Other(String),
}

impl ArtifactKind {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactKind::Gaf => "gaf",
            ArtifactKind::Gpad => "gpad",
            ArtifactKind::Gpi => "gpi",
            ArtifactKind::Other(value) => value,
        }
    }
}

impl From<String> for ArtifactKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gaf" => ArtifactKind::Gaf,
            "gpad" => ArtifactKind::Gpad,
            "gpi" => ArtifactKind::Gpi,
            _ => ArtifactKind::Other(value),
        }
    }
}

impl From<&str> for ArtifactKind {
    fn from(value: &str) -> Self {
        ArtifactKind::from(value.to_string())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a metadata document: a single file of a dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtifactRecord {
    /// Unique label of the artifact (e.g. `sgd-gaf`).
    pub id: String,
    /// Grouping key shared by all artifacts of one dataset.
    pub dataset: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Origin URL. Records without one are never grouped.
    #[serde(default)]
    pub source: Option<String>,
    /// Present when the dataset is a union of other datasets. Only the key
    /// matters: `aggregates: ~` still marks the record as an aggregate.
    #[serde(default, deserialize_with = "present_value")]
    pub aggregates: Option<serde_yaml::Value>,
}

impl ArtifactRecord {
    pub fn new(
        id: impl Into<String>,
        dataset: impl Into<String>,
        kind: impl Into<ArtifactKind>,
    ) -> Self {
        Self {
            id: id.into(),
            dataset: dataset.into(),
            kind: kind.into(),
            source: None,
            aggregates: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_aggregates(mut self, aggregates: serde_yaml::Value) -> Self {
        self.aggregates = Some(aggregates);
        self
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregates.is_some()
    }
}

/// Deserialize a key that was present, keeping an explicit null as `Some`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_yaml::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_yaml::Value::deserialize(deserializer).map(Some)
}

/// Top-level shape of a metadata document.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataDocument {
    pub datasets: Vec<ArtifactRecord>,
}
