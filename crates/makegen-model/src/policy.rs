//! Dataset policy tables consulted while generating targets.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Datasets left out of target generation, with a placeholder rule instead.
pub const DEFAULT_SKIP: &[&str] = &["goa_pdb", "goa_uniprot_gcrp"];

/// Datasets restricted to GAF-derived targets.
pub const DEFAULT_ONLY_GAF: &[&str] = &[];

/// Datasets that publish the noiea variants of their GPAD/GPI outputs.
pub const DEFAULT_NOIEA: &[&str] = &["goa_uniprot_all"];

/// Datasets whose records are dropped before grouping, with the label used
/// in the warning line.
pub const DEFAULT_EXCLUDED: &[(&str, &str)] = &[("paint", "PAINT"), ("rnacentral", "RNAC")];

/// Policy tables passed explicitly into the generator.
///
/// Any key missing from a policy file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub skip: BTreeSet<String>,
    pub only_gaf: BTreeSet<String>,
    pub noiea: BTreeSet<String>,
    /// Dataset id -> label printed in the skip warning.
    pub excluded: BTreeMap<String, String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            skip: to_set(DEFAULT_SKIP),
            only_gaf: to_set(DEFAULT_ONLY_GAF),
            noiea: to_set(DEFAULT_NOIEA),
            excluded: DEFAULT_EXCLUDED
                .iter()
                .map(|(id, label)| ((*id).to_string(), (*label).to_string()))
                .collect(),
        }
    }
}

impl PolicyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy with every table empty.
    pub fn empty() -> Self {
        Self {
            skip: BTreeSet::new(),
            only_gaf: BTreeSet::new(),
            noiea: BTreeSet::new(),
            excluded: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_skip<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_only_gaf<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_gaf = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_noiea<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noiea = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, dataset: impl Into<String>, label: impl Into<String>) -> Self {
        self.excluded.insert(dataset.into(), label.into());
        self
    }

    pub fn is_skipped(&self, dataset: &str) -> bool {
        self.skip.contains(dataset)
    }

    pub fn is_only_gaf(&self, dataset: &str) -> bool {
        self.only_gaf.contains(dataset)
    }

    pub fn is_noiea(&self, dataset: &str) -> bool {
        self.noiea.contains(dataset)
    }

    /// Warning label when records of `dataset` must be dropped.
    pub fn excluded_label(&self, dataset: &str) -> Option<&str> {
        self.excluded.get(dataset).map(String::as_str)
    }
}

fn to_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}
