//! How a dataset is turned into targets.
//!
//! The checks run in a fixed order and the first match wins:
//!
//! 1. no GAF and no GPAD   -> [`Disposition::Incomplete`]
//! 2. listed in `skip`     -> [`Disposition::Skipped`]
//! 3. listed in `noiea`    -> [`Disposition::Noiea`]
//! 4. any `aggregates`     -> [`Disposition::Aggregated`]
//! 5. otherwise            -> [`Disposition::Standard`]

use std::fmt;

use makegen_model::{DatasetGroup, PolicyConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Metadata lacks both GAF and GPAD; only a placeholder rule.
    Incomplete,
    /// Listed in the skip table; only a placeholder rule.
    Skipped,
    /// Publishes the noiea GPAD/GPI/check outputs under fixed names.
    Noiea,
    /// Pass-through union of other datasets; GAF output only.
    Aggregated,
    /// Full pipeline. `only_gaf` drops the check and TTL targets.
    Standard { only_gaf: bool },
}

impl Disposition {
    /// Whether the dataset contributes to the "simple" aggregate targets.
    pub fn is_simple(self) -> bool {
        !matches!(self, Disposition::Incomplete | Disposition::Skipped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Incomplete => "incomplete",
            Disposition::Skipped => "skipped",
            Disposition::Noiea => "noiea",
            Disposition::Aggregated => "aggregated",
            Disposition::Standard { only_gaf: true } => "gaf-only",
            Disposition::Standard { only_gaf: false } => "standard",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(group: &DatasetGroup, policy: &PolicyConfig) -> Disposition {
    if !group.has_annotations() {
        return Disposition::Incomplete;
    }
    if policy.is_skipped(&group.id) {
        return Disposition::Skipped;
    }
    if policy.is_noiea(&group.id) {
        return Disposition::Noiea;
    }
    if group.is_aggregated() {
        return Disposition::Aggregated;
    }
    Disposition::Standard {
        only_gaf: policy.is_only_gaf(&group.id),
    }
}
