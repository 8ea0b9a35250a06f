//! Artifacts grouped by dataset id.

use crate::artifact::{ArtifactKind, ArtifactRecord};

/// All usable artifacts of one dataset, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetGroup {
    pub id: String,
    pub records: Vec<ArtifactRecord>,
}

impl DatasetGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ArtifactRecord) {
        self.records.push(record);
    }

    pub fn has_kind(&self, kind: &ArtifactKind) -> bool {
        self.records.iter().any(|record| &record.kind == kind)
    }

    /// True when the group has at least a GAF or a GPAD to build from.
    pub fn has_annotations(&self) -> bool {
        self.has_kind(&ArtifactKind::Gaf) || self.has_kind(&ArtifactKind::Gpad)
    }

    pub fn is_aggregated(&self) -> bool {
        self.records.iter().any(ArtifactRecord::is_aggregate)
    }

    /// First GAF record in load order. Later GAF records are ignored.
    pub fn first_gaf(&self) -> Option<&ArtifactRecord> {
        self.records
            .iter()
            .find(|record| record.kind == ArtifactKind::Gaf)
    }

    pub fn gaf_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind == ArtifactKind::Gaf)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(kinds: &[&str]) -> DatasetGroup {
        let mut group = DatasetGroup::new("zfin");
        for (idx, kind) in kinds.iter().enumerate() {
            group.push(
                ArtifactRecord::new(format!("zfin-{idx}"), "zfin", *kind)
                    .with_source(format!("http://x/{idx}")),
            );
        }
        group
    }

    #[test]
    fn annotations_need_gaf_or_gpad() {
        assert!(group(&["gaf"]).has_annotations());
        assert!(group(&["gpad", "gpi"]).has_annotations());
        assert!(!group(&["gpi"]).has_annotations());
        assert!(!group(&[]).has_annotations());
    }

    #[test]
    fn first_gaf_wins() {
        let group = group(&["gpi", "gaf", "gaf"]);
        assert_eq!(group.gaf_count(), 2);
        assert_eq!(group.first_gaf().map(|r| r.id.as_str()), Some("zfin-1"));
    }
}
