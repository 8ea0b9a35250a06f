//! Grouping of loaded records by dataset.

use std::collections::BTreeMap;

use makegen_model::{ArtifactRecord, DatasetGroup, PolicyConfig};
use tracing::warn;

/// Why a record was left out of every group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedRecord {
    NoSource { id: String },
    Excluded { id: String, label: String },
}

impl SkippedRecord {
    /// The comment line announcing the skip in the generated Makefile.
    pub fn warning_line(&self) -> String {
        match self {
            SkippedRecord::NoSource { id } => format!("## WARNING: no source for: {id}"),
            SkippedRecord::Excluded { id, label } => {
                format!("## WARNING: Skipping {label}: {id}")
            }
        }
    }
}

/// Records grouped by dataset id, plus the records that were dropped.
///
/// Groups are keyed in a `BTreeMap`, so iteration is ordered by dataset id
/// and the generated Makefile does not depend on input order across
/// datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetGroups {
    pub groups: BTreeMap<String, DatasetGroup>,
    /// Dropped records, in load order.
    pub skipped: Vec<SkippedRecord>,
}

impl DatasetGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, dataset: &str) -> Option<&DatasetGroup> {
        self.groups.get(dataset)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetGroup> {
        self.groups.values()
    }
}

/// Group `records` by dataset, dropping those without a source or that
/// belong to an excluded dataset.
pub fn group_records(records: Vec<ArtifactRecord>, policy: &PolicyConfig) -> DatasetGroups {
    let mut grouped = DatasetGroups::default();
    for record in records {
        if record.source.is_none() {
            warn!(id = %record.id, dataset = %record.dataset, "record has no source, skipping");
            grouped
                .skipped
                .push(SkippedRecord::NoSource { id: record.id });
            continue;
        }
        if let Some(label) = policy.excluded_label(&record.dataset) {
            warn!(id = %record.id, dataset = %record.dataset, "dataset is excluded, skipping");
            grouped.skipped.push(SkippedRecord::Excluded {
                id: record.id,
                label: label.to_string(),
            });
            continue;
        }
        let dataset = record.dataset.clone();
        grouped
            .groups
            .entry(dataset.clone())
            .or_insert_with(|| DatasetGroup::new(dataset))
            .push(record);
    }
    for group in grouped.groups.values() {
        if group.gaf_count() > 1 {
            warn!(
                dataset = %group.id,
                gaf_records = group.gaf_count(),
                "multiple GAF sources, only the first is downloaded"
            );
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, dataset: &str, kind: &str) -> ArtifactRecord {
        ArtifactRecord::new(id, dataset, kind).with_source(format!("http://x/{id}"))
    }

    #[test]
    fn groups_by_dataset_in_load_order() {
        let records = vec![
            record("mgi-gaf", "mgi", "gaf"),
            record("sgd-gaf", "sgd", "gaf"),
            record("mgi-gpi", "mgi", "gpi"),
        ];
        let grouped = group_records(records, &PolicyConfig::default());
        assert_eq!(grouped.len(), 2);
        let mgi = grouped.get("mgi").expect("mgi group");
        let ids: Vec<_> = mgi.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["mgi-gaf", "mgi-gpi"]);
        assert!(grouped.skipped.is_empty());
    }

    #[test]
    fn record_without_source_is_dropped() {
        let records = vec![ArtifactRecord::new("fb-gaf", "fb", "gaf")];
        let grouped = group_records(records, &PolicyConfig::default());
        assert!(grouped.is_empty());
        assert_eq!(grouped.skipped.len(), 1);
        assert_eq!(
            grouped.skipped[0].warning_line(),
            "## WARNING: no source for: fb-gaf"
        );
    }

    #[test]
    fn excluded_datasets_are_dropped_with_label() {
        let records = vec![
            record("paint_fb", "paint", "gaf"),
            record("rnac-gpad", "rnacentral", "gpad"),
        ];
        let grouped = group_records(records, &PolicyConfig::default());
        assert!(grouped.is_empty());
        let lines: Vec<_> = grouped
            .skipped
            .iter()
            .map(SkippedRecord::warning_line)
            .collect();
        assert_eq!(
            lines,
            vec![
                "## WARNING: Skipping PAINT: paint_fb",
                "## WARNING: Skipping RNAC: rnac-gpad",
            ]
        );
    }

    #[test]
    fn missing_source_is_reported_before_exclusion() {
        let records = vec![ArtifactRecord::new("paint_zfin", "paint", "gaf")];
        let grouped = group_records(records, &PolicyConfig::default());
        assert_eq!(
            grouped.skipped,
            vec![SkippedRecord::NoSource {
                id: "paint_zfin".to_string()
            }]
        );
    }

    #[test]
    fn empty_policy_excludes_nothing() {
        let records = vec![record("paint_fb", "paint", "gaf")];
        let grouped = group_records(records, &PolicyConfig::empty());
        assert!(grouped.get("paint").is_some());
    }
}
