//! Per-dataset and aggregate rule generation.

use makegen_model::{BuildRule, DatasetGroup, Makefile, PolicyConfig};
use tracing::{debug, info, info_span};

use crate::disposition::{Disposition, classify};
use crate::grouping::DatasetGroups;
use crate::targets::{
    all_files, all_ttl, download_recipe, filtered_gaf, filtered_gpad, gpi, gzip, noiea_gafcheck,
    noiea_gpad, noiea_gpi, noiea_ttl, owltools_gafcheck, src_gaf_zip, targetdir, ttl,
};

pub const HEADER: &str = "## AUTOGENERATED MAKEFILE";

pub const ALL_TARGETS: &str = "all_targets";
pub const ALL_TARGETS_SIMPLE: &str = "all_targets_simple";
pub const ALL_TARGETS_TTL: &str = "all_targets_ttl";

const SECTION_RULE: &str = "## --------------------";

/// Outcome of classifying one dataset, as reported by `makegen datasets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPlan {
    pub dataset: String,
    pub disposition: Disposition,
    pub records: usize,
    /// Dependencies of the dataset's `all_{ds}` rule.
    pub targets: Vec<String>,
}

/// Turns grouped metadata into a [`Makefile`].
#[derive(Debug, Clone, Copy)]
pub struct MakefileGenerator<'a> {
    policy: &'a PolicyConfig,
}

impl<'a> MakefileGenerator<'a> {
    pub fn new(policy: &'a PolicyConfig) -> Self {
        Self { policy }
    }

    pub fn generate(&self, grouped: &DatasetGroups) -> Makefile {
        let span = info_span!("generate", datasets = grouped.len());
        let _guard = span.enter();

        let mut makefile = Makefile::new();
        makefile.line(HEADER);
        makefile.blank();
        for skipped in &grouped.skipped {
            makefile.line(skipped.warning_line());
        }

        let mut simple = Vec::new();
        for group in grouped.iter() {
            let disposition = classify(group, self.policy);
            debug!(
                dataset = %group.id,
                %disposition,
                records = group.records.len(),
                "classified dataset"
            );
            makefile.extend(self.dataset_rules(group, disposition));
            if disposition.is_simple() {
                simple.push(group.id.as_str());
            }
        }

        makefile.rule(
            BuildRule::new(ALL_TARGETS).with_dependencies(grouped.iter().map(|g| all_files(&g.id))),
        );
        makefile.rule(
            BuildRule::new(ALL_TARGETS_SIMPLE)
                .with_dependencies(simple.iter().map(|ds| all_files(ds)))
                .with_comment("Excludes aggregated (goa_uniprot)"),
        );
        makefile.rule(
            BuildRule::new(ALL_TARGETS_TTL)
                .with_dependencies(simple.iter().map(|ds| all_ttl(ds)))
                .with_comment("RDF targets. Excludes aggregated (goa_uniprot)"),
        );

        info!(
            datasets = grouped.len(),
            simple = simple.len(),
            skipped_records = grouped.skipped.len(),
            "generated makefile"
        );
        makefile
    }

    /// Classify every group without rendering any rules.
    pub fn plan(&self, grouped: &DatasetGroups) -> Vec<DatasetPlan> {
        grouped
            .iter()
            .map(|group| {
                let disposition = classify(group, self.policy);
                DatasetPlan {
                    dataset: group.id.clone(),
                    disposition,
                    records: group.records.len(),
                    targets: self.dataset_targets(&group.id, disposition),
                }
            })
            .collect()
    }

    /// Dependencies of the `all_{ds}` rule for a classified dataset.
    pub fn dataset_targets(&self, ds: &str, disposition: Disposition) -> Vec<String> {
        match disposition {
            Disposition::Incomplete | Disposition::Skipped => Vec::new(),
            Disposition::Noiea => vec![
                gzip(&filtered_gaf(ds)),
                gzip(&noiea_gpad(ds)),
                gzip(&noiea_gpi(ds)),
                noiea_gafcheck(ds),
            ],
            Disposition::Aggregated => vec![targetdir(ds), gzip(&filtered_gaf(ds))],
            Disposition::Standard { only_gaf } => {
                let mut targets = vec![
                    targetdir(ds),
                    gzip(&filtered_gaf(ds)),
                    gzip(&filtered_gpad(ds)),
                    gzip(&gpi(ds)),
                ];
                if !only_gaf {
                    targets.push(owltools_gafcheck(ds));
                }
                targets
            }
        }
    }

    fn ttl_targets(&self, ds: &str, disposition: Disposition, targets: &[String]) -> Vec<String> {
        let mut ttl_targets = targets.to_vec();
        match disposition {
            Disposition::Noiea => ttl_targets.push(noiea_ttl(ds)),
            Disposition::Standard { only_gaf: true } => {}
            _ => ttl_targets.push(ttl(ds)),
        }
        ttl_targets
    }

    /// The section of the Makefile belonging to one dataset.
    pub fn dataset_rules(&self, group: &DatasetGroup, disposition: Disposition) -> Makefile {
        let ds = group.id.as_str();
        let mut makefile = Makefile::new();
        makefile.line(SECTION_RULE);
        makefile.line(format!("## {ds}"));
        makefile.line(SECTION_RULE);
        makefile.blank();

        match disposition {
            Disposition::Incomplete => {
                makefile.line("# Metadata incomplete");
                makefile.blank();
                makefile.rule(BuildRule::new(all_files(ds)));
                return makefile;
            }
            Disposition::Skipped => {
                makefile.line("# Skipping");
                makefile.blank();
                makefile.rule(BuildRule::new(all_files(ds)));
                return makefile;
            }
            Disposition::Noiea | Disposition::Aggregated | Disposition::Standard { .. } => {}
        }

        let targets = self.dataset_targets(ds, disposition);
        let ttl_targets = self.ttl_targets(ds, disposition, &targets);
        makefile.rule(BuildRule::new(all_files(ds)).with_dependencies(targets));
        makefile.rule(BuildRule::new(all_ttl(ds)).with_dependencies(ttl_targets));
        makefile.rule(
            BuildRule::new(targetdir(ds)).with_recipe(&format!("mkdir -p {}", targetdir(ds))),
        );

        if let Some(url) = group.first_gaf().and_then(|gaf| gaf.source.as_deref()) {
            makefile.rule(
                BuildRule::new(src_gaf_zip(ds))
                    .with_dependencies([targetdir(ds)])
                    .with_recipe(&download_recipe(url)),
            );
        }
        makefile
    }
}
