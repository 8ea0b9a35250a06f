use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use tracing::{debug, info, info_span};

use makegen_core::{
    DatasetGroups, DatasetPlan, Disposition, MakefileGenerator, group_records, load_documents,
    load_policy, write_makefile,
};
use makegen_model::PolicyConfig;

use crate::summary::{align_column, apply_table_style, header_cell};

/// Inputs shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Metadata documents, read in order.
    pub files: Vec<PathBuf>,
    /// Optional TOML policy overriding the built-in tables.
    pub policy: Option<PathBuf>,
}

pub fn resolve_policy(path: Option<&Path>) -> Result<PolicyConfig> {
    match path {
        Some(path) => {
            let policy = load_policy(path)
                .with_context(|| format!("load policy {}", path.display()))?;
            debug!(path = %path.display(), ?policy, "loaded policy file");
            Ok(policy)
        }
        None => Ok(PolicyConfig::default()),
    }
}

fn load_groups(options: &SourceOptions, policy: &PolicyConfig) -> Result<DatasetGroups> {
    let records = load_documents(&options.files).context("load dataset metadata")?;
    info!(
        documents = options.files.len(),
        records = records.len(),
        "loaded dataset metadata"
    );
    Ok(group_records(records, policy))
}

/// Generate the Makefile into `out`.
pub fn generate_to<W: Write>(options: &SourceOptions, out: &mut W) -> Result<()> {
    let policy = resolve_policy(options.policy.as_deref())?;
    let grouped = load_groups(options, &policy)?;
    let makefile = MakefileGenerator::new(&policy).generate(&grouped);
    write_makefile(out, &makefile).context("write makefile")?;
    out.flush().context("flush makefile")?;
    Ok(())
}

/// Generate the Makefile to `output`, or stdout when none is given.
pub fn run_generate(options: &SourceOptions, output: Option<&Path>) -> Result<()> {
    let span = info_span!("generate_command", files = options.files.len());
    let _guard = span.enter();
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            generate_to(options, &mut writer)?;
            info!(path = %path.display(), "wrote makefile");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            generate_to(options, &mut writer)
        }
    }
}

/// Classify every dataset without generating any rules.
pub fn plan_datasets(options: &SourceOptions) -> Result<Vec<DatasetPlan>> {
    let policy = resolve_policy(options.policy.as_deref())?;
    let grouped = load_groups(options, &policy)?;
    Ok(MakefileGenerator::new(&policy).plan(&grouped))
}

pub fn dataset_table(plans: &[DatasetPlan]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Disposition"),
        header_cell("Records"),
        header_cell("Targets"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for plan in plans {
        table.add_row(vec![
            Cell::new(&plan.dataset).add_attribute(Attribute::Bold),
            disposition_cell(plan.disposition),
            Cell::new(plan.records),
            Cell::new(plan.targets.len()),
        ]);
    }
    table
}

fn disposition_cell(disposition: Disposition) -> Cell {
    let cell = Cell::new(disposition.as_str());
    match disposition {
        Disposition::Incomplete | Disposition::Skipped => cell.fg(Color::DarkGrey),
        Disposition::Noiea | Disposition::Aggregated => cell.fg(Color::Yellow),
        Disposition::Standard { .. } => cell.fg(Color::Green),
    }
}

pub fn run_datasets(options: &SourceOptions) -> Result<()> {
    let plans = plan_datasets(options)?;
    println!("{}", dataset_table(&plans));
    Ok(())
}
