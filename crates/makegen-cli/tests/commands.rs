//! Integration tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use makegen_cli::commands::{
    SourceOptions, dataset_table, generate_to, plan_datasets, resolve_policy, run_generate,
};
use makegen_core::Disposition;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "makegen-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

const SGD: &str = r#"datasets:
  - id: sgd
    dataset: sgd
    type: gaf
    source: "http://x/sgd.gaf.gz"
"#;

const POMBASE: &str = r#"datasets:
  - id: pombase-gaf
    dataset: pombase
    type: gaf
    source: "http://x/pombase.gaf.gz"
  - id: goa_pdb-gaf
    dataset: goa_pdb
    type: gaf
    source: "http://x/goa_pdb.gaf.gz"
"#;

fn generate(options: &SourceOptions) -> String {
    let mut buffer = Vec::new();
    generate_to(options, &mut buffer).expect("generate");
    String::from_utf8(buffer).expect("utf8")
}

#[test]
fn generates_from_several_documents() {
    let dir = unique_temp_dir("several");
    write(&dir.join("sgd.yaml"), SGD);
    write(&dir.join("pombase.yaml"), POMBASE);
    let options = SourceOptions {
        files: vec![dir.join("sgd.yaml"), dir.join("pombase.yaml")],
        policy: None,
    };

    let text = generate(&options);

    assert!(text.starts_with("## AUTOGENERATED MAKEFILE\n\n"));
    assert!(text.contains("all_sgd: target/groups/sgd/ target/groups/sgd/sgd.gaf.gz"));
    assert!(text.contains("\twget --retry-connrefused --waitretry=10 -t 10 --no-check-certificate http://x/sgd.gaf.gz -O $@.tmp && mv $@.tmp $@ && touch $@\n"));
    assert!(text.contains("# Skipping\n\nall_goa_pdb: \n"));
    assert!(text.contains("all_targets: all_goa_pdb all_pombase all_sgd\n"));
    assert!(text.contains("all_targets_simple: all_pombase all_sgd\n"));
    assert!(text.contains("all_targets_ttl: ttl_all_pombase ttl_all_sgd\n"));
}

#[test]
fn output_is_identical_across_runs() {
    let dir = unique_temp_dir("idempotent");
    write(&dir.join("pombase.yaml"), POMBASE);
    let options = SourceOptions {
        files: vec![dir.join("pombase.yaml")],
        policy: None,
    };
    assert_eq!(generate(&options), generate(&options));
}

#[test]
fn writes_to_output_file() {
    let dir = unique_temp_dir("output");
    write(&dir.join("sgd.yaml"), SGD);
    let output = dir.join("Makefile");
    let options = SourceOptions {
        files: vec![dir.join("sgd.yaml")],
        policy: None,
    };

    run_generate(&options, Some(output.as_path())).expect("run generate");

    assert_eq!(fs::read_to_string(&output).unwrap(), generate(&options));
}

#[test]
fn policy_file_overrides_tables() {
    let dir = unique_temp_dir("policy");
    write(&dir.join("pombase.yaml"), POMBASE);
    write(
        &dir.join("policy.toml"),
        "skip = []\nonly_gaf = [\"pombase\"]\n",
    );
    let options = SourceOptions {
        files: vec![dir.join("pombase.yaml")],
        policy: Some(dir.join("policy.toml")),
    };

    let plans = plan_datasets(&options).expect("plan");
    let dispositions: Vec<_> = plans
        .iter()
        .map(|plan| (plan.dataset.as_str(), plan.disposition))
        .collect();
    assert_eq!(
        dispositions,
        vec![
            ("goa_pdb", Disposition::Standard { only_gaf: false }),
            ("pombase", Disposition::Standard { only_gaf: true }),
        ]
    );

    let text = generate(&options);
    assert!(text.contains("ttl_all_pombase: target/groups/pombase/ target/groups/pombase/pombase.gaf.gz target/groups/pombase/pombase.gpad.gz target/groups/pombase/pombase.gpi.gz\n"));
}

#[test]
fn malformed_document_fails() {
    let dir = unique_temp_dir("malformed");
    write(&dir.join("broken.yaml"), "datasets: [unterminated\n");
    let options = SourceOptions {
        files: vec![dir.join("broken.yaml")],
        policy: None,
    };
    let mut buffer = Vec::new();
    let error = generate_to(&options, &mut buffer).unwrap_err();
    assert!(format!("{error:#}").contains("broken.yaml"));
    assert!(buffer.is_empty());
}

#[test]
fn missing_document_fails() {
    let dir = unique_temp_dir("missing");
    let options = SourceOptions {
        files: vec![dir.join("absent.yaml")],
        policy: None,
    };
    assert!(plan_datasets(&options).is_err());
}

#[test]
fn bad_policy_key_fails() {
    let dir = unique_temp_dir("bad-policy");
    write(&dir.join("policy.toml"), "skipped = [\"sgd\"]\n");
    let error = resolve_policy(Some(dir.join("policy.toml").as_path())).unwrap_err();
    assert!(format!("{error:#}").contains("policy.toml"));
}

#[test]
fn dataset_table_lists_every_dataset() {
    let dir = unique_temp_dir("table");
    write(&dir.join("pombase.yaml"), POMBASE);
    let options = SourceOptions {
        files: vec![dir.join("pombase.yaml")],
        policy: None,
    };
    let plans = plan_datasets(&options).expect("plan");
    let mut table = dataset_table(&plans);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("goa_pdb"));
    assert!(rendered.contains("skipped"));
    assert!(rendered.contains("pombase"));
    assert!(rendered.contains("standard"));
}
