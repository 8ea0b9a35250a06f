//! Makefile generation for GO annotation source datasets.
//!
//! The pipeline is a single pass:
//!
//! - **load**: read metadata documents into [`ArtifactRecord`]s
//! - **group**: bucket records by dataset, dropping unusable ones
//! - **generate**: classify each dataset and emit its rules
//! - **print**: render the rules as Makefile text
//!
//! ```ignore
//! use makegen_core::{generate_makefile, load_documents};
//! use makegen_model::PolicyConfig;
//!
//! let records = load_documents(&["datasets/sgd.yaml"])?;
//! let makefile = generate_makefile(records, &PolicyConfig::default());
//! makegen_core::write_makefile(&mut std::io::stdout(), &makefile)?;
//! ```

#![deny(unsafe_code)]

pub mod disposition;
pub mod error;
pub mod generator;
pub mod grouping;
pub mod loader;
pub mod printer;
pub mod targets;

pub use crate::disposition::{Disposition, classify};
pub use crate::error::{MakegenError, Result};
pub use crate::generator::{DatasetPlan, MakefileGenerator};
pub use crate::grouping::{DatasetGroups, SkippedRecord, group_records};
pub use crate::loader::{load_documents, load_policy, parse_document};
pub use crate::printer::{render_makefile, write_makefile};

use makegen_model::{ArtifactRecord, Makefile, PolicyConfig};

/// Group `records` and generate the complete Makefile for them.
pub fn generate_makefile(records: Vec<ArtifactRecord>, policy: &PolicyConfig) -> Makefile {
    let grouped = group_records(records, policy);
    MakefileGenerator::new(policy).generate(&grouped)
}
