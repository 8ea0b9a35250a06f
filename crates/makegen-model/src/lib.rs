pub mod artifact;
pub mod dataset;
pub mod policy;
pub mod rule;

pub use artifact::{ArtifactKind, ArtifactRecord, MetadataDocument};
pub use dataset::DatasetGroup;
pub use policy::PolicyConfig;
pub use rule::{BuildRule, Makefile, MakefileEntry};
