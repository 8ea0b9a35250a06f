//! CLI library components for the annotation Makefile generator.

pub mod commands;
pub mod logging;
pub mod summary;
