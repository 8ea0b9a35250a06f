//! CLI argument definitions for the Makefile generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use makegen_cli::commands::SourceOptions;

#[derive(Parser)]
#[command(
    name = "makegen",
    version,
    about = "Generate Makefile rules for GO annotation source datasets",
    long_about = "Read dataset metadata documents (YAML) describing GAF/GPAD/GPI source files\n\
                  and print Makefile rules that download, compress and check them.\n\
                  Without a subcommand, `makegen FILES...` behaves like `makegen generate FILES...`.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the implicit `generate` command.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the Makefile for the given metadata documents.
    Generate(GenerateArgs),

    /// Show how each dataset would be handled.
    Datasets(SourceArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Dataset metadata documents, each holding a `datasets` list.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// TOML file overriding the skip, only_gaf, noiea and excluded tables.
    #[arg(long = "policy", value_name = "PATH")]
    pub policy: Option<PathBuf>,
}

impl SourceArgs {
    pub fn to_options(&self) -> SourceOptions {
        SourceOptions {
            files: self.files.clone(),
            policy: self.policy.clone(),
        }
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the Makefile here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
