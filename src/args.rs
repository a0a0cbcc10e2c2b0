#![deny(missing_docs)]

use agbcc_opts::OutputFilters;
use clap::Parser;
use std::path::PathBuf;

/// Resolves the argument list for one agbcc invocation.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Arguments {
    /// Destination path for compiled output
    #[clap(long, short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Toolchain configuration file (TOML)
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request Intel-syntax assembly
    #[clap(long)]
    pub intel: bool,

    /// Request raw binary output instead of assembly text
    #[clap(long)]
    pub binary: bool,

    /// Keep only referenced labels when post-processing assembly
    #[clap(long)]
    pub labels: bool,

    /// Strip assembler directives when post-processing assembly
    #[clap(long)]
    pub directives: bool,

    /// Strip comment-only lines when post-processing assembly
    #[clap(long)]
    pub comment_only: bool,

    /// Demangle symbol names when post-processing assembly
    #[clap(long)]
    pub demangle: bool,

    /// Print the argument list as a JSON array
    #[clap(long)]
    pub json: bool,
}

impl Arguments {
    /// The output filters requested on the command line.
    pub fn filters(&self) -> OutputFilters {
        OutputFilters {
            intel: self.intel,
            binary: self.binary,
            labels: self.labels,
            directives: self.directives,
            comment_only: self.comment_only,
            demangle: self.demangle,
        }
    }
}
