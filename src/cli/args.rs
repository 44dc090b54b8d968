//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::catalogue::Demo;

/// Classic design patterns, each with a canonical and a themed demonstration
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, env = "PATTERNBOOK_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available demos
    List,

    /// Run demos and print their transcripts
    Run {
        /// Demos to run, in order
        #[arg(value_enum, required_unless_present = "all")]
        demos: Vec<Demo>,

        /// Run every demo
        #[arg(long, conflicts_with = "demos")]
        all: bool,
    },

    /// Show the reference composite tree
    Tree,

    /// Print the effective configuration as TOML
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
