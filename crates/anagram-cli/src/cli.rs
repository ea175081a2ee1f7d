//! CLI argument definitions for the anagram finder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anagram-finder",
    version,
    about = "Anagram Finder - check texts for anagrams and recall known ones",
    long_about = "Check whether two texts are anagrams and look up anagrams among\n\
                  the texts compared so far.\n\n\
                  Replacement modes (LATIN, MODERN) treat historically interchangeable\n\
                  letters as equal before comparing."
)]
pub struct Cli {
    /// Defaults to the interactive shell.
    #[command(subcommand)]
    pub command: Option<Command>,

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

    /// Include entered texts in log events instead of redacting them.
    #[arg(long = "log-input", global = true)]
    pub log_input: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the interactive menu.
    Shell(ShellArgs),

    /// Compare two texts once and exit (status 0 if they are anagrams, 1 if not).
    Check(CheckArgs),

    /// List the available replacement modes.
    Modes,
}

#[derive(Parser, Default)]
pub struct ShellArgs {
    /// Replacement mode to activate at startup (repeatable).
    #[arg(long = "mode", value_name = "MODE")]
    pub modes: Vec<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[arg(value_name = "FIRST")]
    pub first: String,

    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Replacement mode to apply (repeatable).
    #[arg(long = "mode", value_name = "MODE")]
    pub modes: Vec<String>,

    /// Output format of the result.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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
