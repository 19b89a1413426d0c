//! Command-line interface for ocdformat.
//!
//! Defines CLI arguments using clap builder API. All flags control file
//! handling only: the alignment itself takes no options.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files or directories to align
    pub inputs: Vec<PathBuf>,

    /// Output to stdout instead of in-place
    pub stdout: bool,

    /// Show aligned output without modifying files
    pub diff: bool,

    /// Recursive directory processing
    pub recursive: bool,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Custom source file extensions (in addition to defaults)
    pub extensions: Vec<String>,

    /// Silent mode (no output)
    pub silent: bool,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("ocdformat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Fred Jones")
        .about("Aligns assignment blocks into columns, equals signs included")
        .arg(
            Arg::new("inputs")
                .help("Files or directories to align")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Output to stdout instead of modifying files in-place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("diff")
                .short('d')
                .long("diff")
                .help("Show aligned output without modifying files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .help("Recursively align directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .help("Additional source file extension (can be repeated, e.g., -x pde -x ino)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no output, for editor integration)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        stdout: matches.get_flag("stdout"),
        diff: matches.get_flag("diff"),
        recursive: matches.get_flag("recursive"),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        extensions: matches
            .get_many::<String>("ext")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        silent: matches.get_flag("silent"),
        jobs: matches.get_one::<usize>("jobs").copied(),
    }
}
