use std::path::PathBuf;
use std::str::FromStr;

use clap::ArgAction;
use clap::Parser;
use clap::ValueHint;
use regex::Regex;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Input file to read the keys from, one per line. [default: stdin]
    #[clap(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file to write the results to. [default: stdout]
    #[clap(short, long = "out", value_name = "file", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Trim leading and trailing whitespace from each line.
    /// [default: false]
    #[clap(short, long)]
    pub trim_input: bool,

    /// Units that keys are matched by: Hangul letters (other characters as-is), Unicode scalar
    /// values, or grapheme clusters.
    /// [default: jamo]
    #[clap(short = 'k', long, value_name = "j[amo]|c[hars]|g[raphemes]", default_value = "jamo", hide_default_value = true)]
    pub codec: CodecKind,

    /// Match keys only by segments ending at the given regex pattern, overrides --codec.
    /// For example, -d'/|\.' is useful for paths, matching whole directory and file names.
    #[clap(short = 'd', long, value_name = "regex")]
    pub split_delimiter: Option<Regex>,

    /// Print all stored keys that start with the given prefix. Can be given multiple times.
    #[clap(short, long = "complete", value_name = "prefix")]
    pub complete: Vec<String>,

    /// Print whether the given key is stored. Can be given multiple times.
    #[clap(short, long = "query", value_name = "key")]
    pub query: Vec<String>,

    /// Remove the given key after reading the input, before answering queries.
    /// Can be given multiple times.
    #[clap(short, long = "remove", value_name = "key")]
    pub remove: Vec<String>,

    /// Sort printed keys alphabetically. [default: false, i.e., unspecified order]
    #[clap(short, long)]
    pub sort: bool,

    /// Log more details to stderr, repeat for even more (-v: info, -vv: debug, -vvv: trace).
    /// Without this flag, the level is taken from `RUST_LOG` (e.g., RUST_LOG=debug). [default: warn]
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Jamo,
    Chars,
    Graphemes,
}

impl FromStr for CodecKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "j" | "jamo" => Ok(CodecKind::Jamo),
            "c" | "chars" => Ok(CodecKind::Chars),
            "g" | "graphemes" => Ok(CodecKind::Graphemes),
            _ => Err("codec must be one of 'jamo', 'chars', or 'graphemes'"),
        }
    }
}

impl Options {
    pub fn log_level(&self) -> log::LevelFilter {
        level_filter(self.verbose, std::env::var("RUST_LOG").ok().as_deref())
    }
}

/// An explicit `-v` wins over `RUST_LOG`, which is only understood as a plain level name.
fn level_filter(verbose: u8, rust_log: Option<&str>) -> log::LevelFilter {
    match verbose {
        0 => rust_log
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
