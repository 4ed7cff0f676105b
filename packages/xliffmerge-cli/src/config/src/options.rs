//! Command line options

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Merge the Angular i18n master file into the per-language translation files
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "xliffmerge", version)]
pub struct ProgramOptions {
    /// Show the used parameters and additional progress output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON profile holding the `xliffmergeOptions`
    #[arg(short = 'p', long = "profile", value_name = "PATH")]
    pub profile_path: Option<PathBuf>,

    /// Languages to generate, overriding the profile
    #[arg(value_name = "LANGUAGE")]
    pub languages: Vec<String>,
}

impl ProgramOptions {
    /// Parses a full argument list, program name first.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
