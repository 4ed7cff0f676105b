/**
 * xliffmerge
 *
 * Merges the Angular i18n master file into the translation file of every
 * configured language.
 */
use anyhow::Context;
use clap::Parser;

use xliffmerge_cli::config::ProgramOptions;
use xliffmerge_cli::logging::{ConsoleLogger, LogLevel};
use xliffmerge_cli::xliff_merge::XliffMerge;

fn main() -> anyhow::Result<()> {
    let options = ProgramOptions::parse();
    let logger = ConsoleLogger::new(LogLevel::from_flags(options.verbose, options.quiet));

    let command = XliffMerge::create_from_options(&logger, &options, None);
    command.run().context("xliffmerge failed")?;
    Ok(())
}
