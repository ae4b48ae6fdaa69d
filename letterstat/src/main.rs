// letterstat/src/main.rs
//! Letterstat entry point.
//!
//! Parses the command line, initializes logging and the theme, then
//! dispatches to the selected command.

use anyhow::{Context, Result};
use clap::Parser;

use letterstat::cli::{Cli, Commands};
use letterstat::commands::{analyze, chart, error_msg, redundancy};
use letterstat::logger;
use letterstat::ui::theme::{build_theme_map, ThemeStyle};

fn main() {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug, args.disable_debug));

    if let Err(e) = run(&args) {
        let theme_map = ThemeStyle::default_theme_map();
        error_msg(format!("{:#}", e), &theme_map);
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let theme_map = build_theme_map(args.theme.as_ref()).context("Theme error")?;

    match &args.command {
        Commands::Analyze(cmd) => analyze::run_analyze(cmd, args.quiet, &theme_map),
        Commands::Chart(cmd) => chart::run_chart(cmd, args.quiet, &theme_map),
        Commands::Redundancy(cmd) => redundancy::run_redundancy(cmd, &theme_map),
    }
}
