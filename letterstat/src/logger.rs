// letterstat/src/logger.rs
//! Logging setup for the `letterstat` binary and its tests.
//!
//! Log output goes to stderr so it never mixes with reports or JSON on stdout.

use log::LevelFilter;

/// Workspace crates whose level follows the `--debug`/`--quiet` flags.
const OWN_MODULES: [&str; 2] = ["letterstat", "letterstat_core"];

/// Initializes `env_logger`, honoring `RUST_LOG` with a `warn` default.
///
/// `level` overrides the filter for the workspace crates only. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        for module in OWN_MODULES {
            builder.filter_module(module, level);
        }
    }

    builder.format_timestamp(None).try_init().ok();
}

/// Resolves the CLI logging flags into a level override.
///
/// `--quiet` wins over everything, `--disable-debug` caps at `Info` even when
/// `--debug` is given, and without flags `RUST_LOG` decides.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
