//! Log level selection for the CLI
//!
//! The subscriber starts at [`startup_level`] so that configuration loading is
//! already traced, then switches to [`configured_level`] once the config is
//! known.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::filter::LevelFilter;

/// Level used before the configuration is loaded
pub fn startup_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Level used once the configuration is loaded; `--verbose` always wins
pub fn configured_level(verbose: bool, logging: &LoggingConfig) -> Result<LevelFilter> {
    if verbose {
        return Ok(LevelFilter::DEBUG);
    }
    logging.level().map(LevelFilter::from_level)
}
