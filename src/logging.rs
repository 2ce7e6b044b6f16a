//! Logger setup.
//!
//! Uses `log4rs.yml` (or the file named by `SUBNET_COMPACT_LOG_CONFIG`) when
//! present, otherwise logs `info` and above to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable naming an alternative log4rs config file.
pub const LOG_CONFIG_ENV: &str = "SUBNET_COMPACT_LOG_CONFIG";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Path of the log4rs config file to try.
pub fn log_config_path() -> String {
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

/// Built-in configuration used when no config file exists.
pub fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger.
pub fn init() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
        log::debug!("Logging configured from {path}");
    } else {
        log4rs::init_config(default_config(LevelFilter::Info)?)?;
        log::debug!("No {path}, using built-in stderr logging");
    }
    Ok(())
}
