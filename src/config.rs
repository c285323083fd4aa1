//! Environment-based configuration with compiled-in defaults.
//!
//! Every knob can be overridden through an `ABAPREP_*` variable; unset or
//! unparsable values fall back to the defaults below.

use log::warn;
use std::env;
use std::path::PathBuf;

/// Default directory scanned for source files.
pub const DEFAULT_INPUT_DIR: &str = "files/source";
/// Default directory for the chunked output.
pub const DEFAULT_OUTPUT_DIR: &str = "files/chunks";
/// Default ceiling on the per-chunk budget, in tokens.
pub const DEFAULT_CHUNK_CEILING: usize = 4000;
/// Default source file extension (without the dot).
pub const DEFAULT_SOURCE_EXTENSION: &str = "abap";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub chunk_ceiling: usize,
    pub source_extension: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            input_dir: env::var("ABAPREP_INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: env::var("ABAPREP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            chunk_ceiling: env::var("ABAPREP_MAX_CHUNK")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("ignoring unparsable ABAPREP_MAX_CHUNK value {raw:?}");
                        None
                    }
                })
                .unwrap_or(DEFAULT_CHUNK_CEILING),
            source_extension: env::var("ABAPREP_SOURCE_EXT")
                .unwrap_or_else(|_| DEFAULT_SOURCE_EXTENSION.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_ceiling: DEFAULT_CHUNK_CEILING,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
}
