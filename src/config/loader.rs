//! Loader for the RON level file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;

/// Error type for level loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a level definition from a RON file.
pub fn load_level(path: &Path) -> Result<LevelDef, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_level(&contents).map_err(|message| ConfigLoadError {
        file: file_name,
        message,
    })
}

/// Parse a level definition from RON source.
pub fn parse_level(source: &str) -> Result<LevelDef, String> {
    ron_options()
        .from_str(source)
        .map_err(|e| format!("Parse error: {}", e))
}
