use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Dims accepted from the config file, matching the `--dims` flag
pub const DIMS_RANGE: RangeInclusive<usize> = 2..=4;

fn default_pretty() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `merc2geo.toml`
///
/// ```toml
/// dims = 3
/// pretty = true
/// verbose = false
/// ```
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    /// Ordinates per position when the geometry does not declare `dims`
    #[serde(default)]
    pub dims: Option<usize>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses
    ///
    /// Files that exist but fail to parse are skipped. Their messages are
    /// returned so the caller can report them once logging is set up.
    pub fn load() -> (Option<Self>, Vec<String>) {
        load_from_paths(&get_config_paths())
    }

    /// Read an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse TOML contents and check value ranges
    pub fn parse(contents: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(contents)?;
        if let Some(dims) = config.dims
            && !DIMS_RANGE.contains(&dims)
        {
            bail!(
                "dims must be between {} and {}, got {}",
                DIMS_RANGE.start(),
                DIMS_RANGE.end(),
                dims
            );
        }
        Ok(config)
    }
}

fn load_from_paths(paths: &[PathBuf]) -> (Option<FileConfig>, Vec<String>) {
    let mut warnings = Vec::new();

    for path in paths {
        if path.exists()
            && let Ok(contents) = std::fs::read_to_string(path)
        {
            match FileConfig::parse(&contents) {
                Ok(config) => return (Some(config), warnings),
                Err(e) => {
                    warnings.push(format!("Failed to parse config file {:?}: {:#}", path, e));
                }
            }
        }
    }
    (None, warnings)
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("merc2geo.toml"));
    paths.push(PathBuf::from(".merc2geo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("merc2geo").join("config.toml"));
        paths.push(config_dir.join("merc2geo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".merc2geo.toml"));
        paths.push(home.join(".config").join("merc2geo").join("config.toml"));
    }

    paths
}
