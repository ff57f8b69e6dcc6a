use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::editor::MAX_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the interactive demo, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Rows and columns of the square grid.
    #[serde(default = "default_size")]
    pub size: i32,
    /// Pause after every search step, in milliseconds.
    #[serde(default)]
    pub step_delay_ms: u64,
    /// Probability that `r` turns a free cell into a barrier.
    #[serde(default = "default_barrier_density")]
    pub barrier_density: f64,
    /// Seed for `r`; a fresh one per launch when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// ASCII layout to load at startup instead of an empty grid.
    #[serde(default)]
    pub layout: Option<PathBuf>,
    /// Where log records go; logging is off without one unless `RUST_LOG`
    /// is set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_size() -> i32 {
    50
}

fn default_barrier_density() -> f64 {
    0.25
}

/// Check a grid size, whether configured or taken from a layout file.
pub fn check_size(size: i32) -> Result<(), ConfigError> {
    if size < 2 {
        return Err(ConfigError::Invalid(format!(
            "grid size must be at least 2, got {size}"
        )));
    }
    if size > MAX_SIZE {
        return Err(ConfigError::Invalid(format!(
            "grid size must be at most {MAX_SIZE}, got {size}"
        )));
    }
    Ok(())
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            step_delay_ms: 0,
            barrier_density: default_barrier_density(),
            seed: None,
            layout: None,
            log_file: None,
        }
    }
}

impl DemoConfig {
    /// Load from `path`. A missing file yields the defaults; any other
    /// failure is reported so the caller can decide whether to fall back.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.size)?;
        if !(0.0..=1.0).contains(&self.barrier_density) {
            return Err(ConfigError::Invalid(format!(
                "barrier_density must lie in [0, 1], got {}",
                self.barrier_density
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(DemoConfig::parse("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = DemoConfig::parse("size = 20\nseed = 7\nlayout = \"maze.txt\"\n").unwrap();
        assert_eq!(c.size, 20);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.layout, Some(PathBuf::from("maze.txt")));
        assert_eq!(c.step_delay_ms, 0);
        assert_eq!(c.barrier_density, 0.25);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DemoConfig::parse("sise = 20\n").is_err());
    }

    #[test]
    fn validation_bounds() {
        let mut c = DemoConfig::default();
        assert!(c.validate().is_ok());
        c.size = 1;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
        c.size = MAX_SIZE;
        assert!(c.validate().is_ok());
        c.size = MAX_SIZE + 1;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
        c.size = 100_000;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
        c.size = 10;
        c.barrier_density = 1.5;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn size_bounds_fit_the_terminal() {
        assert_eq!(MAX_SIZE, 32_767);
        assert!(check_size(2).is_ok());
        assert!(check_size(0).is_err());
        assert!(check_size(32_768).is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = Path::new("definitely/not/here/pathviz.toml");
        assert_eq!(DemoConfig::load(path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("pathviz-bad-{}.toml", std::process::id()));
        fs::write(&path, "size = \"big\"\n").unwrap();
        let err = DemoConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("pathviz-bad-"));
    }
}
