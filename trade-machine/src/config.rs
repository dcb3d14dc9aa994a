// Configuration loading and parsing (config/trade_machine.toml).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::valuation::{APPROVAL_THRESHOLD, FILLER_SCORE, SCORE_FLOOR, SEASON_WEEKS};

/// File name of the single config file, both in `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "trade_machine.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub season: SeasonConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub data_paths: DataPaths,
}

/// Season calendar. The week number counts from `start`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonConfig {
    #[serde(default = "default_season_start")]
    pub start: NaiveDate,
    #[serde(default = "default_season_weeks")]
    pub weeks: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            start: default_season_start(),
            weeks: default_season_weeks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_floor")]
    pub floor: f64,
    #[serde(default = "default_filler_score")]
    pub filler_score: f64,
    #[serde(default = "default_approval_threshold")]
    pub approval_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            floor: default_floor(),
            filler_score: default_filler_score(),
            approval_threshold: default_approval_threshold(),
        }
    }
}

/// Input spreadsheets (CSV) and where ranking exports go. Relative paths are
/// resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataPaths {
    pub performance: String,
    pub injuries: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 21).unwrap_or_default()
}

fn default_season_weeks() -> u32 {
    SEASON_WEEKS
}

fn default_floor() -> f64 {
    SCORE_FLOOR
}

fn default_filler_score() -> f64 {
    FILLER_SCORE
}

fn default_approval_threshold() -> f64 {
    APPROVAL_THRESHOLD
}

fn default_export_dir() -> String {
    "exports".into()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/trade_machine.toml` relative to `base_dir`.
///
/// This does not copy defaults; prefer `load_config()` for normal startup.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Parse config TOML without validating it.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // user's copy wins
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// into `config/` first when needed.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.season.weeks == 0 {
        return Err(ConfigError::ValidationError {
            field: "season.weeks".into(),
            message: "must be greater than 0".into(),
        });
    }

    let scoring = &config.scoring;
    if !scoring.floor.is_finite() || scoring.floor < 0.0 {
        return Err(ConfigError::ValidationError {
            field: "scoring.floor".into(),
            message: format!("must be >= 0, got {}", scoring.floor),
        });
    }

    if !scoring.filler_score.is_finite() || scoring.filler_score <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "scoring.filler_score".into(),
            message: format!("must be > 0, got {}", scoring.filler_score),
        });
    }

    let threshold = scoring.approval_threshold;
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(ConfigError::ValidationError {
            field: "scoring.approval_threshold".into(),
            message: format!("must be in (0.0, 1.0], got {threshold}"),
        });
    }

    let paths = &config.data_paths;
    let path_fields: &[(&str, &str)] = &[
        ("data_paths.performance", &paths.performance),
        ("data_paths.injuries", &paths.injuries),
        ("data_paths.export_dir", &paths.export_dir),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
