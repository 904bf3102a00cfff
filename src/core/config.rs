//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cardsort/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The only thing a game really needs from here is a validated [`Quiz`].
//! It comes from the first source that names one:
//!
//! 1. `--quiz <PATH>` / `--builtin <NAME>` on the command line
//! 2. `CARDSORT_QUIZ` env var (path to a quiz file)
//! 3. `general.quiz_file` in the config file (relative to `~/.cardsort/`)
//! 4. an inline `[quiz]` table in the config file
//! 5. `general.builtin`, falling back to the French sharing quiz

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Builtin;
use crate::core::quiz::{Quiz, QuizError, QuizFile};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardsortConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    pub quiz: Option<QuizFile>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub quiz_file: Option<String>,
    pub builtin: Option<Builtin>,
    pub toast_seconds: Option<u64>,
}

/// Values that only come from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub quiz_path: Option<PathBuf>,
    pub builtin: Option<Builtin>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOAST_SECONDS: u64 = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub quiz: Quiz,
    pub toast_duration: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Quiz(QuizError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            ConfigError::Parse(path, e) => write!(f, "cannot parse {}: {e}", path.display()),
            ConfigError::Quiz(e) => write!(f, "invalid quiz: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<QuizError> for ConfigError {
    fn from(e: QuizError) -> Self {
        ConfigError::Quiz(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.cardsort/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cardsort"))
}

/// Returns the path to `~/.cardsort/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.cardsort/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CardsortConfig::default()`.
pub fn load_config() -> Result<CardsortConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CardsortConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CardsortConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
    let config: CardsortConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.clone(), e))?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Reads and validates a standalone quiz file.
pub fn load_quiz_file(path: &Path) -> Result<Quiz, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let file: QuizFile =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    let quiz = Quiz::try_from(file)?;
    info!(
        "Loaded quiz {:?} ({} items) from {}",
        quiz.title,
        quiz.items.len(),
        path.display()
    );
    Ok(quiz)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# cardsort configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# builtin = "sharing"                # "sharing" (French) or "sharing-en"
# quiz_file = "my-quiz.toml"         # Path relative to ~/.cardsort/, or CARDSORT_QUIZ env var
# toast_seconds = 3                  # Or CARDSORT_TOAST_SECONDS env var

# [quiz]
# title = "What can I share online?"
# staging_title = "Move me to the right column"
# group_a_title = "Safe to share online"
# group_b_title = "Not safe to share online"
# success_message = "Success!"
# failure_message = "Failure!"
#
# [[quiz.items]]
# id = 1
# label = "A password"
#
# [[quiz.items]]
# id = 2
# label = "My hobbies"
#
# [quiz.key]
# group_a = [2]
# group_b = [1]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CardsortConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, config_dir().as_deref(), |name| std::env::var(name).ok())
}

/// [`resolve`] with the environment passed in. `base_dir` is where a relative
/// `general.quiz_file` is looked up (normally `~/.cardsort/`).
pub fn resolve_with_env(
    config: &CardsortConfig,
    cli: &CliOverrides,
    base_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let quiz = resolve_quiz(config, cli, base_dir, env("CARDSORT_QUIZ"))?;

    // Toast duration: env → config → default
    let toast_seconds = env("CARDSORT_TOAST_SECONDS")
        .and_then(|s| match s.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Ignoring CARDSORT_TOAST_SECONDS={s:?}: {e}");
                None
            }
        })
        .or(config.general.toast_seconds)
        .unwrap_or(DEFAULT_TOAST_SECONDS);

    Ok(ResolvedConfig {
        quiz,
        toast_duration: Duration::from_secs(toast_seconds),
    })
}

fn resolve_quiz(
    config: &CardsortConfig,
    cli: &CliOverrides,
    base_dir: Option<&Path>,
    env_quiz: Option<String>,
) -> Result<Quiz, ConfigError> {
    if let Some(ref path) = cli.quiz_path {
        return load_quiz_file(path);
    }
    if let Some(which) = cli.builtin {
        return Ok(Quiz::builtin(which)?);
    }

    if let Some(path) = env_quiz {
        return load_quiz_file(Path::new(&path));
    }

    if let Some(ref file) = config.general.quiz_file {
        let path = match base_dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        };
        return load_quiz_file(&path);
    }

    if let Some(ref inline) = config.quiz {
        debug!("Using inline [quiz] from config file");
        return Ok(Quiz::try_from(inline.clone())?);
    }

    Ok(Quiz::builtin(config.general.builtin.unwrap_or_default())?)
}
