//! Configuration file management for mealplan.
//!
//! Provides a TOML-based config file at `~/.config/mealplan/config.toml`
//! and a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mealplan_core::generator::GeneratorConfig;
use mealplan_db::config::DbConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub ollama: OllamaSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaSection {
    pub url: String,
    pub model: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the mealplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/mealplan` or `~/.config/mealplan`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("mealplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mealplan")
}

/// Return the path to the mealplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct MealplanConfig {
    pub db_config: DbConfig,
    pub generator_config: GeneratorConfig,
}

impl MealplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - DB URL: `cli_db_url` > `MEALPLAN_DATABASE_URL` > `database.url` > `DbConfig::DEFAULT_URL`
    /// - Ollama URL: `cli_ollama_url` > `MEALPLAN_OLLAMA_URL` > `ollama.url` > built-in default
    /// - Model: `cli_model` > `MEALPLAN_MODEL` > `ollama.model` > built-in default
    pub fn resolve(
        cli_db_url: Option<&str>,
        cli_ollama_url: Option<&str>,
        cli_model: Option<&str>,
    ) -> Result<Self> {
        let file_config = load_config().ok();

        let db_url = resolve_field(
            cli_db_url,
            "MEALPLAN_DATABASE_URL",
            file_config.as_ref().map(|c| c.database.url.as_str()),
            DbConfig::DEFAULT_URL,
        );
        let ollama_url = resolve_field(
            cli_ollama_url,
            "MEALPLAN_OLLAMA_URL",
            file_config.as_ref().map(|c| c.ollama.url.as_str()),
            GeneratorConfig::DEFAULT_ENDPOINT,
        );
        let model = resolve_field(
            cli_model,
            "MEALPLAN_MODEL",
            file_config.as_ref().map(|c| c.ollama.model.as_str()),
            GeneratorConfig::DEFAULT_MODEL,
        );

        Ok(Self {
            db_config: DbConfig::new(db_url),
            generator_config: GeneratorConfig::new(ollama_url, model),
        })
    }
}

fn resolve_field(
    cli: Option<&str>,
    env_var: &str,
    file: Option<&str>,
    default: &str,
) -> String {
    if let Some(value) = cli {
        return value.to_owned();
    }
    if let Ok(value) = std::env::var(env_var) {
        return value;
    }
    match file {
        Some(value) => value.to_owned(),
        None => default.to_owned(),
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    // Env-var mutation is process-global; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn clear_env() {
        for var in ["MEALPLAN_DATABASE_URL", "MEALPLAN_OLLAMA_URL", "MEALPLAN_MODEL"] {
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn save_and_load_config_roundtrip() {
        let original = ConfigFile {
            database: DatabaseSection {
                url: "sqlite://testmeals.db".to_string(),
            },
            ollama: OllamaSection {
                url: "http://localhost:11434/api/generate".to_string(),
                model: "llama3".to_string(),
            },
        };

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let contents = toml::to_string_pretty(&original).unwrap();
        std::fs::write(&path, &contents).unwrap();

        let loaded: ConfigFile = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.database.url, original.database.url);
        assert_eq!(loaded.ollama.url, original.ollama.url);
        assert_eq!(loaded.ollama.model, original.ollama.model);
    }

    #[test]
    fn resolve_with_cli_flags_overrides_all() {
        let _lock = lock_env();
        unsafe { std::env::set_var("MEALPLAN_DATABASE_URL", "sqlite://env.db") };
        unsafe { std::env::set_var("MEALPLAN_MODEL", "env-model") };

        let config = MealplanConfig::resolve(
            Some("sqlite://cli.db"),
            Some("http://cli:11434/api/generate"),
            Some("cli-model"),
        )
        .unwrap();

        assert_eq!(config.db_config.database_url, "sqlite://cli.db");
        assert_eq!(
            config.generator_config.endpoint_url,
            "http://cli:11434/api/generate"
        );
        assert_eq!(config.generator_config.model, "cli-model");

        clear_env();
    }

    #[test]
    fn resolve_with_env_vars() {
        let _lock = lock_env();
        unsafe { std::env::set_var("MEALPLAN_DATABASE_URL", "sqlite://env.db") };
        unsafe { std::env::set_var("MEALPLAN_OLLAMA_URL", "http://env:11434/api/generate") };
        unsafe { std::env::set_var("MEALPLAN_MODEL", "env-model") };

        let config = MealplanConfig::resolve(None, None, None).unwrap();
        assert_eq!(config.db_config.database_url, "sqlite://env.db");
        assert_eq!(
            config.generator_config.endpoint_url,
            "http://env:11434/api/generate"
        );
        assert_eq!(config.generator_config.model, "env-model");

        clear_env();
    }

    #[test]
    fn resolve_falls_back_to_defaults() {
        let _lock = lock_env();
        clear_env();

        // Point config lookup at an empty directory so no file is found.
        let tmp = tempfile::TempDir::new().unwrap();
        let orig_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };

        let config = MealplanConfig::resolve(None, None, None).unwrap();

        match orig_xdg {
            Some(x) => unsafe { std::env::set_var("XDG_CONFIG_HOME", x) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(config.db_config.database_url, DbConfig::DEFAULT_URL);
        assert_eq!(
            config.generator_config.endpoint_url,
            GeneratorConfig::DEFAULT_ENDPOINT
        );
        assert_eq!(config.generator_config.model, GeneratorConfig::DEFAULT_MODEL);
    }

    #[test]
    fn config_path_ends_with_expected_filename() {
        let path = config_path();
        assert!(
            path.ends_with("mealplan/config.toml"),
            "unexpected config path: {}",
            path.display()
        );
    }
}
