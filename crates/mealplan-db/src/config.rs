use std::env;

/// Database configuration.
///
/// Reads from the `MEALPLAN_DATABASE_URL` environment variable, falling back
/// to a `meal_planner.db` file in the current directory when unset.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Full SQLite connection URL.
    pub database_url: String,
}

impl DbConfig {
    /// The default connection URL used when no environment variable is set.
    pub const DEFAULT_URL: &str = "sqlite://meal_planner.db";

    /// Build a config from the environment.
    ///
    /// Priority: `MEALPLAN_DATABASE_URL` env var, then the compile-time default.
    pub fn from_env() -> Self {
        let database_url =
            env::var("MEALPLAN_DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_owned());
        Self { database_url }
    }

    /// Build a config from an explicit URL (useful for tests and CLI flags).
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// The filesystem path portion of the URL, for display.
    ///
    /// Returns the URL unchanged when it carries no `sqlite:`-style scheme.
    pub fn database_path(&self) -> &str {
        self.database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))
            .unwrap_or(&self.database_url)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
