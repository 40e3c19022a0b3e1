//! Shared test utilities for meal planner integration tests.
//!
//! Provides an isolated in-memory SQLite database per call with all
//! migrations applied. In-memory SQLite exists per connection, so the pool
//! is pinned to a single connection that is never recycled; every query in
//! a test therefore sees the same database.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use mealplan_db::pool;

/// Create an in-memory database with migrations applied.
///
/// Each call returns a fresh, fully isolated database. The pool can be
/// dropped at the end of the test; the database disappears with it.
pub async fn create_test_db() -> SqlitePool {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    pool::run_migrations(&db)
        .await
        .expect("migrations should succeed");

    db
}
