//! SQLite persistence layer for the meal planner.
//!
//! Exposes a connection pool with embedded migrations, row models for the
//! `recipes` and `plans` tables, and per-table query modules. Every query
//! function is a standalone statement; callers do not hold transactions
//! across operations.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
