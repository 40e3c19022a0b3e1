//! Query functions grouped by table.

pub mod plans;
pub mod recipes;
