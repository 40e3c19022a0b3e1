//! `mealplan rate <id> <rating>` command: attach feedback to a recipe.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_db::queries::recipes;

pub async fn run_rate(pool: &SqlitePool, id: i64, rating: i64, notes: &str) -> Result<()> {
    recipes::update_feedback(pool, id, rating, notes).await?;
    println!("Feedback saved for recipe {id}.");
    Ok(())
}
