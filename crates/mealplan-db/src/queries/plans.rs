//! Database query functions for the `plans` table.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::Plan;

/// Insert a new day-plan row referencing up to three recipes.
/// Returns the inserted plan with its server-assigned id.
pub async fn insert_plan(
    pool: &SqlitePool,
    name: &str,
    breakfast_id: Option<i64>,
    lunch_id: Option<i64>,
    dinner_id: Option<i64>,
) -> Result<Plan> {
    let plan = sqlx::query_as::<_, Plan>(
        "INSERT INTO plans \
         (plan_name, created_at, breakfast_recipe_id, lunch_recipe_id, dinner_recipe_id) \
         VALUES (?, ?, ?, ?, ?) \
         RETURNING *",
    )
    .bind(name)
    .bind(Utc::now())
    .bind(breakfast_id)
    .bind(lunch_id)
    .bind(dinner_id)
    .fetch_one(pool)
    .await
    .context("failed to insert plan")?;

    debug!(id = plan.id, name = %plan.plan_name, "day plan inserted");
    Ok(plan)
}

/// List all day plans, newest first.
pub async fn list_plans(pool: &SqlitePool) -> Result<Vec<Plan>> {
    let plans = sqlx::query_as::<_, Plan>("SELECT * FROM plans ORDER BY id DESC")
        .fetch_all(pool)
        .await
        .context("failed to list plans")?;

    Ok(plans)
}
