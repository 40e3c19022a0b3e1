//! `mealplan plans` command: list saved day plans, newest first.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_db::queries::plans;

pub async fn run_plans(pool: &SqlitePool) -> Result<()> {
    let all = plans::list_plans(pool).await?;

    if all.is_empty() {
        println!("No day plans saved yet.");
        return Ok(());
    }

    println!(
        "{:>5} {:<30} {:<22} {:>9} {:>6} {:>7}",
        "ID", "NAME", "CREATED", "BREAKFAST", "LUNCH", "DINNER"
    );
    println!("{}", "-".repeat(86));

    for plan in &all {
        let meal_id = |id: Option<i64>| id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_owned());
        let name_display = truncate_name(&plan.plan_name);
        println!(
            "{:>5} {:<30} {:<22} {:>9} {:>6} {:>7}",
            plan.id,
            name_display,
            plan.created_at.format("%Y-%m-%d %H:%M UTC"),
            meal_id(plan.breakfast_recipe_id),
            meal_id(plan.lunch_recipe_id),
            meal_id(plan.dinner_recipe_id),
        );
    }

    Ok(())
}

/// Shorten long plan names for the table. Counts and cuts characters, not
/// bytes; names are free text and may contain multi-byte characters.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > 28 {
        let short: String = name.chars().take(25).collect();
        format!("{short}...")
    } else {
        name.to_owned()
    }
}
