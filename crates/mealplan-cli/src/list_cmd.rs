//! `mealplan list` command: summary table of saved recipes, newest first.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_db::queries::recipes;

pub async fn run_list(pool: &SqlitePool) -> Result<()> {
    let all = recipes::list_recipes(pool).await?;

    if all.is_empty() {
        println!("No recipes saved yet.");
        return Ok(());
    }

    println!(
        "{:>5} {:<10} {:<8} {:>6} {:>7}  {}",
        "ID", "MEAL", "DIET", "TIME", "RATING", "TAGS"
    );
    println!("{}", "-".repeat(70));

    for recipe in &all {
        let rating = recipe
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_owned());
        println!(
            "{:>5} {:<10} {:<8} {:>4}m {:>7}  {}",
            recipe.id, recipe.meal_type, recipe.diet_type, recipe.cooking_time, rating, recipe.tags
        );
    }

    Ok(())
}
