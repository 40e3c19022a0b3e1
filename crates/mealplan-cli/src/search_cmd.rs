//! `mealplan search <keyword>` command: case-insensitive ingredient search.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_db::queries::recipes;

pub async fn run_search(pool: &SqlitePool, keyword: &str) -> Result<()> {
    let hits = recipes::search_by_ingredient(pool, keyword).await?;

    if hits.is_empty() {
        println!("No recipes with an ingredient matching {keyword:?}.");
        return Ok(());
    }

    println!("{} recipe(s) matching {keyword:?}:", hits.len());
    for recipe in &hits {
        let rating = recipe
            .rating
            .map(|r| format!("{r}/5"))
            .unwrap_or_else(|| "unrated".to_owned());
        println!(
            "  {:>5}  {} / {} / {}m / {}  {}",
            recipe.id, recipe.meal_type, recipe.diet_type, recipe.cooking_time, rating, recipe.tags
        );
    }

    Ok(())
}
