//! Database query functions for the `recipes` table.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{Recipe, RecipeConstraints, RecipeSummary};

/// Insert a new recipe row. Returns the inserted recipe with its
/// server-assigned id.
pub async fn insert_recipe(
    pool: &SqlitePool,
    constraints: &RecipeConstraints,
    tags: &str,
    recipe_output: &str,
) -> Result<Recipe> {
    let recipe = sqlx::query_as::<_, Recipe>(
        "INSERT INTO recipes \
         (ingredients, avoid_ingredients, meal_type, diet_type, cooking_time, \
          goal, spice_level, tags, recipe_output) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING *",
    )
    .bind(&constraints.ingredients)
    .bind(&constraints.avoid_ingredients)
    .bind(constraints.meal_type)
    .bind(constraints.diet_type)
    .bind(constraints.cooking_time)
    .bind(constraints.goal)
    .bind(constraints.spice_level)
    .bind(tags)
    .bind(recipe_output)
    .fetch_one(pool)
    .await
    .context("failed to insert recipe")?;

    debug!(id = recipe.id, meal = %recipe.meal_type, "recipe inserted");
    Ok(recipe)
}

/// Fetch a recipe by its id.
pub async fn get_recipe(pool: &SqlitePool, id: i64) -> Result<Option<Recipe>> {
    let recipe = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch recipe")?;

    Ok(recipe)
}

/// List all recipes as summaries, newest first.
pub async fn list_recipes(pool: &SqlitePool) -> Result<Vec<RecipeSummary>> {
    let recipes = sqlx::query_as::<_, RecipeSummary>(
        "SELECT id, meal_type, diet_type, cooking_time, tags, rating \
         FROM recipes ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
    .context("failed to list recipes")?;

    Ok(recipes)
}

/// Exact-match lookup over the full constraint tuple.
///
/// `IS` rather than `=` for the optional columns so an unset goal or spice
/// level (NULL) only matches another unset value. When several rows share
/// an identical tuple the most recent one wins.
pub async fn find_existing(
    pool: &SqlitePool,
    constraints: &RecipeConstraints,
) -> Result<Option<Recipe>> {
    let recipe = sqlx::query_as::<_, Recipe>(
        "SELECT * FROM recipes \
         WHERE ingredients = ? \
           AND avoid_ingredients = ? \
           AND meal_type = ? \
           AND diet_type = ? \
           AND cooking_time = ? \
           AND goal IS ? \
           AND spice_level IS ? \
         ORDER BY id DESC \
         LIMIT 1",
    )
    .bind(&constraints.ingredients)
    .bind(&constraints.avoid_ingredients)
    .bind(constraints.meal_type)
    .bind(constraints.diet_type)
    .bind(constraints.cooking_time)
    .bind(constraints.goal)
    .bind(constraints.spice_level)
    .fetch_optional(pool)
    .await
    .context("failed to look up existing recipe")?;

    Ok(recipe)
}

/// Case-insensitive substring search over the ingredients column,
/// newest first.
pub async fn search_by_ingredient(
    pool: &SqlitePool,
    keyword: &str,
) -> Result<Vec<RecipeSummary>> {
    // SQLite's LIKE is case-insensitive for ASCII by default.
    let recipes = sqlx::query_as::<_, RecipeSummary>(
        "SELECT id, meal_type, diet_type, cooking_time, tags, rating \
         FROM recipes \
         WHERE ingredients LIKE '%' || ? || '%' \
         ORDER BY id DESC",
    )
    .bind(keyword)
    .fetch_all(pool)
    .await
    .context("failed to search recipes")?;

    Ok(recipes)
}

/// Attach a rating and notes to a recipe.
///
/// The rating must be within 1..=5; anything else is rejected before the
/// database is touched. The update itself is unconditional by id and a
/// no-op when the id does not exist.
pub async fn update_feedback(
    pool: &SqlitePool,
    id: i64,
    rating: i64,
    notes: &str,
) -> Result<()> {
    if !(1..=5).contains(&rating) {
        anyhow::bail!("rating must be between 1 and 5, got {rating}");
    }

    sqlx::query("UPDATE recipes SET rating = ?, notes = ? WHERE id = ?")
        .bind(rating)
        .bind(notes)
        .bind(id)
        .execute(pool)
        .await
        .context("failed to update recipe feedback")?;

    debug!(id, rating, "recipe feedback recorded");
    Ok(())
}
