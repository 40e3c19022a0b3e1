//! `mealplan show <id>` command: full detail for one recipe.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_db::queries::recipes;

pub async fn run_show(pool: &SqlitePool, id: i64) -> Result<()> {
    let Some(recipe) = recipes::get_recipe(pool, id).await? else {
        println!("Recipe {id} not found.");
        return Ok(());
    };

    println!("Recipe {} ({}, {})", recipe.id, recipe.meal_type, recipe.diet_type);
    println!("Ingredients: {}", recipe.ingredients);
    if !recipe.avoid_ingredients.is_empty() {
        println!("Avoiding: {}", recipe.avoid_ingredients);
    }
    println!("Cooking time: {} minutes", recipe.cooking_time);
    if let Some(goal) = recipe.goal {
        println!("Goal: {goal}");
    }
    if let Some(spice) = recipe.spice_level {
        println!("Spice level: {spice}");
    }
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags);
    }
    if let Some(rating) = recipe.rating {
        println!("Rating: {rating}/5");
    }
    if let Some(notes) = &recipe.notes {
        if !notes.is_empty() {
            println!("Notes: {notes}");
        }
    }
    println!();
    println!("{}", recipe.recipe_output);

    Ok(())
}
