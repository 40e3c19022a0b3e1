//! `mealplan generate` command and menu item 1: collect constraints,
//! reuse or generate a recipe, optionally record feedback.

use std::io::BufRead;

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_core::generator::{GenerateError, OllamaClient};
use mealplan_core::meal;
use mealplan_db::queries::recipes;

use crate::input;

/// True when the error chain originates in the inference endpoint.
///
/// Generation failures are reported on the interactive surface and abort
/// only the current action; anything else (storage faults) propagates.
pub fn is_generation_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.downcast_ref::<GenerateError>().is_some())
}

/// Run the generate flow against the given input source.
pub async fn run_generate(
    pool: &SqlitePool,
    client: &OllamaClient,
    reader: &mut impl BufRead,
) -> Result<()> {
    let constraints = input::collect_constraints(reader)?;

    let outcome = match meal::generate_meal_with_reuse(pool, client, &constraints).await {
        Ok(outcome) => outcome,
        Err(err) if is_generation_failure(&err) => {
            println!("Recipe generation failed: {err:#}");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if outcome.reused {
        println!();
        println!(
            "--- Saved Recipe (id {}, reused for identical constraints) ---",
            outcome.recipe.id
        );
    } else {
        println!();
        println!("--- Generated Recipe (id {}) ---", outcome.recipe.id);
    }
    println!("{}", outcome.recipe.recipe_output);

    if let Some(rating) = input::read_rating(reader)? {
        let notes = input::read_line(reader, "Notes (blank for none): ")?;
        recipes::update_feedback(pool, outcome.recipe.id, rating, &notes).await?;
        println!("Feedback saved.");
    }

    Ok(())
}
