//! `mealplan plan-day` command and menu item 5: generate a full
//! breakfast/lunch/dinner plan under one shared constraint set.

use std::io::BufRead;

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use mealplan_core::generator::OllamaClient;
use mealplan_core::meal;

use crate::generate_cmd::is_generation_failure;
use crate::input;

/// Run the plan-day flow. When `name_flag` is `None` the name is collected
/// interactively, defaulting to today's date.
pub async fn run_plan_day(
    pool: &SqlitePool,
    client: &OllamaClient,
    reader: &mut impl BufRead,
    name_flag: Option<&str>,
) -> Result<()> {
    let request = input::collect_day_plan_request(reader)?;

    let name = match name_flag {
        Some(name) => name.to_owned(),
        None => {
            let raw = input::read_line(reader, "Plan name (blank for today's date): ")?;
            if raw.is_empty() {
                format!("Plan for {}", Utc::now().format("%Y-%m-%d"))
            } else {
                raw
            }
        }
    };

    println!("Generating breakfast, lunch and dinner; this can take a while...");

    let outcome = match meal::plan_day(pool, client, &name, &request).await {
        Ok(outcome) => outcome,
        Err(err) if is_generation_failure(&err) => {
            println!("Day plan aborted: {err:#}");
            println!("No plan was saved; recipes generated before the failure were kept.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!();
    println!("=== {} (plan id {}) ===", outcome.plan.plan_name, outcome.plan.id);
    for (label, recipe) in [
        ("Breakfast", &outcome.breakfast),
        ("Lunch", &outcome.lunch),
        ("Dinner", &outcome.dinner),
    ] {
        println!();
        println!("--- {label} (recipe id {}) ---", recipe.id);
        println!("{}", recipe.recipe_output);
    }

    Ok(())
}
