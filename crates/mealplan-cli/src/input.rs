//! Interactive input collection and normalization.
//!
//! All readers are generic over [`BufRead`] so tests can feed canned input.
//! Validation policy: the numeric cooking time re-prompts until valid;
//! closed-vocabulary fields (meal, diet, goal, spice) silently fall back to
//! a default on unrecognized input; an out-of-range rating is reported and
//! left unset.

use std::io::{BufRead, Write as _};
use std::str::FromStr;

use anyhow::{Context, Result};

use mealplan_core::meal::DayPlanRequest;
use mealplan_db::models::{DietType, Goal, MealType, RecipeConstraints, SpiceLevel};

/// Print a prompt and read one trimmed line.
pub fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let n = reader.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim().to_owned())
}

/// Read the cooking time, re-prompting until a positive integer is entered.
pub fn read_cooking_time(reader: &mut impl BufRead) -> Result<i64> {
    loop {
        let raw = read_line(reader, "Cooking time (minutes): ")?;
        match raw.parse::<i64>() {
            Ok(minutes) if minutes > 0 => return Ok(minutes),
            _ => println!("Please enter a positive number of minutes."),
        }
    }
}

/// Read the meal type; unrecognized input falls back to Breakfast.
pub fn read_meal_type(reader: &mut impl BufRead) -> Result<MealType> {
    let raw = read_line(reader, "Meal type (Breakfast / Lunch / Dinner): ")?;
    Ok(MealType::from_str(&raw).unwrap_or(MealType::Breakfast))
}

/// Read the diet type; unrecognized input falls back to Veg.
pub fn read_diet_type(reader: &mut impl BufRead) -> Result<DietType> {
    let raw = read_line(reader, "Diet type (Veg / Non-Veg): ")?;
    Ok(DietType::from_str(&raw).unwrap_or(DietType::Veg))
}

/// Read the goal; blank or unrecognized input leaves it unset.
pub fn read_goal(reader: &mut impl BufRead) -> Result<Option<Goal>> {
    let raw = read_line(
        reader,
        "Goal (weight loss / maintenance / weight gain, blank for general): ",
    )?;
    Ok(Goal::from_str(&raw).ok())
}

/// Read the spice level; blank or unrecognized input leaves it unset.
pub fn read_spice_level(reader: &mut impl BufRead) -> Result<Option<SpiceLevel>> {
    let raw = read_line(reader, "Spice level (mild / medium / spicy, blank for medium): ")?;
    Ok(SpiceLevel::from_str(&raw).ok())
}

/// Collect the full constraint tuple for a single recipe.
pub fn collect_constraints(reader: &mut impl BufRead) -> Result<RecipeConstraints> {
    let ingredients = read_line(reader, "Available ingredients: ")?;
    let avoid_ingredients = read_line(reader, "Ingredients to avoid (blank for none): ")?;
    let meal_type = read_meal_type(reader)?;
    let diet_type = read_diet_type(reader)?;
    let cooking_time = read_cooking_time(reader)?;
    let goal = read_goal(reader)?;
    let spice_level = read_spice_level(reader)?;

    Ok(RecipeConstraints {
        ingredients,
        avoid_ingredients,
        meal_type,
        diet_type,
        cooking_time,
        goal,
        spice_level,
    })
}

/// Collect the shared constraint set for a day plan (no meal type).
pub fn collect_day_plan_request(reader: &mut impl BufRead) -> Result<DayPlanRequest> {
    let ingredients = read_line(reader, "Available ingredients: ")?;
    let avoid_ingredients = read_line(reader, "Ingredients to avoid (blank for none): ")?;
    let diet_type = read_diet_type(reader)?;
    let cooking_time = read_cooking_time(reader)?;
    let goal = read_goal(reader)?;
    let spice_level = read_spice_level(reader)?;

    Ok(DayPlanRequest {
        ingredients,
        avoid_ingredients,
        cooking_time,
        diet_type,
        goal,
        spice_level,
    })
}

/// Read an optional 1-5 rating. Blank skips; anything outside 1-5 is
/// reported and treated as a skip so the stored rating stays unset.
pub fn read_rating(reader: &mut impl BufRead) -> Result<Option<i64>> {
    let raw = read_line(reader, "Rate this recipe 1-5 (blank to skip): ")?;
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<i64>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(Some(rating)),
        _ => {
            println!("Rating must be a whole number between 1 and 5; skipping.");
            Ok(None)
        }
    }
}
