//! Meal generation flows: single-recipe reuse-or-generate and the
//! breakfast/lunch/dinner day-plan orchestration.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use mealplan_db::models::{
    DietType, Goal, MealType, Plan, Recipe, RecipeConstraints, SpiceLevel,
};
use mealplan_db::queries::{plans, recipes};

use crate::generator::{OllamaClient, prompt};

/// Result of a single-meal generation.
#[derive(Debug, Clone)]
pub struct MealOutcome {
    pub recipe: Recipe,
    /// True when the recipe came from the store instead of the endpoint.
    pub reused: bool,
}

/// Shared constraint set for a day plan: everything in the tuple except
/// the meal type, which is supplied per meal.
#[derive(Debug, Clone)]
pub struct DayPlanRequest {
    pub ingredients: String,
    pub avoid_ingredients: String,
    pub cooking_time: i64,
    pub diet_type: DietType,
    pub goal: Option<Goal>,
    pub spice_level: Option<SpiceLevel>,
}

impl DayPlanRequest {
    /// The full constraint tuple for one meal of the day.
    pub fn constraints_for(&self, meal_type: MealType) -> RecipeConstraints {
        RecipeConstraints {
            ingredients: self.ingredients.clone(),
            avoid_ingredients: self.avoid_ingredients.clone(),
            meal_type,
            diet_type: self.diet_type,
            cooking_time: self.cooking_time,
            goal: self.goal,
            spice_level: self.spice_level,
        }
    }
}

/// A completed day plan with its three recipes.
#[derive(Debug, Clone)]
pub struct DayPlanOutcome {
    pub plan: Plan,
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub dinner: Recipe,
}

/// Generate a recipe for the given constraints, reusing an exact store
/// match when one exists.
///
/// On a hit the endpoint is not contacted at all; the cached row is
/// returned as-is. On a miss the generated text is post-processed for its
/// `Tags:` line and persisted before returning.
pub async fn generate_meal_with_reuse(
    pool: &SqlitePool,
    client: &OllamaClient,
    constraints: &RecipeConstraints,
) -> Result<MealOutcome> {
    if let Some(existing) = recipes::find_existing(pool, constraints).await? {
        info!(id = existing.id, "reusing stored recipe for identical constraints");
        return Ok(MealOutcome {
            recipe: existing,
            reused: true,
        });
    }

    let recipe = generate_and_store(pool, client, constraints, None).await?;
    Ok(MealOutcome {
        recipe,
        reused: false,
    })
}

/// Generate and persist one recipe, unconditionally hitting the endpoint.
async fn generate_and_store(
    pool: &SqlitePool,
    client: &OllamaClient,
    constraints: &RecipeConstraints,
    previous_context: Option<&str>,
) -> Result<Recipe> {
    let prompt_text = prompt::build_prompt(constraints, previous_context);
    let output = client
        .generate(&prompt_text)
        .await
        .with_context(|| format!("failed to generate {} recipe", constraints.meal_type))?;
    let tags = prompt::extract_tags(&output);

    let recipe = recipes::insert_recipe(pool, constraints, &tags, &output).await?;
    info!(id = recipe.id, meal = %recipe.meal_type, "recipe generated and stored");
    Ok(recipe)
}

/// Generate breakfast, lunch and dinner under one shared constraint set,
/// then persist a plan row referencing the three new recipes.
///
/// Each generation after the first receives the accumulated texts of the
/// earlier meals as context, to discourage repetition. Day-plan meals are
/// always generated fresh; a cached recipe would ignore that context.
///
/// If any generation fails the whole flow aborts before a plan row is
/// written. Recipes already stored for earlier meals in the same run are
/// left in place.
pub async fn plan_day(
    pool: &SqlitePool,
    client: &OllamaClient,
    plan_name: &str,
    request: &DayPlanRequest,
) -> Result<DayPlanOutcome> {
    let mut generated: Vec<Recipe> = Vec::with_capacity(3);
    let mut context = String::new();

    for meal_type in MealType::DAY_ORDER {
        let constraints = request.constraints_for(meal_type);
        let previous = (!context.is_empty()).then_some(context.as_str());

        let recipe = generate_and_store(pool, client, &constraints, previous).await?;
        let _ = write!(context, "{meal_type}:\n{}\n\n", recipe.recipe_output);
        generated.push(recipe);
    }

    let [breakfast, lunch, dinner]: [Recipe; 3] = generated
        .try_into()
        .expect("day order yields exactly three recipes");

    let plan = plans::insert_plan(
        pool,
        plan_name,
        Some(breakfast.id),
        Some(lunch.id),
        Some(dinner.id),
    )
    .await?;

    info!(id = plan.id, name = %plan.plan_name, "day plan persisted");
    Ok(DayPlanOutcome {
        plan,
        breakfast,
        lunch,
        dinner,
    })
}
