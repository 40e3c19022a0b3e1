//! Integration tests for the day-plan orchestration flow.

mod stub_endpoint;

use mealplan_core::meal::{self, DayPlanRequest};
use mealplan_db::models::{DietType, MealType, SpiceLevel};
use mealplan_db::queries::{plans, recipes};
use mealplan_test_utils::create_test_db;

use stub_endpoint::{StubBehavior, StubEndpoint};

fn request() -> DayPlanRequest {
    DayPlanRequest {
        ingredients: "rice, lentils, tomatoes".to_owned(),
        avoid_ingredients: "peanuts".to_owned(),
        cooking_time: 40,
        diet_type: DietType::Veg,
        goal: None,
        spice_level: Some(SpiceLevel::Medium),
    }
}

#[tokio::test]
async fn plan_day_persists_plan_referencing_three_new_recipes() {
    let pool = create_test_db().await;
    let stub = StubEndpoint::spawn(StubBehavior::RespondEach(vec![
        "Lentil porridge\nTags: warm".to_owned(),
        "Tomato rice\nTags: hearty".to_owned(),
        "Dal soup\nTags: light".to_owned(),
    ]))
    .await;

    let outcome = meal::plan_day(&pool, &stub.client(), "Sunday", &request())
        .await
        .expect("plan_day should succeed");

    assert_eq!(outcome.plan.plan_name, "Sunday");
    assert_eq!(outcome.plan.breakfast_recipe_id, Some(outcome.breakfast.id));
    assert_eq!(outcome.plan.lunch_recipe_id, Some(outcome.lunch.id));
    assert_eq!(outcome.plan.dinner_recipe_id, Some(outcome.dinner.id));

    assert_eq!(outcome.breakfast.meal_type, MealType::Breakfast);
    assert_eq!(outcome.lunch.meal_type, MealType::Lunch);
    assert_eq!(outcome.dinner.meal_type, MealType::Dinner);
    assert_eq!(outcome.lunch.recipe_output, "Tomato rice\nTags: hearty");
    assert_eq!(outcome.dinner.tags, "light");

    // All three recipes are retrievable and the plan row is listed.
    for id in [outcome.breakfast.id, outcome.lunch.id, outcome.dinner.id] {
        assert!(recipes::get_recipe(&pool, id).await.unwrap().is_some());
    }
    let all_plans = plans::list_plans(&pool).await.unwrap();
    assert_eq!(all_plans.len(), 1);
    assert_eq!(stub.hits(), 3);
}

#[tokio::test]
async fn plan_day_chains_earlier_meals_into_later_prompts() {
    let pool = create_test_db().await;
    let stub = StubEndpoint::spawn(StubBehavior::RespondEach(vec![
        "BREAKFAST-TEXT".to_owned(),
        "LUNCH-TEXT".to_owned(),
        "DINNER-TEXT".to_owned(),
    ]))
    .await;

    meal::plan_day(&pool, &stub.client(), "chained", &request())
        .await
        .unwrap();

    let prompts = stub.prompts();
    assert_eq!(prompts.len(), 3);

    // First prompt carries no context block.
    assert!(!prompts[0].contains("already planned"));

    // Second sees breakfast; third sees breakfast and lunch.
    assert!(prompts[1].contains("Breakfast:\nBREAKFAST-TEXT"));
    assert!(!prompts[1].contains("LUNCH-TEXT"));
    assert!(prompts[2].contains("Breakfast:\nBREAKFAST-TEXT"));
    assert!(prompts[2].contains("Lunch:\nLUNCH-TEXT"));
}

#[tokio::test]
async fn plan_day_aborts_without_plan_row_when_lunch_fails() {
    let pool = create_test_db().await;
    let stub = StubEndpoint::spawn(StubBehavior::FailOnCall(2)).await;

    let result = meal::plan_day(&pool, &stub.client(), "doomed", &request()).await;
    assert!(result.is_err());

    // No plan row was written.
    let all_plans = plans::list_plans(&pool).await.unwrap();
    assert!(all_plans.is_empty());

    // The breakfast recipe generated before the failure remains.
    let remaining = recipes::list_recipes(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].meal_type, MealType::Breakfast);
    let orphan = recipes::get_recipe(&pool, remaining[0].id)
        .await
        .unwrap()
        .expect("orphaned breakfast recipe stays retrievable");
    assert_eq!(orphan.recipe_output, "canned recipe 1");
}
