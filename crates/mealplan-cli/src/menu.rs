//! Interactive numbered menu, the default surface when no subcommand is
//! given. Loops until exit is chosen.

use anyhow::Result;
use sqlx::SqlitePool;

use mealplan_core::generator::OllamaClient;

use crate::{generate_cmd, input, list_cmd, plan_day_cmd, plans_cmd, search_cmd, show_cmd};

pub async fn run_menu(pool: &SqlitePool, client: &OllamaClient) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    println!("=== Smart Meal Planner ===");

    loop {
        println!();
        println!("1. Generate a recipe");
        println!("2. List saved recipes");
        println!("3. View a recipe by id");
        println!("4. Search recipes by ingredient");
        println!("5. Plan my day");
        println!("6. List day plans");
        println!("7. Exit");

        let choice = input::read_line(&mut reader, "Choose an option: ")?;
        match choice.as_str() {
            "1" => generate_cmd::run_generate(pool, client, &mut reader).await?,
            "2" => list_cmd::run_list(pool).await?,
            "3" => {
                let raw = input::read_line(&mut reader, "Recipe id: ")?;
                match raw.parse::<i64>() {
                    Ok(id) => show_cmd::run_show(pool, id).await?,
                    Err(_) => println!("Please enter a numeric recipe id."),
                }
            }
            "4" => {
                let keyword = input::read_line(&mut reader, "Ingredient keyword: ")?;
                if keyword.is_empty() {
                    println!("Please enter a keyword to search for.");
                } else {
                    search_cmd::run_search(pool, &keyword).await?;
                }
            }
            "5" => plan_day_cmd::run_plan_day(pool, client, &mut reader, None).await?,
            "6" => plans_cmd::run_plans(pool).await?,
            "7" => {
                println!("Goodbye.");
                return Ok(());
            }
            other => println!("Unknown option {other:?}; choose 1-7."),
        }
    }
}
