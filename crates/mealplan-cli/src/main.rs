mod config;
mod generate_cmd;
mod input;
mod list_cmd;
mod menu;
mod plan_day_cmd;
mod plans_cmd;
mod rate_cmd;
mod search_cmd;
mod show_cmd;

use clap::{Parser, Subcommand};

use mealplan_core::generator::{GeneratorConfig, OllamaClient};
use mealplan_db::config::DbConfig;
use mealplan_db::pool;

use config::MealplanConfig;

#[derive(Parser)]
#[command(name = "mealplan", about = "Personalized recipe and meal-plan generator")]
struct Cli {
    /// Database URL (overrides MEALPLAN_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Ollama generate endpoint URL (overrides MEALPLAN_OLLAMA_URL env var)
    #[arg(long, global = true)]
    ollama_url: Option<String>,

    /// Model identifier (overrides MEALPLAN_MODEL env var)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Omit the subcommand to enter the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a mealplan config file
    Init {
        /// SQLite connection URL
        #[arg(long, default_value = DbConfig::DEFAULT_URL)]
        db_url: String,
        /// Ollama generate endpoint URL
        #[arg(long, default_value = GeneratorConfig::DEFAULT_ENDPOINT)]
        ollama_url: String,
        /// Model identifier
        #[arg(long, default_value = GeneratorConfig::DEFAULT_MODEL)]
        model: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create the database file and run migrations
    DbInit,
    /// Interactive numbered menu (default)
    Menu,
    /// Generate one recipe from interactively collected constraints
    Generate,
    /// List saved recipes, newest first
    List,
    /// Show a recipe by id
    Show {
        /// Recipe id
        id: i64,
    },
    /// Search recipes by ingredient keyword (case-insensitive substring)
    Search {
        /// Keyword to match against the ingredients field
        keyword: String,
    },
    /// Attach a 1-5 rating and optional notes to a recipe
    Rate {
        /// Recipe id
        id: i64,
        /// Rating from 1 to 5
        rating: i64,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Generate a breakfast/lunch/dinner plan under shared constraints
    PlanDay {
        /// Plan name (collected interactively when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// List saved day plans, newest first
    Plans,
}

/// Execute the `mealplan init` command: write the config file.
fn cmd_init(db_url: &str, ollama_url: &str, model: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        ollama: config::OllamaSection {
            url: ollama_url.to_string(),
            model: model.to_string(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!("  ollama.url   = {ollama_url}");
    println!("  ollama.model = {model}");
    println!();
    println!("Next: run `mealplan db-init` to create the database.");

    Ok(())
}

/// Execute the `mealplan db-init` command: create the file and migrate.
async fn cmd_db_init(resolved: &MealplanConfig) -> anyhow::Result<()> {
    println!("Initializing meal planner database...");

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;

    let counts = pool::table_counts(&db_pool).await?;
    println!(
        "Database ready at {}. Tables:",
        resolved.db_config.database_path()
    );
    for (table, count) in &counts {
        println!("  {table}: {count} rows");
    }

    db_pool.close().await;

    println!("mealplan db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Menu);

    if let Commands::Init {
        db_url,
        ollama_url,
        model,
        force,
    } = &command
    {
        return cmd_init(db_url, ollama_url, model, *force);
    }

    let resolved = MealplanConfig::resolve(
        cli.database_url.as_deref(),
        cli.ollama_url.as_deref(),
        cli.model.as_deref(),
    )?;

    if let Commands::DbInit = command {
        return cmd_db_init(&resolved).await;
    }

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    // Schema is applied on every start so the menu works out of the box.
    pool::run_migrations(&db_pool).await?;

    let result = match command {
        Commands::Init { .. } | Commands::DbInit => unreachable!("handled above"),
        Commands::Menu => {
            let client = OllamaClient::new(resolved.generator_config.clone())?;
            menu::run_menu(&db_pool, &client).await
        }
        Commands::Generate => {
            let client = OllamaClient::new(resolved.generator_config.clone())?;
            let stdin = std::io::stdin();
            let mut reader = stdin.lock();
            generate_cmd::run_generate(&db_pool, &client, &mut reader).await
        }
        Commands::List => list_cmd::run_list(&db_pool).await,
        Commands::Show { id } => show_cmd::run_show(&db_pool, id).await,
        Commands::Search { keyword } => search_cmd::run_search(&db_pool, &keyword).await,
        Commands::Rate { id, rating, notes } => {
            rate_cmd::run_rate(&db_pool, id, rating, &notes).await
        }
        Commands::PlanDay { name } => {
            let client = OllamaClient::new(resolved.generator_config.clone())?;
            let stdin = std::io::stdin();
            let mut reader = stdin.lock();
            plan_day_cmd::run_plan_day(&db_pool, &client, &mut reader, name.as_deref()).await
        }
        Commands::Plans => plans_cmd::run_plans(&db_pool).await,
    };

    db_pool.close().await;
    result
}
