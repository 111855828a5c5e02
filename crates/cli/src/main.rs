//! Employee Registry CLI - schema and data management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the employees table if it does not exist
//! er-cli schema ensure
//!
//! # Insert employees from a YAML file
//! er-cli seed employees.yaml
//! ```
//!
//! Both commands read `EMPLOYEE_DATABASE_URL` (or `DATABASE_URL`) and the
//! `EMPLOYEE_DB_*` pool settings, loading `.env` first if present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "er-cli")]
#[command(author, version, about = "Employee registry CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the database schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Insert employees from a YAML file
    Seed {
        /// Path to a YAML list of employees
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Create the employees table and indexes if missing
    Ensure,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Schema { action } => match action {
            SchemaAction::Ensure => commands::schema::ensure().await?,
        },
        Commands::Seed { file } => {
            let inserted = commands::seed::employees(&file).await?;
            tracing::info!(inserted, "Seeding complete");
        }
    }
    Ok(())
}
