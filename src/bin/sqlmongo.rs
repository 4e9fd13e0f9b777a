//! sqlmongo — the SQL-to-MongoDB CLI
//!
//! # Usage
//!
//! ```bash
//! # Translate a statement
//! sqlmongo "SELECT * FROM users WHERE firstName = 'John'"
//!
//! # Show the intermediate parsed forms
//! sqlmongo "DELETE FROM users WHERE firstName = 'John'" --verbose
//!
//! # Explain a statement
//! sqlmongo explain "UPDATE users SET firstName = 'John' WHERE lastName = 'Doe'"
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use sqlmongo::prelude::*;

#[derive(Parser)]
#[command(name = "sqlmongo")]
#[command(version)]
#[command(about = "Translate simple SQL statements into MongoDB shell queries", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlmongo \"SELECT * FROM users\"
    sqlmongo \"SELECT firstName, lastName FROM users WHERE firstName = 'John'\"
    sqlmongo \"INSERT INTO users (firstName, lastName) VALUES ('John', 'Doe')\" --verbose")]
struct Cli {
    /// The SQL statement to translate
    query: Option<String>,

    /// Print the intermediate parsed forms before the translation
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and explain a SQL statement
    Explain {
        /// The SQL statement to explain
        query: String,

        /// Emit the parsed structure as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Explain { query, json }) => explain_query(query, *json),
        None => {
            if let Some(query) = &cli.query {
                if let Err(e) = run(query, cli.verbose) {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    std::process::exit(1);
                }
            } else {
                println!("{}", "sqlmongo — SQL to MongoDB translator".cyan().bold());
                println!();
                println!("Usage: sqlmongo <QUERY> [OPTIONS]");
                println!();
                println!("Try: sqlmongo --help");
            }
        }
    }
}

fn run(query: &str, verbose: bool) -> Result<(), TranslateError> {
    if verbose {
        println!("{} {}", "Input:".dimmed(), query.yellow());
    }

    let parsed = sqlmongo::parse(query)?;

    if verbose {
        println!("{} {:?}", "SQL query:".dimmed(), parsed);
        let mongo = MongoQuery::from(parsed.clone());
        println!("{} {:?}", "Mongo query:".dimmed(), mongo);
    }

    println!("{}", parsed.to_mongo());
    Ok(())
}

fn explain_query(query: &str, json: bool) {
    match sqlmongo::parse(query) {
        Ok(parsed) => {
            if json {
                match serde_json::to_string_pretty(&parsed) {
                    Ok(out) => println!("{}", out),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
                return;
            }

            println!("{} {}", "Query:".dimmed(), query.yellow());
            println!();
            println!("{}", "Parsed Structure:".green().bold());
            println!(
                "  {} {}",
                "Command:".dimmed(),
                parsed.command.to_string().cyan()
            );
            println!("  {} {}", "Table:".dimmed(), parsed.table.white());

            if !parsed.columns.is_empty() {
                println!(
                    "  {} {}",
                    "Columns:".dimmed(),
                    parsed.columns.join(", ").white()
                );
            }

            if let Some(filter) = &parsed.filter {
                println!("  {} {}", "Filter:".dimmed(), filter.to_string().white());
            }

            if !parsed.values.is_empty() {
                let values: Vec<String> = parsed.values.iter().map(|v| v.literal()).collect();
                println!("  {} {}", "Values:".dimmed(), values.join(", ").white());
            }

            println!();
            println!("{}", "Generated MongoDB:".green().bold());
            println!("  {}", parsed.to_mongo().white());
        }
        Err(e) => {
            eprintln!("{} {}", "Parse Error:".red().bold(), e);
        }
    }
}
