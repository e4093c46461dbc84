use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod advisor;
mod batch;
mod form;
mod models;
mod report;

use form::{FormState, DEFAULT_REQUIRED_PERCENT};

#[derive(Parser)]
#[command(name = "attendance-advisor")]
#[command(about = "Attendance percentage calculator with skip/attend advice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single attendance record
    Check {
        /// Total classes conducted so far
        #[arg(long)]
        total: Option<String>,
        /// Classes attended so far
        #[arg(long)]
        attended: Option<String>,
        /// Required attendance percentage
        #[arg(long, default_value = DEFAULT_REQUIRED_PERCENT)]
        required: String,
        #[arg(long)]
        json: bool,
    },
    /// Evaluate records from a CSV file (total, attended, required_percent)
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            total,
            attended,
            required,
            json,
        } => {
            // Omitted flags flow through validation as unfilled fields so
            // the missing-field rule keeps its precedence.
            let form = FormState::with_fields(
                total.as_deref().unwrap_or(""),
                attended.as_deref().unwrap_or(""),
                &required,
            );

            match form.submit() {
                Ok(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        print!("{}", report::render_result(&result));
                    }
                }
                Err(error) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&serde_json::json!({ "error": error }))?
                        );
                    } else {
                        print!("{}", report::render_error(&error));
                    }
                }
            }
        }
        Commands::Batch { csv, json } => {
            let rows = batch::read_rows(&csv)?;
            let outcomes = batch::evaluate_rows(&rows);

            if json {
                let values: Vec<serde_json::Value> = outcomes
                    .iter()
                    .map(|outcome| match outcome {
                        Ok(result) => serde_json::json!(result),
                        Err(error) => serde_json::json!({ "error": error }),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                print!("{}", report::build_batch_report(&outcomes));
            }
        }
    }

    Ok(())
}
