use chatbot_game::{RiddleDto, RIDDLE_REQUEST_BODY};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatbot")]
#[command(about = "Chatbot game CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a riddle request body and print its fields
    Riddle {
        /// JSON file to read (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Print the riddle request-body schema as OpenAPI JSON
    RiddleSchema,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Riddle { file }) => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let value: serde_json::Value = serde_json::from_str(&text)?;
            match RiddleDto::try_from(&value) {
                Ok(riddle) => print!("{}", describe(&riddle)),
                Err(e) => eprintln!("Error reading riddle: {}", e),
            }
        }
        Some(Commands::RiddleSchema) => {
            let schema = RIDDLE_REQUEST_BODY.to_openapi();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn describe(riddle: &RiddleDto) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("<missing>").to_string();
    format!(
        "Answer: {}\nType: {}\nDescription: {}\n",
        field(&riddle.riddle_answer),
        field(&riddle.riddle_type),
        field(&riddle.riddle_description),
    )
}
