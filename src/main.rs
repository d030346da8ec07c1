use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use place_suggest::logging::init_logging;
use place_suggest::types::SearchAnswer;
use place_suggest::{FormattedHit, HitNormalizer};

#[derive(Parser)]
#[command(name = "place_suggest")]
#[command(about = "Normalizes saved geo search answers into display-ready suggestions")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display value for every hit in a saved answer
    Format {
        /// Path to a JSON file holding one backend answer
        answer: PathBuf,
        /// Query string the answer was produced for
        #[arg(long, default_value = "")]
        query: String,
        /// Emit full normalized records as JSON instead of plain values
        #[arg(long)]
        json: bool,
    },
    /// Show which hits in a saved answer fail to normalize
    Inspect {
        /// Path to a JSON file holding one backend answer
        answer: PathBuf,
        /// Query string the answer was produced for
        #[arg(long, default_value = "")]
        query: String,
    },
}

fn load_answer(path: &PathBuf, query: &str) -> anyhow::Result<SearchAnswer> {
    let body = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(SearchAnswer::new(query, body))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            answer,
            query,
            json,
        } => {
            let answer = load_answer(&answer, &query)?;
            let outputs = HitNormalizer::with_defaults().normalize_answer(&answer);
            info!(hits = outputs.len(), "normalized answer");

            if json {
                println!("{}", serde_json::to_string_pretty(&outputs)?);
            } else {
                for output in &outputs {
                    println!("{}", output.value());
                }
            }
        }
        Commands::Inspect {
            answer,
            query,
        } => {
            let answer = load_answer(&answer, &query)?;
            let outputs = HitNormalizer::with_defaults().normalize_answer(&answer);
            let dropped = outputs.iter().filter(|output| !output.is_parsed()).count();

            for (index, output) in outputs.iter().enumerate() {
                match output {
                    FormattedHit::Parsed(hit) => {
                        println!("{:>4}  ok      {}", index, hit.name);
                    }
                    FormattedHit::Unparsed(_) => {
                        println!("{:>4}  failed", index);
                    }
                }
            }
            println!("\n{} hits, {} failed", outputs.len(), dropped);
        }
    }

    Ok(())
}
