use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use survey_cli::{run, SurveyInput};
use survey_core::GridTraversal;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a drone survey over an estate", long_about = None)]
struct Args {
    /// Estate JSON file ({"estate": {...}, "trees": [...]}); reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Travel budget in meters; prints the landing plot
    #[arg(long, allow_hyphen_values = true)]
    max_distance: Option<i64>,

    /// Grid walk used for the landing search
    #[arg(long, value_enum, default_value_t = Traversal::Swap)]
    traversal: Traversal,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Traversal {
    Swap,
    Fixed,
}

impl From<Traversal> for GridTraversal {
    fn from(value: Traversal) -> Self {
        match value {
            Traversal::Swap => GridTraversal::SwapEachRow,
            Traversal::Fixed => GridTraversal::Fixed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let input = SurveyInput::from_json(&raw)?;
    tracing::debug!(
        "Loaded {}x{} estate with {} trees",
        input.estate.length,
        input.estate.width,
        input.trees.len()
    );

    let output = run(&input, args.max_distance, args.traversal.into())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Total distance:      {} m", output.plan.total_distance);
    println!("  horizontal:        {} m", output.plan.horizontal_distance);
    println!("  elevation:         {} m", output.plan.elevation_distance);
    if let Some(landing) = output.landing {
        println!(
            "Landing plot:        ({}, {}) within {} m",
            landing.cell.x, landing.cell.y, landing.max_distance
        );
    }

    Ok(())
}
