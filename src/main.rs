//! Command-line front end for the query normalizer.
//!
//! Usage:
//!   product-query-normalizer "gaming laptop"
//!   product-query-normalizer "gaming laptop" -r price_range=80000 -r feature_preferences=touchscreen
//!   product-query-normalizer "gaming laptop" --accept
//!   product-query-normalizer "gaming laptop" --ambiguities
//!   product-query-normalizer "gaming laptop" --summary

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use product_query_normalizer::application::QueryNormalizer;
use product_query_normalizer::config::{init_tracing, NormalizerConfig};
use product_query_normalizer::domain::clarification::Responses;

#[derive(Parser)]
#[command(name = "product-query-normalizer")]
#[command(about = "Normalize a free-text product query into structured JSON")]
struct Args {
    /// The product query text
    query: String,

    /// Answer a clarification, as field=answer (repeatable)
    #[arg(short = 'r', long = "respond", value_parser = parse_response)]
    responses: Vec<(String, String)>,

    /// Resolve even if fields are still open
    #[arg(long)]
    accept: bool,

    /// Only list the clarification requests
    #[arg(long, conflicts_with_all = ["summary", "accept"])]
    ambiguities: bool,

    /// Print a human-readable summary instead of JSON
    #[arg(long, conflicts_with = "accept")]
    summary: bool,

    /// Configuration file (TOML, YAML, or JSON); environment variables still apply
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn parse_response(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(field, answer)| (field.trim().to_string(), answer.to_string()))
        .ok_or_else(|| format!("expected field=answer, got '{}'", raw))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => NormalizerConfig::load_from(path),
        None => NormalizerConfig::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let normalizer = QueryNormalizer::new(&config);

    if args.summary {
        println!("{}", normalizer.summarize(&args.query));
        return ExitCode::SUCCESS;
    }

    let output = if args.ambiguities {
        serde_json::to_string_pretty(&normalizer.get_ambiguities(&args.query))
    } else {
        let responses = match Responses::from_pairs(args.responses) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let responses = (!responses.is_empty()).then_some(&responses);
        let result = if args.accept {
            normalizer.normalize_and_accept(&args.query, responses)
        } else {
            normalizer.normalize(&args.query, responses)
        };
        serde_json::to_string_pretty(&result)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            ExitCode::FAILURE
        }
    }
}
