use anyhow::Context;
use clap::Parser;
use serde::de::DeserializeOwned;
use small_utils::config::{Cli, Command};
use small_utils::core::ratings::filter_by_min_rating;
use small_utils::utils::logger;
use small_utils::utils::validation::validate_non_empty_string;
use small_utils::{
    concatenate, day_type, format_case, most_expensive, process_value, Car, Day, DelayedSquarer,
    Describe, Product, RatedItem, ToolkitConfig, Value, Vehicle,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    let config = ToolkitConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Format { text, upper } => {
            println!("{}", format_case(&text, Some(upper)));
        }
        Command::FilterRatings { input, min_rating } => {
            let config = config.with_overrides(min_rating, None)?;
            let items: Vec<RatedItem> = read_json(&input)?;
            let kept = filter_by_min_rating(&items, config.ratings.min_rating);
            tracing::info!("Kept {} of {} items", kept.len(), items.len());
            println!("{}", serde_json::to_string_pretty(&kept)?);
        }
        Command::Concat { arrays } => {
            let parsed = arrays
                .iter()
                .map(|raw| {
                    serde_json::from_str::<Vec<serde_json::Value>>(raw)
                        .with_context(|| format!("not a JSON array: {}", raw))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string(&concatenate(parsed))?);
        }
        Command::Vehicle { make, year, model } => match model {
            Some(model) => {
                validate_non_empty_string("make", &make)?;
                validate_non_empty_string("model", &model)?;
                let car = Car::new(make, year, model);
                println!("{}", car.info());
                println!("{}", car.model_info());
            }
            None => {
                validate_non_empty_string("make", &make)?;
                println!("{}", Vehicle::new(make, year).info());
            }
        },
        Command::ProcessValue { value, text } => {
            let value = if text {
                Value::Text(value)
            } else {
                Value::parse_lenient(&value)
            };
            println!("{}", process_value(&value));
        }
        Command::MostExpensive { input } => {
            let products: Vec<Product> = read_json(&input)?;
            match most_expensive(&products) {
                Some(product) => println!("{}", serde_json::to_string_pretty(product)?),
                None => println!("null"),
            }
        }
        Command::DayType { day, today } => {
            let day = match day {
                Some(raw) if !today => raw.parse::<Day>()?,
                _ => Day::today(),
            };
            println!("{}: {}", day, day_type(day));
        }
        Command::Square { n, delay_ms } => {
            let config = config.with_overrides(None, delay_ms)?;
            let squarer = DelayedSquarer::from_config(&config.square);
            tracing::info!("Squaring {} (delay {:?})", n, squarer.delay());

            match squarer.square(n).await {
                Ok(squared) => println!("{}", squared),
                Err(e) => {
                    tracing::error!("Square failed: {} (Category: {:?})", e, e.category());
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(input: &str) -> anyhow::Result<T> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
    };
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", input))
}
