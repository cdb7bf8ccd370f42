use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Small text, collection and timing utilities")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Lowercase text, or uppercase it with --upper
    Format {
        text: String,
        #[arg(long)]
        upper: bool,
    },

    /// Keep well-rated items from a JSON array of {title, rating} ("-" reads stdin)
    FilterRatings {
        input: String,
        /// Override the configured minimum rating
        #[arg(long)]
        min_rating: Option<f64>,
    },

    /// Concatenate JSON arrays given as arguments
    Concat { arrays: Vec<String> },

    /// Describe a vehicle, or a car when --model is given
    Vehicle {
        #[arg(long)]
        make: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        model: Option<String>,
    },

    /// Length of text, or double of a number
    ProcessValue {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Treat the value as text even if it looks numeric
        #[arg(long)]
        text: bool,
    },

    /// Pick the priciest product from a JSON array of {name, price} ("-" reads stdin)
    MostExpensive { input: String },

    /// Classify a day as Weekday or Weekend
    DayType {
        #[arg(required_unless_present = "today")]
        day: Option<String>,
        #[arg(long, conflicts_with = "day")]
        today: bool,
    },

    /// Square a number after a delay
    Square {
        #[arg(allow_hyphen_values = true)]
        n: f64,
        /// Override the configured delay
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}
