pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{SquareConfig, ToolkitConfig};
pub use crate::core::{
    concat::concatenate,
    day::day_type,
    products::most_expensive,
    ratings::filter_by_rating,
    square::{square_after, square_async, DelayedSquarer},
    text::format_case,
    value::process_value,
};
pub use domain::model::{Day, DayType, Product, RatedItem, Value};
pub use domain::vehicle::{Car, Describe, Vehicle};
pub use utils::error::{Result, ToolkitError};
