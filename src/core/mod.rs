pub mod concat;
pub mod day;
pub mod products;
pub mod ratings;
pub mod square;
pub mod text;
pub mod value;
