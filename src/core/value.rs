use crate::domain::model::Value;

/// Character count for text, double the value for numbers.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}
