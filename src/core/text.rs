/// Uppercases `input` when `to_upper` is `Some(true)`, lowercases it otherwise.
pub fn format_case(input: &str, to_upper: Option<bool>) -> String {
    if to_upper.unwrap_or(false) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
