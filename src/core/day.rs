use crate::domain::model::{Day, DayType};

pub fn classify(day: Day) -> DayType {
    match day {
        Day::Saturday | Day::Sunday => DayType::Weekend,
        Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => {
            DayType::Weekday
        }
    }
}

/// `"Weekend"` for Saturday and Sunday, `"Weekday"` otherwise.
pub fn day_type(day: Day) -> &'static str {
    classify(day).as_str()
}
