use serde::{Deserialize, Serialize};

/// Weekday names in display order. The index is the sort rank.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Marker used for both `start` and `end` of a closed day.
pub const CLOSED: &str = "closed";

/// One day/time-range record. A day split by a break yields several entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntry {
    pub day: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHours {
    pub hours: Vec<HoursEntry>,
}

/// Monday=0 … Sunday=6. Exact, case-sensitive match on the full English name.
pub fn weekday_index(day: &str) -> Option<usize> {
    WEEKDAYS.iter().position(|d| *d == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index_monday_first() {
        assert_eq!(weekday_index("Monday"), Some(0));
        assert_eq!(weekday_index("Sunday"), Some(6));
    }

    #[test]
    fn test_weekday_index_is_exact() {
        assert_eq!(weekday_index("monday"), None);
        assert_eq!(weekday_index("Mon"), None);
    }

    #[test]
    fn test_parsed_hours_deserializes() {
        let json = r#"{"hours": [{"day": "Sunday", "start": "closed", "end": "closed"}]}"#;
        let parsed: ParsedHours = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.hours.len(), 1);
        assert_eq!(parsed.hours[0].start, CLOSED);
    }
}
