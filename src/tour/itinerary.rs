use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of a tour's itinerary
#[derive(Builder, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ItineraryDay {
    /// Day number as shown to the reader; expected to count up from 1 but not
    /// checked
    pub day: u32,
    pub title: String,
    #[builder(default)]
    #[serde(default)]
    pub description: String,
}

impl ItineraryDay {
    pub fn new<S1: ToString, S2: ToString>(day: u32, title: S1, description: S2) -> ItineraryDay {
        ItineraryDay {
            day,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// The header line printed above the day's description
    pub fn header(&self) -> String {
        format!("Day {}: {}", self.day, self.title.trim())
    }
}

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_build_days() {
        let day = ItineraryDayBuilder::default()
            .day(3u32)
            .title(" Florence ")
            .build()
            .expect("can build day");
        assert_eq!(day.description, "");
        assert_eq!(day.header(), "Day 3: Florence");
        assert_eq!(day.to_string(), "Day 3: Florence");
    }
}
