// Quote Domain Model

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quote ID (stable for the process lifetime)
pub type QuoteId = u32;

/// Quote category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SleepHygiene,
    Mindfulness,
    Motivation,
    Science,
    Holistic,
    Wellness,
    Inspiration,
    Techniques,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::SleepHygiene,
        Category::Mindfulness,
        Category::Motivation,
        Category::Science,
        Category::Holistic,
        Category::Wellness,
        Category::Inspiration,
        Category::Techniques,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SleepHygiene => "sleep_hygiene",
            Category::Mindfulness => "mindfulness",
            Category::Motivation => "motivation",
            Category::Science => "science",
            Category::Holistic => "holistic",
            Category::Wellness => "wellness",
            Category::Inspiration => "inspiration",
            Category::Techniques => "techniques",
        }
    }

    /// Human-readable label ("sleep_hygiene" -> "Sleep Hygiene")
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

/// Mood a quote is meant to evoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Motivational,
    Peaceful,
    Reflective,
    Educational,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Motivational,
        Mood::Peaceful,
        Mood::Reflective,
        Mood::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Motivational => "motivational",
            Mood::Peaceful => "peaceful",
            Mood::Reflective => "reflective",
            Mood::Educational => "educational",
        }
    }
}

/// Moment of the day a record is tagged with. `Any` matches every period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Evening,
    Night,
    Any,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Evening,
        TimeOfDay::Night,
        TimeOfDay::Any,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
            TimeOfDay::Any => "any",
        }
    }
}

/// Period derived from the wall clock (never `any`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Morning,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Morning, TimePeriod::Evening, TimePeriod::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "morning",
            TimePeriod::Evening => "evening",
            TimePeriod::Night => "night",
        }
    }
}

impl From<TimePeriod> for TimeOfDay {
    fn from(period: TimePeriod) -> Self {
        match period {
            TimePeriod::Morning => TimeOfDay::Morning,
            TimePeriod::Evening => TimeOfDay::Evening,
            TimePeriod::Night => TimeOfDay::Night,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

impl FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                field: "mood",
                value: s.to_string(),
            })
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                field: "time_of_day",
                value: s.to_string(),
            })
    }
}

/// Quote Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: QuoteId,
    pub text: String,
    pub author: Option<String>,
    pub category: Category,
    pub time_of_day: TimeOfDay,
    pub mood: Mood,
}

impl QuoteRecord {
    pub fn new(
        id: QuoteId,
        text: impl Into<String>,
        author: Option<&str>,
        category: Category,
        time_of_day: TimeOfDay,
        mood: Mood,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.map(str::to_string),
            category,
            time_of_day,
            mood,
        }
    }

    /// Attribution for display ("Anonymous" when unattributed)
    pub fn attribution(&self) -> &str {
        self.author.as_deref().unwrap_or("Anonymous")
    }
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_mood_is_rejected() {
        let err = "sleepy".parse::<Mood>().unwrap_err();
        assert!(err.to_string().contains("sleepy"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::SleepHygiene).unwrap();
        assert_eq!(json, "\"sleep_hygiene\"");

        let parsed: Result<Mood, _> = serde_json::from_str("\"Calm\"");
        assert!(parsed.is_err(), "enum parsing must be exact");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::SleepHygiene.label(), "Sleep Hygiene");
        assert_eq!(Category::Science.label(), "Science");
    }

    #[test]
    fn test_attribution_defaults_to_anonymous() {
        let record = QuoteRecord::new(
            1,
            "Rest.",
            None,
            Category::Wellness,
            TimeOfDay::Any,
            Mood::Calm,
        );
        assert_eq!(record.attribution(), "Anonymous");
    }
}
