// Bedtime Routine Domain Model

use super::error::DomainError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style of bedtime reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    #[default]
    Preparation,
    Relaxation,
    Environment,
    Mindfulness,
}

impl ReminderType {
    pub const ALL: [ReminderType; 4] = [
        ReminderType::Preparation,
        ReminderType::Relaxation,
        ReminderType::Environment,
        ReminderType::Mindfulness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderType::Preparation => "preparation",
            ReminderType::Relaxation => "relaxation",
            ReminderType::Environment => "environment",
            ReminderType::Mindfulness => "mindfulness",
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReminderType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                field: "reminder_type",
                value: s.to_string(),
            })
    }
}

/// Parse a wall-clock time written as `H:MM` or `HH:MM` (00:00 - 23:59).
///
/// Minutes must always have two digits; seconds are not accepted.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, DomainError> {
    let invalid = || DomainError::InvalidClockTime(raw.to_string());

    let (hour, minute) = raw.split_once(':').ok_or_else(invalid)?;
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if !digits(hour) || hour.len() > 2 || !digits(minute) || minute.len() != 2 {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// One step of a bedtime routine, offset backward from bedtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    pub minutes_before: u32,
    /// Clock time the step starts at (HH:MM)
    pub at: String,
    pub action: String,
}

impl RoutineStep {
    /// `"21:00 (60 min before): Turn off electronic devices"`
    pub fn render(&self) -> String {
        format!("{} ({} min before): {}", self.at, self.minutes_before, self.action)
    }
}

/// Ordered routine for a target bedtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeRoutine {
    pub bedtime: String,
    pub reminder_type: ReminderType,
    pub steps: Vec<RoutineStep>,
    pub closing_quote: String,
    pub closing_author: String,
}
