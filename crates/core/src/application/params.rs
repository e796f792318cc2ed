// Typed operation parameters
//
// Built from the validated parameter object of the matching operation row.
// `Default` matches the defaults declared in the operation table.

use crate::domain::{Category, Mood, ReminderType};
use serde::{Deserialize, Serialize};

/// get_inspirational_quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub time_based: bool,
}

/// search_sleep_quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
        }
    }
}

/// get_daily_sleep_wisdom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WisdomParams {
    #[serde(default = "default_include_tip")]
    pub include_tip: bool,
}

fn default_include_tip() -> bool {
    true
}

impl Default for WisdomParams {
    fn default() -> Self {
        Self {
            include_tip: default_include_tip(),
        }
    }
}

/// get_bedtime_routine_reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeParams {
    #[serde(default = "default_bedtime")]
    pub user_bedtime: String,
    #[serde(default)]
    pub reminder_type: ReminderType,
}

fn default_bedtime() -> String {
    "22:00".to_string()
}

impl Default for BedtimeParams {
    fn default() -> Self {
        Self {
            user_bedtime: default_bedtime(),
            reminder_type: ReminderType::default(),
        }
    }
}
