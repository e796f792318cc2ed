// Sleep Service - use cases behind every operation

use super::composer::{bedtime_routine, daily_wisdom};
use super::operation::{Operation, OperationDescriptor, OPERATIONS};
use super::params::{BedtimeParams, QuoteParams, SearchParams, WisdomParams};
use super::responses::{
    BedtimeResponse, CategoriesResponse, QuoteResponse, SearchResponse, TipResponse,
    WisdomResponse,
};
use super::selector::{
    by_category, by_mood, by_time_of_day, current_time_period, pick_one, refs, search,
};
use crate::domain::{parse_clock_time, Category, QuoteStore, StoreStatistics, TimePeriod};
use crate::error::{AppError, Result};
use crate::port::{Picker, TimeProvider};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

const SEARCH_SUGGESTIONS: &str = "sleep, rest, night, relax, peace";

/// Sleep Service with injected dependencies
pub struct SleepService {
    store: Arc<QuoteStore>,
    time_provider: Arc<dyn TimeProvider>,
    picker: Arc<dyn Picker>,
}

impl SleepService {
    pub fn new(
        store: Arc<QuoteStore>,
        time_provider: Arc<dyn TimeProvider>,
        picker: Arc<dyn Picker>,
    ) -> Self {
        Self {
            store,
            time_provider,
            picker,
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Period for the injected clock's current time
    pub fn current_period(&self) -> TimePeriod {
        current_time_period(&self.time_provider.now_local())
    }

    /// Local ISO-8601 timestamp (seconds precision)
    pub fn timestamp(&self) -> String {
        self.time_provider
            .now_local()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }

    /// get_inspirational_quote
    ///
    /// `time_based` takes precedence over category and mood. Filters that
    /// match nothing fall back to a random quote from the whole store.
    pub fn get_quote(&self, params: QuoteParams) -> QuoteResponse {
        let all = refs(self.store.all());

        let (candidates, description) = if params.time_based {
            let period = self.current_period();
            (
                by_time_of_day(&all, period),
                format!("time_of_day={}", period),
            )
        } else {
            let mut candidates = all;
            let mut applied = Vec::new();
            if let Some(category) = params.category {
                candidates = by_category(&candidates, category);
                applied.push(format!("category={}", category));
            }
            if let Some(mood) = params.mood {
                candidates = by_mood(&candidates, mood);
                applied.push(format!("mood={}", mood));
            }
            (candidates, applied.join(", "))
        };

        let matched_filters = !candidates.is_empty();
        let quote = pick_one(&candidates, self.store.all(), self.picker.as_ref()).clone();

        let message = if !matched_filters {
            format!(
                "No quotes matched {}; here is a random quote instead",
                description
            )
        } else if description.is_empty() {
            format!(
                "Inspirational quote #{} ({}, {})",
                quote.id,
                quote.category.label(),
                quote.mood
            )
        } else {
            format!("Quote #{} matching {}", quote.id, description)
        };

        QuoteResponse {
            quote,
            matched_filters,
            message,
            timestamp: self.timestamp(),
        }
    }

    /// get_sleep_hygiene_tip
    pub fn get_tip(&self) -> TipResponse {
        let all = refs(self.store.all());
        let tip = pick_one(
            &by_category(&all, Category::SleepHygiene),
            self.store.all(),
            self.picker.as_ref(),
        )
        .clone();

        TipResponse {
            message: format!(
                "Sleep hygiene tip #{}. Small changes in your habits can bring big improvements to your rest.",
                tip.id
            ),
            tip,
            timestamp: self.timestamp(),
        }
    }

    /// search_sleep_quotes
    pub fn search_quotes(&self, params: SearchParams) -> SearchResponse {
        let all = refs(self.store.all());
        let results: Vec<_> = search(&all, &params.query)
            .into_iter()
            .take(params.limit)
            .cloned()
            .collect();

        let message = if results.is_empty() {
            format!(
                "No quotes matched \"{}\". Try terms like: {}",
                params.query, SEARCH_SUGGESTIONS
            )
        } else {
            format!("Found {} quote(s) for \"{}\"", results.len(), params.query)
        };

        SearchResponse {
            query: params.query,
            total_found: results.len(),
            results,
            message,
            timestamp: self.timestamp(),
        }
    }

    /// get_daily_sleep_wisdom
    pub fn daily_wisdom(&self, params: WisdomParams) -> WisdomResponse {
        let period = self.current_period();
        let wisdom = daily_wisdom(
            &self.store,
            period,
            params.include_tip,
            self.picker.as_ref(),
        );

        let message = if wisdom.tip.is_some() {
            format!("Daily sleep wisdom for the {} with a practical tip", period)
        } else {
            format!("Daily sleep wisdom for the {}", period)
        };

        WisdomResponse {
            wisdom,
            message,
            timestamp: self.timestamp(),
        }
    }

    /// get_bedtime_routine_reminder
    pub fn bedtime_reminder(&self, params: BedtimeParams) -> Result<BedtimeResponse> {
        let bedtime = parse_clock_time(&params.user_bedtime)?;
        let routine = bedtime_routine(bedtime, params.reminder_type);

        let rendered: Vec<String> = routine.steps.iter().map(|s| s.render()).collect();
        let message = match routine.steps.first() {
            Some(first) => format!(
                "{} routine for a {} bedtime, starting at {}",
                title(routine.reminder_type.as_str()),
                routine.bedtime,
                first.at
            ),
            None => format!("Bedtime at {}", routine.bedtime),
        };

        Ok(BedtimeResponse {
            routine,
            rendered,
            message,
        })
    }

    /// list_quote_categories
    pub fn categories(&self) -> CategoriesResponse {
        let categories = self.store.categories();
        CategoriesResponse {
            total_categories: categories.len(),
            categories,
        }
    }

    /// get_quote_statistics
    pub fn statistics(&self) -> StoreStatistics {
        self.store.statistics()
    }

    /// Catalog of every operation with its input schema
    pub fn describe_operations(&self) -> Vec<Value> {
        OPERATIONS.iter().map(OperationDescriptor::describe).collect()
    }

    /// Run an operation on an already validated parameter object
    pub fn dispatch(&self, operation: Operation, params: Map<String, Value>) -> Result<Value> {
        debug!(operation = ?operation, "Dispatching operation");

        match operation {
            Operation::GetQuote => to_json(self.get_quote(from_params(params)?)),
            Operation::GetTip => to_json(self.get_tip()),
            Operation::SearchQuotes => to_json(self.search_quotes(from_params(params)?)),
            Operation::GetDailyWisdom => to_json(self.daily_wisdom(from_params(params)?)),
            Operation::GetBedtimeReminder => {
                to_json(self.bedtime_reminder(from_params(params)?)?)
            }
            Operation::ListCategories => to_json(self.categories()),
            Operation::GetStatistics => to_json(self.statistics()),
        }
    }

    /// Validate raw JSON parameters against the operation row, then dispatch
    pub fn execute(&self, descriptor: &OperationDescriptor, raw: Option<Value>) -> Result<Value> {
        let params = descriptor.validate(raw)?;
        self.dispatch(descriptor.operation, params)
    }
}

/// Typed view of a validated parameter object; shape mismatches are client errors
fn from_params<T: DeserializeOwned>(params: Map<String, Value>) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(params))?)
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

fn title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mood, ReminderType, TimeOfDay};
    use crate::port::{FixedTimeProvider, RoundRobinPicker, SeededPicker};
    use serde_json::json;

    fn service_at(hour: u32, minute: u32) -> SleepService {
        SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(hour, minute).unwrap()),
            Arc::new(SeededPicker::new(11)),
        )
    }

    #[test]
    fn test_get_quote_filters_by_mood() {
        let service = service_at(21, 0);
        for _ in 0..20 {
            let response = service.get_quote(QuoteParams {
                mood: Some(Mood::Calm),
                ..Default::default()
            });
            assert!(response.matched_filters);
            assert_eq!(response.quote.mood, Mood::Calm);
            assert!(response.message.contains("mood=calm"));
        }
    }

    #[test]
    fn test_get_quote_combines_category_and_mood() {
        let service = service_at(9, 0);
        let response = service.get_quote(QuoteParams {
            category: Some(Category::SleepHygiene),
            mood: Some(Mood::Educational),
            time_based: false,
        });
        assert_eq!(response.quote.category, Category::SleepHygiene);
        assert_eq!(response.quote.mood, Mood::Educational);
    }

    #[test]
    fn test_get_quote_falls_back_when_nothing_matches() {
        let service = service_at(9, 0);
        let response = service.get_quote(QuoteParams {
            category: Some(Category::Science),
            mood: Some(Mood::Motivational),
            time_based: false,
        });
        assert!(!response.matched_filters);
        assert!(service.store().get(response.quote.id).is_some());
        assert!(response.message.starts_with("No quotes matched"));
    }

    #[test]
    fn test_get_quote_time_based_uses_clock() {
        let service = service_at(23, 15);
        for _ in 0..20 {
            let response = service.get_quote(QuoteParams {
                category: Some(Category::Motivation),
                time_based: true,
                ..Default::default()
            });
            assert!(matches!(
                response.quote.time_of_day,
                TimeOfDay::Night | TimeOfDay::Any
            ));
        }
    }

    #[test]
    fn test_get_tip_is_sleep_hygiene() {
        let service = service_at(12, 0);
        for _ in 0..20 {
            assert_eq!(service.get_tip().tip.category, Category::SleepHygiene);
        }
    }

    #[test]
    fn test_search_applies_limit() {
        let service = service_at(12, 0);
        let response = service.search_quotes(SearchParams {
            query: "sleep".to_string(),
            limit: 2,
        });
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.total_found, 2);
    }

    #[test]
    fn test_search_empty_keyword_returns_store_up_to_limit() {
        let service = service_at(12, 0);
        let response = service.search_quotes(SearchParams {
            query: String::new(),
            limit: 50,
        });
        assert_eq!(response.total_found, service.store().len());
    }

    #[test]
    fn test_search_no_match_message() {
        let service = service_at(12, 0);
        let response = service.search_quotes(SearchParams::new("xylophone"));
        assert!(response.results.is_empty());
        assert!(response.message.contains("Try terms like"));
    }

    #[test]
    fn test_daily_wisdom_tip_toggle() {
        let service = service_at(6, 30);

        let with_tip = service.daily_wisdom(WisdomParams { include_tip: true });
        assert_eq!(with_tip.wisdom.period, TimePeriod::Morning);
        assert_eq!(
            with_tip.wisdom.tip.map(|t| t.category),
            Some(Category::SleepHygiene)
        );

        let without = service.daily_wisdom(WisdomParams { include_tip: false });
        assert!(without.wisdom.tip.is_none());
    }

    #[test]
    fn test_bedtime_reminder_renders_steps() {
        let service = service_at(20, 0);
        let response = service
            .bedtime_reminder(BedtimeParams {
                user_bedtime: "23:00".to_string(),
                reminder_type: ReminderType::Mindfulness,
            })
            .unwrap();

        assert_eq!(response.rendered.len(), response.routine.steps.len());
        assert_eq!(response.rendered[0], "22:40 (20 min before): Reflect on 3 positive things from today");
        assert!(response.message.starts_with("Mindfulness routine"));
    }

    #[test]
    fn test_bedtime_reminder_rejects_bad_time() {
        let service = service_at(20, 0);
        let err = service
            .bedtime_reminder(BedtimeParams {
                user_bedtime: "late".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_table_defaults_match_param_defaults() {
        let quote: QuoteParams =
            from_params(Operation::GetQuote.descriptor().validate(None).unwrap()).unwrap();
        assert_eq!(quote, QuoteParams::default());

        let wisdom: WisdomParams =
            from_params(Operation::GetDailyWisdom.descriptor().validate(None).unwrap()).unwrap();
        assert_eq!(wisdom, WisdomParams::default());

        let bedtime: BedtimeParams =
            from_params(Operation::GetBedtimeReminder.descriptor().validate(None).unwrap())
                .unwrap();
        assert_eq!(bedtime, BedtimeParams::default());

        let search: SearchParams = from_params(
            Operation::SearchQuotes
                .descriptor()
                .validate(Some(json!({ "query": "" })))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(search, SearchParams::new(""));
    }

    #[test]
    fn test_from_params_shape_mismatch_is_serialization_error() {
        let mut params = Map::new();
        params.insert("limit".to_string(), json!(3));

        let err = from_params::<SearchParams>(params).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_dispatch_without_validation_reports_serialization_error() {
        let service = service_at(12, 0);
        let err = service
            .dispatch(Operation::SearchQuotes, Map::new())
            .unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_execute_returns_message_field() {
        let service = service_at(22, 0);
        for descriptor in OPERATIONS {
            let raw = match descriptor.operation {
                Operation::SearchQuotes => Some(json!({ "query": "night" })),
                _ => None,
            };
            let value = service.execute(descriptor, raw).unwrap();
            match descriptor.operation {
                Operation::ListCategories | Operation::GetStatistics => {}
                _ => assert!(value["message"].is_string(), "{:?}", descriptor.operation),
            }
        }
    }

    #[test]
    fn test_execute_wisdom_without_tip_serializes_null() {
        let service = service_at(22, 0);
        let value = service
            .execute(
                Operation::GetDailyWisdom.descriptor(),
                Some(json!({ "include_tip": false })),
            )
            .unwrap();
        assert!(value["tip"].is_null());
        assert_eq!(value["period"], json!("night"));
    }

    #[test]
    fn test_execute_rejects_invalid_params() {
        let service = service_at(22, 0);
        let err = service
            .execute(
                Operation::GetQuote.descriptor(),
                Some(json!({ "category": "astrology" })),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_round_robin_service_is_deterministic() {
        let make = || {
            SleepService::new(
                Arc::new(QuoteStore::builtin().unwrap()),
                Arc::new(FixedTimeProvider::at(8, 0).unwrap()),
                Arc::new(RoundRobinPicker::new()),
            )
        };
        let a = make();
        let b = make();
        for _ in 0..5 {
            assert_eq!(a.get_tip().tip, b.get_tip().tip);
        }
    }

    #[test]
    fn test_describe_operations_covers_table() {
        let service = service_at(8, 0);
        let catalog = service.describe_operations();
        assert_eq!(catalog.len(), OPERATIONS.len());
        assert_eq!(catalog[0]["rpc_method"], json!("get_inspirational_quote"));
    }
}
