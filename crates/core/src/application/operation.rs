//! Operation Table
//!
//! One declarative entry per logical operation: RPC method name, REST route and
//! parameter schema. Both transport adapters register themselves by iterating
//! [`OPERATIONS`], so a new operation only needs a row here and a handler in
//! [`SleepService::dispatch`](super::SleepService::dispatch).

use crate::domain::parse_clock_time;
use crate::error::{AppError, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Logical operations exposed on both surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    GetQuote,
    GetTip,
    SearchQuotes,
    GetDailyWisdom,
    GetBedtimeReminder,
    ListCategories,
    GetStatistics,
}

impl Operation {
    /// Row of [`OPERATIONS`] for this operation (rows are in variant order)
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        &OPERATIONS[*self as usize]
    }
}

pub const CATEGORY_VALUES: &[&str] = &[
    "sleep_hygiene",
    "mindfulness",
    "motivation",
    "science",
    "holistic",
    "wellness",
    "inspiration",
    "techniques",
];

pub const MOOD_VALUES: &[&str] = &["calm", "motivational", "peaceful", "reflective", "educational"];

pub const REMINDER_TYPE_VALUES: &[&str] = &["preparation", "relaxation", "environment", "mindfulness"];

pub const CLOCK_TIME_PATTERN: &str = "^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$";

pub const MAX_SEARCH_LIMIT: i64 = 50;

/// Accepted shape of a parameter value
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    Text,
    Boolean,
    Integer { min: i64, max: i64 },
    OneOf(&'static [&'static str]),
    /// `H:MM` or `HH:MM`, 00:00-23:59
    ClockTime,
}

impl ParamKind {
    fn expectation(&self) -> String {
        match self {
            ParamKind::Text => "a string".to_string(),
            ParamKind::Boolean => "a boolean".to_string(),
            ParamKind::Integer { min, max } => format!("an integer between {} and {}", min, max),
            ParamKind::OneOf(allowed) => format!("one of [{}]", allowed.join(", ")),
            ParamKind::ClockTime => "a time as HH:MM (00:00-23:59)".to_string(),
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ParamKind::Text, Value::String(_)) => true,
            (ParamKind::Boolean, Value::Bool(_)) => true,
            (ParamKind::Integer { min, max }, Value::Number(n)) => {
                n.as_i64().is_some_and(|v| (*min..=*max).contains(&v))
            }
            (ParamKind::OneOf(allowed), Value::String(s)) => allowed.contains(&s.as_str()),
            (ParamKind::ClockTime, Value::String(s)) => parse_clock_time(s).is_ok(),
            _ => false,
        }
    }

    fn json_schema(&self) -> Map<String, Value> {
        let schema = match self {
            ParamKind::Text => json!({ "type": "string" }),
            ParamKind::Boolean => json!({ "type": "boolean" }),
            ParamKind::Integer { min, max } => {
                json!({ "type": "integer", "minimum": min, "maximum": max })
            }
            ParamKind::OneOf(allowed) => json!({ "type": "string", "enum": allowed }),
            ParamKind::ClockTime => json!({ "type": "string", "pattern": CLOCK_TIME_PATTERN }),
        };
        match schema {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// Default applied when a parameter is absent or null
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Text(&'static str),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Integer(i) => Value::from(i),
            DefaultValue::Text(s) => Value::String(s.to_string()),
        }
    }
}

/// Declared parameter of an operation
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub description: &'static str,
}

impl ParamSpec {
    fn check(&self, value: &Value) -> Result<()> {
        if self.kind.accepts(value) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid parameter '{}': expected {}, got {}",
                self.name,
                self.kind.expectation(),
                value
            )))
        }
    }

    /// Turn a query-string value into a typed JSON value
    fn coerce(&self, text: String) -> Result<Value> {
        let invalid = |text: &str| {
            AppError::Validation(format!(
                "Invalid parameter '{}': expected {}, got '{}'",
                self.name,
                self.kind.expectation(),
                text
            ))
        };

        match self.kind {
            ParamKind::Boolean => match text.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
                _ => Err(invalid(&text)),
            },
            ParamKind::Integer { .. } => text
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| invalid(&text)),
            _ => Ok(Value::String(text)),
        }
    }
}

/// One row of the operation table
#[derive(Debug)]
pub struct OperationDescriptor {
    pub operation: Operation,
    pub rpc_method: &'static str,
    /// GET route (axum path syntax; `:name` segments are parameters)
    pub rest_path: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
}

pub static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        operation: Operation::GetQuote,
        rpc_method: "get_inspirational_quote",
        rest_path: "/api/quote",
        summary: "Get an inspirational sleep quote",
        params: &[
            ParamSpec {
                name: "category",
                kind: ParamKind::OneOf(CATEGORY_VALUES),
                required: false,
                default: None,
                description: "Quote category",
            },
            ParamSpec {
                name: "mood",
                kind: ParamKind::OneOf(MOOD_VALUES),
                required: false,
                default: None,
                description: "Desired mood",
            },
            ParamSpec {
                name: "time_based",
                kind: ParamKind::Boolean,
                required: false,
                default: Some(DefaultValue::Bool(false)),
                description: "Pick a quote for the current time of day (ignores category and mood)",
            },
        ],
    },
    OperationDescriptor {
        operation: Operation::GetTip,
        rpc_method: "get_sleep_hygiene_tip",
        rest_path: "/api/tip",
        summary: "Get a sleep hygiene tip",
        params: &[],
    },
    OperationDescriptor {
        operation: Operation::SearchQuotes,
        rpc_method: "search_sleep_quotes",
        rest_path: "/api/search/:query",
        summary: "Search quotes by keyword",
        params: &[
            ParamSpec {
                name: "query",
                kind: ParamKind::Text,
                required: true,
                default: None,
                description: "Keyword matched against quote text and author",
            },
            ParamSpec {
                name: "limit",
                kind: ParamKind::Integer {
                    min: 1,
                    max: MAX_SEARCH_LIMIT,
                },
                required: false,
                default: Some(DefaultValue::Integer(5)),
                description: "Maximum number of results",
            },
        ],
    },
    OperationDescriptor {
        operation: Operation::GetDailyWisdom,
        rpc_method: "get_daily_sleep_wisdom",
        rest_path: "/api/wisdom",
        summary: "Get the daily quote, optionally with a practical tip",
        params: &[ParamSpec {
            name: "include_tip",
            kind: ParamKind::Boolean,
            required: false,
            default: Some(DefaultValue::Bool(true)),
            description: "Include a sleep hygiene tip",
        }],
    },
    OperationDescriptor {
        operation: Operation::GetBedtimeReminder,
        rpc_method: "get_bedtime_routine_reminder",
        rest_path: "/api/bedtime",
        summary: "Build a bedtime routine reminder",
        params: &[
            ParamSpec {
                name: "user_bedtime",
                kind: ParamKind::ClockTime,
                required: false,
                default: Some(DefaultValue::Text("22:00")),
                description: "Bedtime (HH:MM)",
            },
            ParamSpec {
                name: "reminder_type",
                kind: ParamKind::OneOf(REMINDER_TYPE_VALUES),
                required: false,
                default: Some(DefaultValue::Text("preparation")),
                description: "Reminder style",
            },
        ],
    },
    OperationDescriptor {
        operation: Operation::ListCategories,
        rpc_method: "list_quote_categories",
        rest_path: "/api/categories",
        summary: "List the quote categories present in the store",
        params: &[],
    },
    OperationDescriptor {
        operation: Operation::GetStatistics,
        rpc_method: "get_quote_statistics",
        rest_path: "/api/statistics",
        summary: "Count quotes per category, time of day and mood",
        params: &[],
    },
];

/// Look up an operation by its JSON-RPC method name
pub fn find_by_rpc_method(method: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|d| d.rpc_method == method)
}

impl OperationDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Validate JSON parameters and fill defaults.
    ///
    /// Accepts no params, `null`, an object, or an array holding a single object.
    /// Unknown keys are dropped.
    pub fn validate(&self, raw: Option<Value>) -> Result<Map<String, Value>> {
        let mut input = match raw {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(Value::Array(items)) if items.is_empty() => Map::new(),
            Some(Value::Array(items)) => match <[Value; 1]>::try_from(items) {
                Ok([Value::Object(map)]) => map,
                _ => {
                    return Err(AppError::Validation(
                        "Positional parameters are not supported; pass an object".to_string(),
                    ))
                }
            },
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "Parameters must be an object, got {}",
                    other
                )))
            }
        };

        let mut validated = Map::new();
        for spec in self.params {
            match input.remove(spec.name) {
                None | Some(Value::Null) => {
                    if let Some(default) = spec.default {
                        validated.insert(spec.name.to_string(), default.to_value());
                    } else if spec.required {
                        return Err(AppError::Validation(format!(
                            "Missing required parameter '{}'",
                            spec.name
                        )));
                    }
                }
                Some(value) => {
                    spec.check(&value)?;
                    validated.insert(spec.name.to_string(), value);
                }
            }
        }

        if !input.is_empty() {
            tracing::debug!(
                method = self.rpc_method,
                ignored = ?input.keys().collect::<Vec<_>>(),
                "Ignoring unknown parameters"
            );
        }

        Ok(validated)
    }

    /// Coerce string parameters (query string, path segments), then validate.
    ///
    /// Empty values are treated as absent.
    pub fn coerce_and_validate<I>(&self, raw: I) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut typed = Map::new();
        for (key, text) in raw {
            let Some(spec) = self.param(&key) else {
                typed.insert(key, Value::String(text));
                continue;
            };
            if text.is_empty() && !spec.required {
                continue;
            }
            let value = spec.coerce(text)?;
            typed.insert(key, value);
        }

        self.validate(Some(Value::Object(typed)))
    }

    /// JSON Schema of the parameter object
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in self.params {
            let mut schema = spec.kind.json_schema();
            schema.insert("description".to_string(), json!(spec.description));
            if let Some(default) = spec.default {
                schema.insert("default".to_string(), default.to_value());
            }
            properties.insert(spec.name.to_string(), Value::Object(schema));
        }

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Catalog entry served by `list_operations` and `GET /`
    pub fn describe(&self) -> Value {
        json!({
            "operation": self.operation,
            "rpc_method": self.rpc_method,
            "rest": { "method": "GET", "path": self.rest_path },
            "summary": self.summary,
            "input_schema": self.input_schema(),
        })
    }
}
