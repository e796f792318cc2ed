// Domain Layer - Quote records, the store and routine types

pub mod catalog;
pub mod error;
pub mod quote;
pub mod routine;
pub mod store;

// Re-exports
pub use error::DomainError;
pub use quote::{Category, Mood, QuoteId, QuoteRecord, TimeOfDay, TimePeriod};
pub use routine::{parse_clock_time, BedtimeRoutine, ReminderType, RoutineStep};
pub use store::{QuoteStore, StoreStatistics};
