// Port Layer - Interfaces for external dependencies

pub mod picker; // For deterministic testing
pub mod time_provider;

// Re-exports
pub use picker::{Picker, RandomPicker, RoundRobinPicker, SeededPicker};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
