// Sleepwell Core - Domain Logic, Operation Table & Ports
// NO transport dependencies

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{Operation, OperationDescriptor, SleepService, OPERATIONS};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
