//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use sleepwell_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Serialization(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Internal(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
    }
}
