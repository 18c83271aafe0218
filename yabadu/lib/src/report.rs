//! Logging of failed calls.
//!
//! Callers that want the "log, then hand back" behaviour wrap a facade call
//! in [`inspect`]; the error still reaches them unchanged.

use tracing::error;

use crate::error::ApiError;

/// Emits one `error` event describing the failure's classification.
pub fn log_api_error(operation: &str, err: &ApiError) {
    match err {
        ApiError::Server { status, .. } => {
            let data = err.data().unwrap_or_default();
            error!(
                operation,
                kind = %err.kind(),
                status = *status,
                data = %data,
                "API error status {status}"
            );
        }
        ApiError::Network { message } => {
            error!(operation, kind = %err.kind(), "Network error: {message}");
        }
        ApiError::Other { message } => {
            error!(operation, kind = %err.kind(), "Error: {message}");
        }
    }
}

/// Logs the error of a failed result and returns the result untouched.
///
/// ## Examples
///
/// ```rust,no_run
/// use yabadu_lib::{ApiClient, Configuration, report};
///
/// # async fn example() -> Result<(), yabadu_lib::ApiError> {
/// let client = ApiClient::new(Configuration::from_env()?)?;
/// let genders = report::inspect(
///     "systemGendersGet",
///     client.system().system_genders_get().await,
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn inspect<T>(operation: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log_api_error(operation, err);
    }
    result
}
