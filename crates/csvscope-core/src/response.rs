//! Turning the analysis service's reply into a result.

use tracing::debug;

use crate::types::{AnalysisResult, ClientError};

/// Returns `true` for a 2xx status, the range `fetch` reports as `ok`.
#[must_use]
pub const fn is_success(code: u16) -> bool {
    matches!(code, 200..=299)
}

/// Map a completed HTTP exchange to an analysis result.
///
/// `body` is only consulted for a 2xx status; callers may pass an empty
/// body otherwise.
///
/// # Errors
///
/// - [`ClientError::Status`] carrying `code` and `status_text` for a
///   non-2xx status.
/// - [`ClientError::MalformedResponse`] for a 2xx body that [`decode`]
///   rejects, including an empty one.
pub fn from_reply(code: u16, status_text: &str, body: &str) -> Result<AnalysisResult, ClientError> {
    if !is_success(code) {
        return Err(ClientError::Status {
            code,
            text: status_text.to_owned(),
        });
    }
    decode(body)
}

/// Decode a 2xx response body into an [`AnalysisResult`].
///
/// The body must be a JSON object with `schema` and `preview` keys (any
/// extra keys are ignored) and the schema must pass [`Schema::check`].
///
/// [`Schema::check`]: crate::types::Schema::check
///
/// # Errors
///
/// Returns [`ClientError::MalformedResponse`] if the body is not valid
/// JSON, does not have the expected shape, or carries an inconsistent
/// schema.
pub fn decode(body: &str) -> Result<AnalysisResult, ClientError> {
    let result: AnalysisResult = serde_json::from_str(body)
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
    result
        .schema
        .check()
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
    debug!(
        columns = result.schema.columns.len(),
        rows = result.preview.len(),
        "decoded analysis result"
    );
    Ok(result)
}
