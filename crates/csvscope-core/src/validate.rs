//! Filename validation for picked and dropped files.
//!
//! The policy is deliberately literal: a candidate is accepted if and
//! only if its name ends with `.csv`. The comparison is case-sensitive,
//! the name is not trimmed, and the MIME type is never consulted.

use crate::types::ClientError;

/// The only accepted filename suffix.
pub const CSV_SUFFIX: &str = ".csv";

/// Check whether a filename carries the `.csv` suffix.
#[must_use]
pub fn has_csv_suffix(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

/// Validate the first file taken from a picker or drop event.
///
/// `candidate` is `None` when the event carried no file at all (e.g. a
/// drop of plain text, or a picker dialog that was cancelled).
///
/// # Errors
///
/// Returns [`ClientError::UnsupportedFile`] when there is no candidate
/// or its name does not end in `.csv`.
pub fn validate(candidate: Option<&str>) -> Result<&str, ClientError> {
    match candidate {
        Some(name) if has_csv_suffix(name) => Ok(name),
        _ => Err(ClientError::UnsupportedFile),
    }
}
