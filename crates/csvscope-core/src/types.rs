//! Shared types for the csvscope client.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::messages;

/// A file the user picked or dropped that passed validation.
///
/// Holds the display name and the file contents. The bytes are read
/// once, at selection time, and shared by reference afterwards so that
/// re-uploading the same file does not copy them again.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Rc<[u8]>,
}

impl SelectedFile {
    /// Create a selected file from its name and contents.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// The filename as the browser reported it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the file in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A single cell value in a preview row.
///
/// The analysis service emits plain JSON scalars; anything else in a
/// row (arrays, objects) fails decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON `null` (a missing value in the source CSV).
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// Any JSON number. Kept as [`serde_json::Number`] so large
    /// integers are displayed without float rounding.
    Number(serde_json::Number),
    /// Any JSON string.
    String(String),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// One preview row: column name to value.
///
/// The producer guarantees every row carries every column; the client
/// does not check this and renders a missing key like `null`.
pub type Row = BTreeMap<String, Scalar>;

/// Structural description of the uploaded CSV.
///
/// `columns` preserves source order. `types` and `null_counts` are keyed
/// by column name and must cover exactly the names in `columns`; see
/// [`Schema::check`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schema {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// Inferred type label per column (e.g. `int64`, `object`).
    pub types: BTreeMap<String, String>,
    /// Number of missing values per column.
    pub null_counts: BTreeMap<String, u64>,
}

impl Schema {
    /// Inferred type label for `column`, if reported.
    #[must_use]
    pub fn type_of(&self, column: &str) -> Option<&str> {
        self.types.get(column).map(String::as_str)
    }

    /// Null count for `column`, if reported.
    #[must_use]
    pub fn null_count(&self, column: &str) -> Option<u64> {
        self.null_counts.get(column).copied()
    }

    /// Verify the key-set invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a repeated column name, a
    /// column with no type or null count, or a type / null count keyed by
    /// a name that is not a column.
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.clone()));
            }
            if !self.types.contains_key(column) {
                return Err(SchemaError::MissingType(column.clone()));
            }
            if !self.null_counts.contains_key(column) {
                return Err(SchemaError::MissingNullCount(column.clone()));
            }
        }
        if let Some(extra) = self.types.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(SchemaError::UnknownColumn(extra.clone()));
        }
        if let Some(extra) = self.null_counts.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(SchemaError::UnknownColumn(extra.clone()));
        }
        Ok(())
    }
}

/// A schema whose `types` / `null_counts` disagree with `columns`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("column {0:?} appears more than once")]
    DuplicateColumn(String),

    #[error("no type reported for column {0:?}")]
    MissingType(String),

    #[error("no null count reported for column {0:?}")]
    MissingNullCount(String),

    #[error("schema describes unknown column {0:?}")]
    UnknownColumn(String),
}

/// Successful response from the analysis service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Column names, types and null counts.
    pub schema: Schema,
    /// Leading rows of the parsed CSV, in file order.
    pub preview: Vec<Row>,
}

/// Everything that can go wrong between picking a file and seeing its
/// preview.
///
/// The `Display` text of each variant is what the user sees. None of
/// these are fatal: after any of them the user can pick another file or
/// press upload again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The candidate file's name does not end in `.csv`.
    #[error("{}", messages::UNSUPPORTED_FILE)]
    UnsupportedFile,

    /// Upload was triggered with no file selected.
    #[error("{}", messages::NO_FILE_SELECTED)]
    NoFileSelected,

    /// Upload was triggered while another one is still in flight.
    #[error("{}", messages::UPLOAD_IN_PROGRESS)]
    UploadInProgress,

    /// The browser could not read the selected file.
    #[error("Failed to read file: {0}")]
    ReadFile(String),

    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("{}", or_upload_failed(.0))]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Error: {code}{}", leading_space(.text))]
    Status {
        /// HTTP status code.
        code: u16,
        /// HTTP reason phrase; may be empty (HTTP/2 omits it).
        text: String,
    },

    /// No response arrived before the upload deadline.
    #[error("{}", messages::UPLOAD_TIMED_OUT)]
    TimedOut,

    /// 2xx response whose body is not a valid analysis result.
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Returns `true` for failures of the upload itself, where pressing
    /// upload again may succeed. Local rejections return `false`.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::TimedOut | Self::MalformedResponse(_)
        )
    }
}

fn or_upload_failed(detail: &str) -> &str {
    if detail.trim().is_empty() {
        messages::UPLOAD_FAILED
    } else {
        detail
    }
}

fn leading_space(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" {text}")
    }
}
