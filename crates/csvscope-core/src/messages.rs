//! User-visible strings.
//!
//! These are part of the page's observable behaviour, so they are kept
//! in one place and asserted on verbatim by tests.

/// Shown when a picked or dropped file does not end in `.csv`.
pub const UNSUPPORTED_FILE: &str = "Only .csv files are supported.";

/// Shown when the upload button is pressed with nothing selected.
pub const NO_FILE_SELECTED: &str = "Please select a CSV file first";

/// Shown when the upload deadline elapses before a response arrives.
pub const UPLOAD_TIMED_OUT: &str = "Upload timed out";

/// Fallback when a transport failure carries no usable detail.
pub const UPLOAD_FAILED: &str = "Upload failed";

/// Reason an upload trigger is refused while a request is outstanding.
pub const UPLOAD_IN_PROGRESS: &str = "An upload is already in progress";

/// Upload button label while idle.
pub const TRIGGER_IDLE: &str = "Upload & Preview";

/// Upload button label while a request is in flight.
pub const TRIGGER_BUSY: &str = "Uploading...";

/// Drop zone text before any file is held.
pub const DROP_PROMPT: &str = "Drag and drop your CSV file here";

/// Drop zone prefix once a file is held.
pub const SELECTED_PREFIX: &str = "Selected: ";

/// Page heading and document title.
pub const PAGE_TITLE: &str = "csvscope: CSV Analyzer";

/// Heading of the schema summary.
pub const SCHEMA_HEADING: &str = "Dataset Schema";

/// Label before the comma-joined column names.
pub const COLUMNS_LABEL: &str = "Columns:";

/// Label before the `column: type` list.
pub const TYPES_LABEL: &str = "Types:";

/// Label before the `column: count` list.
pub const NULL_COUNTS_LABEL: &str = "Null counts:";
