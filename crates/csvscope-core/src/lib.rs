//! csvscope-core: Pure client logic for the CSV upload/preview page (sans-IO).
//!
//! Models the four steps a user goes through:
//! select -> validate -> upload -> render.
//!
//! This crate has **no I/O dependencies** -- it validates file names,
//! tracks the upload lifecycle, decodes the analysis service's JSON and
//! projects everything into a render model. All browser interaction
//! (file reading, `fetch`, timers, DOM) lives in `csvscope-io`.

pub mod config;
pub mod deadline;
pub mod messages;
pub mod response;
pub mod session;
pub mod types;
pub mod validate;
pub mod view;

pub use config::{ClientConfig, UPLOAD_TIMEOUT};
pub use deadline::Raced;
pub use session::{Session, UploadState, UploadTicket};
pub use types::{AnalysisResult, ClientError, Row, Scalar, Schema, SchemaError, SelectedFile};
pub use validate::validate;
pub use view::{Cell, DropPrompt, PageView, SchemaSummary, TableView};
