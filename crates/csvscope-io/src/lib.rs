//! csvscope-io: Browser I/O and Dioxus component library.
//!
//! Sends selected files to the analysis service, discovers the
//! service's base URL from the host page, and provides the UI
//! components for the csvscope web application.

pub mod components;
pub mod endpoint;
pub mod upload;

pub use components::{DropZone, PreviewTable, SchemaPanel, UploadButton};
pub use upload::UploadClient;
