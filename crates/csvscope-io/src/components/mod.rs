//! Dioxus UI components for csvscope.
//!
//! Provides the CSV drop zone, the upload trigger, the schema summary
//! panel, and the preview table.

mod drop_zone;
mod preview_table;
mod schema_panel;
mod upload_button;

pub use drop_zone::DropZone;
pub use preview_table::PreviewTable;
pub use schema_panel::SchemaPanel;
pub use upload_button::UploadButton;
