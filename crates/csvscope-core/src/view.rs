//! Render model: everything the page shows, derived from a [`Session`].
//!
//! [`PageView::from_session`] is a pure projection with no caching; the
//! components in `csvscope-io` only turn its fields into markup.

use crate::messages;
use crate::session::Session;
use crate::types::{AnalysisResult, Schema};

/// What the drop zone says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPrompt {
    /// No file held yet.
    Empty,
    /// A file is held; carries its display name.
    Selected(String),
}

impl DropPrompt {
    /// Display text for the drop zone.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Empty => messages::DROP_PROMPT.to_owned(),
            Self::Selected(name) => format!("{}{name}", messages::SELECTED_PREFIX),
        }
    }
}

/// The three schema lines, each comma-joined in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSummary {
    /// `a, b, c`
    pub columns: String,
    /// `a: int64, b: object, c: bool`
    pub types: String,
    /// `a: 0, b: 3, c: 0`
    pub null_counts: String,
}

impl SchemaSummary {
    /// Summarize `schema`.
    ///
    /// Lookups that miss (only possible for a schema that skipped
    /// [`Schema::check`]) render as `?`.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let columns = schema.columns.join(", ");
        let types = schema
            .columns
            .iter()
            .map(|c| format!("{c}: {}", schema.type_of(c).unwrap_or("?")))
            .collect::<Vec<_>>()
            .join(", ");
        let null_counts = schema
            .columns
            .iter()
            .map(|c| {
                schema
                    .null_count(c)
                    .map_or_else(|| format!("{c}: ?"), |n| format!("{c}: {n}"))
            })
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            columns,
            types,
            null_counts,
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A present value in its string form.
    Value(String),
    /// `null`, or a key the row did not carry. Rendered empty.
    Null,
}

impl Cell {
    /// Text to put in the cell.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Value(text) => text,
            Self::Null => "",
        }
    }

    /// Returns `true` for [`Cell::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// The preview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Header cells: the schema's columns in source order.
    pub header: Vec<String>,
    /// Body rows, one per preview row, cells aligned with `header`.
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    /// Build the table for `result`.
    ///
    /// Returns `None` when the preview is empty: an empty preview
    /// suppresses the table entirely rather than showing a bare header.
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Option<Self> {
        if result.preview.is_empty() {
            return None;
        }
        let header = result.schema.columns.clone();
        let rows = result
            .preview
            .iter()
            .map(|row| {
                header
                    .iter()
                    .map(|column| match row.get(column) {
                        Some(value) if !value.is_null() => Cell::Value(value.to_string()),
                        _ => Cell::Null,
                    })
                    .collect()
            })
            .collect();
        Some(Self { header, rows })
    }

    /// Heading shown above the table.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Preview (first {} rows)", self.rows.len())
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Drop zone text.
    pub prompt: DropPrompt,
    /// `true` while any request is outstanding; the trigger is disabled.
    pub busy: bool,
    /// Error area contents.
    pub error: Option<String>,
    /// Schema lines, when a result is visible.
    pub summary: Option<SchemaSummary>,
    /// Preview table, when a visible result has at least one row.
    pub table: Option<TableView>,
}

impl PageView {
    /// Project `session` into a render model.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let prompt = session
            .file()
            .map_or(DropPrompt::Empty, |f| DropPrompt::Selected(f.name().to_owned()));
        let visible = session.upload().visible_result();
        Self {
            prompt,
            busy: session.is_busy(),
            error: session.error_message(),
            summary: visible.map(|r| SchemaSummary::from_schema(&r.schema)),
            table: visible.and_then(|r| TableView::from_result(r)),
        }
    }

    /// Label for the upload trigger.
    #[must_use]
    pub const fn trigger_label(&self) -> &'static str {
        if self.busy {
            messages::TRIGGER_BUSY
        } else {
            messages::TRIGGER_IDLE
        }
    }
}
