//! Dataset schema summary.

use csvscope_core::SchemaSummary;
use csvscope_core::messages::{COLUMNS_LABEL, NULL_COUNTS_LABEL, SCHEMA_HEADING, TYPES_LABEL};
use dioxus::prelude::*;

/// Props for the [`SchemaPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SchemaPanelProps {
    summary: SchemaSummary,
}

/// Three labelled lines: column names, column types, and null counts.
#[component]
pub fn SchemaPanel(props: SchemaPanelProps) -> Element {
    let SchemaSummary {
        columns,
        types,
        null_counts,
    } = props.summary;

    rsx! {
        section { class: "panel",
            h2 { class: "panel__heading", "{SCHEMA_HEADING}" }
            p { strong { "{COLUMNS_LABEL} " } "{columns}" }
            p { strong { "{TYPES_LABEL} " } "{types}" }
            p { strong { "{NULL_COUNTS_LABEL} " } "{null_counts}" }
        }
    }
}
