//! Preview rows as an HTML table.

use csvscope_core::TableView;
use dioxus::prelude::*;

/// Props for the [`PreviewTable`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewTableProps {
    table: TableView,
}

/// Header row from the schema's columns, then one row per preview row.
///
/// Null cells render empty with a muted background.
#[component]
pub fn PreviewTable(props: PreviewTableProps) -> Element {
    let caption = props.table.caption();
    let TableView { header, rows } = props.table;

    rsx! {
        section { class: "panel",
            h2 { class: "panel__heading", "{caption}" }
            div { class: "table-scroll",
                table { class: "preview-table",
                    thead {
                        tr {
                            for column in header {
                                th { "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (i, row) in rows.into_iter().enumerate() {
                            tr { key: "{i}",
                                for cell in row {
                                    td {
                                        class: if cell.is_null() { "cell--null" },
                                        {cell.text().to_owned()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
