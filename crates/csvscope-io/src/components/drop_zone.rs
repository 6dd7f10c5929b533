//! CSV drop zone with drag-and-drop and file picker.

use csvscope_core::{ClientError, DropPrompt, SelectedFile, validate};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// What the zone currently says.
    prompt: DropPrompt,
    /// Called with the file's name and bytes once it passes validation
    /// and has been read.
    on_select: EventHandler<SelectedFile>,
    /// Called when the candidate is not a `.csv` file or cannot be read.
    on_reject: EventHandler<ClientError>,
}

/// A drag-and-drop zone that doubles as a `.csv` file picker.
///
/// Only the first file of a multi-file drop or pick is considered.
/// Selection stays enabled during an upload. Picking a new file clears
/// the page; the upload button stays disabled until the abandoned
/// request settles.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_select = props.on_select;
    let on_reject = props.on_reject;

    // Shared by the picker and the drop target.
    let process_files = move |files: Vec<FileData>| async move {
        let first = files.into_iter().next();
        let name = first.as_ref().map(FileData::name);
        if let Err(e) = validate(name.as_deref()) {
            tracing::debug!(candidate = ?name, "rejected non-csv file");
            on_reject.call(e);
            return;
        }
        let (Some(file), Some(name)) = (first, name) else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => on_select.call(SelectedFile::new(name, bytes.to_vec())),
            Err(e) => on_reject.call(ClientError::ReadFile(e.to_string())),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let state_class = if dragging() {
        "drop-zone drop-zone--active"
    } else {
        "drop-zone"
    };
    let text = props.prompt.text();
    let selected = matches!(props.prompt, DropPrompt::Selected(_));

    rsx! {
        label {
            class: "{state_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            Icon { icon: LdUpload, width: 32, height: 32, class: "drop-zone__icon" }

            p {
                class: if selected { "drop-zone__text drop-zone__text--selected" } else { "drop-zone__text" },
                "{text}"
            }

            input {
                r#type: "file",
                accept: ".csv",
                class: "hidden",
                onchange: handle_files,
            }
        }
    }
}
