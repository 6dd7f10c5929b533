//! Upload trigger button.

use dioxus::prelude::*;

/// Props for the [`UploadButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadButtonProps {
    /// Button text.
    label: &'static str,
    /// Disables the button while an upload is in flight.
    busy: bool,
    on_click: EventHandler<()>,
}

#[component]
pub fn UploadButton(props: UploadButtonProps) -> Element {
    let on_click = props.on_click;
    rsx! {
        button {
            class: "upload-button",
            disabled: props.busy,
            onclick: move |_| on_click.call(()),
            "{props.label}"
        }
    }
}
