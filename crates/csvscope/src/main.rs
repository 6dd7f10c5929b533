use std::rc::Rc;

use csvscope_core::messages::PAGE_TITLE;
use csvscope_core::{ClientError, PageView, SelectedFile, Session};
use csvscope_io::{DropZone, PreviewTable, SchemaPanel, UploadButton, UploadClient, endpoint};
use dioxus::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("logging unavailable: {e}").into());
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Holds the [`Session`] in a signal and wires the drop zone and upload
/// button to it. Everything below the controls is rendered from a
/// [`PageView`] projection of the session.
fn app() -> Element {
    let mut session = use_signal(Session::new);
    let client = use_hook(|| {
        Rc::new(UploadClient::new(endpoint::resolve_config(option_env!(
            "CSVSCOPE_API_BASE_URL"
        ))))
    });

    // --- Selection handlers ---
    let on_select = move |file: SelectedFile| {
        session.write().select(file);
    };
    let on_reject = move |error: ClientError| {
        session.write().reject(error);
    };

    // --- Upload handler ---
    // The session hands out a ticket per upload; `finish` drops the
    // outcome if the ticket is no longer current.
    let on_upload = move |()| {
        let Ok((ticket, file)) = session.write().begin_upload() else {
            return;
        };
        let client = Rc::clone(&client);
        spawn(async move {
            let outcome = client.upload(&file).await;
            session.write().finish(ticket, outcome);
        });
    };

    let page = PageView::from_session(&session.read());

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }
        document::Title { "{PAGE_TITLE}" }

        main { class: "page",
            header {
                h1 { "{PAGE_TITLE}" }
            }

            DropZone {
                prompt: page.prompt.clone(),
                on_select: on_select,
                on_reject: on_reject,
            }

            UploadButton {
                label: page.trigger_label(),
                busy: page.busy,
                on_click: on_upload,
            }

            if let Some(ref err) = page.error {
                p { class: "error", role: "alert", "{err}" }
            }

            if let Some(summary) = page.summary.clone() {
                SchemaPanel { summary }
            }

            if let Some(table) = page.table.clone() {
                PreviewTable { table }
            }
        }
    }
}
