//! Sending a selected file to the analysis service.
//!
//! One upload is one `multipart/form-data` POST raced against the
//! upload deadline. If the deadline wins, the request is aborted through
//! its `AbortController` and the call resolves to
//! [`ClientError::TimedOut`].
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use csvscope_core::config::{self, UPLOAD_FIELD};
use csvscope_core::response::{from_reply, is_success};
use csvscope_core::{AnalysisResult, ClientConfig, ClientError, SelectedFile, deadline};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, BlobPropertyBag, FormData};
use web_time::Instant;

/// Content type attached to the uploaded blob.
const CSV_MIME: &str = "text/csv";

/// Posts files to the analysis endpoint described by a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadClient {
    config: ClientConfig,
}

impl UploadClient {
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Upload `file` and decode the service's analysis of it.
    ///
    /// Sends exactly one request. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`ClientError::TimedOut`] if no response arrives within
    ///   [`csvscope_core::UPLOAD_TIMEOUT`].
    /// - [`ClientError::Status`] for a non-2xx response.
    /// - [`ClientError::Network`] if the request could not be built or
    ///   sent, or the body could not be read.
    /// - [`ClientError::MalformedResponse`] for a 2xx body that is not a
    ///   valid analysis result.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn upload(&self, file: &SelectedFile) -> Result<AnalysisResult, ClientError> {
        let url = self.config.upload_url();
        let form = build_form(file)?;
        let controller = AbortController::new().map_err(js_error)?;
        let request = Request::post(&url)
            .abort_signal(Some(&controller.signal()))
            .body(form)
            .map_err(|e| ClientError::Network(e.to_string()))?;

        tracing::info!(%url, file = file.name(), bytes = file.len(), "uploading");
        let start = Instant::now();
        let timer = TimeoutFuture::new(config::upload_timeout_millis());
        let outcome = deadline::race(exchange(request), timer)
            .await
            .or_elapsed(|| {
                controller.abort();
                Err(ClientError::TimedOut)
            });

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(elapsed_ms, ok = outcome.is_ok(), "upload exchange finished");
        outcome
    }
}

/// Send `request` and turn the reply into an analysis result.
#[allow(clippy::future_not_send)] // WASM is single-threaded
async fn exchange(request: Request) -> Result<AnalysisResult, ClientError> {
    let reply = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    let code = reply.status();
    // An error body is never shown, so it is not read.
    let body = if is_success(code) {
        reply
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?
    } else {
        String::new()
    };
    from_reply(code, &reply.status_text(), &body)
}

/// Wrap the file's bytes in a `Blob` under the [`UPLOAD_FIELD`] form
/// field, keeping the original file name.
fn build_form(file: &SelectedFile) -> Result<FormData, ClientError> {
    let array = js_sys::Uint8Array::from(file.bytes());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(CSV_MIME);
    let blob =
        web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, file.name())
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::Network(format!("{value:?}"))
}
