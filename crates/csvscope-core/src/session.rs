//! The page's state machine.
//!
//! A [`Session`] owns the selected file and the [`UploadState`]. All
//! transitions go through its methods:
//!
//! ```text
//!            select()                begin_upload()
//!   * ─────────────────► Idle ───────────────────────► InFlight
//!                         ▲                           │        │
//!                select() │              finish(Ok)   │        │ finish(Err)
//!                         │                           ▼        ▼
//!                         └──────────────── Succeeded      Failed
//!                                              │              │
//!                                              └─ begin_upload() ─► InFlight
//! ```
//!
//! Only one request can be outstanding. Each one is identified by an
//! [`UploadTicket`]; [`Session::finish`] ignores outcomes whose ticket
//! is not the current in-flight one, so a response that arrives after a
//! timeout is discarded.
//!
//! Picking another file mid-upload clears the screen but not the
//! network: the old request is remembered as abandoned and the session
//! stays [busy](Session::is_busy) until its outcome reaches `finish`.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::types::{AnalysisResult, ClientError, SelectedFile};

/// Identifies one call to [`Session::begin_upload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    /// The ticket's sequence number (starts at 1).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Where the current file is in its upload lifecycle.
///
/// `previous` carries the result of the last successful upload of the
/// *same* file, so that a retry (or a failed retry) keeps the earlier
/// preview on screen. It is always `None` right after a new selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    /// Nothing sent for the current selection (or nothing selected).
    #[default]
    Idle,
    /// A request is outstanding.
    InFlight {
        /// The ticket the outcome must carry to be applied.
        ticket: UploadTicket,
        /// Result still on screen from an earlier success.
        previous: Option<Rc<AnalysisResult>>,
    },
    /// The last request returned a valid analysis.
    Succeeded(Rc<AnalysisResult>),
    /// The last request failed.
    Failed {
        /// User-visible description of the failure.
        message: String,
        /// Result still on screen from an earlier success.
        previous: Option<Rc<AnalysisResult>>,
    },
}

impl UploadState {
    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// The result that should currently be rendered, if any.
    #[must_use]
    pub const fn visible_result(&self) -> Option<&Rc<AnalysisResult>> {
        match self {
            Self::Idle => None,
            Self::Succeeded(result) => Some(result),
            Self::InFlight { previous, .. } | Self::Failed { previous, .. } => previous.as_ref(),
        }
    }

    /// The failure message, if the last request failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn take_visible(&mut self) -> Option<Rc<AnalysisResult>> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Succeeded(result) => Some(result),
            Self::InFlight { previous, .. } | Self::Failed { previous, .. } => previous,
        }
    }
}

/// All state behind the upload page.
#[derive(Debug, Clone, Default)]
pub struct Session {
    file: Option<SelectedFile>,
    upload: UploadState,
    /// Local rejection (bad file type, nothing selected) shown until the
    /// next successful selection or upload attempt.
    notice: Option<ClientError>,
    /// Request left outstanding by a mid-upload selection. Its outcome
    /// is dropped, but no new upload may start until it arrives.
    abandoned: Option<UploadTicket>,
    last_ticket: u64,
}

impl Session {
    /// An empty session: no file, `Idle`, no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected file.
    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// The current upload state.
    #[must_use]
    pub const fn upload(&self) -> &UploadState {
        &self.upload
    }

    /// Returns `true` while any request is outstanding, including one
    /// abandoned by a newer selection.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.upload.is_in_flight() || self.abandoned.is_some()
    }

    /// The pending local rejection, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&ClientError> {
        self.notice.as_ref()
    }

    /// The message to show in the error area: a local rejection takes
    /// precedence over an upload failure.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.notice
            .as_ref()
            .map(ToString::to_string)
            .or_else(|| self.upload.failure().map(str::to_owned))
    }

    /// Replace the selected file with a freshly validated one.
    ///
    /// Discards any result, previous result, failure and notice, so a
    /// stale preview is never shown next to a new, unsubmitted file. An
    /// upload still in flight for the old file is abandoned: its outcome
    /// will be ignored by [`finish`](Self::finish), and the session stays
    /// busy until then.
    pub fn select(&mut self, file: SelectedFile) {
        debug!(name = file.name(), len = file.len(), "file selected");
        if let UploadState::InFlight { ticket, .. } = self.upload {
            debug!(ticket = ticket.get(), "abandoning in-flight upload");
            self.abandoned = Some(ticket);
        }
        self.file = Some(file);
        self.upload = UploadState::Idle;
        self.notice = None;
    }

    /// Record a rejected selection.
    ///
    /// The previously selected file (if any) and the upload state are
    /// left untouched.
    pub fn reject(&mut self, error: ClientError) {
        debug!(%error, "selection rejected");
        self.notice = Some(error);
    }

    /// Start an upload of the selected file.
    ///
    /// On success the session is `InFlight` and the caller must perform
    /// exactly one request for the returned file, then report its
    /// outcome with [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// - [`ClientError::NoFileSelected`] if nothing is selected; this is
    ///   also recorded as the session's notice.
    /// - [`ClientError::UploadInProgress`] if a request is already
    ///   outstanding, abandoned or not; the session is unchanged.
    pub fn begin_upload(&mut self) -> Result<(UploadTicket, SelectedFile), ClientError> {
        if self.is_busy() {
            debug!("upload already in flight; ignoring trigger");
            return Err(ClientError::UploadInProgress);
        }
        let Some(file) = self.file.clone() else {
            self.notice = Some(ClientError::NoFileSelected);
            return Err(ClientError::NoFileSelected);
        };

        self.last_ticket += 1;
        let ticket = UploadTicket(self.last_ticket);
        let previous = self.upload.take_visible();
        self.upload = UploadState::InFlight { ticket, previous };
        self.notice = None;
        info!(ticket = ticket.get(), name = file.name(), "upload started");
        Ok((ticket, file))
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` if that request is no longer the one in flight:
    /// it was abandoned by a new selection (which releases the busy
    /// state and nothing else), or its outcome was already applied
    /// (e.g. a timeout beat the response).
    pub fn finish(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<AnalysisResult, ClientError>,
    ) -> bool {
        if self.abandoned == Some(ticket) {
            debug!(
                ticket = ticket.get(),
                ok = outcome.is_ok(),
                "abandoned upload settled; outcome dropped"
            );
            self.abandoned = None;
            return false;
        }
        let UploadState::InFlight { ticket: current, .. } = &self.upload else {
            warn!(ticket = ticket.get(), "discarding outcome: no upload in flight");
            return false;
        };
        if *current != ticket {
            warn!(
                ticket = ticket.get(),
                current = current.get(),
                "discarding outcome of superseded upload"
            );
            return false;
        }

        let previous = self.upload.take_visible();
        self.upload = match outcome {
            Ok(result) => {
                info!(
                    ticket = ticket.get(),
                    columns = result.schema.columns.len(),
                    rows = result.preview.len(),
                    "upload succeeded"
                );
                UploadState::Succeeded(Rc::new(result))
            }
            Err(error) => {
                warn!(
                    ticket = ticket.get(),
                    %error,
                    retryable = error.is_retryable(),
                    "upload failed"
                );
                UploadState::Failed {
                    message: error.to_string(),
                    previous,
                }
            }
        };
        true
    }
}
