//! Endpoint configuration and upload deadline.
//!
//! The analysis service's base URL differs per deployment, so it is
//! resolved at startup from (in order): a runtime override supplied by
//! the host page, a value baked in at build time, and finally the local
//! development default. The upload deadline is fixed.

use std::time::Duration;

/// How long an upload may wait for a response before it is aborted.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the analysis endpoint, relative to the base URL.
pub const UPLOAD_PATH: &str = "/upload-csv/";

/// Multipart field the endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// `name` of the `<meta>` tag a host page can use to override the base
/// URL at runtime.
pub const BASE_URL_META: &str = "csvscope-api-base";

/// [`UPLOAD_TIMEOUT`] in whole milliseconds, saturating at `u32::MAX`.
///
/// Browser timers take a `u32` millisecond count.
#[must_use]
pub fn upload_timeout_millis() -> u32 {
    u32::try_from(UPLOAD_TIMEOUT.as_millis()).unwrap_or(u32::MAX)
}

/// Where to send uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host, port and optional path prefix, without a trailing
    /// slash (e.g. `https://analysis.example.com/api`).
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Create a config for the given base URL.
    ///
    /// Surrounding whitespace and trailing slashes are removed so that
    /// joining with [`UPLOAD_PATH`] never produces `//`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).to_owned(),
        }
    }

    /// Pick the first usable base URL from the runtime override, the
    /// build-time value, and [`DEFAULT_BASE_URL`].
    ///
    /// Blank values are treated as absent.
    #[must_use]
    pub fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let chosen = [runtime, build_time]
            .into_iter()
            .flatten()
            .find(|candidate| !normalize_base_url(candidate).is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(chosen)
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the analysis endpoint.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!("{}{UPLOAD_PATH}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
