//! Locating the analysis service from inside the page.
//!
//! A host page may point the client at a different service without a
//! rebuild by carrying
//! `<meta name="csvscope-api-base" content="https://...">`.

use csvscope_core::ClientConfig;
use csvscope_core::config::BASE_URL_META;

/// The `content` of the base-URL `<meta>` tag, if the page has one.
///
/// Returns `None` outside a browser, when the tag is missing, or when it
/// has no `content` attribute.
#[must_use]
pub fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{BASE_URL_META}\"]");
    let meta = document.query_selector(&selector).ok().flatten()?;
    meta.get_attribute("content")
}

/// Resolve the client config from the page's `<meta>` override, then
/// `build_time`, then the default.
#[must_use]
pub fn resolve_config(build_time: Option<&str>) -> ClientConfig {
    let runtime = meta_base_url();
    let config = ClientConfig::resolve(runtime.as_deref(), build_time);
    tracing::info!(
        base_url = config.base_url(),
        from_meta = runtime.is_some(),
        "analysis endpoint resolved"
    );
    config
}
