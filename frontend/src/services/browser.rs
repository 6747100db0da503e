//! Browser capabilities used by the preview modal.
//!
//! Components talk to [`BrowserShell`] instead of `web_sys` directly, so
//! the download and new-tab actions can be exercised without a browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement};

use crate::config::{NEW_TAB_FEATURES, NEW_TAB_TARGET};
use crate::{AppError, AppResult, DocumentReference};

/// Side effects the browser performs on our behalf.
pub trait BrowserShell {
    /// Ask the browser to download `href`, suggesting `filename`.
    fn trigger_download(&self, href: &str, filename: &str) -> AppResult<()>;

    /// Open `url` in a new browsing context with no reference back to us.
    fn open_detached(&self, url: &str) -> AppResult<()>;
}

/// [`BrowserShell`] backed by the real `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebShell;

impl BrowserShell for WebShell {
    fn trigger_download(&self, href: &str, filename: &str) -> AppResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Dom("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| AppError::Dom("no body".to_string()))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| AppError::Dom(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| AppError::Download("created element is not an anchor".to_string()))?;
        anchor.set_href(href);
        anchor.set_download(filename);

        // Removed from <body> when the guard drops, whatever happens next
        let attached = AttachedAnchor::attach(body, anchor)?;
        attached.anchor.click();

        Ok(())
    }

    fn open_detached(&self, url: &str) -> AppResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Dom("no window".to_string()))?;

        let request = OpenRequest::detached(url);

        // With `noopener` the browser returns null even on success
        window
            .open_with_url_and_target_and_features(request.url, request.target, request.features)
            .map_err(|e| AppError::Navigation(js_error_message(&e)))?;

        Ok(())
    }
}

/// Arguments handed to `window.open`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpenRequest<'a> {
    pub url: &'a str,
    pub target: &'static str,
    pub features: &'static str,
}

impl<'a> OpenRequest<'a> {
    /// New tab, no opener, no referrer.
    pub fn detached(url: &'a str) -> Self {
        Self {
            url,
            target: NEW_TAB_TARGET,
            features: NEW_TAB_FEATURES,
        }
    }
}

/// Transient `<a>` node, detached from `<body>` on drop.
struct AttachedAnchor {
    body: HtmlElement,
    anchor: HtmlAnchorElement,
}

impl AttachedAnchor {
    fn attach(body: HtmlElement, anchor: HtmlAnchorElement) -> AppResult<Self> {
        body.append_child(&anchor)
            .map_err(|e| AppError::Download(js_error_message(&e)))?;
        Ok(Self { body, anchor })
    }
}

impl Drop for AttachedAnchor {
    fn drop(&mut self) {
        if let Err(e) = self.body.remove_child(&self.anchor) {
            log::warn!("Could not remove download link: {}", js_error_message(&e));
        }
    }
}

/// Extract a readable message from a thrown JS value.
fn js_error_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

/// Download the document under its derived file name.
pub fn download_document(shell: &impl BrowserShell, doc: &DocumentReference) -> AppResult<()> {
    let filename = doc.download_filename();
    shell.trigger_download(&doc.pdf_url, &filename)?;
    log::info!("⬇️ Download started: {}", filename);
    Ok(())
}

/// Open the document in a new, unrelated tab.
pub fn expand_document(shell: &impl BrowserShell, doc: &DocumentReference) -> AppResult<()> {
    shell.open_detached(&doc.pdf_url)?;
    log::info!("🗗 Opened in new tab: {}", doc.pdf_url);
    Ok(())
}
