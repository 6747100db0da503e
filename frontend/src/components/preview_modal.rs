//! Modal overlay previewing a legal document.
//!
//! Visibility is owned by the caller: the modal only reads `is_open` and
//! asks to be closed through `on_close`.

use leptos::*;
use web_sys::MouseEvent;

use crate::config::PREVIEW_DISCLAIMER;
use crate::services::{download_document, expand_document, WebShell};
use crate::DocumentReference;

#[component]
pub fn DocumentPreviewModal(
    /// Whether the modal is rendered at all
    #[prop(into)]
    is_open: MaybeSignal<bool>,
    /// Backdrop click and the close button both end up here
    #[prop(into)]
    on_close: Callback<()>,
    /// Document title, also used for the download name
    #[prop(into)]
    title: MaybeSignal<String>,
    /// Document location
    #[prop(into)]
    pdf_url: MaybeSignal<String>,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let pdf_url = Signal::derive(move || pdf_url.get());
    let document = move || DocumentReference::new(title.get(), pdf_url.get());

    let on_download = move |_| {
        if let Err(e) = download_document(&WebShell, &document()) {
            log::error!("❌ {}", e);
        }
    };

    let on_expand = move |_| {
        if let Err(e) = expand_document(&WebShell, &document()) {
            log::error!("❌ {}", e);
        }
    };

    view! {
        <Show
            when=move || is_open.get()
            fallback=|| view! { }
        >
            <div class="modal-root">
                <div
                    class="modal-backdrop"
                    aria-label="Close modal"
                    on:click=move |_| on_close.call(())
                >
                    <div
                        class="modal-panel"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <div class="modal-header">
                            <div class="modal-heading">
                                <span class="modal-icon">"🔗"</span>
                                <h3 class="modal-title">{move || title.get()}</h3>
                            </div>
                            <div class="modal-actions">
                                <button class="btn btn-secondary" title="Download PDF" on:click=on_download>
                                    "⬇️ Download"
                                </button>
                                <button class="btn btn-secondary" title="Open in new tab" on:click=on_expand>
                                    "⛶ Expand"
                                </button>
                                <button
                                    class="btn btn-secondary btn-close"
                                    title="Close"
                                    on:click=move |_| on_close.call(())
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>

                        <div class="modal-viewer">
                            <iframe
                                src=move || document().viewer_src()
                                title=move || title.get()
                                class="document-viewer"
                            ></iframe>
                        </div>

                        <div class="modal-footer">
                            <p>{PREVIEW_DISCLAIMER}</p>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_modal(is_open: bool) -> String {
        leptos::ssr::render_to_string(move || {
            view! {
                <DocumentPreviewModal
                    is_open=is_open
                    on_close=|_: ()| {}
                    title="NDA Agreement"
                    pdf_url="/docs/nda.pdf"
                />
            }
        })
        .to_string()
    }

    fn strip_comments(html: &str) -> String {
        let mut out = String::new();
        let mut rest = html;
        while let Some(start) = rest.find("<!--") {
            out.push_str(&rest[..start]);
            match rest[start..].find("-->") {
                Some(end) => rest = &rest[start + end + 3..],
                None => return out,
            }
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let html = strip_comments(&render_modal(false));
        assert!(!html.contains('<'), "unexpected markup: {}", html);
        assert!(!html.contains("NDA Agreement"));
    }

    #[test]
    fn test_open_modal_nests_panel_inside_backdrop() {
        let html = render_modal(true);

        let backdrop = html.find("class=\"modal-backdrop\"").expect("backdrop rendered");
        let panel = html.find("class=\"modal-panel\"").expect("panel rendered");

        // Panel opens before the backdrop closes
        assert!(backdrop < panel);
        assert!(!html[backdrop..panel].contains("</div>"));
    }

    #[test]
    fn test_open_modal_shows_title_viewer_and_controls() {
        let html = render_modal(true);

        assert!(html.contains("NDA Agreement"));
        assert!(html.contains("/docs/nda.pdf#toolbar=1"));
        assert!(html.contains("title=\"Download PDF\""));
        assert!(html.contains("title=\"Open in new tab\""));
        assert!(html.contains("title=\"Close\""));
    }
}
