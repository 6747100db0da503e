//! Document upload component with drag & drop support.
//!
//! Records the chosen file for display and hands it to the caller.
//! Nothing is read, validated or sent from here.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::config::{ACCEPTED_EXTENSIONS, ACCEPTED_FORMATS_LABEL, MAX_FILE_SIZE, MAX_FILE_SIZE_LABEL};
use crate::{DocumentKind, DragEventKind, UploadVisual};

/// Counter for unique file input ids
static UPLOAD_INPUT_COUNTER: AtomicU64 = AtomicU64::new(0);

fn file_list_iter(list: FileList) -> impl Iterator<Item = File> {
    (0..list.length()).filter_map(move |i| list.get(i))
}

/// Record and forward the first file of a selection.
///
/// Empty selections are a no-op and return `false`.
pub(crate) fn select_first<F: Clone>(
    files: impl IntoIterator<Item = F>,
    record: impl FnOnce(F),
    notify: impl FnOnce(F),
) -> bool {
    match files.into_iter().next() {
        Some(file) => {
            record(file.clone());
            notify(file);
            true
        }
        None => false,
    }
}

/// [`select_first`], unless the caller is busy processing a file.
pub(crate) fn select_unless_busy<F: Clone>(
    busy: bool,
    files: impl IntoIterator<Item = F>,
    record: impl FnOnce(F),
    notify: impl FnOnce(F),
) -> bool {
    !busy && select_first(files, record, notify)
}

#[component]
pub fn DocumentUpload(
    /// Called once per selection with the chosen file
    #[prop(into)]
    on_upload: Callback<File>,
    /// Caller-owned processing flag; blocks new selections while set
    #[prop(into, optional)]
    is_analyzing: MaybeSignal<bool>,
    /// Reports document type changes
    #[prop(into, optional)]
    on_kind_change: Option<Callback<DocumentKind>>,
) -> impl IntoView {
    let input_id = format!(
        "file-upload-{}",
        UPLOAD_INPUT_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let (drag_active, set_drag_active) = create_signal(false);
    let (uploaded_file, set_uploaded_file) = create_signal(None::<File>);
    let (doc_kind, set_doc_kind) = create_signal(DocumentKind::default());

    let visual = move || {
        UploadVisual::from_flags(uploaded_file.with(Option::is_some), is_analyzing.get())
    };

    let select_files = move |files: Option<FileList>| {
        let busy = is_analyzing.get_untracked();
        let files = files.into_iter().flat_map(file_list_iter);
        let selected = select_unless_busy(
            busy,
            files,
            |file: File| {
                log::info!("📄 Document selected: {} ({} bytes)", file.name(), file.size());
                if file.size() > MAX_FILE_SIZE {
                    log::warn!("⚠️ {} is above the advisory {} limit", file.name(), MAX_FILE_SIZE_LABEL);
                }
                set_uploaded_file.set(Some(file));
            },
            |file| on_upload.call(file),
        );
        if busy {
            log::debug!("Selection ignored while analyzing");
        } else if !selected {
            log::debug!("Empty selection ignored");
        }
    };

    // dragenter / dragover / dragleave
    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(kind) = DragEventKind::from_event_type(&ev.type_()) {
            set_drag_active.set(kind.activates());
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        select_files(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        select_files(input.files());
        // Picking the same file again must fire `change`
        input.set_value("");
    };

    let choose_kind = move |kind: DocumentKind| {
        set_doc_kind.set(kind);
        if let Some(callback) = on_kind_change {
            callback.call(kind);
        }
    };

    let label_for = input_id.clone();

    view! {
        <div
            class=move || format!("upload-card {}", visual().css_class())
            class:dragging=move || drag_active.get()
            on:dragenter=on_drag
            on:dragover=on_drag
            on:dragleave=on_drag
            on:drop=on_drop
        >
            <div class="upload-body">
                <input
                    type="file"
                    id=input_id
                    class="hidden"
                    accept=ACCEPTED_EXTENSIONS
                    on:change=on_file_change
                    disabled=move || is_analyzing.get()
                />

                <div class="kind-selector">
                    <h3 class="kind-title">"📑 Document Type"</h3>
                    <div class="kind-options">
                        {DocumentKind::ALL
                            .into_iter()
                            .map(move |kind| view! {
                                <div
                                    class=format!("kind-option {}", kind.css_class())
                                    class:selected=move || doc_kind.get() == kind
                                    on:click=move |_| choose_kind(kind)
                                >
                                    <p class="kind-label">{kind.label()}</p>
                                    <p class="kind-hint">{kind.hint()}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="upload-area">
                    <div class=move || format!("upload-badge {}", visual().css_class())>
                        {move || visual().icon()}
                    </div>

                    {move || match uploaded_file.get() {
                        None => view! {
                            <div class="upload-prompt-text">
                                <h3>"Upload Legal Document"</h3>
                                <p>{move || doc_kind.get().prompt()}</p>
                                <label for=label_for.clone() class="upload-button">
                                    "⬆️ Choose File"
                                </label>
                            </div>
                        }.into_view(),
                        Some(file) => view! {
                            <div class="upload-file">
                                <div class="upload-file-name">"📄 " {file.name()}</div>
                                <p class=move || format!("upload-status {}", visual().css_class())>
                                    {move || visual().status_text()}
                                </p>
                            </div>
                        }.into_view(),
                    }}
                </div>

                <div class="upload-tags">
                    <span class="upload-tag">"📄 " {ACCEPTED_FORMATS_LABEL}</span>
                    <span class="upload-tag">"🔒 Secure"</span>
                    <span class="upload-tag">"⚡ " {MAX_FILE_SIZE_LABEL}</span>
                </div>
            </div>

            <Show
                when=move || drag_active.get()
                fallback=|| view! { }
            >
                <div class="drop-overlay">
                    <div class="drop-overlay-inner">
                        <div class="drop-overlay-icon">"⬆️"</div>
                        <p class="drop-overlay-title">"Drop to upload"</p>
                        <p class="drop-overlay-subtitle">{move || doc_kind.get().drop_subtitle()}</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_first_file_is_recorded_and_forwarded_once() {
        let recorded = RefCell::new(None);
        let notified = RefCell::new(Vec::new());

        let selected = select_first(
            vec!["contract.pdf", "annex.pdf"],
            |f| *recorded.borrow_mut() = Some(f),
            |f| notified.borrow_mut().push(f),
        );

        assert!(selected);
        assert_eq!(*recorded.borrow(), Some("contract.pdf"));
        assert_eq!(*notified.borrow(), vec!["contract.pdf"]);
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let recorded = Cell::new(false);
        let notified = Cell::new(0);

        let selected = select_first(
            Vec::<String>::new(),
            |_| recorded.set(true),
            |_| notified.set(notified.get() + 1),
        );

        assert!(!selected);
        assert!(!recorded.get());
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn test_repeated_selections_replace_the_recorded_file() {
        let mut slot = None;
        let calls = Cell::new(0);

        for batch in [vec!["lease.docx"], vec![], vec!["nda.pdf", "x.txt"]] {
            select_first(batch, |f| slot = Some(f), |_| calls.set(calls.get() + 1));
        }

        assert_eq!(slot, Some("nda.pdf"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_busy_selection_is_ignored() {
        let recorded = Cell::new(false);
        let notified = Cell::new(0);

        let selected = select_unless_busy(
            true,
            vec!["contract.pdf"],
            |_| recorded.set(true),
            |_| notified.set(notified.get() + 1),
        );

        assert!(!selected);
        assert!(!recorded.get());
        assert_eq!(notified.get(), 0);

        let selected = select_unless_busy(
            false,
            vec!["contract.pdf"],
            |_| recorded.set(true),
            |_| notified.set(notified.get() + 1),
        );

        assert!(selected);
        assert!(recorded.get());
        assert_eq!(notified.get(), 1);
    }

    fn render_upload(is_analyzing: bool) -> String {
        leptos::ssr::render_to_string(move || {
            view! { <DocumentUpload on_upload=|_: File| {} is_analyzing=is_analyzing/> }
        })
        .to_string()
    }

    fn file_input_tag(html: &str) -> &str {
        let start = html.find("<input").expect("file input rendered");
        let end = html[start..].find('>').expect("input tag closed");
        &html[start..start + end]
    }

    #[test]
    fn test_input_disabled_only_while_analyzing() {
        let busy = render_upload(true);
        assert!(file_input_tag(&busy).contains("disabled"));

        let idle = render_upload(false);
        assert!(!file_input_tag(&idle).contains("disabled"));
        assert!(file_input_tag(&idle).contains(ACCEPTED_EXTENSIONS));
    }

    #[test]
    fn test_prompt_shown_before_any_selection() {
        let html = render_upload(true);
        assert!(html.contains("Upload Legal Document"));
        assert!(html.contains("upload-prompt"));
        assert!(!html.contains("upload-processing"));
    }
}
