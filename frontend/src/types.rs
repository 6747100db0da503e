//! Common types used across the frontend application.
//!
//! This module centralizes type definitions and the pure presentation
//! logic behind the components, so it can be tested without a browser.
//!
//! # Categories
//!
//! - **Upload Types** - visual state, document kind, drag events
//! - **Document Types** - the document shown by the preview modal
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{DOWNLOAD_EXTENSION, VIEWER_FRAGMENT};

// =============================================================================
// Upload Types
// =============================================================================

/// What the upload widget currently shows.
///
/// Derived from two inputs only: whether a file was recorded locally,
/// and the caller's processing flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadVisual {
    /// Nothing selected yet: drag-and-drop prompt
    Prompt,
    /// File recorded, caller idle
    Ready,
    /// File recorded, caller processing it
    Processing,
}

impl UploadVisual {
    /// Map `(has_file, is_processing)` to a presentation.
    ///
    /// The processing flag has no visible effect without a file.
    pub fn from_flags(has_file: bool, is_processing: bool) -> Self {
        match (has_file, is_processing) {
            (false, _) => UploadVisual::Prompt,
            (true, false) => UploadVisual::Ready,
            (true, true) => UploadVisual::Processing,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadVisual::Prompt => "upload-prompt",
            UploadVisual::Ready => "upload-ready",
            UploadVisual::Processing => "upload-processing",
        }
    }

    /// Get emoji shown in the status badge.
    pub fn icon(&self) -> &'static str {
        match self {
            UploadVisual::Prompt => "☁️",
            UploadVisual::Ready => "✅",
            UploadVisual::Processing => "🧠",
        }
    }

    /// Status line under the file name (empty for the prompt).
    pub fn status_text(&self) -> &'static str {
        match self {
            UploadVisual::Prompt => "",
            UploadVisual::Ready => "Ready for analysis",
            UploadVisual::Processing => "Uploading & Analyzing...",
        }
    }
}

/// Kind of document the user is about to upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF scans, images, photos
    #[default]
    Scanned,
    /// Digital PDFs, Word files, text
    Electronic,
}

impl DocumentKind {
    /// Both kinds, in selector order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Scanned, DocumentKind::Electronic];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Scanned => "Scanned Document",
            DocumentKind::Electronic => "Electronic Document",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            DocumentKind::Scanned => "PDF scans, images, photos",
            DocumentKind::Electronic => "Digital PDFs, Word files, text",
        }
    }

    /// Guidance sentence shown in the empty prompt.
    pub fn prompt(&self) -> &'static str {
        match self {
            DocumentKind::Scanned => {
                "Drag and drop your scanned document or click to browse. \
                 We'll extract text from images."
            }
            DocumentKind::Electronic => {
                "Drag and drop your electronic file or click to browse. \
                 We'll analyze the digital content."
            }
        }
    }

    /// Subtitle of the "Drop to upload" overlay.
    pub fn drop_subtitle(&self) -> String {
        let name = match self {
            DocumentKind::Scanned => "scanned",
            DocumentKind::Electronic => "electronic",
        };
        format!("We'll securely process your {} document", name)
    }

    /// CSS modifier for the selector card.
    pub fn css_class(&self) -> &'static str {
        match self {
            DocumentKind::Scanned => "kind-scanned",
            DocumentKind::Electronic => "kind-electronic",
        }
    }
}

/// The four native drag-and-drop events the drop target listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    /// Parse a DOM event type name (`"dragenter"`, ...).
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragEventKind::Enter),
            "dragover" => Some(DragEventKind::Over),
            "dragleave" => Some(DragEventKind::Leave),
            "drop" => Some(DragEventKind::Drop),
            _ => None,
        }
    }

    /// Drag highlight state after this event.
    pub fn activates(&self) -> bool {
        matches!(self, DragEventKind::Enter | DragEventKind::Over)
    }
}

// =============================================================================
// Document Types
// =============================================================================

/// A document shown by the preview modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    /// Display title
    pub title: String,
    /// Where the document lives
    pub pdf_url: String,
}

impl DocumentReference {
    pub fn new(title: impl Into<String>, pdf_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pdf_url: pdf_url.into(),
        }
    }

    /// Name suggested to the browser when downloading.
    ///
    /// Each run of whitespace becomes one underscore; `.pdf` is always
    /// appended, whatever the resource really is. Whitespace is the
    /// ECMAScript `\s` set.
    pub fn download_filename(&self) -> String {
        let mut name = String::with_capacity(self.title.len() + DOWNLOAD_EXTENSION.len());
        let mut in_whitespace = false;
        for c in self.title.chars() {
            if is_filename_whitespace(c) {
                if !in_whitespace {
                    name.push('_');
                }
                in_whitespace = true;
            } else {
                name.push(c);
                in_whitespace = false;
            }
        }
        name.push_str(DOWNLOAD_EXTENSION);
        name
    }

    /// Source for the embedded viewer.
    pub fn viewer_src(&self) -> String {
        format!("{}{}", self.pdf_url, VIEWER_FRAGMENT)
    }
}

/// ECMAScript `\s`: Unicode `White_Space` plus U+FEFF, minus U+0085.
fn is_filename_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only browser interactions can fail; components log these and move on.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Window, document or body unavailable, or a DOM call threw.
    Dom(String),
    /// Download could not be started.
    Download(String),
    /// New browsing context could not be opened.
    Navigation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
            AppError::Navigation(msg) => write!(f, "Navigation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_table() {
        assert_eq!(UploadVisual::from_flags(false, false), UploadVisual::Prompt);
        assert_eq!(UploadVisual::from_flags(true, false), UploadVisual::Ready);
        assert_eq!(UploadVisual::from_flags(true, true), UploadVisual::Processing);
        // Processing alone keeps the prompt
        assert_eq!(UploadVisual::from_flags(false, true), UploadVisual::Prompt);
    }

    #[test]
    fn test_visual_styling_is_distinct() {
        let classes = [
            UploadVisual::Prompt.css_class(),
            UploadVisual::Ready.css_class(),
            UploadVisual::Processing.css_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
        assert_eq!(UploadVisual::Prompt.status_text(), "");
    }

    #[test]
    fn test_drag_event_kinds() {
        assert_eq!(DragEventKind::from_event_type("dragenter"), Some(DragEventKind::Enter));
        assert_eq!(DragEventKind::from_event_type("dragover"), Some(DragEventKind::Over));
        assert_eq!(DragEventKind::from_event_type("dragleave"), Some(DragEventKind::Leave));
        assert_eq!(DragEventKind::from_event_type("drop"), Some(DragEventKind::Drop));
        assert_eq!(DragEventKind::from_event_type("click"), None);

        assert!(DragEventKind::Enter.activates());
        assert!(DragEventKind::Over.activates());
        assert!(!DragEventKind::Leave.activates());
        assert!(!DragEventKind::Drop.activates());
    }

    #[test]
    fn test_document_kind_serde() {
        assert_eq!(DocumentKind::default(), DocumentKind::Scanned);
        assert_eq!(serde_json::to_string(&DocumentKind::Electronic).unwrap(), "\"electronic\"");

        let kind: DocumentKind = serde_json::from_str("\"scanned\"").unwrap();
        assert_eq!(kind, DocumentKind::Scanned);
        assert!(DocumentKind::Electronic.drop_subtitle().contains("electronic"));
    }

    #[test]
    fn test_download_filename() {
        let doc = DocumentReference::new("NDA Agreement", "https://example.com/nda");
        assert_eq!(doc.download_filename(), "NDA_Agreement.pdf");
    }

    #[test]
    fn test_download_filename_collapses_whitespace_runs() {
        let doc = DocumentReference::new("Terms  of\tService", "/tos.pdf");
        assert_eq!(doc.download_filename(), "Terms_of_Service.pdf");

        let doc = DocumentReference::new(" Lease ", "/lease");
        assert_eq!(doc.download_filename(), "_Lease_.pdf");

        // Suffix is unconditional
        let doc = DocumentReference::new("report.pdf", "/r");
        assert_eq!(doc.download_filename(), "report.pdf.pdf");
    }

    #[test]
    fn test_download_filename_whitespace_set() {
        // Byte order mark counts, next line does not
        let doc = DocumentReference::new("NDA\u{FEFF}Agreement", "/nda");
        assert_eq!(doc.download_filename(), "NDA_Agreement.pdf");

        let doc = DocumentReference::new("NDA\u{85}Agreement", "/nda");
        assert_eq!(doc.download_filename(), "NDA\u{85}Agreement.pdf");

        let doc = DocumentReference::new("NDA\u{A0}\u{3000}Agreement", "/nda");
        assert_eq!(doc.download_filename(), "NDA_Agreement.pdf");
    }

    #[test]
    fn test_viewer_src() {
        let doc = DocumentReference::new("Privacy Policy", "/docs/privacy.pdf");
        assert_eq!(
            doc.viewer_src(),
            "/docs/privacy.pdf#toolbar=1&navpanes=1&scrollbar=1"
        );
    }

    #[test]
    fn test_document_reference_deserialization() {
        let json = r#"{ "title": "Privacy Policy", "pdfUrl": "/docs/privacy.pdf" }"#;
        let doc: DocumentReference = serde_json::from_str(json).unwrap();
        assert_eq!(doc, DocumentReference::new("Privacy Policy", "/docs/privacy.pdf"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Download("no body".to_string());
        assert_eq!(err.to_string(), "Download error: no body");
    }
}
