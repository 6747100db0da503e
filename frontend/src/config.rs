//! Application configuration.
//!
//! Centralized configuration for the legal document widgets.
//! Everything here is compile-time; there is no runtime config source.

/// Application name, used for the page title.
pub const APP_NAME: &str = "Legal Docs";

/// Console log level installed at start-up.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// `accept` hint for the file picker.
///
/// Advisory only: the browser may filter the dialog, nothing else checks it.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt";

/// Human-readable list of the formats in [`ACCEPTED_EXTENSIONS`].
pub const ACCEPTED_FORMATS_LABEL: &str = "PDF, DOC, DOCX, TXT";

/// Advisory upload size (in bytes).
///
/// 10 MB. Exceeding it only produces a console warning.
pub const MAX_FILE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// Label shown next to the advisory size.
pub const MAX_FILE_SIZE_LABEL: &str = "Max 10MB";

/// Fragment appended to a document URL for the embedded PDF viewer.
pub const VIEWER_FRAGMENT: &str = "#toolbar=1&navpanes=1&scrollbar=1";

/// Extension appended to every downloaded document name.
pub const DOWNLOAD_EXTENSION: &str = ".pdf";

/// Window features for "open in new tab": no opener, no referrer.
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

/// Browsing context target for "open in new tab".
pub const NEW_TAB_TARGET: &str = "_blank";

/// Simulated analysis duration in the demo shell (ms).
pub const ANALYSIS_SIMULATION_MS: u32 = 3000;

/// Legal documents linked from the disclaimer in the demo shell.
pub const PRIVACY_POLICY_URL: &str = "/docs/privacy-policy.pdf";
pub const TERMS_OF_SERVICE_URL: &str = "/docs/terms-of-service.pdf";

/// Shown under the preview viewer.
pub const PREVIEW_DISCLAIMER: &str = "This document is for informational purposes only. \
    Please consult with a legal professional for advice specific to your situation.";
