//! UI Components for the legal document application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and feature list
//! - [`LegalDisclaimer`] - Disclaimer with policy document links
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DocumentUpload`] - Document drop target and file picker
//! - [`DocumentPreviewModal`] - Overlay with embedded viewer, download and expand

mod hero;
mod upload;
mod preview_modal;
mod disclaimer;
mod footer;

pub use hero::*;
pub use upload::*;
pub use preview_modal::*;
pub use disclaimer::*;
pub use footer::*;
