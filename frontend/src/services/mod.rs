//! Browser services.
//!
//! This module wraps the ambient browser capabilities the components
//! rely on:
//!
//! - [`browser`] - anchor-based download and new-tab navigation

pub mod browser;

pub use browser::*;
