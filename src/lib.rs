//! Detects CDN references in documents and checks whether the versions they
//! pin are still the latest ones published upstream.

pub mod check;
pub mod config;
pub mod document;
pub mod logging;
pub mod provider;
pub mod report;
pub mod version;
