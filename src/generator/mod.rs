//! The URL-to-configuration transformation engine
//!
//! Everything in this module is pure and synchronous: each operation is a
//! deterministic function of its arguments with no I/O and no shared state.

pub mod formats;
pub mod fragments;
pub mod identifier;
pub mod rewrite;

pub use fragments::{generate, GeneratedFragments};
pub use identifier::derive_identifier;
pub use rewrite::rewrite_url;

use crate::models::{ConvertedEntry, TargetFormat};

/// Enrich a raw URL list into the ordered entry list consumed by `generate`
///
/// Output length and order always match the input. Identifiers produced
/// here are collision-unaware; `generate` disambiguates them before any
/// rendering.
pub fn convert_entries(urls: &[String], origin: &str, target: TargetFormat) -> Vec<ConvertedEntry> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| ConvertedEntry {
            source_url: url.clone(),
            identifier: derive_identifier(url, index, target),
            converted_url: rewrite_url(origin, url, target),
        })
        .collect()
}
