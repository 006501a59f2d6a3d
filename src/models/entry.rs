use serde::Serialize;

/// One source URL enriched with its derived metadata
///
/// Entries are ephemeral: they are recomputed from the raw URL list on
/// every conversion call and never cached, so edits to the list can never
/// leave stale metadata behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedEntry {
    /// The URL exactly as supplied, including empty or malformed values
    pub source_url: String,
    /// Short label derived from the source URL's host, or a positional
    /// fallback when no host can be extracted
    pub identifier: String,
    /// Fully-qualified conversion-endpoint URL for this entry
    pub converted_url: String,
}
