//! Identifier derivation from source URLs

use url::Url;

use crate::models::TargetFormat;

/// Derive a short identifier from a source URL's host
///
/// # Arguments
/// * `source_url` - The subscription URL as typed by the user
/// * `index` - Position of the URL in the caller's list, used for the fallback
/// * `target` - Output format, which selects the fallback prefix
///
/// # Returns
/// * The URL's host component, or `provider{index+1}` / `egroup{index+1}`
///   when the URL cannot be parsed or has no host
///
/// Parse failure is a normal outcome here, not an error: empty or malformed
/// input always yields the index-qualified fallback, so two unparseable
/// entries never share a name.
pub fn derive_identifier(source_url: &str, index: usize, target: TargetFormat) -> String {
    match Url::parse(source_url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => fallback_identifier(index, target),
        },
        Err(_) => fallback_identifier(index, target),
    }
}

fn fallback_identifier(index: usize, target: TargetFormat) -> String {
    format!("{}{}", target.fallback_prefix(), index + 1)
}
