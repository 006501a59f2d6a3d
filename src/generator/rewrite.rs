//! Source URL rewriting against the conversion endpoint

use crate::models::TargetFormat;
use crate::utils::url::url_encode;

/// Path of the conversion endpoint relative to its origin
pub const CONVERT_PATH: &str = "/api/convert";

/// Build the externally-fetchable converted URL for a source URL
///
/// # Arguments
/// * `origin` - Scheme-and-host prefix of the serving host; an empty string
///   yields a root-relative path
/// * `source_url` - The subscription URL, embedded opaquely as a query value
/// * `target` - Output format requested from the conversion endpoint
///
/// The source URL is percent-encoded and never validated or dereferenced;
/// the conversion endpoint behind the returned URL does the actual fetch.
pub fn rewrite_url(origin: &str, source_url: &str, target: TargetFormat) -> String {
    format!(
        "{}{}?url={}&target={}",
        origin,
        CONVERT_PATH,
        url_encode(source_url),
        target.as_str()
    )
}
