//! Surge External Group rendering

/// Render the `[Proxy Group]` section header
///
/// Group lines rendered by `render_group_line` append directly below it.
pub fn render_section_header() -> String {
    "[Proxy Group]\n".to_string()
}

/// Render the external-group line for a single entry
///
/// The policy path is the converted URL, so Surge polls the conversion
/// endpoint rather than the raw subscription.
pub fn render_group_line(identifier: &str, converted_url: &str) -> String {
    format!("{} = select, policy-path={}\n", identifier, converted_url)
}
