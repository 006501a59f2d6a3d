//! Clash proxy-provider / proxy-group rendering

use crate::models::FragmentConfig;

/// Name of the select group that references every provider
pub const GROUP_NAME: &str = "UseProvider";

/// Render the group declaration and the `proxy-providers:` header
///
/// The `use:` list enumerates every disambiguated identifier; the group
/// keeps `DIRECT` as a fixed fallback member. Provider mappings rendered by
/// `render_provider` append directly below the trailing header line.
pub fn render_group(identifiers: &[String]) -> String {
    let mut output = String::new();
    output.push_str("proxy-groups:\n");
    output.push_str(&format!("  - name: {}\n", GROUP_NAME));
    output.push_str("    type: select\n");
    output.push_str("    use:\n");
    for identifier in identifiers {
        output.push_str(&format!("      - {}\n", identifier));
    }
    output.push_str("    proxies:\n");
    output.push_str("      - DIRECT\n");
    output.push('\n');
    output.push_str("proxy-providers:\n");
    output
}

/// Render the provider mapping for a single entry
pub fn render_provider(identifier: &str, converted_url: &str, config: &FragmentConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!("  {}:\n", identifier));
    output.push_str("    type: http\n");
    output.push_str(&format!("    url: {}\n", converted_url));
    output.push_str(&format!("    interval: {}\n", config.refresh_interval));
    output.push_str(&format!("    path: ./{}.yaml\n", identifier));
    output.push_str("    health-check:\n");
    output.push_str("      enable: true\n");
    output.push_str(&format!("      interval: {}\n", config.health_check_interval));
    output.push_str(&format!("      url: {}\n", config.health_check_url));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_group_lists_all_identifiers() {
        let identifiers = vec!["a.example".to_string(), "b.example".to_string()];
        let group = render_group(&identifiers);

        assert!(group.starts_with("proxy-groups:\n  - name: UseProvider\n    type: select\n"));
        assert!(group.contains("      - a.example\n"));
        assert!(group.contains("      - b.example\n"));
        assert!(group.contains("    proxies:\n      - DIRECT\n"));
        assert!(group.ends_with("proxy-providers:\n"));
    }

    #[test]
    fn test_render_provider_exact_shape() {
        let config = FragmentConfig::default();
        let provider = render_provider("a.example", "https://t.example/api/convert?url=x&target=clash", &config);
        assert_eq!(
            provider,
            "  a.example:\n    type: http\n    url: https://t.example/api/convert?url=x&target=clash\n    interval: 3600\n    path: ./a.example.yaml\n    health-check:\n      enable: true\n      interval: 600\n      url: http://www.gstatic.com/generate_204\n"
        );
    }
}
