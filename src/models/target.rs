/// The output format for a conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// Clash proxy-provider / proxy-group YAML syntax
    ClashProvider,
    /// Surge External Group INI syntax
    SurgeGroup,
}

impl TargetFormat {
    /// Convert string to target enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clash" => Some(TargetFormat::ClashProvider),
            "surge" => Some(TargetFormat::SurgeGroup),
            _ => None,
        }
    }

    /// Get the query token used by the conversion endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::ClashProvider => "clash",
            TargetFormat::SurgeGroup => "surge",
        }
    }

    /// Get the prefix used for fallback identifiers when a source URL
    /// has no usable host
    pub fn fallback_prefix(&self) -> &'static str {
        match self {
            TargetFormat::ClashProvider => "provider",
            TargetFormat::SurgeGroup => "egroup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TargetFormat::from_str("clash"), Some(TargetFormat::ClashProvider));
        assert_eq!(TargetFormat::from_str("CLASH"), Some(TargetFormat::ClashProvider));
        assert_eq!(TargetFormat::from_str("surge"), Some(TargetFormat::SurgeGroup));
        assert_eq!(TargetFormat::from_str("loon"), None);
        assert_eq!(TargetFormat::from_str(""), None);
    }

    #[test]
    fn test_round_trip() {
        for target in [TargetFormat::ClashProvider, TargetFormat::SurgeGroup] {
            assert_eq!(TargetFormat::from_str(target.as_str()), Some(target));
        }
    }
}
