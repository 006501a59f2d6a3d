/// Default provider refresh interval in seconds
pub const DEFAULT_REFRESH_INTERVAL: u32 = 3600;

/// Default health-check interval in seconds
pub const DEFAULT_HEALTH_CHECK_INTERVAL: u32 = 600;

/// Default health-check probe URL
pub const DEFAULT_HEALTH_CHECK_URL: &str = "http://www.gstatic.com/generate_204";

/// Tunable constants for rendered fragments
///
/// Callers may override any subset; `Default` carries the stock values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentConfig {
    /// Interval in seconds between provider refreshes
    pub refresh_interval: u32,
    /// Interval in seconds between health checks
    pub health_check_interval: u32,
    /// URL probed by the health check
    pub health_check_url: String,
}

impl Default for FragmentConfig {
    fn default() -> Self {
        FragmentConfig {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            health_check_interval: DEFAULT_HEALTH_CHECK_INTERVAL,
            health_check_url: DEFAULT_HEALTH_CHECK_URL.to_string(),
        }
    }
}
