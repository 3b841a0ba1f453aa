//! Application-level configuration constants.

use log::Level;

// Remote reference tables
pub const API_BASE_URL: &str = "http://med.netsermon.com";
pub const NUMERATOR_PATH: &str = "api/numerator/read.php";
pub const DENOMINATOR_PATH: &str = "api/denominator/read.php";

// Calculation
pub const RESULT_SIGNIFICANT_DIGITS: usize = 2;

// Logging
pub const LOG_LEVEL: Level = Level::Info;

// UI text
pub const APP_TITLE: &str = "P/F Ratio";
pub const SPO2_LABEL: &str = "SpO2:";
pub const O2_FLOW_LABEL: &str = "O2 Flow:";
pub const CALCULATE_LABEL: &str = "Calculate";
pub const RELOAD_LABEL: &str = "Reload";
pub const FOOTER_TEXT: &str =
    "Oxygen flow calculator helps you evaluate the oxygen meter number in your system";
pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong. Please try again";

/// Where the reference tables are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(API_BASE_URL)
    }
}
