use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://apis.ccbp.in/ipl/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub initial_team: Option<String>,
    pub http_timeout: Option<Duration>,
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            initial_team: None,
            http_timeout: None,
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl AppConfig {
    /// Reads `IPL_*` variables. Call after `.env` files have been loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("IPL_API_BASE")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let initial_team = lookup("IPL_TEAM").and_then(non_empty);
        let http_timeout = lookup("IPL_HTTP_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let tick_ms = lookup("IPL_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(250)
            .max(50);

        Self {
            api_base,
            initial_team,
            http_timeout,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }
}

fn non_empty(val: String) -> Option<String> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
