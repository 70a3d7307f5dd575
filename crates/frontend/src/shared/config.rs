//! Client configuration.
//!
//! The backend origin is baked in at build time from `INVENTARIO_API_URL`
//! (e.g. `INVENTARIO_API_URL=https://api.example.com trunk build`).

use once_cell::sync::Lazy;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash
    pub api_base: String,
    /// Purchase list refresh period
    pub poll_interval_ms: u32,
    /// How long a toast stays on screen
    pub toast_ttl_ms: u32,
    /// Bounds of the "Límite" filter
    pub min_limit: u32,
    pub max_limit: u32,
}

impl AppConfig {
    pub fn from_origin(origin: Option<&str>) -> Self {
        let api_base = origin
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base,
            poll_interval_ms: 5_000,
            toast_ttl_ms: 4_000,
            min_limit: 1,
            max_limit: 100,
        }
    }

    /// Clamp a user-entered limit into the allowed range.
    pub fn clamp_limit(&self, limit: u32) -> u32 {
        limit.clamp(self.min_limit, self.max_limit)
    }
}

static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::from_origin(option_env!("INVENTARIO_API_URL")));

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend() {
        assert_eq!(AppConfig::from_origin(None).api_base, "http://localhost:8000");
        assert_eq!(AppConfig::from_origin(Some("  ")).api_base, "http://localhost:8000");
    }

    #[test]
    fn strips_trailing_slash() {
        let cfg = AppConfig::from_origin(Some("https://inventario.example.com/"));
        assert_eq!(cfg.api_base, "https://inventario.example.com");
    }

    #[test]
    fn clamps_limit() {
        let cfg = AppConfig::from_origin(None);
        assert_eq!(cfg.clamp_limit(0), 1);
        assert_eq!(cfg.clamp_limit(3), 3);
        assert_eq!(cfg.clamp_limit(500), 100);
        assert_eq!(cfg.poll_interval_ms, 5_000);
    }
}
