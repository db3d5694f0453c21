//! Frontend Configuration
//!
//! API location and UI constants.

/// Fallback when neither the page nor the build names an API
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// `<meta name="inventory-api-url" content="...">` overrides the build default
const API_URL_META: &str = "inventory-api-url";

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "access_token";
/// localStorage key holding the signed-in role
pub const USER_TYPE_KEY: &str = "user_type";

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_CHOICES: &[usize] = &[10, 25, 50];

/// How long a toast stays on screen
pub const TOAST_MILLIS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve from the page meta tag, then `INVENTORY_API_URL` at build time
    pub fn load() -> Self {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", API_URL_META)).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        Self::resolve(from_meta.as_deref(), option_env!("INVENTORY_API_URL"))
    }

    pub fn resolve(meta: Option<&str>, build_env: Option<&str>) -> Self {
        let raw = [meta, build_env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }

    /// Join an endpoint path (leading slash optional) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wins_over_build_env() {
        let cfg = ApiConfig::resolve(Some("https://school.example/api/"), Some("http://other"));
        assert_eq!(cfg.base_url, "https://school.example/api");
    }

    #[test]
    fn test_blank_meta_falls_through() {
        let cfg = ApiConfig::resolve(Some("  "), None);
        assert_eq!(cfg.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_url_join() {
        let cfg = ApiConfig::resolve(None, Some("http://host/api"));
        assert_eq!(cfg.url("/inventory"), "http://host/api/inventory");
        assert_eq!(cfg.url("backups/3/download"), "http://host/api/backups/3/download");
    }
}
