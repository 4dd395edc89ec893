//! Console configuration: embedded defaults plus `?api=` / `?route=` from the
//! page URL.

use contracts::shared::config::ConsoleConfig;
use std::collections::HashMap;

pub fn load_config() -> ConsoleConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = ConsoleConfig::embedded().with_query_overrides(&query_params(&search));
    log::debug!(
        "config: api prefix {}, default route {}",
        config.api.prefix,
        config.ui.default_route
    );
    config
}

fn query_params(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let params = query_params("?api=https%3A%2F%2Fcloud.example&route=%2Facl");
        assert_eq!(params.get("api").map(String::as_str), Some("https://cloud.example"));
        assert_eq!(params.get("route").map(String::as_str), Some("/acl"));
        assert!(query_params("").is_empty());
    }
}
