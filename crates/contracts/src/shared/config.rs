use serde::Deserialize;
use std::collections::HashMap;

use super::error::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute origin of the API server. Empty means "same host as the page".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub default_route: String,
    pub tag_limit: usize,
    pub notification_ms: u32,
    /// Menu groups (by title) hidden from the sidebar. Routes marked
    /// `force_show` stay visible.
    #[serde(default)]
    pub hidden_groups: Vec<String>,
}

impl UiConfig {
    pub fn is_group_visible(&self, title: &str) -> bool {
        !self.hidden_groups.iter().any(|g| g == title)
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 2616
prefix = "/api"

[ui]
default_route = "/vm"
tag_limit = 10
notification_ms = 4000
hidden_groups = []
"#;

impl ConsoleConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        if !config.api.prefix.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "api.prefix".to_string(),
                value: config.api.prefix,
            });
        }
        if !config.ui.default_route.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "ui.default_route".to_string(),
                value: config.ui.default_route,
            });
        }
        Ok(config)
    }

    /// Embedded configuration. Parsing it is covered by tests, so a failure
    /// here only falls back to the hardcoded values.
    pub fn embedded() -> Self {
        match Self::from_toml_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("embedded config rejected: {}", e);
                Self {
                    api: ApiConfig {
                        base_url: String::new(),
                        port: 2616,
                        prefix: "/api".to_string(),
                    },
                    ui: UiConfig {
                        default_route: "/vm".to_string(),
                        tag_limit: 10,
                        notification_ms: 4000,
                        hidden_groups: Vec::new(),
                    },
                }
            }
        }
    }

    /// Applies `?api=<origin>&route=<path>` overrides taken from the page URL.
    pub fn with_query_overrides(mut self, params: &HashMap<String, String>) -> Self {
        if let Some(api) = params.get("api").filter(|v| !v.is_empty()) {
            log::debug!("api base overridden from query: {}", api);
            self.api.base_url = api.trim_end_matches('/').to_string();
        }
        if let Some(route) = params.get("route").filter(|v| v.starts_with('/')) {
            self.ui.default_route = route.clone();
        }
        self
    }
}

impl ApiConfig {
    /// Joins origin, prefix and `path` (which must start with `/`).
    ///
    /// `origin` is used when `base_url` is empty, e.g. "https://cloud.example".
    pub fn url(&self, origin: &str, path: &str) -> String {
        let base = if self.base_url.is_empty() {
            format!("{}:{}", origin.trim_end_matches('/'), self.port)
        } else {
            self.base_url.clone()
        };
        format!("{}{}{}", base, self.prefix, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 2616);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.ui.default_route, "/vm");
        assert_eq!(config.ui.tag_limit, 10);
        assert_eq!(ConsoleConfig::embedded(), config);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = ConsoleConfig::from_toml_str("[api]\nport = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_prefix_must_be_absolute() {
        let raw = DEFAULT_CONFIG.replace("prefix = \"/api\"", "prefix = \"api\"");
        let err = ConsoleConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "api.prefix"));
    }

    #[test]
    fn test_url_uses_origin_when_base_is_empty() {
        let config = ConsoleConfig::embedded();
        assert_eq!(
            config.api.url("http://localhost", "/vm/info/3"),
            "http://localhost:2616/api/vm/info/3"
        );
    }

    #[test]
    fn test_query_overrides() {
        let params = HashMap::from([
            ("api".to_string(), "https://one.example/".to_string()),
            ("route".to_string(), "/host".to_string()),
        ]);
        let config = ConsoleConfig::embedded().with_query_overrides(&params);
        assert_eq!(config.api.url("ignored", "/acl/info"), "https://one.example/api/acl/info");
        assert_eq!(config.ui.default_route, "/host");
    }

    #[test]
    fn test_hidden_groups() {
        let raw = DEFAULT_CONFIG.replace("hidden_groups = []", "hidden_groups = [\"Infrastructure\"]");
        let config = ConsoleConfig::from_toml_str(&raw).unwrap();
        assert!(!config.ui.is_group_visible("Infrastructure"));
        assert!(config.ui.is_group_visible("Storage"));
    }
}
