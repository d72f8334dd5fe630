//! # Client Configuration
//!
//! Settings for `pipelinectl`, loaded from environment variables.

use super::env_var_or_default;
use crate::constants::{DEFAULT_FIELD_MANAGER, DEFAULT_LOG_FILTER, DEFAULT_NAMESPACE};

/// CLI configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Namespace used when a command does not name one
    pub default_namespace: String,
    /// Field manager for server-side apply
    pub field_manager: String,
    /// Tracing directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            default_namespace: env_var_or_default(
                "PIPELINECTL_NAMESPACE",
                DEFAULT_NAMESPACE.to_string(),
            ),
            field_manager: env_var_or_default(
                "PIPELINECTL_FIELD_MANAGER",
                DEFAULT_FIELD_MANAGER.to_string(),
            ),
            log_filter: env_var_or_default("PIPELINECTL_LOG", DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Namespace to use, preferring an explicit one
    pub fn namespace_or_default(&self, namespace: Option<String>) -> String {
        namespace
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| self.default_namespace.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_namespace, "default");
        assert_eq!(config.field_manager, "pipelinectl");
    }

    #[test]
    fn test_namespace_or_default() {
        let config = ClientConfig::default();
        assert_eq!(config.namespace_or_default(Some("ns".to_string())), "ns");
        assert_eq!(config.namespace_or_default(Some(String::new())), "default");
        assert_eq!(config.namespace_or_default(None), "default");
    }

    #[test]
    fn test_field_manager_from_env() {
        std::env::set_var("PIPELINECTL_FIELD_MANAGER", "ci-bot");
        let config = ClientConfig::from_env();
        std::env::remove_var("PIPELINECTL_FIELD_MANAGER");
        assert_eq!(config.field_manager, "ci-bot");
    }
}
