//! Transport construction configuration.
//!
//! The only required setting is the access key attached to every outgoing
//! request. The user agent can be overridden but defaults to a string
//! identifying the SDK and its version. There is deliberately no timeout
//! setting: timeouts are inherited unmodified from the HTTP client's
//! defaults.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::transport::error::TransportError;

/// Default user-agent string identifying the SDK.
static DEFAULT_USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "MessagingSdk/ApiClient/{} Rust/reqwest",
        env!("CARGO_PKG_VERSION")
    )
});

/// Configuration for building a transport.
///
/// All values are fixed at construction time; the built client is
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Access key sent with every request as `Authorization: AccessKey <key>`.
    pub access_key: String,

    /// Optional user-agent override.
    ///
    /// When absent, the default SDK-identifying string is used.
    pub user_agent: Option<String>,
}

impl TransportConfig {
    /// Creates a configuration with the given access key and defaults
    /// for everything else.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            user_agent: None,
        }
    }

    /// Returns the effective user-agent string.
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.as_str())
    }

    /// Returns the value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("AccessKey {}", self.access_key)
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is usable, or `Err(TransportError)`
    /// if the access key is empty.
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.access_key.trim().is_empty() {
            return Err(TransportError::General(
                "access key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = TransportConfig::new("test_key");
        assert_eq!(config.access_key, "test_key");
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_default_user_agent_identifies_sdk() {
        let config = TransportConfig::new("test_key");
        let ua = config.user_agent();
        assert!(ua.starts_with("MessagingSdk/ApiClient/"));
        assert!(ua.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_user_agent_override() {
        let mut config = TransportConfig::new("test_key");
        config.user_agent = Some("CustomAgent/1.0".to_string());
        assert_eq!(config.user_agent(), "CustomAgent/1.0");
    }

    #[test]
    fn test_authorization_header() {
        let config = TransportConfig::new("live_abc123");
        assert_eq!(config.authorization_header(), "AccessKey live_abc123");
    }

    #[test]
    fn test_validate() {
        assert!(TransportConfig::new("key").validate().is_ok());
        assert!(TransportConfig::new("").validate().is_err());
        assert!(TransportConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = TransportConfig::new("test_key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("test_key"));

        let deserialized: TransportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.access_key, "test_key");
    }
}
