//! REST server configuration.
//!
//! Resolved once at process startup and passed into [`crate::serve`], so request handling never
//! reads process-wide environment variables.

use std::net::SocketAddr;

/// Environment variable holding the REST bind address.
pub const REST_ADDR_ENV: &str = "CHATBOT_REST_ADDR";

/// Bind address used when `CHATBOT_REST_ADDR` is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
}

impl RestConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = rest_addr_from_env_value(std::env::var(REST_ADDR_ENV).ok())?;
        Ok(Self::new(addr))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Parse the bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> anyhow::Result<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.into());

    value
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid {} value {:?}: {}", REST_ADDR_ENV, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        let addr = rest_addr_from_env_value(None).unwrap();
        assert_eq!(addr, DEFAULT_REST_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn blank_value_uses_default() {
        let addr = rest_addr_from_env_value(Some("   ".into())).unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn value_is_trimmed_and_parsed() {
        let addr = rest_addr_from_env_value(Some(" 127.0.0.1:8080 ".into())).unwrap();
        assert_eq!(RestConfig::new(addr).addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_value_is_an_error() {
        let err = rest_addr_from_env_value(Some("localhost".into())).unwrap_err();
        assert!(err.to_string().contains(REST_ADDR_ENV));
    }
}
