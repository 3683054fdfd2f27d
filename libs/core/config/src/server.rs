use crate::{ConfigError, FromEnv, env_or_default};
use std::net::Ipv4Addr;

/// Bind address for an HTTP service.
///
/// Read from `HOST` and `PORT`; defaults to all interfaces on 8080 so a
/// container needs no configuration to come up.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// The "host:port" string handed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = env_or_default("HOST", &defaults.host);
        let port = env_or_default("PORT", &defaults.port.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn env_overrides_host_and_port() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "127.0.0.1");
                assert_eq!(config.port, 3000);
            },
        );
    }

    #[test]
    fn port_override_keeps_default_host() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", Some("9000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:9000");
        });
    }

    #[test]
    fn rejects_non_numeric_port() {
        temp_env::with_var("PORT", Some("eight-thousand"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn rejects_port_out_of_u16_range() {
        temp_env::with_var("PORT", Some("70000"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }

    #[test]
    fn address_joins_host_and_port() {
        let config = ServerConfig::new("localhost".to_string(), 8081);
        assert_eq!(config.address(), "localhost:8081");
    }
}
