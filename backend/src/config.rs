//! Server configuration, read from the environment once at startup.

use std::env;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `KKPS_HOST` / `KKPS_PORT`, defaulting to `127.0.0.1:8080`.
    /// An unparsable port falls back to the default.
    pub fn from_env() -> Self {
        let host = env::var("KKPS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("KKPS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_includes_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }
}
