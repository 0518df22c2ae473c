//! Configuration for the Bertha client
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Default server host
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port (the BerthaD well-known port)
pub const DEFAULT_PORT: u16 = 819;

/// Configuration for a Bertha client instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server Address
    // -------------------------------------------------------------------------
    /// Host name or literal address of the Bertha server
    pub host: String,

    /// TCP port of the Bertha server
    pub port: u16,

    // -------------------------------------------------------------------------
    // Socket Options
    // -------------------------------------------------------------------------
    /// Disable Nagle's algorithm on each connection
    pub nodelay: bool,

    /// Per-read socket deadline; `None` blocks indefinitely
    pub read_timeout: Option<Duration>,

    /// Per-write socket deadline; `None` blocks indefinitely
    pub write_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            nodelay: true,
            read_timeout: None,
            write_timeout: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host name or address
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable or disable TCP_NODELAY on connections
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set a socket read deadline
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Set a socket write deadline
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.config.write_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
