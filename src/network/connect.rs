//! Connection establishment
//!
//! Resolves a host/port pair and connects to the first reachable candidate.

use std::net::{TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{BerthaError, Result};

/// Connect to the configured server
///
/// Candidates are tried in resolver order; the first successful connect
/// wins. A candidate that fails to connect is skipped, not fatal. Only
/// when resolution yields nothing, or every candidate fails, does this
/// return a connection error. Retrying is left to the caller.
pub fn connect(config: &Config) -> Result<TcpStream> {
    let connection_error = || BerthaError::Connection {
        host: config.host.clone(),
        port: config.port,
    };

    let candidates = (config.host.as_str(), config.port)
        .to_socket_addrs()
        .map_err(|e| {
            tracing::debug!("failed to resolve {}:{}: {}", config.host, config.port, e);
            connection_error()
        })?;

    for addr in candidates {
        match TcpStream::connect(addr) {
            Ok(stream) => {
                tracing::debug!("connected to {}", addr);
                return Ok(stream);
            }
            Err(e) => {
                tracing::trace!("candidate {} failed: {}", addr, e);
            }
        }
    }

    Err(connection_error())
}
