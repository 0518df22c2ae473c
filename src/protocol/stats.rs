//! Server statistics
//!
//! The fixed counter block returned by a STATS request.

/// Server counters, in the order they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerStats {
    /// Main-loop cycles since the server started
    pub cycles: u64,

    /// GET requests served
    pub gets: u64,

    /// PUT requests received
    pub puts: u64,

    /// Connections accepted since startup
    pub connections_accepted: u64,

    /// Connections currently open
    pub connections_active: u64,
}
