//! # Bertha
//!
//! Client library for the BerthaD content-addressed blob server, with:
//! - One TCP connection per operation, half-duplex request/response
//! - Streaming PUT and GET (blobs never buffered whole)
//! - 32-byte content-hash keys, hex-encoded at the API surface
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     BerthaClient                             │
//! │     (list / put / get / sget / size / stats / quit)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Connection                               │
//! │        (write request ▸ half-close ▸ read response)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Protocol  │          │   connect   │
//!   │   (codec)   │          │ (resolver)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BerthaError, Result};
pub use config::Config;
pub use client::{BerthaClient, BlobReader, KeyIter, PutHandle};
pub use protocol::{BlobKey, ServerStats};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the Bertha client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
