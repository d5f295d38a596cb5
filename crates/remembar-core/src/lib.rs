//! remembar-core - Core library for the Remembar memory bridge.
//!
//! This crate holds the pieces shared by the store client and the MCP
//! server: the configuration struct, the error hierarchy, and the request
//! and response types exchanged with the remote memory store.
//!
//! # Example
//!
//! ```ignore
//! use remembar_core::{BridgeConfig, MemoryRequest, Priority};
//!
//! let config = BridgeConfig::from_env()?;
//! let request = MemoryRequest::new(config.tenant_for(None), "Keys are on the counter")
//!     .with_priority(Priority::High);
//! ```

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::BridgeConfig;
pub use error::{ErrorKind, RemembarError, RemembarResult, StoreError, StoreResult};
pub use types::{
    AddNoteResponse, MemoryRequest, Priority, Provenance, SearchMatch, SearchRequest,
    SearchResponse, ServerStatus, StoreStatus, TrackItemRequest,
};
