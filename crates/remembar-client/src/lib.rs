//! remembar-client - Client for the remote memory store.
//!
//! One method per store endpoint. Every method issues exactly one request,
//! bounded by the configured timeout, and reports failures as a
//! [`StoreError`](remembar_core::StoreError) tagged with its tier.
//!
//! # Example
//!
//! ```ignore
//! use remembar_client::StoreClient;
//! use remembar_core::{BridgeConfig, MemoryRequest};
//!
//! let client = StoreClient::new(BridgeConfig::from_env()?)?;
//! let reply = client.add_note(&MemoryRequest::new("default_user", "Keys are on the hook")).await?;
//! ```

mod client;

pub use client::{StoreClient, TUNNEL_BYPASS_HEADER};
