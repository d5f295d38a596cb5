//! MCP server for the Remembar memory assistant.
//!
//! Lets a messaging assistant store and recall memories for a user by
//! forwarding each tool call to a remote memory store over HTTP.
//!
//! # Tools
//!
//! - `add_memory` - Save a note (text, priority, tags)
//! - `search_memory` - Semantic search over notes and visual memories
//! - `get_server_info` - Server identity and store reachability
//! - `track_item` - Record where an item was put
//! - `find_item` - Look up where an item was put
//!
//! # Configuration
//!
//! The server reads configuration from environment variables (and `.env`):
//!
//! - `CHROMADB_URL` - Base URL of the memory store
//! - `TENANT_ID` - Default tenant (default: `default_user`)
//! - `HOST` / `PORT` - Listener address (default: `0.0.0.0:8000`)
//!
//! MCP clients connect to `http://<host>:<port>/mcp`.

pub mod adapter;
pub mod http;
pub mod server;
pub mod tools;

pub use adapter::Adapter;
pub use http::create_router;
pub use server::RemembarServer;
