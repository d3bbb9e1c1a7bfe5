//! WebSocket client library
//!
//! Reusable client with automatic reconnection, ping/pong keepalive, and an
//! outbound send channel for subscription requests.

mod client;
mod types;

pub use client::WsClient;
pub use types::{WsConfig, WsError, WsEvent};
