//! Waitline HTTP API Layer
//!
//! Thin transport over the queue registry: routing, input-shape
//! validation, and status-code mapping. The registry itself has no
//! network surface of its own.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{HttpServer, HttpServerConfig, HttpServerHandle};
