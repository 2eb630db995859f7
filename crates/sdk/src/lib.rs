//! Waitline SDK - Rust Client Library
//!
//! Provides a typed client for the Waitline queue-management API.
//!
//! # Example
//!
//! ```no_run
//! use waitline_sdk::WaitlineClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WaitlineClient::new("http://127.0.0.1:8080")?;
//!
//!     let queue = client.create_queue("Lunch").await?;
//!     let alice = client.join(&queue.id, "Alice").await?;
//!     client.serve(&queue.id, &alice.id).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::WaitlineClient;
pub use error::{Result, SdkError};
pub use types::{Customer, CustomerStatus, Queue};
