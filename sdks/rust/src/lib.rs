//! # Hutch Rust SDK
//!
//! Typed client for the HTTP management API of a message-broker cluster.
//!
//! ## Features
//!
//! - **Queue topology**: list, inspect, declare, delete and purge queues
//! - **Typed snapshots**: message counts, rates, consumers and storage-engine status
//! - **Classified errors**: construction, transport, HTTP status and decode failures
//! - **Async/Await**: one awaited round-trip per operation, no hidden retries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hutch_sdk::{HutchClient, HutchConfig, QueueSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HutchConfig::new("http://localhost:15672").with_basic_auth("guest", "guest");
//!     let client = HutchClient::new(config)?;
//!
//!     client
//!         .queues()
//!         .declare("/", "orders", &QueueSettings::new().durable(true))
//!         .await?;
//!     let queue = client.queues().get("/", "orders").await?;
//!     println!("{} holds {} messages", queue.name, queue.messages);
//!
//!     Ok(())
//! }
//! ```

#![recursion_limit = "256"]

pub mod client;
pub mod error;
pub mod path;
pub mod queue;
mod response;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{Credentials, HutchClient, HutchConfig};
pub use error::{ErrorKind, HutchError, Result};
pub use path::ResourcePath;
pub use queue::QueueManager;
pub use types::{QueueInfo, QueueSettings};
