//! Queue Management Example
//!
//! This example declares, inspects, purges and deletes a queue.
//!
//! Usage:
//!   cargo run --example queues

use hutch_sdk::{HutchClient, HutchConfig, QueueSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = HutchConfig::new("http://localhost:15672").with_basic_auth("guest", "guest");
    let client = HutchClient::new(config)?;

    tracing::info!("1. Declaring queue 'tasks' in the default vhost");
    let settings = QueueSettings::new()
        .durable(true)
        .with_argument("x-max-length", 10_000);
    client.queues().declare("/", "tasks", &settings).await?;

    tracing::info!("2. Queues in '/'");
    for queue in client.queues().list_in("/").await? {
        tracing::info!(
            "   {} on {}: {} ready, {} unacked",
            queue.name,
            queue.node,
            queue.messages_ready,
            queue.messages_unacknowledged
        );
    }

    tracing::info!("3. Inspecting 'tasks'");
    let queue = client.queues().get("/", "tasks").await?;
    if let Some(status) = queue.backing_queue_status {
        tracing::info!("   backing queue length {}", status.length);
    }
    tracing::info!("   consumers: {}", queue.consumers);

    tracing::info!("4. Purging and deleting 'tasks'");
    client.queues().purge("/", "tasks").await?;
    client.queues().delete("/", "tasks").await?;

    match client.queues().get("/", "tasks").await {
        Err(err) if err.is_not_found() => tracing::info!("   'tasks' is gone"),
        Err(err) => return Err(err.into()),
        Ok(_) => tracing::warn!("   'tasks' still exists"),
    }

    Ok(())
}
