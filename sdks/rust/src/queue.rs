//! Queue operations

use crate::client::HutchClient;
use crate::error::Result;
use crate::path::ResourcePath;
use crate::types::{QueueInfo, QueueSettings};

/// Queue Manager interface
#[derive(Clone)]
pub struct QueueManager {
    pub(crate) client: HutchClient,
}

impl QueueManager {
    /// Create a new Queue manager interface
    pub(crate) fn new(client: HutchClient) -> Self {
        Self { client }
    }

    fn queue_path(vhost: &str, queue_name: &str) -> ResourcePath {
        ResourcePath::new("queues").segment(vhost).segment(queue_name)
    }

    /// List queues across all vhosts
    ///
    /// `GET /api/queues`
    pub async fn list(&self) -> Result<Vec<QueueInfo>> {
        self.client.get(&ResourcePath::new("queues")).await
    }

    /// List queues in one vhost
    ///
    /// `GET /api/queues/{vhost}`. The default vhost is `"/"`.
    ///
    /// # Example
    /// ```no_run
    /// # use hutch_sdk::{HutchClient, HutchConfig};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = HutchClient::new(HutchConfig::new("http://localhost:15672"))?;
    /// for queue in client.queues().list_in("/").await? {
    ///     println!("{}: {} ready", queue.name, queue.messages_ready);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_in(&self, vhost: &str) -> Result<Vec<QueueInfo>> {
        self.client
            .get(&ResourcePath::new("queues").segment(vhost))
            .await
    }

    /// Get a detailed snapshot of one queue
    ///
    /// `GET /api/queues/{vhost}/{name}`
    pub async fn get(&self, vhost: &str, queue_name: &str) -> Result<QueueInfo> {
        self.client.get(&Self::queue_path(vhost, queue_name)).await
    }

    /// Declare a queue, or update an existing one with compatible settings
    ///
    /// `PUT /api/queues/{vhost}/{name}`. Incompatible re-declarations come
    /// back as an API error with status 400 or 409.
    ///
    /// # Example
    /// ```no_run
    /// # use hutch_sdk::{HutchClient, HutchConfig, QueueSettings};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = HutchClient::new(HutchConfig::new("http://localhost:15672"))?;
    /// let settings = QueueSettings::new()
    ///     .durable(true)
    ///     .with_argument("x-queue-type", "quorum");
    /// client.queues().declare("/", "orders", &settings).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn declare(
        &self,
        vhost: &str,
        queue_name: &str,
        settings: &QueueSettings,
    ) -> Result<()> {
        self.client
            .put(&Self::queue_path(vhost, queue_name), settings)
            .await
    }

    /// Delete a queue
    ///
    /// `DELETE /api/queues/{vhost}/{name}`
    pub async fn delete(&self, vhost: &str, queue_name: &str) -> Result<()> {
        self.client
            .delete(&Self::queue_path(vhost, queue_name))
            .await
    }

    /// Remove all messages from a queue, keeping the queue
    ///
    /// `DELETE /api/queues/{vhost}/{name}/contents`
    pub async fn purge(&self, vhost: &str, queue_name: &str) -> Result<()> {
        self.client
            .delete(&Self::queue_path(vhost, queue_name).segment("contents"))
            .await
    }
}
