//! Resource types returned by the management API

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// Free-form `x-*` arguments and policy knobs
pub type Arguments = Map<String, Value>;

/// A counter's recent moving-average rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateDetails {
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rate: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<RateSample>,
}

/// One sampled point of a rate series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSample {
    pub sample: u64,
    pub timestamp: u64,
}

/// Aggregate throughput counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageStats {
    pub publish: u64,
    pub publish_details: Option<RateDetails>,
    pub deliver: u64,
    pub deliver_details: Option<RateDetails>,
    pub deliver_no_ack: u64,
    pub deliver_no_ack_details: Option<RateDetails>,
    pub deliver_get: u64,
    pub deliver_get_details: Option<RateDetails>,
    pub redeliver: u64,
    pub redeliver_details: Option<RateDetails>,
    pub ack: u64,
    pub ack_details: Option<RateDetails>,
    pub get: u64,
    pub get_details: Option<RateDetails>,
    pub get_no_ack: u64,
    pub get_no_ack_details: Option<RateDetails>,
}

/// Connection or channel that exclusively owns a queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerPidDetails {
    pub name: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub peer_port: Option<u16>,
    pub peer_host: String,
}

/// Storage-engine counters of a queue
///
/// Diagnostic only; the server computes these and never accepts them back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackingQueueStatus {
    pub q1: u64,
    pub q2: u64,
    pub q3: u64,
    pub q4: u64,
    #[serde(rename = "len")]
    pub length: u64,
    pub pending_acks: u64,
    #[serde(rename = "ram_msg_count")]
    pub ram_message_count: u64,
    pub ram_ack_count: u64,
    pub persistent_count: u64,
    #[serde(rename = "avg_ingress_rate")]
    pub average_ingress_rate: f64,
    #[serde(rename = "avg_egress_rate")]
    pub average_egress_rate: f64,
    #[serde(rename = "avg_ack_ingress_rate")]
    pub average_ack_ingress_rate: f64,
    #[serde(rename = "avg_ack_egress_rate")]
    pub average_ack_egress_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Channel a consumer is attached through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelDetails {
    pub name: String,
    pub number: u32,
    pub user: String,
    pub connection_name: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub peer_port: Option<u16>,
    pub peer_host: String,
}

/// Queue identity as referenced from other resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueRef {
    pub name: String,
    pub vhost: String,
}

/// One consumer of a queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerDetails {
    pub channel_details: Option<ChannelDetails>,
    pub queue: Option<QueueRef>,
    pub consumer_tag: String,
    pub exclusive: bool,
    pub ack_required: bool,
    pub prefetch_count: u32,
    #[serde(deserialize_with = "deserialize_arguments")]
    pub arguments: Arguments,
}

/// Point-in-time snapshot of a queue
///
/// Every field defaults when the server omits it; list responses
/// typically leave out `consumer_details` and `backing_queue_status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueInfo {
    pub name: String,
    pub vhost: String,
    #[serde(rename = "type")]
    pub queue_type: Option<String>,
    pub durable: bool,
    pub auto_delete: bool,
    pub exclusive: bool,
    #[serde(deserialize_with = "deserialize_arguments")]
    pub arguments: Arguments,

    pub node: String,
    pub status: Option<String>,
    pub state: String,
    pub idle_since: Option<String>,

    pub memory: u64,
    pub policy: Option<String>,
    pub effective_policy_definition: Option<Value>,

    pub consumers: u64,
    /// Number between 0 and 1, or an empty string on some server versions
    pub consumer_utilisation: Option<Value>,
    pub exclusive_consumer_tag: Option<String>,

    #[serde(rename = "message_bytes")]
    pub messages_bytes: u64,
    #[serde(rename = "message_bytes_persistent")]
    pub messages_bytes_persistent: u64,
    #[serde(rename = "message_bytes_ram")]
    pub messages_bytes_ram: u64,
    #[serde(rename = "message_bytes_ready")]
    pub messages_bytes_ready: u64,
    #[serde(rename = "message_bytes_unacknowledged")]
    pub messages_bytes_unacknowledged: u64,

    pub messages: u64,
    pub messages_details: Option<RateDetails>,
    pub messages_persistent: u64,
    pub messages_ram: u64,
    pub messages_ready: u64,
    pub messages_ready_details: Option<RateDetails>,
    pub messages_ready_ram: u64,
    pub messages_unacknowledged: u64,
    pub messages_unacknowledged_details: Option<RateDetails>,
    pub messages_unacknowledged_ram: u64,

    pub message_stats: Option<MessageStats>,
    pub owner_pid_details: Option<OwnerPidDetails>,
    pub backing_queue_status: Option<BackingQueueStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_details: Option<Vec<ConsumerDetails>>,
}

impl QueueInfo {
    /// Identity of this queue within the cluster
    pub fn queue_ref(&self) -> QueueRef {
        QueueRef {
            name: self.name.clone(),
            vhost: self.vhost.clone(),
        }
    }

    /// The declarable subset of this snapshot
    pub fn settings(&self) -> QueueSettings {
        QueueSettings {
            durable: self.durable,
            auto_delete: self.auto_delete,
            arguments: self.arguments.clone(),
        }
    }
}

/// Body of a queue declaration
///
/// `arguments` is always serialized, as `{}` when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub durable: bool,
    pub auto_delete: bool,
    #[serde(deserialize_with = "deserialize_arguments")]
    pub arguments: Arguments,
}

impl QueueSettings {
    /// Non-durable, non-auto-delete, no arguments
    pub fn new() -> Self {
        Self::default()
    }

    pub fn durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }

    pub fn auto_delete(mut self, auto_delete: bool) -> Self {
        self.auto_delete = auto_delete;
        self
    }

    /// Add one argument, e.g. `x-max-length`
    ///
    /// # Example
    /// ```
    /// use hutch_sdk::types::QueueSettings;
    ///
    /// let settings = QueueSettings::new()
    ///     .durable(true)
    ///     .with_argument("x-queue-type", "quorum")
    ///     .with_argument("x-max-length", 10_000);
    /// assert_eq!(settings.arguments["x-max-length"], 10_000);
    /// ```
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

/// Empty arguments arrive as `{}`, `null`, or `[]` depending on the server version
fn deserialize_arguments<'de, D>(deserializer: D) -> Result<Arguments, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(arguments) => Ok(arguments),
        Value::Null => Ok(Arguments::new()),
        Value::Array(items) if items.is_empty() => Ok(Arguments::new()),
        other => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a map of arguments",
        )),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        Value::Null => de::Unexpected::Unit,
    }
}

/// Peer ports arrive as numbers, numeric strings, or placeholders like `"unknown"`
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
