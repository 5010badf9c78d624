//! Message-queue publishing.
//!
//! Events for other services are published to Kafka through a REST proxy speaking the
//! Confluent v2 JSON embedded format. Without a configured proxy the disabled producer is
//! used and events are only logged.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::server::{error::AppError, util};

/// Content type for JSON records accepted by the Kafka REST proxy.
pub const KAFKA_JSON_CONTENT_TYPE: &str = "application/vnd.kafka.json.v2+json";

/// Publishes messages to a topic.
#[async_trait]
pub trait EventProducer: Send + Sync {
    async fn send(&self, topic: &str, messages: &[serde_json::Value]) -> Result<(), AppError>;
}

#[derive(Debug, Serialize)]
struct ProduceRequest<'a> {
    records: Vec<ProduceRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ProduceRecord<'a> {
    value: &'a serde_json::Value,
}

impl<'a> ProduceRequest<'a> {
    fn new(messages: &'a [serde_json::Value]) -> Self {
        Self {
            records: messages
                .iter()
                .map(|value| ProduceRecord { value })
                .collect(),
        }
    }
}

/// Producer posting records to `<base_url>/topics/<topic>`.
pub struct KafkaRestProducer {
    client: reqwest::Client,
    base_url: Url,
}

impl KafkaRestProducer {
    /// Creates a producer for a proxy base URL, see `util::url::parse_base_url`.
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl EventProducer for KafkaRestProducer {
    async fn send(&self, topic: &str, messages: &[serde_json::Value]) -> Result<(), AppError> {
        let url = util::url::join(&self.base_url, &format!("topics/{}", topic))?;

        self.client
            .post(url)
            .header(CONTENT_TYPE, KAFKA_JSON_CONTENT_TYPE)
            .json(&ProduceRequest::new(messages))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Published {} message(s) to {}", messages.len(), topic);

        Ok(())
    }
}

/// Producer used when no proxy is configured.
pub struct DisabledProducer;

#[async_trait]
impl EventProducer for DisabledProducer {
    async fn send(&self, topic: &str, messages: &[serde_json::Value]) -> Result<(), AppError> {
        tracing::info!(
            "Event publishing disabled, dropping {} message(s) for {}",
            messages.len(),
            topic
        );

        Ok(())
    }
}
