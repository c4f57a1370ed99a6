//! Redis pub/sub-backed publisher (optional).
//!
//! Each topic maps to one channel, `<prefix><topic key>`. Redis pub/sub is not
//! durable: a message published while nobody listens is gone. Delivery is
//! confirmed once Redis accepts the `PUBLISH`, regardless of receiver count.

use std::sync::mpsc;
use std::thread;

use async_trait::async_trait;
use redis::AsyncCommands;

use appeals_events::{PublishEnvelope, PublishError, Publisher, Subscription, Topic};

use crate::config::BroadcastConfig;

#[derive(Debug, Clone)]
pub struct RedisPublisher {
    client: redis::Client,
    channel_prefix: String,
}

impl RedisPublisher {
    pub fn new(redis_url: impl AsRef<str>, channel_prefix: impl Into<String>) -> Result<Self, PublishError> {
        let client = redis::Client::open(redis_url.as_ref())
            .map_err(|e| PublishError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            channel_prefix: channel_prefix.into(),
        })
    }

    /// `None` when no `REDIS_URL` is configured.
    pub fn from_config(config: &BroadcastConfig) -> Result<Option<Self>, PublishError> {
        config
            .redis_url
            .as_deref()
            .map(|url| Self::new(url, config.channel_prefix.clone()))
            .transpose()
    }

    pub fn channel(&self, topic: Topic) -> String {
        format!("{}{}", self.channel_prefix, topic.key())
    }

    /// Forward envelopes published on `topic` to a local subscription.
    ///
    /// Runs a background thread on a blocking connection; the thread exits
    /// when the connection drops or the subscription is dropped.
    pub fn subscribe(&self, topic: Topic) -> Subscription<PublishEnvelope> {
        let (tx, rx) = mpsc::channel();

        let client = self.client.clone();
        let channel = self.channel(topic);

        thread::spawn(move || {
            let mut conn = match client.get_connection() {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(channel = %channel, error = %e, "redis subscribe failed");
                    return;
                }
            };

            let mut pubsub = conn.as_pubsub();
            if pubsub.subscribe(&channel).is_err() {
                return;
            }

            loop {
                let msg = match pubsub.get_message() {
                    Ok(m) => m,
                    Err(_) => return,
                };

                let payload: String = match msg.get_payload() {
                    Ok(p) => p,
                    Err(_) => continue,
                };

                let envelope: PublishEnvelope = match serde_json::from_str(&payload) {
                    Ok(e) => e,
                    Err(_) => continue,
                };

                if tx.send(envelope).is_err() {
                    return;
                }
            }
        });

        Subscription::new(rx)
    }
}

#[async_trait]
impl Publisher for RedisPublisher {
    async fn send(&self, envelope: PublishEnvelope) -> Result<bool, PublishError> {
        let channel = self.channel(envelope.topic());
        let payload =
            serde_json::to_string(&envelope).map_err(|e| PublishError::Serialize(e.to_string()))?;

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PublishError::Connection(e.to_string()))?;

        let receivers: i64 = conn
            .publish(&channel, payload)
            .await
            .map_err(|e| PublishError::Rejected(e.to_string()))?;

        tracing::debug!(channel = %channel, receivers, "published to redis");
        Ok(true)
    }
}
