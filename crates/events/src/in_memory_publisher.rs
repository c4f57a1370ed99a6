//! In-memory publisher for tests/dev.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, mpsc};

use async_trait::async_trait;

use crate::envelope::PublishEnvelope;
use crate::publisher::{PublishError, Publisher, Subscription};

/// In-memory publisher.
///
/// - No IO
/// - Records every accepted envelope in send order
/// - Best-effort fan-out to subscribers
/// - Can be told to refuse messages, to exercise the "not delivered" path
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    sent: Mutex<Vec<PublishEnvelope>>,
    subscribers: Mutex<Vec<mpsc::Sender<PublishEnvelope>>>,
    rejecting: AtomicBool,
    attempts: AtomicUsize,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher that answers `false` to every send.
    pub fn rejecting() -> Self {
        let publisher = Self::default();
        publisher.set_rejecting(true);
        publisher
    }

    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }

    /// Envelopes accepted so far, oldest first.
    pub fn sent(&self) -> Vec<PublishEnvelope> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Number of `send` calls, accepted or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> Subscription<PublishEnvelope> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn send(&self, envelope: PublishEnvelope) -> Result<bool, PublishError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.rejecting.load(Ordering::SeqCst) {
            tracing::debug!(topic = %envelope.topic(), "in-memory publisher rejecting message");
            return Ok(false);
        }

        {
            let mut subs = self.subscribers.lock().map_err(|_| PublishError::Poisoned)?;
            // Drop any dead subscribers while publishing.
            subs.retain(|tx| tx.send(envelope.clone()).is_ok());
        }

        self.sent
            .lock()
            .map_err(|_| PublishError::Poisoned)?
            .push(envelope);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeType, EnvelopeMetadata, Topic};
    use serde_json::json;

    fn envelope(id: i64) -> PublishEnvelope {
        PublishEnvelope::single(
            Topic::Document,
            json!({ "documentId": id }),
            ChangeType::Update,
            EnvelopeMetadata::new("Document", "test"),
        )
    }

    #[tokio::test]
    async fn records_and_fans_out() {
        let publisher = InMemoryPublisher::new();
        let sub = publisher.subscribe();

        assert!(publisher.send(envelope(1)).await.unwrap());
        assert!(publisher.send(envelope(2)).await.unwrap());

        let sent = publisher.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].payloads()[0]["documentId"], 1);
        assert_eq!(sub.try_recv().unwrap().payloads()[0]["documentId"], 1);
        assert_eq!(sub.try_recv().unwrap().payloads()[0]["documentId"], 2);
    }

    #[tokio::test]
    async fn rejecting_publisher_records_nothing() {
        let publisher = InMemoryPublisher::rejecting();

        assert!(!publisher.send(envelope(1)).await.unwrap());
        assert!(publisher.sent().is_empty());
        assert_eq!(publisher.attempts(), 1);
    }
}
