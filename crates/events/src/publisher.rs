//! Publishing abstraction for outbound integration messages.
//!
//! The publisher is the **transport layer** between the broadcast pipeline and
//! the external event bus. It makes minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels, Redis pub/sub, a broker client.
//! - **Single attempt**: the pipeline calls `send` once per broadcast; any retry
//!   policy belongs to the concrete client, never to the caller.
//! - **No persistence**: the database write that triggered the broadcast is the
//!   source of truth; a failed publish does not roll it back.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use async_trait::async_trait;
use thiserror::Error;

use crate::envelope::PublishEnvelope;

/// Transport-level publish failure.
///
/// Callers treat this exactly like `Ok(false)`: the message was not delivered.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publisher connection failed: {0}")]
    Connection(String),
    #[error("failed to serialize envelope: {0}")]
    Serialize(String),
    #[error("broker rejected message: {0}")]
    Rejected(String),
    #[error("publisher state poisoned")]
    Poisoned,
}

/// Delivers envelopes to a named topic on the external bus.
///
/// `Ok(true)` only on confirmed acceptance by the broker. `Ok(false)` and
/// `Err(_)` both mean "not delivered".
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync` so one publisher can be shared across
/// request handlers.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn send(&self, envelope: PublishEnvelope) -> Result<bool, PublishError>;
}

#[async_trait]
impl<P> Publisher for Arc<P>
where
    P: Publisher + ?Sized,
{
    async fn send(&self, envelope: PublishEnvelope) -> Result<bool, PublishError> {
        (**self).send(envelope).await
    }
}

/// A subscription to envelopes accepted by a publisher.
///
/// Only publishers that fan out locally (the in-memory one) hand these out;
/// it lets tests and dev tooling observe exactly what was sent.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }
}
