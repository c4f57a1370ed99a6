use thiserror::Error;

use crate::schema::{SchemaError, ValidationIssue};

/// How a broadcast ended.
///
/// Only `Sent` means a message left the process; every other variant is a
/// "not sent" that the caller logs and moves past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// Broadcasting is switched off for this environment.
    Disabled,
    /// The mapper had nothing to send.
    Skipped,
    /// The entity (or, for a delete, its parent appeal) could not be found.
    NotFound,
    /// The mapped payload failed schema validation.
    Invalid(Vec<ValidationIssue>),
    /// The publisher did not confirm delivery.
    PublishFailed,
    Sent,
}

impl BroadcastOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, BroadcastOutcome::Sent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastOutcome::Disabled => "disabled",
            BroadcastOutcome::Skipped => "skipped",
            BroadcastOutcome::NotFound => "not_found",
            BroadcastOutcome::Invalid(_) => "invalid",
            BroadcastOutcome::PublishFailed => "publish_failed",
            BroadcastOutcome::Sent => "sent",
        }
    }
}

impl From<BroadcastOutcome> for bool {
    fn from(outcome: BroadcastOutcome) -> bool {
        outcome.is_sent()
    }
}

impl core::fmt::Display for BroadcastOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broadcast failure that is a fault rather than a "not sent" outcome.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// A schema is missing or broken: a deployment problem.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The entity store failed.
    #[error("entity load failed: {0}")]
    Load(#[from] anyhow::Error),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BroadcastError {
    /// Status class reported to HTTP callers.
    pub fn http_status(&self) -> u16 {
        500
    }
}
