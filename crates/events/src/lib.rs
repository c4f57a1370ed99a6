//! Integration broadcast mechanics: what is published, where, and through
//! which publisher abstraction.

pub mod change;
pub mod envelope;
pub mod in_memory_publisher;
pub mod publisher;
pub mod topic;

pub use change::{ChangeType, EntityKind};
pub use envelope::{EnvelopeMetadata, PublishEnvelope, DEFAULT_SOURCE_SYSTEM_ID};
pub use in_memory_publisher::InMemoryPublisher;
pub use publisher::{PublishError, Publisher, Subscription};
pub use topic::Topic;
