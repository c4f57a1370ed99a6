//! Entity loading: the read side the broadcast pipeline depends on.
//!
//! The loader is an external collaborator (the case database in production).
//! It answers one question per call: "what does this row look like now,
//! together with whatever related data the mapper needs?"
//!
//! - `Ok(Some(_))`: the row exists
//! - `Ok(None)`: no such row (deleted, or never existed)
//! - `Err(_)`: the store itself failed; the broadcast is aborted

mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;

use appeals_core::records::{
    AppealRecord, DocumentRecord, EventEstimateRecord, EventKind, EventRecord,
    RepresentationRecord, ServiceUserRecord,
};
use appeals_core::{
    AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
};

pub use in_memory::InMemoryEntityLoader;

/// Result of a single lookup.
pub type LoadResult<T> = anyhow::Result<Option<T>>;

/// Loads current entity state by identifier.
///
/// Implementations must be `Send + Sync`; one loader is shared by every
/// broadcast.
#[async_trait]
pub trait EntityLoader: Send + Sync {
    /// The appeal with its timetable, site address and representation summary.
    async fn load_appeal(&self, id: AppealId) -> LoadResult<AppealRecord>;

    /// The document with every stored version.
    async fn load_document(&self, id: DocumentId) -> LoadResult<DocumentRecord>;

    async fn load_service_user(&self, id: ServiceUserId) -> LoadResult<ServiceUserRecord>;

    /// The event, only if it is of the requested kind.
    async fn load_event(&self, id: EventId, kind: EventKind) -> LoadResult<EventRecord>;

    async fn load_event_estimate(&self, id: EventEstimateId) -> LoadResult<EventEstimateRecord>;

    async fn load_representation(&self, id: RepresentationId) -> LoadResult<RepresentationRecord>;
}

#[async_trait]
impl<L> EntityLoader for Arc<L>
where
    L: EntityLoader + ?Sized,
{
    async fn load_appeal(&self, id: AppealId) -> LoadResult<AppealRecord> {
        (**self).load_appeal(id).await
    }

    async fn load_document(&self, id: DocumentId) -> LoadResult<DocumentRecord> {
        (**self).load_document(id).await
    }

    async fn load_service_user(&self, id: ServiceUserId) -> LoadResult<ServiceUserRecord> {
        (**self).load_service_user(id).await
    }

    async fn load_event(&self, id: EventId, kind: EventKind) -> LoadResult<EventRecord> {
        (**self).load_event(id, kind).await
    }

    async fn load_event_estimate(&self, id: EventEstimateId) -> LoadResult<EventEstimateRecord> {
        (**self).load_event_estimate(id).await
    }

    async fn load_representation(&self, id: RepresentationId) -> LoadResult<RepresentationRecord> {
        (**self).load_representation(id).await
    }
}
