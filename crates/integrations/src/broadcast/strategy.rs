//! Per-kind broadcast behaviour.
//!
//! The orchestrator runs one fixed pipeline; a strategy supplies the parts
//! that differ between entity kinds: how to load, how to rebuild a deleted
//! row, how to map, and where the message goes.

use async_trait::async_trait;
use serde::Serialize;

use appeals_events::{EntityKind, Topic};

use super::request::{BroadcastRequest, StaleSnapshot};
use crate::loader::{EntityLoader, LoadResult};
use crate::schema::SchemaKey;

#[async_trait]
pub trait BroadcastStrategy: Send + Sync {
    /// What the loader returns for this kind.
    type Entity: Send + Sync;
    /// The wire shape.
    type Dto: Serialize + Send;

    fn kind(&self) -> EntityKind;

    /// Current state of the requested row, `None` when it does not exist.
    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<Self::Entity>
    where
        L: EntityLoader + ?Sized;

    /// Rebuild identifying data for a deleted row from the caller's snapshot
    /// and its parent appeal.
    ///
    /// Kinds without a snapshot variant never reconstruct.
    async fn reconstruct<L>(
        &self,
        _loader: &L,
        _snapshot: &StaleSnapshot,
    ) -> LoadResult<Self::Entity>
    where
        L: EntityLoader + ?Sized,
    {
        Ok(None)
    }

    /// `None` means there is nothing to send.
    fn map(&self, entity: &Self::Entity) -> Option<Self::Dto>;

    fn schema_for(&self, entity: &Self::Entity) -> SchemaKey;

    fn topic_for(&self, entity: &Self::Entity) -> Topic;

    /// Value of the `entityType` metadata field.
    fn entity_type_for(&self, entity: &Self::Entity) -> String;
}
