use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;

use appeals_core::Entity;
use appeals_core::records::{
    AppealRecord, DocumentRecord, EventEstimateRecord, EventKind, EventRecord,
    RepresentationRecord, ServiceUserRecord,
};
use appeals_core::{
    AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
};

use super::{EntityLoader, LoadResult};

#[derive(Debug)]
struct Table<K, V> {
    rows: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone + Entity<Id = K>,
{
    fn insert(&self, row: V) {
        match self.rows.write() {
            Ok(mut rows) => {
                rows.insert(row.id(), row);
            }
            Err(_) => tracing::warn!("in-memory table lock poisoned; row not stored"),
        }
    }

    fn remove(&self, id: K) -> Option<V> {
        self.rows.write().ok()?.remove(&id)
    }

    fn get(&self, id: K) -> anyhow::Result<Option<V>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| anyhow!("in-memory table lock poisoned"))?;
        Ok(rows.get(&id).cloned())
    }
}

/// In-memory entity store.
///
/// Intended for tests/dev. Rows are cloned out on every load, so mutating a
/// loaded record never changes the store.
#[derive(Debug, Default)]
pub struct InMemoryEntityLoader {
    appeals: Table<AppealId, AppealRecord>,
    documents: Table<DocumentId, DocumentRecord>,
    service_users: Table<ServiceUserId, ServiceUserRecord>,
    events: Table<EventId, EventRecord>,
    estimates: Table<EventEstimateId, EventEstimateRecord>,
    representations: Table<RepresentationId, RepresentationRecord>,
    unavailable: AtomicBool,
    load_calls: AtomicUsize,
}

impl InMemoryEntityLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_appeal(&self, appeal: AppealRecord) {
        self.appeals.insert(appeal);
    }

    pub fn insert_document(&self, document: DocumentRecord) {
        self.documents.insert(document);
    }

    pub fn insert_service_user(&self, user: ServiceUserRecord) {
        self.service_users.insert(user);
    }

    pub fn insert_event(&self, event: EventRecord) {
        self.events.insert(event);
    }

    pub fn insert_event_estimate(&self, estimate: EventEstimateRecord) {
        self.estimates.insert(estimate);
    }

    pub fn insert_representation(&self, representation: RepresentationRecord) {
        self.representations.insert(representation);
    }

    pub fn remove_appeal(&self, id: AppealId) -> Option<AppealRecord> {
        self.appeals.remove(id)
    }

    pub fn remove_document(&self, id: DocumentId) -> Option<DocumentRecord> {
        self.documents.remove(id)
    }

    pub fn remove_service_user(&self, id: ServiceUserId) -> Option<ServiceUserRecord> {
        self.service_users.remove(id)
    }

    pub fn remove_event(&self, id: EventId) -> Option<EventRecord> {
        self.events.remove(id)
    }

    pub fn remove_event_estimate(&self, id: EventEstimateId) -> Option<EventEstimateRecord> {
        self.estimates.remove(id)
    }

    pub fn remove_representation(&self, id: RepresentationId) -> Option<RepresentationRecord> {
        self.representations.remove(id)
    }

    /// Make every subsequent load fail, as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of load calls made so far, including failed ones.
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    fn begin(&self, what: &str) -> anyhow::Result<()> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(anyhow!("entity store unavailable while loading {what}"));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityLoader for InMemoryEntityLoader {
    async fn load_appeal(&self, id: AppealId) -> LoadResult<AppealRecord> {
        self.begin("appeal")?;
        self.appeals.get(id)
    }

    async fn load_document(&self, id: DocumentId) -> LoadResult<DocumentRecord> {
        self.begin("document")?;
        self.documents.get(id)
    }

    async fn load_service_user(&self, id: ServiceUserId) -> LoadResult<ServiceUserRecord> {
        self.begin("service user")?;
        self.service_users.get(id)
    }

    async fn load_event(&self, id: EventId, kind: EventKind) -> LoadResult<EventRecord> {
        self.begin("event")?;
        Ok(self.events.get(id)?.filter(|event| event.kind == kind))
    }

    async fn load_event_estimate(&self, id: EventEstimateId) -> LoadResult<EventEstimateRecord> {
        self.begin("event estimate")?;
        self.estimates.get(id)
    }

    async fn load_representation(&self, id: RepresentationId) -> LoadResult<RepresentationRecord> {
        self.begin("representation")?;
        self.representations.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::fixtures;

    #[tokio::test]
    async fn round_trips_rows_by_id() {
        let loader = InMemoryEntityLoader::new();
        loader.insert_appeal(fixtures::appeal(1, "D"));

        let loaded = loader.load_appeal(AppealId::new(1)).await.unwrap();
        assert_eq!(loaded.unwrap().reference, "6000001");
        assert!(loader.load_appeal(AppealId::new(2)).await.unwrap().is_none());

        loader.remove_appeal(AppealId::new(1));
        assert!(loader.load_appeal(AppealId::new(1)).await.unwrap().is_none());
        assert_eq!(loader.load_calls(), 3);
    }

    #[tokio::test]
    async fn events_are_filtered_by_kind() {
        let loader = InMemoryEntityLoader::new();
        loader.insert_event(fixtures::site_visit(4, "Accompanied"));

        let id = EventId::new(4);
        assert!(loader.load_event(id, EventKind::SiteVisit).await.unwrap().is_some());
        assert!(loader.load_event(id, EventKind::Hearing).await.unwrap().is_none());
    }

    #[test]
    fn poisoned_table_drops_inserts_and_fails_reads() {
        let table: Table<AppealId, AppealRecord> = Table::default();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = table.rows.write().unwrap();
            panic!("writer panicked while holding the lock");
        }));

        table.insert(fixtures::appeal(1, "D"));
        assert!(table.get(AppealId::new(1)).is_err());
    }

    #[tokio::test]
    async fn unavailable_store_fails_loads() {
        let loader = InMemoryEntityLoader::new();
        loader.insert_service_user(fixtures::service_user(9));
        loader.set_unavailable(true);

        let err = loader
            .load_service_user(ServiceUserId::new(9))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unavailable"));

        loader.set_unavailable(false);
        assert!(loader.load_service_user(ServiceUserId::new(9)).await.unwrap().is_some());
    }
}
