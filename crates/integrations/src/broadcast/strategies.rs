use async_trait::async_trait;

use appeals_core::records::{
    AppealRecord, EventEstimateRecord, EventKind, EventRecord, RepresentationRecord,
    ServiceUserRecord,
};
use appeals_core::{
    AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
};
use appeals_events::{EntityKind, Topic};

use super::request::{BroadcastRequest, StaleSnapshot};
use super::strategy::BroadcastStrategy;
use crate::loader::{EntityLoader, LoadResult};
use crate::mappers::{
    AppealCase, AppealDocument, AppealEvent, AppealEventEstimate, AppealRepresentation,
    DocumentVersionView, ServiceUser, map_appeal, map_document, map_event, map_event_estimate,
    map_representation, map_service_user, schema_for_case_type, topic_for_case_type,
};
use crate::schema::SchemaKey;

/// Case reference of the snapshot's parent appeal, if it still exists.
async fn parent_reference<L>(loader: &L, appeal_id: AppealId) -> LoadResult<String>
where
    L: EntityLoader + ?Sized,
{
    Ok(loader.load_appeal(appeal_id).await?.map(|appeal| appeal.reference))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AppealStrategy;

#[async_trait]
impl BroadcastStrategy for AppealStrategy {
    type Entity = AppealRecord;
    type Dto = AppealCase;

    fn kind(&self) -> EntityKind {
        EntityKind::Appeal
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<AppealRecord>
    where
        L: EntityLoader + ?Sized,
    {
        loader.load_appeal(AppealId::new(request.entity_id)).await
    }

    fn map(&self, appeal: &AppealRecord) -> Option<AppealCase> {
        Some(map_appeal(appeal))
    }

    fn schema_for(&self, appeal: &AppealRecord) -> SchemaKey {
        schema_for_case_type(&appeal.case_type_code)
    }

    fn topic_for(&self, appeal: &AppealRecord) -> Topic {
        topic_for_case_type(&appeal.case_type_code)
    }

    fn entity_type_for(&self, _appeal: &AppealRecord) -> String {
        "Appeal".to_string()
    }
}

/// Broadcasts one version of a document: the requested one, or the latest.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStrategy;

#[async_trait]
impl BroadcastStrategy for DocumentStrategy {
    type Entity = DocumentVersionView;
    type Dto = AppealDocument;

    fn kind(&self) -> EntityKind {
        EntityKind::Document
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<DocumentVersionView>
    where
        L: EntityLoader + ?Sized,
    {
        let Some(document) = loader.load_document(DocumentId::new(request.entity_id)).await? else {
            return Ok(None);
        };

        let version = match request.version {
            Some(v) => document.version_exact(v),
            None => document.latest(),
        };
        let Some(version) = version.cloned() else {
            tracing::debug!(
                document_id = request.entity_id,
                requested = ?request.version,
                "document version not found"
            );
            return Ok(None);
        };

        Ok(Some(DocumentVersionView { document, version }))
    }

    fn map(&self, view: &DocumentVersionView) -> Option<AppealDocument> {
        map_document(view)
    }

    fn schema_for(&self, _view: &DocumentVersionView) -> SchemaKey {
        SchemaKey::AppealDocument
    }

    fn topic_for(&self, _view: &DocumentVersionView) -> Topic {
        Topic::Document
    }

    fn entity_type_for(&self, _view: &DocumentVersionView) -> String {
        "Document".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ServiceUserStrategy {
    source_system_id: String,
}

impl ServiceUserStrategy {
    pub fn new(source_system_id: impl Into<String>) -> Self {
        Self {
            source_system_id: source_system_id.into(),
        }
    }
}

#[async_trait]
impl BroadcastStrategy for ServiceUserStrategy {
    type Entity = ServiceUserRecord;
    type Dto = ServiceUser;

    fn kind(&self) -> EntityKind {
        EntityKind::ServiceUser
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<ServiceUserRecord>
    where
        L: EntityLoader + ?Sized,
    {
        loader
            .load_service_user(ServiceUserId::new(request.entity_id))
            .await
    }

    /// Contact details are gone with the row; only identity and role remain.
    async fn reconstruct<L>(
        &self,
        loader: &L,
        snapshot: &StaleSnapshot,
    ) -> LoadResult<ServiceUserRecord>
    where
        L: EntityLoader + ?Sized,
    {
        let StaleSnapshot::ServiceUser(snapshot) = snapshot else {
            return Ok(None);
        };
        let Some(case_reference) = parent_reference(loader, snapshot.appeal_id).await? else {
            return Ok(None);
        };

        Ok(Some(ServiceUserRecord {
            id: ServiceUserId::new(snapshot.id),
            appeal_id: snapshot.appeal_id,
            case_reference,
            service_user_type: snapshot.service_user_type,
            salutation: None,
            first_name: None,
            last_name: None,
            organisation: None,
            email: None,
            phone_number: None,
            address: None,
        }))
    }

    fn map(&self, user: &ServiceUserRecord) -> Option<ServiceUser> {
        Some(map_service_user(user, &self.source_system_id))
    }

    fn schema_for(&self, _user: &ServiceUserRecord) -> SchemaKey {
        SchemaKey::ServiceUser
    }

    fn topic_for(&self, _user: &ServiceUserRecord) -> Topic {
        Topic::ServiceUser
    }

    fn entity_type_for(&self, user: &ServiceUserRecord) -> String {
        user.service_user_type.to_string()
    }
}

/// Site visits and hearings share one message shape.
#[derive(Debug, Clone, Copy)]
pub struct EventStrategy {
    kind: EventKind,
}

impl EventStrategy {
    pub fn new(kind: EventKind) -> Self {
        Self { kind }
    }

    pub fn site_visit() -> Self {
        Self::new(EventKind::SiteVisit)
    }

    pub fn hearing() -> Self {
        Self::new(EventKind::Hearing)
    }
}

#[async_trait]
impl BroadcastStrategy for EventStrategy {
    type Entity = EventRecord;
    type Dto = AppealEvent;

    fn kind(&self) -> EntityKind {
        match self.kind {
            EventKind::SiteVisit => EntityKind::SiteVisitEvent,
            EventKind::Hearing => EntityKind::HearingEvent,
        }
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<EventRecord>
    where
        L: EntityLoader + ?Sized,
    {
        loader
            .load_event(EventId::new(request.entity_id), self.kind)
            .await
    }

    /// End time, address and notification date are unknown and map to `null`.
    async fn reconstruct<L>(&self, loader: &L, snapshot: &StaleSnapshot) -> LoadResult<EventRecord>
    where
        L: EntityLoader + ?Sized,
    {
        let StaleSnapshot::Event(snapshot) = snapshot else {
            return Ok(None);
        };
        let Some(case_reference) = parent_reference(loader, snapshot.appeal_id).await? else {
            return Ok(None);
        };

        Ok(Some(EventRecord {
            id: EventId::new(snapshot.id),
            appeal_id: snapshot.appeal_id,
            case_reference,
            kind: self.kind,
            visit_type: snapshot.visit_type.clone(),
            start: snapshot.start,
            end: None,
            address: None,
            published: false,
            notified_at: None,
        }))
    }

    fn map(&self, event: &EventRecord) -> Option<AppealEvent> {
        Some(map_event(event))
    }

    fn schema_for(&self, _event: &EventRecord) -> SchemaKey {
        SchemaKey::AppealEvent
    }

    fn topic_for(&self, _event: &EventRecord) -> Topic {
        Topic::EventData
    }

    fn entity_type_for(&self, _event: &EventRecord) -> String {
        self.kind.as_str().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EventEstimateStrategy;

#[async_trait]
impl BroadcastStrategy for EventEstimateStrategy {
    type Entity = EventEstimateRecord;
    type Dto = AppealEventEstimate;

    fn kind(&self) -> EntityKind {
        EntityKind::EventEstimate
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<EventEstimateRecord>
    where
        L: EntityLoader + ?Sized,
    {
        loader
            .load_event_estimate(EventEstimateId::new(request.entity_id))
            .await
    }

    /// Every duration is unknown, so each maps to `0`.
    async fn reconstruct<L>(
        &self,
        loader: &L,
        snapshot: &StaleSnapshot,
    ) -> LoadResult<EventEstimateRecord>
    where
        L: EntityLoader + ?Sized,
    {
        let StaleSnapshot::EventEstimate(snapshot) = snapshot else {
            return Ok(None);
        };
        let Some(case_reference) = parent_reference(loader, snapshot.appeal_id).await? else {
            return Ok(None);
        };

        Ok(Some(EventEstimateRecord {
            id: EventEstimateId::new(snapshot.id),
            appeal_id: snapshot.appeal_id,
            case_reference,
            preparation_time: None,
            sitting_time: None,
            reporting_time: None,
        }))
    }

    fn map(&self, estimate: &EventEstimateRecord) -> Option<AppealEventEstimate> {
        Some(map_event_estimate(estimate))
    }

    fn schema_for(&self, _estimate: &EventEstimateRecord) -> SchemaKey {
        SchemaKey::AppealEventEstimate
    }

    fn topic_for(&self, _estimate: &EventEstimateRecord) -> Topic {
        Topic::EventEstimate
    }

    fn entity_type_for(&self, _estimate: &EventEstimateRecord) -> String {
        "EventEstimate".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RepresentationStrategy;

#[async_trait]
impl BroadcastStrategy for RepresentationStrategy {
    type Entity = RepresentationRecord;
    type Dto = AppealRepresentation;

    fn kind(&self) -> EntityKind {
        EntityKind::Representation
    }

    async fn load<L>(&self, loader: &L, request: &BroadcastRequest) -> LoadResult<RepresentationRecord>
    where
        L: EntityLoader + ?Sized,
    {
        loader
            .load_representation(RepresentationId::new(request.entity_id))
            .await
    }

    fn map(&self, representation: &RepresentationRecord) -> Option<AppealRepresentation> {
        Some(map_representation(representation))
    }

    fn schema_for(&self, _representation: &RepresentationRecord) -> SchemaKey {
        SchemaKey::AppealRepresentation
    }

    fn topic_for(&self, _representation: &RepresentationRecord) -> Topic {
        Topic::Representation
    }

    fn entity_type_for(&self, representation: &RepresentationRecord) -> String {
        representation.representation_type.clone()
    }
}
