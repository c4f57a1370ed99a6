use appeals_core::records::EventKind;
use appeals_core::{
    AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
};
use appeals_events::{
    ChangeType, EntityKind, EnvelopeMetadata, PublishEnvelope, Publisher, Topic,
};

use super::outcome::{BroadcastError, BroadcastOutcome};
use super::request::{
    BroadcastRequest, EventEstimateSnapshot, EventSnapshot, ServiceUserSnapshot, StaleSnapshot,
};
use super::strategies::{
    AppealStrategy, DocumentStrategy, EventEstimateStrategy, EventStrategy,
    RepresentationStrategy, ServiceUserStrategy,
};
use super::strategy::BroadcastStrategy;
use crate::config::BroadcastConfig;
use crate::loader::EntityLoader;
use crate::mappers::{DocumentMove, map_document_move};
use crate::schema::{SchemaKey, SchemaValidator, ValidationOutcome};

/// Entity type published with bulk document-move messages.
const DOCUMENT_MOVE_ENTITY_TYPE: &str = "DocumentMove";

/// Broadcast pipeline for entity changes.
///
/// ```text
/// BroadcastRequest
///   ↓
/// 1. Guard: broadcasting active for this environment?
///   ↓
/// 2. Load the row (or rebuild it from a stale snapshot on delete)
///   ↓
/// 3. Map to the wire shape
///   ↓
/// 4. Validate against the selected schema
///   ↓
/// 5. Publish one envelope
/// ```
///
/// ## Error Semantics
///
/// - Data problems (row missing, payload invalid, publisher refused) are
///   `Ok(outcome)` with `is_sent() == false`; the caller logs and moves on.
/// - A missing schema or a failing entity store is `Err(BroadcastError)`.
///
/// A broadcast never retries and never undoes the write that triggered it.
#[derive(Debug)]
pub struct Broadcaster<L, P> {
    loader: L,
    publisher: P,
    validator: SchemaValidator,
    config: BroadcastConfig,
}

impl<L, P> Broadcaster<L, P> {
    pub fn new(loader: L, publisher: P, validator: SchemaValidator, config: BroadcastConfig) -> Self {
        Self {
            loader,
            publisher,
            validator,
            config,
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.config
    }

    pub fn into_parts(self) -> (L, P) {
        (self.loader, self.publisher)
    }
}

impl<L, P> Broadcaster<L, P>
where
    L: EntityLoader,
    P: Publisher,
{
    /// Broadcast one entity change.
    pub async fn broadcast(
        &self,
        request: &BroadcastRequest,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        match request.entity_kind {
            EntityKind::Appeal => self.run(&AppealStrategy, request).await,
            EntityKind::Document => self.run(&DocumentStrategy, request).await,
            EntityKind::ServiceUser => {
                let strategy = ServiceUserStrategy::new(self.config.source_system_id.clone());
                self.run(&strategy, request).await
            }
            EntityKind::SiteVisitEvent => self.run(&EventStrategy::site_visit(), request).await,
            EntityKind::HearingEvent => self.run(&EventStrategy::hearing(), request).await,
            EntityKind::EventEstimate => self.run(&EventEstimateStrategy, request).await,
            EntityKind::Representation => self.run(&RepresentationStrategy, request).await,
        }
    }

    /// Broadcast several changes strictly one after another.
    ///
    /// Stops at the first `Err`; "not sent" outcomes do not stop the sequence.
    pub async fn broadcast_sequence(
        &self,
        requests: &[BroadcastRequest],
    ) -> Result<Vec<BroadcastOutcome>, BroadcastError> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            outcomes.push(self.broadcast(request).await?);
        }
        Ok(outcomes)
    }

    pub async fn broadcast_appeal(
        &self,
        id: AppealId,
        change_type: ChangeType,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&BroadcastRequest::new(EntityKind::Appeal, id.get(), change_type))
            .await
    }

    /// `version: None` broadcasts the document's latest version.
    pub async fn broadcast_document(
        &self,
        id: DocumentId,
        version: Option<i32>,
        change_type: ChangeType,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        let mut request = BroadcastRequest::new(EntityKind::Document, id.get(), change_type);
        request.version = version;
        self.broadcast(&request).await
    }

    pub async fn broadcast_service_user(
        &self,
        id: ServiceUserId,
        change_type: ChangeType,
        snapshot: Option<ServiceUserSnapshot>,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        let mut request = BroadcastRequest::new(EntityKind::ServiceUser, id.get(), change_type);
        request.stale_snapshot = snapshot.map(StaleSnapshot::ServiceUser);
        self.broadcast(&request).await
    }

    pub async fn broadcast_event(
        &self,
        id: EventId,
        kind: EventKind,
        change_type: ChangeType,
        snapshot: Option<EventSnapshot>,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        let entity_kind = match kind {
            EventKind::SiteVisit => EntityKind::SiteVisitEvent,
            EventKind::Hearing => EntityKind::HearingEvent,
        };
        let mut request = BroadcastRequest::new(entity_kind, id.get(), change_type);
        request.stale_snapshot = snapshot.map(StaleSnapshot::Event);
        self.broadcast(&request).await
    }

    pub async fn broadcast_event_estimate(
        &self,
        id: EventEstimateId,
        change_type: ChangeType,
        snapshot: Option<EventEstimateSnapshot>,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        let mut request = BroadcastRequest::new(EntityKind::EventEstimate, id.get(), change_type);
        request.stale_snapshot = snapshot.map(StaleSnapshot::EventEstimate);
        self.broadcast(&request).await
    }

    pub async fn broadcast_representation(
        &self,
        id: RepresentationId,
        change_type: ChangeType,
    ) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&BroadcastRequest::new(
            EntityKind::Representation,
            id.get(),
            change_type,
        ))
        .await
    }

    /// Publish one bulk message listing documents whose blobs must be copied.
    ///
    /// All-or-nothing: if any entry fails validation nothing is published.
    /// Issue paths are prefixed with the entry's index, e.g. `/1/documentId`.
    pub async fn broadcast_document_moves(
        &self,
        moves: &[DocumentMove],
    ) -> Result<BroadcastOutcome, BroadcastError> {
        if !self.config.broadcasts_active() {
            tracing::debug!(count = moves.len(), "broadcasts disabled; document moves not sent");
            return Ok(BroadcastOutcome::Disabled);
        }
        if moves.is_empty() {
            return Ok(BroadcastOutcome::Skipped);
        }

        let mut payloads = Vec::with_capacity(moves.len());
        let mut issues = Vec::new();
        for (index, moved) in moves.iter().enumerate() {
            let payload = serde_json::to_value(map_document_move(moved))?;
            if let ValidationOutcome::Invalid(found) = self
                .validator
                .validate_event(SchemaKey::DocumentToMove, &payload)?
            {
                issues.extend(found.into_iter().map(|mut issue| {
                    issue.path = format!("/{index}{}", issue.path);
                    issue
                }));
            }
            payloads.push(payload);
        }

        if let Some(first) = issues.first() {
            tracing::error!(
                count = moves.len(),
                path = %first.path,
                error = %first.message,
                "document move payload failed schema validation"
            );
            return Ok(BroadcastOutcome::Invalid(issues));
        }

        let envelope = PublishEnvelope::new(
            Topic::DocumentMove,
            payloads,
            ChangeType::Create,
            EnvelopeMetadata::new(DOCUMENT_MOVE_ENTITY_TYPE, self.config.source_system_id.clone()),
        );
        let outcome = self.publish(envelope).await;
        if outcome.is_sent() {
            tracing::info!(count = moves.len(), "document moves broadcast");
        }
        Ok(outcome)
    }

    async fn run<S>(
        &self,
        strategy: &S,
        request: &BroadcastRequest,
    ) -> Result<BroadcastOutcome, BroadcastError>
    where
        S: BroadcastStrategy,
    {
        let kind = strategy.kind();
        let id = request.entity_id;
        let change = request.change_type;

        if !self.config.broadcasts_active() {
            tracing::debug!(entity_kind = %kind, entity_id = id, "broadcasts disabled");
            return Ok(BroadcastOutcome::Disabled);
        }

        let entity = match strategy.load(&self.loader, request).await? {
            Some(entity) => entity,
            None if request.is_delete() => match self.reconstruct(strategy, request).await? {
                Some(entity) => entity,
                None => {
                    tracing::error!(
                        entity_kind = %kind,
                        entity_id = id,
                        has_snapshot = request.stale_snapshot.is_some(),
                        "deleted entity could not be reconstructed; not broadcasting"
                    );
                    return Ok(BroadcastOutcome::NotFound);
                }
            },
            None => {
                tracing::error!(
                    entity_kind = %kind,
                    entity_id = id,
                    change_type = %change,
                    "entity not found; not broadcasting"
                );
                return Ok(BroadcastOutcome::NotFound);
            }
        };

        let Some(dto) = strategy.map(&entity) else {
            return Ok(BroadcastOutcome::Skipped);
        };

        let schema = strategy.schema_for(&entity);
        let payload = serde_json::to_value(&dto)?;
        if let ValidationOutcome::Invalid(issues) = self.validator.validate_event(schema, &payload)? {
            if let Some(first) = issues.first() {
                tracing::error!(
                    entity_kind = %kind,
                    entity_id = id,
                    schema = %schema,
                    path = %first.path,
                    error = %first.message,
                    "payload failed schema validation; not broadcasting"
                );
            }
            return Ok(BroadcastOutcome::Invalid(issues));
        }

        let topic = strategy.topic_for(&entity);
        let metadata = EnvelopeMetadata::new(
            strategy.entity_type_for(&entity),
            self.config.source_system_id.clone(),
        );
        let outcome = self
            .publish(PublishEnvelope::single(topic, payload, change, metadata))
            .await;

        if outcome.is_sent() {
            tracing::info!(
                entity_kind = %kind,
                entity_id = id,
                change_type = %change,
                topic = %topic,
                "entity broadcast"
            );
        }
        Ok(outcome)
    }

    async fn reconstruct<S>(
        &self,
        strategy: &S,
        request: &BroadcastRequest,
    ) -> Result<Option<S::Entity>, BroadcastError>
    where
        S: BroadcastStrategy,
    {
        let Some(snapshot) = &request.stale_snapshot else {
            return Ok(None);
        };
        Ok(strategy.reconstruct(&self.loader, snapshot).await?)
    }

    async fn publish(&self, envelope: PublishEnvelope) -> BroadcastOutcome {
        let topic = envelope.topic();
        match self.publisher.send(envelope).await {
            Ok(true) => BroadcastOutcome::Sent,
            Ok(false) => {
                tracing::error!(topic = %topic, "publisher did not accept message");
                BroadcastOutcome::PublishFailed
            }
            Err(e) => {
                tracing::error!(topic = %topic, error = %e, "publish failed");
                BroadcastOutcome::PublishFailed
            }
        }
    }
}
