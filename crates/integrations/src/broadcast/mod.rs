//! Entity change broadcasting: load → map → validate → publish.

mod broadcaster;
mod outcome;
mod request;
mod strategies;
mod strategy;

pub use broadcaster::Broadcaster;
pub use outcome::{BroadcastError, BroadcastOutcome};
pub use request::{
    BroadcastRequest, EventEstimateSnapshot, EventSnapshot, ServiceUserSnapshot, StaleSnapshot,
};
pub use strategies::{
    AppealStrategy, DocumentStrategy, EventEstimateStrategy, EventStrategy,
    RepresentationStrategy, ServiceUserStrategy,
};
pub use strategy::BroadcastStrategy;
