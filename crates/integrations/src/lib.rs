//! Integration layer: schema validation, entity mapping and the broadcast
//! pipeline that publishes entity changes to the external bus.

pub mod broadcast;
pub mod config;
pub mod event_bus;
pub mod loader;
pub mod mappers;
pub mod schema;

pub use broadcast::{BroadcastError, BroadcastOutcome, BroadcastRequest, Broadcaster, StaleSnapshot};
pub use config::{BroadcastConfig, ConfigError, Environment};
pub use loader::{EntityLoader, InMemoryEntityLoader, LoadResult};
pub use schema::{SchemaError, SchemaKey, SchemaSet, SchemaValidator, ValidationOutcome};
