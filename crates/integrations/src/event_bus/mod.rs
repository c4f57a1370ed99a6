//! Infrastructure-backed publishers.
//!
//! The publisher abstraction lives in `appeals-events` as pure mechanics.
//! This module provides implementations that talk to a real bus (Redis).

#[cfg(feature = "redis")]
pub mod redis_publisher;

#[cfg(feature = "redis")]
pub use redis_publisher::RedisPublisher;
