//! notify-bus - A synchronous in-process publish/subscribe event bus.
//!
//! This crate provides a minimal notification mechanism built around three
//! inversion-of-control idioms:
//! - A publish/subscribe [`event::event_bus::EventBus`] keyed by event name
//! - Constructor dependency injection (see [`service::order_service`])
//! - Template-method lifecycle hooks (see [`runner::Runner`])
//!
//! Producers and consumers never learn each other's identity or count: both
//! sides receive an explicitly constructed bus through their constructors.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod publisher;
pub mod runner;
pub mod service;
pub mod subscriber;
