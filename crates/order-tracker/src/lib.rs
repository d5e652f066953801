//! # Order Tracker
//!
//! An order-tracking table built on the actor framework.
//!
//! - **[model]**: [`Order`](model::Order), its DTOs, [`OrderFilter`](model::OrderFilter)
//!   and the demo seed data.
//! - **[order_actor]**: the [`ActorEntity`](actor_framework::ActorEntity) implementation
//!   and factory functions for the order actor.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the typed wrapper over the
//!   actor's channel.
//! - **[store]**: the [`OrderStore`](store::OrderStore) capability trait and its
//!   actor-backed implementation with simulated latency.
//! - **[view]**: the headless [`OrderView`](view::OrderView): sorting, filtering, the
//!   create/edit dialog, delete confirmation, notifications and table rendering.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) starts and stops the actor.
//! - **[config]**: [`TrackerConfig`](config::TrackerConfig).

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod store;
pub mod view;
