//! # System Lifecycle
//!
//! This module manages the runtime lifecycle of the order tracker: starting the order
//! actor, handing out stores bound to it, and shutting it down.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem::new`] creates the actor from a [`TrackerConfig`](crate::config::TrackerConfig)
//! (seeded with the demo orders or empty) and spawns its run loop. Views receive an
//! [`ActorOrderStore`](crate::store::ActorOrderStore) through [`OrderSystem::store`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - every view and store holds a client clone; dropping the last
//!    one closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final size** and the task finishes
//! 4. **Await completion** - [`OrderSystem::shutdown`] joins the task
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `RUST_LOG`-driven subscriber:
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes
//! RUST_LOG=debug cargo run     # full payloads
//! ```

pub mod order_system;

pub use actor_framework::tracing::setup_tracing;
pub use order_system::*;
