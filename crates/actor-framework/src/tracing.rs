//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every actor and
//! client in the system.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable via `EnvFilter`. The output is
//! compact and hides module paths (`with_target(false)`); actors tag their events with an
//! `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per state change
//! RUST_LOG=debug cargo run    # full request payloads and list filters
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with the seeded size) and shutdown
//! - **Entity Operations**: Create, Get, List, Update, Delete
//! - **Errors**: failing hooks and unknown IDs, with the offending ID
//!
//! With `RUST_LOG=info` a create followed by a delete looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order" size=5
//! INFO Created entity_type="Order" id=CMD-006 size=6
//! INFO Deleted entity_type="Order" id=CMD-002 size=5
//! ```

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Call once at process start; a second call panics because the global default
/// subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "initial_load:list")
        .init();
}
