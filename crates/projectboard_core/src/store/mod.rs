//! In-memory state store and change-notification layer.
//!
//! # Responsibility
//! - Own the canonical project collection behind a single-writer API.
//! - Deliver consistent post-mutation snapshots to registered listeners.
//!
//! # Invariants
//! - Every committed mutation fires exactly one notification; rejected
//!   mutations fire none.
//! - Listeners observe defensive copies, never store internals.

pub mod project_store;
pub mod shared_store;
pub mod subscriber_registry;
