//! Core domain logic for ProjectBoard.
//! This crate is the single source of truth for project lifecycle invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    Project, ProjectDraft, ProjectId, ProjectStatus, ProjectValidationError,
    DESCRIPTION_MIN_CHARS, PEOPLE_MAX, PEOPLE_MIN,
};
pub use store::project_store::{MoveOutcome, ProjectStore};
pub use store::shared_store::{SharedProjectStore, SharedStoreError, SharedStoreResult};
pub use store::subscriber_registry::{
    Listener, SubscriberRegistry, SubscriptionError, SubscriptionId,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
