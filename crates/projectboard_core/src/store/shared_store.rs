//! Shared store handle for multi-threaded hosts.
//!
//! # Responsibility
//! - Provide one clonable handle so every collaborator references the same
//!   logical store.
//! - Guard the read/mutate/notify window with one mutual-exclusion lock.
//!
//! # Invariants
//! - The single-writer invariant of `ProjectStore` holds across threads.
//! - Listeners run while the lock is held; a listener must not call back
//!   into the same shared store.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{MoveOutcome, ProjectStore};
use crate::store::subscriber_registry::{Listener, SubscriptionError, SubscriptionId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedStoreResult<T> = Result<T, SharedStoreError>;

/// Failure of a shared-store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedStoreError {
    /// A previous writer panicked while holding the store lock.
    Poisoned,
    /// Subscription bookkeeping failure from the underlying registry.
    Subscription(SubscriptionError),
}

impl Display for SharedStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poisoned => write!(f, "project store lock poisoned by an earlier panic"),
            Self::Subscription(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SharedStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Poisoned => None,
            Self::Subscription(err) => Some(err),
        }
    }
}

impl From<SubscriptionError> for SharedStoreError {
    fn from(value: SubscriptionError) -> Self {
        Self::Subscription(value)
    }
}

/// Clonable handle to one logical [`ProjectStore`].
///
/// Every clone references the same store, preserving the "exactly one
/// canonical collection" semantics without a hidden global. Each operation
/// holds the lock across the full mutate-then-notify window, so listeners
/// always observe fully applied mutations in order.
#[derive(Debug, Clone, Default)]
pub struct SharedProjectStore {
    inner: Arc<Mutex<ProjectStore>>,
}

impl SharedProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already populated store.
    pub fn from_store(store: ProjectStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Registers a listener for future snapshot notifications.
    pub fn subscribe(&self, listener: Listener<Project>) -> SharedStoreResult<SubscriptionId> {
        Ok(self.lock()?.subscribe(listener))
    }

    /// Removes a previously registered listener.
    ///
    /// # Errors
    /// - `Subscription(NotSubscribed)` for unknown or already-removed
    ///   handles.
    pub fn unsubscribe(&self, id: SubscriptionId) -> SharedStoreResult<()> {
        self.lock()?.unsubscribe(id)?;
        Ok(())
    }

    /// Appends a new `Active` project; see [`ProjectStore::add_project`].
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> SharedStoreResult<ProjectId> {
        Ok(self.lock()?.add_project(title, description, people))
    }

    /// Moves one project; see [`ProjectStore::move_project`].
    pub fn move_project(
        &self,
        id: ProjectId,
        new_status: ProjectStatus,
    ) -> SharedStoreResult<MoveOutcome> {
        Ok(self.lock()?.move_project(id, new_status))
    }

    /// Returns a defensive copy of the full collection in insertion order.
    pub fn snapshot(&self) -> SharedStoreResult<Vec<Project>> {
        Ok(self.lock()?.snapshot())
    }

    /// Returns a defensive copy filtered to one status.
    pub fn projects_with_status(&self, status: ProjectStatus) -> SharedStoreResult<Vec<Project>> {
        Ok(self.lock()?.projects_with_status(status))
    }

    pub fn len(&self) -> SharedStoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> SharedStoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ProjectStore>, SharedStoreError> {
        self.inner.lock().map_err(|_| SharedStoreError::Poisoned)
    }
}
