//! Canonical in-memory project store.
//!
//! # Responsibility
//! - Own the ordered project collection as the single mutation authority.
//! - Apply lifecycle transitions and fan out post-mutation snapshots.
//!
//! # Invariants
//! - Insertion order is preserved and defines snapshot/rendering order.
//! - Exactly one notification fires per committed mutation; rejected
//!   mutations (`NoChange`, `NotFound`) fire none.
//! - Listeners only ever see defensive copies of the collection.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::subscriber_registry::{
    Listener, SubscriberRegistry, SubscriptionError, SubscriptionId,
};
use log::{debug, info};

/// Effect of a [`ProjectStore::move_project`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed; one notification fired.
    Moved,
    /// Project already had the requested status; nothing fired.
    NoChange,
    /// No project with the given id exists; nothing fired.
    NotFound,
}

impl MoveOutcome {
    /// Returns whether the call committed a mutation.
    pub fn mutated(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Single-writer source of truth for all tracked projects.
///
/// Construct one instance at startup and hand it to every collaborator;
/// there is no hidden global. Hosts running more than one thread wrap it in
/// [`SharedProjectStore`](crate::store::shared_store::SharedProjectStore)
/// instead of sharing it directly.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    subscribers: SubscriberRegistry<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for future snapshot notifications.
    ///
    /// # Contract
    /// - Fires from the next committed mutation on; never retroactively.
    pub fn subscribe(&mut self, listener: Listener<Project>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Removes a previously registered listener.
    ///
    /// # Errors
    /// - Returns `NotSubscribed` for unknown or already-removed handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), SubscriptionError> {
        self.subscribers.unsubscribe(id)
    }

    /// Appends a new `Active` project built from caller-validated input.
    ///
    /// # Contract
    /// - Inputs were validated at the presentation boundary
    ///   ([`ProjectDraft::validate`]); the store does not re-check them and
    ///   will keep whatever it is handed.
    /// - The project is appended at the end of the collection.
    /// - All listeners are notified with a full snapshot.
    /// - Returns the generated stable id.
    ///
    /// [`ProjectDraft::validate`]: crate::model::project::ProjectDraft::validate
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);

        info!(
            "event=project_added module=store status=ok id={id} people={people} total={}",
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Moves one project to a new lifecycle status.
    ///
    /// # Contract
    /// - Lookup is a linear scan; the collection is expected to stay small.
    /// - `NotFound` and `NoChange` leave the store untouched and fire no
    ///   notification.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!("event=project_move_skipped module=store status=ok id={id} reason=not_found");
            return MoveOutcome::NotFound;
        };

        if project.status == new_status {
            debug!("event=project_move_skipped module=store status=ok id={id} reason=no_change");
            return MoveOutcome::NoChange;
        }

        project.status = new_status;
        info!(
            "event=project_moved module=store status=ok id={id} new_status={}",
            new_status.as_str()
        );
        self.notify();
        MoveOutcome::Moved
    }

    /// Returns a defensive copy of the full collection in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns a defensive copy filtered to one status, insertion order kept.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of currently registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        self.subscribers.notify_all(&snapshot);
    }
}
