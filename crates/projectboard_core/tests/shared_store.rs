use projectboard_core::{
    MoveOutcome, Project, ProjectStatus, SharedProjectStore, SharedStoreError, SubscriptionError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn clones_reference_one_logical_store() {
    let store = SharedProjectStore::new();
    let other_handle = store.clone();

    store
        .add_project("Build API", "Design and ship v1", 3)
        .expect("add through first handle should succeed");

    let snapshot = other_handle
        .snapshot()
        .expect("snapshot through second handle should succeed");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Build API");
}

#[test]
fn shared_store_is_usable_from_another_thread() {
    let store = SharedProjectStore::new();
    let id = store
        .add_project("Build API", "Design and ship v1", 3)
        .expect("add should succeed");

    let worker_handle = store.clone();
    let worker = thread::spawn(move || {
        worker_handle
            .move_project(id, ProjectStatus::Finished)
            .expect("move from worker thread should succeed")
    });
    let outcome = worker.join().expect("worker thread should not panic");

    assert_eq!(outcome, MoveOutcome::Moved);
    let finished = store
        .projects_with_status(ProjectStatus::Finished)
        .expect("filtered snapshot should succeed");
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, id);
}

#[test]
fn shared_subscribe_delivers_notifications() {
    let store = SharedProjectStore::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_in_listener = Arc::clone(&count);
    let subscription = store
        .subscribe(Arc::new(move |_snapshot: &[Project]| {
            count_in_listener.fetch_add(1, Ordering::SeqCst);
        }))
        .expect("subscribe should succeed");

    store
        .add_project("Build API", "Design and ship v1", 3)
        .expect("add should succeed");
    assert_eq!(count.load(Ordering::SeqCst), 1);

    store
        .unsubscribe(subscription)
        .expect("unsubscribe should succeed");
    store
        .add_project("Write docs", "Document the public surface", 1)
        .expect("second add should succeed");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_of_unknown_handle_surfaces_registry_error() {
    let store = SharedProjectStore::new();
    let subscription = store
        .subscribe(Arc::new(|_snapshot: &[Project]| {}))
        .expect("subscribe should succeed");
    store
        .unsubscribe(subscription)
        .expect("first unsubscribe should succeed");

    let err = store
        .unsubscribe(subscription)
        .expect_err("second unsubscribe must fail");
    assert_eq!(
        err,
        SharedStoreError::Subscription(SubscriptionError::NotSubscribed(subscription))
    );
}

#[test]
fn from_store_preserves_existing_projects() {
    let mut plain = projectboard_core::ProjectStore::new();
    plain.add_project("Seeded", "seeded description", 2);

    let shared = SharedProjectStore::from_store(plain);
    assert_eq!(shared.len().expect("len should succeed"), 1);
    assert!(!shared.is_empty().expect("is_empty should succeed"));
}
