//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projectboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use projectboard_core::{Project, ProjectDraft, ProjectStatus, ProjectStore};
use std::sync::Arc;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // of any host UI runtime.
    println!("projectboard_core ping={}", projectboard_core::ping());
    println!(
        "projectboard_core version={}",
        projectboard_core::core_version()
    );

    // Scripted walkthrough standing in for the form/drag-drop boundary:
    // validate drafts first, then drive the store and render its snapshots.
    let mut store = ProjectStore::new();
    store.subscribe(Arc::new(|snapshot: &[Project]| {
        let active = snapshot.iter().filter(|p| p.is_active()).count();
        println!(
            "snapshot projects={} active={active} finished={}",
            snapshot.len(),
            snapshot.len() - active
        );
    }));

    let drafts = [
        ProjectDraft::new("Build API", "Design and ship v1", 3),
        ProjectDraft::new("Write docs", "Document the public surface", 1),
        ProjectDraft::new("", "too short", 9),
    ];

    let mut ids = Vec::new();
    for draft in drafts {
        match draft.validate() {
            Ok(()) => ids.push(store.add_project(draft.title, draft.description, draft.people)),
            Err(err) => println!("rejected draft: {err}"),
        }
    }

    if let Some(first) = ids.first() {
        let outcome = store.move_project(*first, ProjectStatus::Finished);
        println!("move committed={}", outcome.mutated());
    }
}
