//! Domain model for project proposals.
//!
//! # Responsibility
//! - Define the canonical data structures used by the store core.
//! - Keep boundary validation rules next to the record they protect.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Lifecycle state is restricted to the closed `ProjectStatus` set.

pub mod project;
