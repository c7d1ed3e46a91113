//! Ticklist Store — confined on-disk checklist documents.
//!
//! Checklists are stored as individual JSON files under a single
//! directory. The store treats document contents as opaque JSON and
//! guarantees two properties:
//!
//! - **Confinement**: no checklist name can resolve to a path outside
//!   the store's root directory, regardless of traversal sequences or
//!   symlinks.
//! - **Atomic replace**: a save is all-or-nothing; a concurrent reader
//!   never observes a half-written document.

mod store;

pub use store::{ChecklistEntry, ChecklistStore};
