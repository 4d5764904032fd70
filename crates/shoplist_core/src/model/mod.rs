//! Domain model for the checkable list.
//!
//! # Responsibility
//! - Define the canonical data structure behind store and renderer logic.
//!
//! # Invariants
//! - Every domain object is identified by a stable `ItemId`.
//! - Deletion is a hard removal from the store; there are no tombstones.

pub mod item;
