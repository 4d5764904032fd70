//! In-memory store and its mutation surface.
//!
//! # Responsibility
//! - Own the ordered item collection and the hide-completed flag.
//! - Apply user-action mutations in place under a no-op-on-miss policy.
//!
//! # Invariants
//! - Item IDs are unique within the store and never reused.
//! - Mutations never reorder surviving items.

pub mod list_store;
