//! Rendering pipeline from store contents to display markup.
//!
//! # Responsibility
//! - Select visible items per the active view filters.
//! - Build row markup as a structured tree, then materialize it to a string.
//!
//! # Invariants
//! - Rendering never mutates items; filters are view-only.
//! - Every action affordance is rendered inside the row element that carries
//!   its item ID.

pub mod filter;
pub mod list;
pub mod markup;
