//! UI wiring: boundary contracts, click resolution, event dispatch.
//!
//! # Responsibility
//! - Define the traits the hosting page implements.
//! - Turn structured UI events into store mutations and re-renders.
//!
//! # Invariants
//! - One event is handled to completion before the next one starts.
//! - Unresolvable events are absorbed with a debug diagnostic, never
//!   surfaced.

pub mod boundary;
pub mod controller;
pub mod target;
