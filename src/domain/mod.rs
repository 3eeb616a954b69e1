//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record/report structs in one place.
//! - Make JSON and CSV output schemas explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — participant/prior records, assignment, output envelopes.
//! - `constants.rs` — stable constants (attempt cap, default output path).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or rng side effects.

pub mod constants;
pub mod models;
