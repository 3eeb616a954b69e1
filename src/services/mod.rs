//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `roster.rs` — participant set + prior-period pairing lookup.
//! - `matching.rs` — constrained random assignment generator.
//! - `input.rs` — CSV record loading with path/format checks.
//! - `report.rs` — CSV report writing.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod input;
pub mod matching;
pub mod output;
pub mod report;
pub mod roster;
