//! # eam-core — Foundational Types for the EAM Record Lifecycle Manager
//!
//! Defines the type-system primitives every other crate in the workspace
//! builds on. `eam-core` depends on nothing internal; it is the leaf of
//! the crate DAG.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `RecordId`, `AssetCode`,
//!    `ActorId` are newtypes with constructors. No bare strings or bare
//!    UUIDs for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so identical instants always render
//!    identically in history entries and exports.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `eam-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::EamError;
pub use identity::{ActorId, AssetCode, EntityKind, RecordId};
pub use temporal::Timestamp;
