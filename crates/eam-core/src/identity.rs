//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the record lifecycle
//! manager. These prevent accidental identifier confusion: you cannot
//! pass an `AssetCode` where an `ActorId` is expected.
//!
//! Record identifiers are random UUIDs assigned by the ledger at
//! creation; asset codes and actor identifiers are caller-supplied
//! strings (inventory codes like `TS-001`, usernames) validated to be
//! non-empty at construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EamError;

/// Unique identifier for a lifecycle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a new random record identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record:{}", self.0)
    }
}

/// Inventory code of a physical asset (e.g. `TS-001`).
///
/// Caller-supplied, stable across the asset's life. Non-empty by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCode(String);

impl AssetCode {
    /// Construct an asset code, rejecting empty or whitespace-only input.
    pub fn new(code: impl Into<String>) -> Result<Self, EamError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(EamError::Validation("asset code must not be empty".into()));
        }
        Ok(Self(code))
    }

    /// Access the inner code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of the user performing a ledger operation.
///
/// Recorded verbatim in history entries; the ledger does not resolve or
/// authenticate actors (authentication is an outer-layer concern).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(String);

impl ActorId {
    /// Construct an actor identity, rejecting empty input.
    pub fn new(actor: impl Into<String>) -> Result<Self, EamError> {
        let actor = actor.into();
        if actor.trim().is_empty() {
            return Err(EamError::Validation("actor id must not be empty".into()));
        }
        Ok(Self(actor))
    }

    /// Access the inner identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Namespace of a referenced domain entity.
///
/// One definition, exhaustive `match` everywhere. Adding a namespace
/// forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// A physical asset under management.
    Asset,
    /// A system user (borrower, approver, auditor).
    User,
    /// A building, warehouse, or room.
    Location,
}

impl EntityKind {
    /// Canonical name of this namespace (e.g. `ASSET`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::User => "USER",
            Self::Location => "LOCATION",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
