//! # Entity Store
//!
//! Read-only keyed collections of the domain entities lifecycle records
//! reference: assets, users, locations. The ledger consults the store
//! once, at record creation, to confirm the subject exists; afterwards
//! references may dangle (an asset can be archived while its loan
//! history lives on) and lookups degrade to a raw-id display fallback
//! instead of failing.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use eam_core::EntityKind;

/// A referenced domain entity (asset, user, or location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Caller-supplied stable identifier (inventory code, username,
    /// room code).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
}

/// Weak reference from a lifecycle record to a domain entity.
///
/// Lookup-only: the record does not own the entity, and the reference
/// is allowed to dangle after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub kind: EntityKind,
    pub id: String,
}

impl SubjectRef {
    /// Reference an asset by inventory code.
    pub fn asset(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Asset,
            id: id.into(),
        }
    }

    /// Reference a user.
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::User,
            id: id.into(),
        }
    }

    /// Reference a location.
    pub fn location(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Location,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for SubjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// In-memory entity store.
///
/// The core only reads these collections; `insert` exists for seeding
/// from whatever outer layer owns the master data.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: DashMap<(EntityKind, String), Entity>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
        }
    }

    /// Seed or replace an entity.
    pub fn insert(&self, entity: Entity) {
        self.entities
            .insert((entity.kind, entity.id.clone()), entity);
    }

    /// Look up an entity by namespace and id.
    pub fn lookup(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.entities
            .get(&(kind, id.to_string()))
            .map(|e| e.value().clone())
    }

    /// Whether the subject reference currently resolves.
    pub fn resolves(&self, subject: &SubjectRef) -> bool {
        self.entities
            .contains_key(&(subject.kind, subject.id.clone()))
    }

    /// Display name for a subject, falling back to the raw id when the
    /// reference no longer resolves.
    pub fn display_name(&self, subject: &SubjectRef) -> String {
        self.lookup(subject.kind, &subject.id)
            .map(|e| e.name)
            .unwrap_or_else(|| subject.id.clone())
    }

    /// Number of entities in the store.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_asset() -> EntityStore {
        let store = EntityStore::new();
        store.insert(Entity {
            kind: EntityKind::Asset,
            id: "TS-001".into(),
            name: "Dell Latitude 5440".into(),
        });
        store
    }

    #[test]
    fn lookup_hit() {
        let store = store_with_asset();
        let entity = store.lookup(EntityKind::Asset, "TS-001").unwrap();
        assert_eq!(entity.name, "Dell Latitude 5440");
    }

    #[test]
    fn lookup_miss_is_none_not_error() {
        let store = store_with_asset();
        assert!(store.lookup(EntityKind::Asset, "TS-999").is_none());
        // Same id in a different namespace does not resolve.
        assert!(store.lookup(EntityKind::User, "TS-001").is_none());
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        let store = store_with_asset();
        assert_eq!(
            store.display_name(&SubjectRef::asset("TS-001")),
            "Dell Latitude 5440"
        );
        assert_eq!(store.display_name(&SubjectRef::asset("TS-999")), "TS-999");
    }

    #[test]
    fn resolves_checks_namespace_and_id() {
        let store = store_with_asset();
        assert!(store.resolves(&SubjectRef::asset("TS-001")));
        assert!(!store.resolves(&SubjectRef::user("TS-001")));
    }

    #[test]
    fn subject_ref_display() {
        assert_eq!(SubjectRef::asset("TS-001").to_string(), "ASSET:TS-001");
    }
}
