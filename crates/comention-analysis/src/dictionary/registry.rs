//! External id ⇄ dense `EntityId` mapping.

use comention_core::types::EntityId;
use lasso::{Key, Rodeo, Spur};

/// Bijective map between external entity ids and [`EntityId`]s.
///
/// Ids are assigned contiguously from 0 in first-registration order. One
/// registry is shared by every dictionary of a run, so a case-sensitive and
/// a case-insensitive synonym of the same external id resolve to one entity.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    ids: Rodeo<Spur>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self { ids: Rodeo::new() }
    }

    /// Return the id for `external`, assigning the next one if unseen.
    pub fn register(&mut self, external: &str) -> EntityId {
        let key = self.ids.get_or_intern(external);
        EntityId(key.into_usize() as u32)
    }

    /// Look up an already registered external id.
    pub fn get(&self, external: &str) -> Option<EntityId> {
        self.ids.get(external).map(|key| EntityId(key.into_usize() as u32))
    }

    /// The external id behind `id`, if it was issued by this registry.
    pub fn resolve(&self, id: EntityId) -> Option<&str> {
        Spur::try_from_usize(id.index()).and_then(|key| self.ids.try_resolve(&key))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &str)> + '_ {
        self.ids
            .iter()
            .map(|(key, name)| (EntityId(key.into_usize() as u32), name))
    }
}
