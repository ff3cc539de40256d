//! Process-wide metadata caches.
//!
//! Entries live until [`flush_all`] is called. Values are shared behind
//! `Arc`, so a cached collection can be held across a flush.

use quarry_core::schema::{DbFieldCollection, Entity, EntityMeta};

use dashmap::DashMap;
use std::{
    any::TypeId,
    sync::{Arc, OnceLock},
};

/// Entity descriptions keyed by the entity's type.
#[derive(Debug, Default)]
pub struct EntityCache {
    entries: DashMap<TypeId, Arc<EntityMeta>>,
}

/// Resolved table columns keyed by connection identity and table name.
#[derive(Debug, Default)]
pub struct DbFieldCache {
    /// Keyed by (driver URL, lower-cased table name)
    entries: DashMap<(String, String), Arc<DbFieldCollection>>,
}

impl EntityCache {
    /// The process-wide instance.
    pub fn global() -> &'static EntityCache {
        static CACHE: OnceLock<EntityCache> = OnceLock::new();
        CACHE.get_or_init(EntityCache::default)
    }

    /// Returns the description of `T`, describing it on first use.
    pub fn get<T: Entity>(&self) -> Arc<EntityMeta> {
        self.entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Arc::new(T::describe()))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flush(&self) {
        self.entries.clear();
    }
}

impl DbFieldCache {
    /// The process-wide instance.
    pub fn global() -> &'static DbFieldCache {
        static CACHE: OnceLock<DbFieldCache> = OnceLock::new();
        CACHE.get_or_init(DbFieldCache::default)
    }

    pub fn get(&self, url: &str, table: &str) -> Option<Arc<DbFieldCollection>> {
        self.entries
            .get(&key(url, table))
            .map(|entry| entry.value().clone())
    }

    /// Stores `fields` unless an entry already exists, and returns the stored
    /// collection. Concurrent resolutions of the same table therefore all
    /// observe the first one inserted.
    pub fn insert(
        &self,
        url: &str,
        table: &str,
        fields: Arc<DbFieldCollection>,
    ) -> Arc<DbFieldCollection> {
        self.entries
            .entry(key(url, table))
            .or_insert(fields)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flush(&self) {
        self.entries.clear();
    }
}

fn key(url: &str, table: &str) -> (String, String) {
    (url.to_string(), table.to_lowercase())
}

/// Clears both process-wide caches.
pub fn flush_all() {
    let entities = EntityCache::global();
    let db_fields = DbFieldCache::global();

    tracing::debug!(
        entities = entities.len(),
        tables = db_fields.len(),
        "flushing metadata caches"
    );

    entities.flush();
    db_fields.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::{
        query::Type,
        schema::{DbField, Property},
        Dialect,
    };

    struct Person;

    impl Entity for Person {
        fn describe() -> EntityMeta {
            EntityMeta::new("Person", "Person").property(Property::new("Id", Type::I64).primary())
        }
    }

    #[test]
    fn entity_is_described_once() {
        let cache = EntityCache::default();

        let first = cache.get::<Person>();
        let second = cache.get::<Person>();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.flush();
        assert!(cache.is_empty());
        assert!(!Arc::ptr_eq(&first, &cache.get::<Person>()));
    }

    #[test]
    fn table_key_ignores_case_but_not_url() {
        let cache = DbFieldCache::default();
        let fields = Arc::new(DbFieldCollection::new([DbField::new(
            "Id",
            Type::I64,
            Dialect::Sqlite,
        )]));

        cache.insert("sqlite::memory:", "Person", fields.clone());

        let hit = cache.get("sqlite::memory:", "PERSON").unwrap();
        assert!(Arc::ptr_eq(&hit, &fields));
        assert!(cache.get("sqlite:other.db", "Person").is_none());
    }

    #[test]
    fn first_insert_wins() {
        let cache = DbFieldCache::default();
        let first = Arc::new(DbFieldCollection::new(Vec::<DbField>::new()));
        let second = Arc::new(DbFieldCollection::new(Vec::<DbField>::new()));

        let stored = cache.insert("url", "t", first.clone());
        assert!(Arc::ptr_eq(&stored, &first));

        let stored = cache.insert("url", "T", second);
        assert!(Arc::ptr_eq(&stored, &first));
    }
}
