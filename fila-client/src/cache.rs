//! Query cache
//!
//! In-memory cache keyed by logical resource identity ("services",
//! "queue:3", ...). A write invalidates exactly the keys it affects; the
//! next read of an invalidated key goes back to the API. There is never a
//! full-cache flush.
//!
//! Entries on different keys never interfere; concurrent writes to the
//! same key are last-write-wins, the server arbitrates the actual data.

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Cache keys for every resource family
pub mod keys {
    pub const SERVICES: &str = "services";
    pub const USERS: &str = "users";
    pub const BARBERS: &str = "barbers";
    pub const BARBER_QUEUE: &str = "barber-queue";
    pub const DASHBOARD_ADMIN_PREFIX: &str = "dashboard:admin";

    /// Key for a single queue entry
    pub fn queue_entry(id: i64) -> String {
        format!("queue:{id}")
    }

    /// Key for a single user profile
    pub fn profile(id: i64) -> String {
        format!("profile:{id}")
    }

    /// Key for one admin dashboard filter combination
    pub fn admin_dashboard(filters: &str) -> String {
        format!("{DASHBOARD_ADMIN_PREFIX}:{filters}")
    }

    /// Key for the barber dashboard period
    pub fn barber_dashboard(days: Option<u32>) -> String {
        match days {
            Some(days) => format!("dashboard:barber:{days}"),
            None => "dashboard:barber".to_string(),
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    stale: bool,
}

/// Concurrent query cache with targeted invalidation
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: DashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for `key`, if any
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.stale {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Store a fetched value, clearing any staleness mark
    pub fn put<T: Serialize>(&self, key: impl Into<String>, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries
                    .insert(key.into(), CacheEntry { value, stale: false });
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to cache value");
            }
        }
    }

    /// Mark one key stale; the next read of it re-fetches
    pub fn invalidate(&self, key: &str) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.stale = true;
        }
    }

    /// Mark every key under a prefix stale (the filtered dashboard family)
    pub fn invalidate_prefix(&self, prefix: &str) {
        for mut entry in self.entries.iter_mut() {
            if entry.key().starts_with(prefix) {
                entry.stale = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_is_targeted() {
        let cache = QueryCache::new();
        cache.put(keys::SERVICES, &vec!["haircut"]);
        cache.put(keys::USERS, &vec!["joao"]);

        cache.invalidate(keys::SERVICES);

        assert!(cache.get::<Vec<String>>(keys::SERVICES).is_none());
        assert_eq!(
            cache.get::<Vec<String>>(keys::USERS),
            Some(vec!["joao".to_string()])
        );
    }

    #[test]
    fn put_clears_staleness() {
        let cache = QueryCache::new();
        cache.put(keys::SERVICES, &1);
        cache.invalidate(keys::SERVICES);
        assert!(cache.get::<i32>(keys::SERVICES).is_none());

        cache.put(keys::SERVICES, &2);
        assert_eq!(cache.get::<i32>(keys::SERVICES), Some(2));
    }

    #[test]
    fn prefix_invalidation_covers_filter_family() {
        let cache = QueryCache::new();
        cache.put(keys::admin_dashboard("2024-05-01::"), &1);
        cache.put(keys::admin_dashboard("::3"), &2);
        cache.put(keys::barber_dashboard(Some(7)), &3);

        cache.invalidate_prefix(keys::DASHBOARD_ADMIN_PREFIX);

        assert!(cache.get::<i32>(&keys::admin_dashboard("2024-05-01::")).is_none());
        assert!(cache.get::<i32>(&keys::admin_dashboard("::3")).is_none());
        assert_eq!(cache.get::<i32>(&keys::barber_dashboard(Some(7))), Some(3));
    }

    #[test]
    fn distinct_entry_keys_per_resource() {
        assert_eq!(keys::queue_entry(7), "queue:7");
        assert_ne!(keys::queue_entry(7), keys::queue_entry(8));
        assert_eq!(keys::profile(2), "profile:2");
        assert_eq!(keys::barber_dashboard(None), "dashboard:barber");
    }
}
