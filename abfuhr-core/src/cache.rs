//! Time-bounded, capacity-bounded schedule cache using moka.

use std::time::Duration;

use moka::future::Cache;
use moka::policy::EvictionPolicy;

use crate::model::Schedule;

/// Default maximum number of cached municipalities.
pub const DEFAULT_CAPACITY: u64 = 100;
/// Default lifetime of a cached schedule.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Sizing for a [`ScheduleCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before least-recently-used eviction.
    pub capacity: u64,
    /// Time after insertion at which an entry stops being served.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL,
        }
    }
}

/// Schedules keyed by the caller-supplied municipality display name.
///
/// Cloning is cheap and yields a handle to the same underlying store.
#[derive(Clone)]
pub struct ScheduleCache {
    inner: Cache<String, Schedule>,
}

impl ScheduleCache {
    /// Build an empty cache with the given bounds.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.ttl)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { inner }
    }

    /// Return the live entry for `name`, if any.
    pub async fn get(&self, name: &str) -> Option<Schedule> {
        self.inner.get(name).await
    }

    /// Store `schedule` under `name`, replacing any previous entry wholesale.
    ///
    /// Capacity is enforced before this returns, so the cache never holds
    /// more than its configured number of entries.
    pub async fn insert(&self, name: String, schedule: Schedule) {
        self.inner.insert(name, schedule).await;
        self.inner.run_pending_tasks().await;
    }

    /// Number of entries as of the last housekeeping run.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Apply pending evictions and expirations.
    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Drop every entry. Used at shutdown.
    pub async fn drain(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
    }
}

impl Default for ScheduleCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Schedule {
        Schedule {
            municipality: Some(name.to_owned()),
            events: Vec::new(),
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_value() {
        let cache = ScheduleCache::default();
        cache.insert("Bisamberg".to_owned(), named("Bisamberg")).await;

        assert_eq!(
            cache.get("Bisamberg").await,
            Some(named("Bisamberg")),
            "freshly inserted entry must be served"
        );
        assert_eq!(cache.get("Ernstbrunn").await, None, "unknown key is absent");
    }

    #[tokio::test]
    async fn insert_replaces_wholesale() {
        let cache = ScheduleCache::default();
        cache.insert("Bisamberg".to_owned(), named("old")).await;
        cache.insert("Bisamberg".to_owned(), named("new")).await;

        assert_eq!(cache.get("Bisamberg").await, Some(named("new")), "latest value wins");
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = ScheduleCache::new(CacheConfig {
            capacity: DEFAULT_CAPACITY,
            ttl: Duration::from_millis(50),
        });
        cache.insert("Bisamberg".to_owned(), named("Bisamberg")).await;
        assert!(cache.get("Bisamberg").await.is_some(), "entry is live before ttl");

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(cache.get("Bisamberg").await, None, "expired entry must not be served");
    }

    #[tokio::test]
    async fn overflow_evicts_least_recently_used() {
        let cache = ScheduleCache::default();
        for index in 0..DEFAULT_CAPACITY {
            cache.insert(format!("m{index}"), named("x")).await;
        }

        // Touch the oldest entry so the second oldest becomes the eviction victim.
        assert!(cache.get("m0").await.is_some(), "m0 is cached");

        cache.insert("overflow".to_owned(), named("x")).await;

        assert_eq!(cache.entry_count(), DEFAULT_CAPACITY, "size stays at capacity");
        assert!(cache.get("m0").await.is_some(), "recently read entry survives");
        assert!(cache.get("overflow").await.is_some(), "new entry is admitted");
        assert_eq!(cache.get("m1").await, None, "least recently used entry is evicted");
    }

    #[tokio::test]
    async fn capacity_holds_right_after_each_insert() {
        let cache = ScheduleCache::default();
        for index in 0..=DEFAULT_CAPACITY {
            cache.insert(format!("m{index}"), named("x")).await;
            assert!(cache.entry_count() <= DEFAULT_CAPACITY, "bound holds after insert {index}");
        }

        let mut live = 0;
        for index in 0..=DEFAULT_CAPACITY {
            if cache.get(&format!("m{index}")).await.is_some() {
                live += 1;
            }
        }
        assert_eq!(live, DEFAULT_CAPACITY, "exactly one entry was evicted");
        assert_eq!(cache.get("m0").await, None, "the oldest untouched entry went");
    }

    #[tokio::test]
    async fn drain_empties_the_cache() {
        let cache = ScheduleCache::default();
        cache.insert("Bisamberg".to_owned(), named("Bisamberg")).await;
        cache.drain().await;

        assert_eq!(cache.get("Bisamberg").await, None, "drained cache serves nothing");
    }
}
