//! Thread-safe wrapper for concurrent index access.
//!
//! `SyncIndex` wraps a [`SpatialIndex`] in `Arc<RwLock<_>>`. Inserts take the
//! write lock; queries share the read lock. Query results are cloned out of
//! the index because borrowed views cannot outlive the guard.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! realty-index = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use realty_index::{Property, Rectangle, SyncIndex};
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = SyncIndex::new();
//! let writer = index.clone();
//!
//! let handle = thread::spawn(move || {
//!     writer
//!         .insert(Property::new("7 Oak Ave", 1.0, 1.0, 1, Rectangle::point(1.0, 1.0)))
//!         .unwrap();
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(index.range_query(&Rectangle::new(0.0, 0.0, 2.0, 2.0))?.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::compute::filter::NearQuery;
use crate::config::Config;
use crate::error::Result;
use crate::index::{IndexStats, SpatialIndex};
use parking_lot::RwLock;
use realty_types::{Property, Rectangle};
use std::sync::Arc;

/// Shared, lock-guarded handle to a [`SpatialIndex`].
///
/// Cloning is cheap and every clone sees the same index.
#[derive(Clone, Debug, Default)]
pub struct SyncIndex {
    inner: Arc<RwLock<SpatialIndex>>,
}

impl SyncIndex {
    pub fn new() -> Self {
        Self::from_index(SpatialIndex::new())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_index(SpatialIndex::with_config(config)?))
    }

    /// Take ownership of an existing index.
    pub fn from_index(index: SpatialIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn insert(&self, property: Property) -> Result<()> {
        self.inner.write().insert(property)
    }

    pub fn insert_batch<I>(&self, properties: I) -> Result<usize>
    where
        I: IntoIterator<Item = Property>,
    {
        self.inner.write().insert_batch(properties)
    }

    pub fn range_query(&self, region: &Rectangle) -> Result<Vec<Property>> {
        let guard = self.inner.read();
        let results = guard.range_query(region)?;
        Ok(results.into_iter().cloned().collect())
    }

    pub fn near_location_query(&self, query: &NearQuery) -> Result<Vec<Property>> {
        let guard = self.inner.read();
        let results = guard.near_location_query(query)?;
        Ok(results.into_iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Run `f` with shared access, for reads that want borrowed views.
    pub fn read<R>(&self, f: impl FnOnce(&SpatialIndex) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_sync_index_clones_share_state() {
        let index = SyncIndex::new();
        let other = index.clone();

        other
            .insert(Property::new("a", 1.0, 1.0, 1, Rectangle::point(1.0, 1.0)))
            .unwrap();
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_sync_index_concurrent_inserts() {
        let index = SyncIndex::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let index = index.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let x = (t * 25 + i) as f64;
                        index
                            .insert(Property::new(
                                format!("{t}-{i}"),
                                1.0,
                                1.0,
                                1,
                                Rectangle::point(x, x),
                            ))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(index.len(), 100);
        let all = index
            .range_query(&Rectangle::new(0.0, 0.0, 100.0, 100.0))
            .unwrap();
        assert_eq!(all.len(), 100);
        assert!(index.read(|inner| inner.root().encloses_contents()));
    }

    #[test]
    fn test_sync_index_near_query() {
        let index = SyncIndex::new();
        index
            .insert(Property::new("p", 50.0, 20.0, 2, Rectangle::point(3.0, 4.0)))
            .unwrap();

        let hits = index
            .near_location_query(&NearQuery::new(0.0, 0.0, 5.0))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location(), "p");
        assert_eq!(index.stats().records, 1);
    }
}
