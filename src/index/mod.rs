//! The spatial index over property listings.
//!
//! A single root node owns every listing. Inserts are validated at the
//! boundary, then delegated to the root, which restores its bounding box
//! before returning. Range queries walk the tree depth-first and skip every
//! subtree whose box misses the query region; near-location queries run a
//! range query over the square enclosing the search disc and keep only the
//! survivors that pass the exact distance and attribute tests.
//!
//! ```rust
//! use realty_index::{NearQuery, Rectangle, SpatialIndex};
//!
//! let mut index = SpatialIndex::new();
//! index.insert_property("12 Elm St", 250_000.0, 120.0, 3, Rectangle::point(3.0, 4.0))?;
//!
//! let hits = index.range_query(&Rectangle::new(0.0, 0.0, 5.0, 5.0))?;
//! assert_eq!(hits.len(), 1);
//!
//! let near = index.near_location_query(&NearQuery::new(0.0, 0.0, 5.0).with_min_bedrooms(2))?;
//! assert_eq!(near[0].location(), "12 Elm St");
//! # Ok::<(), realty_index::RealtyError>(())
//! ```

pub mod node;

pub use node::{NodeKind, Records, SpatialNode};

use crate::builder::IndexBuilder;
use crate::compute::filter::NearQuery;
use crate::compute::validation::{validate_property, validate_rectangle};
use crate::config::{Config, RootLayout};
use crate::error::Result;
use realty_types::{Property, Rectangle};
use serde::Serialize;

/// Structural summary of an index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    pub bounds: Rectangle,
    pub layout: RootLayout,
}

/// In-memory spatial index over property listings.
///
/// Not thread-safe on its own; see `SyncIndex` (feature `sync`) for a locked
/// handle that can be shared between threads.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    root: SpatialNode,
    config: Config,
}

impl SpatialIndex {
    /// An empty index with the default universe `(0, 0, 100, 100)` and a leaf root.
    pub fn new() -> Self {
        Self::from_validated_config(Config::default())
    }

    /// Start configuring an index.
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// An empty index using `config`, which is validated first.
    pub fn with_config(config: Config) -> Result<Self> {
        IndexBuilder::new().config(config).build()
    }

    pub(crate) fn from_validated_config(config: Config) -> Self {
        let root = match config.root_layout {
            RootLayout::Leaf => SpatialNode::leaf(config.universe),
            RootLayout::Internal => SpatialNode::internal(config.universe),
        };
        Self { root, config }
    }

    /// Insert a listing.
    ///
    /// Fails with `InvalidGeometry` for a malformed box and `InvalidAttribute`
    /// for a negative or non-finite price or area. A rejected listing leaves
    /// the index untouched. Once this returns `Ok`, every range query whose
    /// region intersects the listing's box will return it.
    pub fn insert(&mut self, property: Property) -> Result<()> {
        if let Err(e) = validate_property(&property) {
            log::warn!("rejected listing '{}': {}", property.location(), e);
            return Err(e);
        }

        log::debug!(
            "inserting '{}' at {}",
            property.location(),
            property.bbox()
        );
        self.root.insert(property);
        Ok(())
    }

    /// Build a listing from its fields and insert it.
    pub fn insert_property(
        &mut self,
        location: impl Into<String>,
        price: f64,
        area: f64,
        bedrooms: u32,
        bbox: Rectangle,
    ) -> Result<()> {
        self.insert(Property::new(location, price, area, bedrooms, bbox))
    }

    /// Insert several listings atomically.
    ///
    /// Every listing is validated before any is inserted, so either all of
    /// them land or none do. Returns the number inserted.
    pub fn insert_batch<I>(&mut self, properties: I) -> Result<usize>
    where
        I: IntoIterator<Item = Property>,
    {
        let batch: Vec<Property> = properties.into_iter().collect();
        for property in &batch {
            if let Err(e) = validate_property(property) {
                log::warn!(
                    "rejected batch of {} at '{}': {}",
                    batch.len(),
                    property.location(),
                    e
                );
                return Err(e);
            }
        }

        let count = batch.len();
        for property in batch {
            self.root.insert(property);
        }
        log::debug!("inserted batch of {} listings", count);
        Ok(count)
    }

    /// All listings whose box intersects `region` (boundaries inclusive), in
    /// insertion order.
    ///
    /// Fails only when `region` itself is malformed. An empty index yields an
    /// empty result.
    pub fn range_query(&self, region: &Rectangle) -> Result<Vec<&Property>> {
        if let Err(e) = validate_rectangle(region) {
            log::warn!("rejected range query {}: {}", region, e);
            return Err(e);
        }

        let mut results = Vec::new();
        self.root.collect_intersecting(region, &mut results);
        Ok(results)
    }

    /// Listings within `query.radius` of `query.center` that also pass the
    /// price, area and bedroom thresholds.
    ///
    /// Distance is measured to the midpoint of each listing's box, at full
    /// precision, boundary inclusive.
    pub fn near_location_query(&self, query: &NearQuery) -> Result<Vec<&Property>> {
        if let Err(e) = query.validate() {
            log::warn!("rejected near-location query: {}", e);
            return Err(e);
        }

        let candidates = self.range_query(&query.search_box())?;
        let candidate_count = candidates.len();
        let results: Vec<&Property> = candidates
            .into_iter()
            .filter(|property| query.matches(property))
            .collect();

        log::debug!(
            "near ({}, {}) r={}: {} candidates, {} matches",
            query.center.x(),
            query.center.y(),
            query.radius,
            candidate_count,
            results.len()
        );
        Ok(results)
    }

    /// Positional form of [`SpatialIndex::near_location_query`].
    pub fn near_location(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        max_price: f64,
        min_area: f64,
        min_bedrooms: u32,
    ) -> Result<Vec<&Property>> {
        let query = NearQuery::new(x, y, radius)
            .with_max_price(max_price)
            .with_min_area(min_area)
            .with_min_bedrooms(min_bedrooms);
        self.near_location_query(&query)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The root's bounding box: the universe grown to cover every listing.
    pub fn bounds(&self) -> Rectangle {
        *self.root.bbox()
    }

    pub fn root(&self) -> &SpatialNode {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every listing, in insertion order.
    pub fn iter(&self) -> Records<'_> {
        self.root.records()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.root.len(),
            nodes: self.root.node_count(),
            leaves: self.root.leaf_count(),
            depth: self.root.depth(),
            bounds: self.bounds(),
            layout: self.config.root_layout,
        }
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SpatialIndex {
    type Item = &'a Property;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RealtyError;

    fn layouts() -> [SpatialIndex; 2] {
        [
            SpatialIndex::new(),
            SpatialIndex::with_config(Config::default().with_root_layout(RootLayout::Internal))
                .unwrap(),
        ]
    }

    fn names(results: &[&Property]) -> Vec<String> {
        results.iter().map(|p| p.location().to_string()).collect()
    }

    #[test]
    fn test_single_point_range_query() {
        for mut index in layouts() {
            index
                .insert_property("A", 100.0, 50.0, 2, Rectangle::point(0.0, 0.0))
                .unwrap();
            let results = index
                .range_query(&Rectangle::new(-1.0, -1.0, 1.0, 1.0))
                .unwrap();
            assert_eq!(names(&results), vec!["A"]);
        }
    }

    #[test]
    fn test_disjoint_points() {
        for mut index in layouts() {
            index
                .insert_property("near", 1.0, 1.0, 1, Rectangle::point(0.0, 0.0))
                .unwrap();
            index
                .insert_property("far", 1.0, 1.0, 1, Rectangle::point(50.0, 50.0))
                .unwrap();
            let results = index
                .range_query(&Rectangle::new(0.0, 0.0, 10.0, 10.0))
                .unwrap();
            assert_eq!(names(&results), vec!["near"]);
        }
    }

    #[test]
    fn test_empty_index_queries() {
        for index in layouts() {
            assert!(index.is_empty());
            assert!(
                index
                    .range_query(&Rectangle::new(-1e9, -1e9, 1e9, 1e9))
                    .unwrap()
                    .is_empty()
            );
            assert!(
                index
                    .near_location(0.0, 0.0, 10.0, f64::INFINITY, 0.0, 0)
                    .unwrap()
                    .is_empty()
            );
        }
    }

    #[test]
    fn test_near_location_boundary_inclusive() {
        for mut index in layouts() {
            index
                .insert_property("p", 10.0, 10.0, 1, Rectangle::point(3.0, 4.0))
                .unwrap();
            let results = index
                .near_location(0.0, 0.0, 5.0, f64::INFINITY, 0.0, 0)
                .unwrap();
            assert_eq!(names(&results), vec!["p"]);
        }
    }

    #[test]
    fn test_near_location_excludes_by_price() {
        for mut index in layouts() {
            index
                .insert_property("cheap", 100.0, 10.0, 1, Rectangle::point(1.0, 1.0))
                .unwrap();
            index
                .insert_property("pricey", 900.0, 10.0, 1, Rectangle::point(1.0, 2.0))
                .unwrap();

            let query = NearQuery::new(0.0, 0.0, 5.0).with_max_price(500.0);
            let prefilter = index.range_query(&query.search_box()).unwrap();
            assert_eq!(names(&prefilter), vec!["cheap", "pricey"]);

            let results = index.near_location_query(&query).unwrap();
            assert_eq!(names(&results), vec!["cheap"]);
        }
    }

    #[test]
    fn test_near_location_drops_square_corners() {
        let mut index = SpatialIndex::new();
        index
            .insert_property("corner", 1.0, 1.0, 1, Rectangle::point(4.0, 4.0))
            .unwrap();
        let query = NearQuery::new(0.0, 0.0, 5.0);
        assert_eq!(index.range_query(&query.search_box()).unwrap().len(), 1);
        assert!(index.near_location_query(&query).unwrap().is_empty());
    }

    #[test]
    fn test_rejected_insert_leaves_index_untouched() {
        for mut index in layouts() {
            index
                .insert_property("ok", 1.0, 1.0, 1, Rectangle::point(5.0, 5.0))
                .unwrap();
            let before = index.stats();

            let err = index
                .insert_property("bad box", 1.0, 1.0, 1, Rectangle::new(500.0, 0.0, 1.0, 1.0))
                .unwrap_err();
            assert!(matches!(err, RealtyError::InvalidGeometry(_)));

            let err = index
                .insert_property("bad price", -1.0, 1.0, 1, Rectangle::point(500.0, 500.0))
                .unwrap_err();
            assert!(matches!(err, RealtyError::InvalidAttribute(_)));

            assert_eq!(index.stats(), before);
        }
    }

    #[test]
    fn test_invalid_range_query() {
        let index = SpatialIndex::new();
        assert!(matches!(
            index.range_query(&Rectangle::new(1.0, 1.0, 0.0, 0.0)),
            Err(RealtyError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_invalid_near_query() {
        let index = SpatialIndex::new();
        assert!(matches!(
            index.near_location(0.0, 0.0, -1.0, 10.0, 0.0, 0),
            Err(RealtyError::InvalidAttribute(_))
        ));
        assert!(matches!(
            index.near_location(0.0, 0.0, 1.0, -10.0, 0.0, 0),
            Err(RealtyError::InvalidAttribute(_))
        ));
        assert!(matches!(
            index.near_location(0.0, 0.0, 1.0, 10.0, -0.5, 0),
            Err(RealtyError::InvalidAttribute(_))
        ));
        assert!(matches!(
            index.near_location(f64::NAN, 0.0, 1.0, 10.0, 0.0, 0),
            Err(RealtyError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_records_outside_universe_are_reachable() {
        for mut index in layouts() {
            index
                .insert_property("outlier", 1.0, 1.0, 1, Rectangle::point(-250.0, 400.0))
                .unwrap();
            assert_eq!(index.bounds(), Rectangle::new(-250.0, 0.0, 100.0, 400.0));

            let results = index
                .range_query(&Rectangle::new(-260.0, 390.0, -240.0, 410.0))
                .unwrap();
            assert_eq!(names(&results), vec!["outlier"]);
        }
    }

    #[test]
    fn test_stats_per_layout() {
        let [mut flat, mut nested] = layouts();
        for i in 0..4 {
            let bbox = Rectangle::point(i as f64, i as f64);
            flat.insert_property(format!("f{i}"), 1.0, 1.0, 1, bbox).unwrap();
            nested.insert_property(format!("n{i}"), 1.0, 1.0, 1, bbox).unwrap();
        }

        let stats = flat.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.depth, 1);
        assert_eq!(stats.layout, RootLayout::Leaf);

        let stats = nested.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.depth, 2);
        assert_eq!(stats.layout, RootLayout::Internal);
    }

    #[test]
    fn test_insert_batch_is_atomic() {
        for mut index in layouts() {
            let good = vec![
                Property::new("a", 1.0, 1.0, 1, Rectangle::point(1.0, 1.0)),
                Property::new("b", 1.0, 1.0, 1, Rectangle::point(2.0, 2.0)),
            ];
            assert_eq!(index.insert_batch(good).unwrap(), 2);

            let mixed = vec![
                Property::new("c", 1.0, 1.0, 1, Rectangle::point(3.0, 3.0)),
                Property::new("d", 1.0, -4.0, 1, Rectangle::point(4.0, 4.0)),
            ];
            assert!(index.insert_batch(mixed).is_err());
            assert_eq!(index.len(), 2);

            let all: Vec<&str> = index.iter().map(Property::location).collect();
            assert_eq!(all, vec!["a", "b"]);
        }
    }

    #[test]
    fn test_iter_matches_insertion_order() {
        for mut index in layouts() {
            for name in ["x", "y", "z"] {
                index
                    .insert_property(name, 1.0, 1.0, 0, Rectangle::point(1.0, 1.0))
                    .unwrap();
            }
            let all: Vec<&str> = (&index).into_iter().map(Property::location).collect();
            assert_eq!(all, vec!["x", "y", "z"]);
        }
    }
}
