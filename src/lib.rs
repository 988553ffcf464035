//! In-memory spatial index for property listings.
//!
//! Listings are inserted with a bounding box (usually a single address point)
//! and found again through an axis-aligned range query or a near-location
//! query that combines a bounding-box prefilter with an exact distance and
//! attribute filter.
//!
//! ```rust
//! use realty_index::{Rectangle, SpatialIndex};
//!
//! let mut index = SpatialIndex::new();
//! index.insert_property("A", 100.0, 50.0, 2, Rectangle::point(0.0, 0.0))?;
//! index.insert_property("B", 300.0, 80.0, 3, Rectangle::point(3.0, 4.0))?;
//!
//! let in_range = index.range_query(&Rectangle::new(-1.0, -1.0, 1.0, 1.0))?;
//! assert_eq!(in_range[0].location(), "A");
//!
//! // Within 5 units of the origin, at most 200, any area, at least 2 bedrooms.
//! let nearby = index.near_location(0.0, 0.0, 5.0, 200.0, 0.0, 2)?;
//! assert_eq!(nearby.len(), 1);
//! # Ok::<(), realty_index::RealtyError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::IndexBuilder;
pub use compute::NearQuery;
pub use config::{Config, RootLayout};
pub use error::{RealtyError, Result};
pub use index::{IndexStats, NodeKind, SpatialIndex, SpatialNode};

#[cfg(feature = "sync")]
pub use sync::SyncIndex;

pub use realty_types::{Property, Rectangle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, IndexBuilder, NearQuery, Property, RealtyError, Rectangle, Result, RootLayout,
        SpatialIndex,
    };

    #[cfg(feature = "sync")]
    pub use crate::SyncIndex;
}
