//! Index builder for flexible configuration
//!
//! Collects the universe bound and root layout, validates them, and produces
//! an empty [`SpatialIndex`].

use crate::config::{Config, RootLayout};
use crate::error::{RealtyError, Result};
use crate::index::SpatialIndex;
use realty_types::Rectangle;
use std::path::Path;

/// Builder for index configuration.
///
/// # Examples
///
/// ```rust
/// use realty_index::{IndexBuilder, Rectangle, RootLayout};
///
/// let index = IndexBuilder::new()
///     .universe(Rectangle::new(-180.0, -90.0, 180.0, 90.0))
///     .root_layout(RootLayout::Internal)
///     .build()?;
/// assert!(index.is_empty());
/// # Ok::<(), realty_index::RealtyError>(())
/// ```
#[derive(Debug, Default)]
pub struct IndexBuilder {
    config: Config,
}

impl IndexBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON or TOML file.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = Config::from_file(path)?;
        Ok(self)
    }

    /// Set the initial bounding box of the root.
    pub fn universe(mut self, universe: Rectangle) -> Self {
        self.config.universe = universe;
        self
    }

    pub fn root_layout(mut self, layout: RootLayout) -> Self {
        self.config.root_layout = layout;
        self
    }

    /// Build the index. Fails with `InvalidConfig` if the universe is malformed.
    pub fn build(self) -> Result<SpatialIndex> {
        self.config.validate().map_err(RealtyError::InvalidConfig)?;

        log::info!(
            "building spatial index: layout={:?}, universe={}",
            self.config.root_layout,
            self.config.universe
        );
        Ok(SpatialIndex::from_validated_config(self.config))
    }
}
