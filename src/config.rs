//! Index configuration.
//!
//! Serializable so it can be loaded from JSON or (with the `toml` feature)
//! TOML files by the command-line front end.

use crate::compute::validation::validate_rectangle;
use crate::error::{RealtyError, Result};
use realty_types::Rectangle;
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shape of the root node.
///
/// Neither layout splits or rebalances; they differ only in where records land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RootLayout {
    /// Every record is stored directly in the root leaf (a flat linear scan).
    #[default]
    Leaf,
    /// The root is internal; each insert adds a single-record leaf child, so
    /// range queries prune record by record.
    Internal,
}

impl std::str::FromStr for RootLayout {
    type Err = RealtyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "leaf" => Ok(RootLayout::Leaf),
            "internal" => Ok(RootLayout::Internal),
            other => Err(RealtyError::InvalidConfig(format!(
                "Unknown root layout '{}', expected 'leaf' or 'internal'",
                other
            ))),
        }
    }
}

/// Index configuration.
///
/// # Example
///
/// ```rust
/// use realty_index::{Config, RootLayout};
///
/// let config = Config::default();
/// assert_eq!(config.root_layout, RootLayout::Leaf);
///
/// let json = r#"{
///     "universe": { "x_min": -50.0, "y_min": -50.0, "x_max": 50.0, "y_max": 50.0 },
///     "root_layout": "internal"
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.root_layout, RootLayout::Internal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial bounding box of the root, before any insert.
    #[serde(default = "Config::default_universe")]
    pub universe: Rectangle,

    #[serde(default)]
    pub root_layout: RootLayout,
}

impl Config {
    const fn default_universe() -> Rectangle {
        Rectangle::new(0.0, 0.0, 100.0, 100.0)
    }

    pub fn with_universe(mut self, universe: Rectangle) -> Self {
        self.universe = universe;
        self
    }

    pub fn with_root_layout(mut self, layout: RootLayout) -> Self {
        self.root_layout = layout;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_rectangle(&self.universe)
            .map_err(|e| format!("Universe bound is not a valid region: {}", e))
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a file, choosing the format by extension.
    ///
    /// `.toml` files need the `toml` feature; anything else is parsed as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            #[cfg(feature = "toml")]
            {
                return Config::from_toml(&contents).map_err(|e| RealtyError::Toml(e.to_string()));
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(RealtyError::InvalidConfig(format!(
                    "{} is a TOML file but the 'toml' feature is disabled",
                    path.display()
                )));
            }
        }

        Ok(Config::from_json(&contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            universe: Self::default_universe(),
            root_layout: RootLayout::default(),
        }
    }
}
