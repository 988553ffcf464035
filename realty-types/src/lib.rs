//! # realty-types
//!
//! Core value types for the realty spatial index.
//!
//! - **Geometry**: `Rectangle`, an axis-aligned bounding box with closed-interval
//!   intersection and union
//! - **Listings**: `Property`, an immutable listing paired with its bounding box
//!
//! Both types are serializable with Serde and convert to and from the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use realty_types::property::Property;
//! use realty_types::rect::Rectangle;
//!
//! let lot = Rectangle::point(3.0, 4.0);
//! let listing = Property::new("12 Elm St", 250_000.0, 120.0, 3, lot);
//!
//! let downtown = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//! assert!(downtown.intersects(listing.bbox()));
//! ```

pub mod property;
pub mod rect;

pub use property::Property;
pub use rect::Rectangle;
