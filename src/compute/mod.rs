//! Pure predicates and validation used by the index.

pub mod filter;
pub mod validation;

pub use filter::{NearQuery, meets_attributes, planar_distance, within_radius};
