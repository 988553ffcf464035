//! Distance and attribute predicates for near-location queries.
//!
//! Coordinates are treated as a flat plane in the same units as the bounding
//! boxes. Distances are compared at full `f64` precision.

use crate::compute::validation::{
    validate_coordinate, validate_non_negative, validate_price_ceiling, validate_radius,
};
use crate::error::Result;
use geo::{Distance, Euclidean, Point};
use realty_types::{Property, Rectangle};

/// Parameters of a near-location query.
///
/// Defaults impose no attribute limits: any price, any area, zero bedrooms.
///
/// # Examples
///
/// ```rust
/// use realty_index::NearQuery;
///
/// let query = NearQuery::new(0.0, 0.0, 5.0)
///     .with_max_price(300_000.0)
///     .with_min_bedrooms(2);
/// assert_eq!(query.min_bedrooms, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearQuery {
    pub center: Point,
    pub radius: f64,
    pub max_price: f64,
    pub min_area: f64,
    pub min_bedrooms: u32,
}

impl NearQuery {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
            max_price: f64::INFINITY,
            min_area: 0.0,
            min_bedrooms: 0,
        }
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_min_bedrooms(mut self, min_bedrooms: u32) -> Self {
        self.min_bedrooms = min_bedrooms;
        self
    }

    /// Reject non-finite centres and negative or NaN thresholds.
    pub fn validate(&self) -> Result<()> {
        validate_coordinate(self.center.x(), self.center.y())?;
        validate_radius(self.radius)?;
        validate_price_ceiling(self.max_price)?;
        validate_non_negative("Minimum area", self.min_area)?;
        Ok(())
    }

    /// The square prefilter region. It contains the whole disc of `radius`,
    /// so it never drops a listing the exact test would keep.
    pub fn search_box(&self) -> Rectangle {
        Rectangle::square_around(self.center.x(), self.center.y(), self.radius)
    }

    /// Exact test applied to prefilter survivors.
    pub fn matches(&self, property: &Property) -> bool {
        within_radius(self.center, property, self.radius)
            && meets_attributes(property, self.max_price, self.min_area, self.min_bedrooms)
    }
}

/// Planar Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use realty_index::compute::filter::planar_distance;
/// use geo::Point;
///
/// assert_eq!(planar_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
/// ```
#[inline]
pub fn planar_distance(a: Point, b: Point) -> f64 {
    Euclidean.distance(a, b)
}

/// True when the midpoint of the listing's box lies within `radius` of `center`
/// (boundary inclusive).
#[inline]
pub fn within_radius(center: Point, property: &Property, radius: f64) -> bool {
    planar_distance(center, property.center()) <= radius
}

/// Price ceiling, area floor and bedroom floor, all inclusive.
#[inline]
pub fn meets_attributes(
    property: &Property,
    max_price: f64,
    min_area: f64,
    min_bedrooms: u32,
) -> bool {
    property.price() <= max_price
        && property.area() >= min_area
        && property.bedrooms() >= min_bedrooms
}
