use crate::rect::Rectangle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A property listing paired with its spatial extent.
///
/// Immutable once created: the index hands out shared references only, so the
/// bounding box a listing was indexed under can never drift from the box the
/// tree's bounds were computed from.
///
/// # Examples
///
/// ```
/// use realty_types::property::Property;
/// use realty_types::rect::Rectangle;
///
/// let listing = Property::new("4 Harbor Rd", 180_000.0, 95.0, 2, Rectangle::point(3.0, 4.0));
/// assert_eq!(listing.bedrooms(), 2);
/// assert_eq!(listing.center().x(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    location: String,
    price: f64,
    area: f64,
    bedrooms: u32,
    bbox: Rectangle,
}

impl Property {
    /// Create a listing. Attribute ranges are checked by the index on insert.
    pub fn new(
        location: impl Into<String>,
        price: f64,
        area: f64,
        bedrooms: u32,
        bbox: Rectangle,
    ) -> Self {
        Self {
            location: location.into(),
            price,
            area,
            bedrooms,
            bbox,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn bbox(&self) -> &Rectangle {
        &self.bbox
    }

    /// Midpoint of the listing's bounding box, used as its address for distance checks.
    pub fn center(&self) -> geo::Point {
        self.bbox.center()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location: {}, Price: ${}, Area: {} sq. ft., Bedrooms: {}, Bounding Box: {}",
            self.location, self.price, self.area, self.bedrooms, self.bbox
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_accessors() {
        let bbox = Rectangle::new(0.0, 0.0, 2.0, 4.0);
        let listing = Property::new("A", 100.0, 50.0, 2, bbox);

        assert_eq!(listing.location(), "A");
        assert_eq!(listing.price(), 100.0);
        assert_eq!(listing.area(), 50.0);
        assert_eq!(listing.bedrooms(), 2);
        assert_eq!(listing.bbox(), &bbox);
        assert_eq!(listing.center().x(), 1.0);
        assert_eq!(listing.center().y(), 2.0);
    }

    #[test]
    fn test_property_display() {
        let listing = Property::new(
            "Downtown loft",
            250000.0,
            85.5,
            1,
            Rectangle::new(1.0, 2.0, 3.0, 4.0),
        );
        assert_eq!(
            listing.to_string(),
            "Location: Downtown loft, Price: $250000, Area: 85.5 sq. ft., Bedrooms: 1, Bounding Box: (1, 2, 3, 4)"
        );
    }

    #[test]
    fn test_property_serialization() {
        let listing = Property::new("B", 1.0, 2.0, 3, Rectangle::point(4.0, 5.0));
        let json = serde_json::to_string(&listing).expect("serialize");
        assert!(json.contains("\"location\":\"B\""));
        assert!(json.contains("\"x_min\":4.0"));

        let back: Property = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, listing);
    }
}
