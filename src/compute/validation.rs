//! Boundary validation for listings, rectangles and query parameters.
//!
//! Everything here runs before the tree is touched. A value that fails
//! validation is rejected whole, so no node's bounding box ever sees it.

use crate::error::{RealtyError, Result};
use realty_types::{Property, Rectangle};

/// Validates that a rectangle describes a real region.
///
/// All bounds must be finite, `x_min <= x_max` and `y_min <= y_max`.
/// Degenerate (zero-width or zero-height) rectangles are valid.
///
/// # Examples
///
/// ```
/// use realty_index::compute::validation::validate_rectangle;
/// use realty_index::Rectangle;
///
/// assert!(validate_rectangle(&Rectangle::point(3.0, 4.0)).is_ok());
/// assert!(validate_rectangle(&Rectangle::new(5.0, 0.0, 1.0, 1.0)).is_err());
/// ```
pub fn validate_rectangle(rect: &Rectangle) -> Result<()> {
    if !rect.is_finite() {
        return Err(RealtyError::InvalidGeometry(format!(
            "Rectangle bounds must be finite, got: {}",
            rect
        )));
    }

    if rect.x_min > rect.x_max {
        return Err(RealtyError::InvalidGeometry(format!(
            "x_min ({}) must not exceed x_max ({})",
            rect.x_min, rect.x_max
        )));
    }

    if rect.y_min > rect.y_max {
        return Err(RealtyError::InvalidGeometry(format!(
            "y_min ({}) must not exceed y_max ({})",
            rect.y_min, rect.y_max
        )));
    }

    Ok(())
}

/// Validates a query centre.
pub fn validate_coordinate(x: f64, y: f64) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(RealtyError::InvalidGeometry(format!(
            "Coordinates must be finite, got: ({}, {})",
            x, y
        )));
    }
    Ok(())
}

/// Validates that a named quantity is finite and non-negative.
///
/// # Examples
///
/// ```
/// use realty_index::compute::validation::validate_non_negative;
///
/// assert!(validate_non_negative("area", 0.0).is_ok());
/// assert!(validate_non_negative("area", -1.0).is_err());
/// assert!(validate_non_negative("area", f64::NAN).is_err());
/// ```
pub fn validate_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RealtyError::InvalidAttribute(format!(
            "{} must be finite, got: {}",
            name, value
        )));
    }

    if value < 0.0 {
        return Err(RealtyError::InvalidAttribute(format!(
            "{} must be non-negative, got: {}",
            name, value
        )));
    }

    Ok(())
}

/// Validates a search radius.
pub fn validate_radius(radius: f64) -> Result<()> {
    validate_non_negative("Radius", radius)
}

/// Validates an upper price bound. Unlike listing prices, `+inf` means "no limit".
pub fn validate_price_ceiling(max_price: f64) -> Result<()> {
    if max_price.is_nan() || max_price < 0.0 {
        return Err(RealtyError::InvalidAttribute(format!(
            "Maximum price must be non-negative, got: {}",
            max_price
        )));
    }
    Ok(())
}

/// Validates a listing before insertion.
///
/// Geometry is checked first so callers see `InvalidGeometry` for a bad box
/// even when an attribute is also out of range.
pub fn validate_property(property: &Property) -> Result<()> {
    validate_rectangle(property.bbox())?;
    validate_non_negative("Price", property.price())?;
    validate_non_negative("Area", property.area())?;
    Ok(())
}
