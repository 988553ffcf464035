use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D axis-aligned bounding box.
///
/// Stores its four bounds directly rather than wrapping `geo::Rect`, because
/// `geo::Rect::new` silently reorders swapped corners and the index needs to
/// see (and reject) a rectangle whose minimum exceeds its maximum.
///
/// Intervals are closed: two rectangles that only touch along an edge or at a
/// corner intersect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Minimum x coordinate
    pub x_min: f64,
    /// Minimum y coordinate
    pub y_min: f64,
    /// Maximum x coordinate
    pub x_max: f64,
    /// Maximum y coordinate
    pub y_max: f64,
}

impl Rectangle {
    /// Create a new rectangle from minimum and maximum coordinates.
    ///
    /// No ordering check is made here; use [`Rectangle::is_well_formed`] or
    /// let the index validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use realty_types::rect::Rectangle;
    ///
    /// let lot = Rectangle::new(0.0, 0.0, 20.0, 10.0);
    /// assert_eq!(lot.width(), 20.0);
    /// ```
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// A degenerate rectangle covering a single address coordinate.
    pub const fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// The square of half-side `radius` centred on `(x, y)`.
    ///
    /// This is the smallest axis-aligned box containing the disc of that
    /// radius, which makes it a safe prefilter for distance queries. Bounds
    /// saturate at `f64::MIN` and `f64::MAX` instead of overflowing, so finite
    /// input always yields a finite box.
    ///
    /// # Examples
    ///
    /// ```
    /// use realty_types::rect::Rectangle;
    ///
    /// let search = Rectangle::square_around(1.0, 2.0, 5.0);
    /// assert_eq!(search, Rectangle::new(-4.0, -3.0, 6.0, 7.0));
    /// ```
    pub fn square_around(x: f64, y: f64, radius: f64) -> Self {
        let clamp = |v: f64| v.clamp(f64::MIN, f64::MAX);
        Self::new(
            clamp(x - radius),
            clamp(y - radius),
            clamp(x + radius),
            clamp(y + radius),
        )
    }

    /// True when every bound is finite and both minima are at most their maxima.
    pub fn is_well_formed(&self) -> bool {
        self.is_finite() && self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// True when no bound is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.y_min.is_finite()
            && self.x_max.is_finite()
            && self.y_max.is_finite()
    }

    /// Check if this rectangle intersects with another.
    ///
    /// Returns false iff the two are disjoint on the x axis or on the y axis.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(self.x_min > other.x_max
            || self.x_max < other.x_min
            || self.y_min > other.y_max
            || self.y_max < other.y_min)
    }

    /// The smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle::new(
            self.x_min.min(other.x_min),
            self.y_min.min(other.y_min),
            self.x_max.max(other.x_max),
            self.y_max.max(other.y_max),
        )
    }

    /// Check if `other` lies entirely inside this rectangle (boundaries included).
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Check if a point is contained within this rectangle.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.x_min
            && point.x() <= self.x_max
            && point.y() >= self.y_min
            && point.y() <= self.y_max
    }

    /// Midpoint of the rectangle.
    ///
    /// Halves each bound before adding, so finite bounds near `f64::MAX`
    /// give a finite midpoint.
    pub fn center(&self) -> Point {
        Point::new(
            self.x_min / 2.0 + self.x_max / 2.0,
            self.y_min / 2.0 + self.y_max / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Convert into a `geo::Rect`. Swapped bounds are normalized by `geo`.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.x_min, y: self.y_min },
            geo::coord! { x: self.x_max, y: self.y_max },
        )
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

impl From<Point> for Rectangle {
    fn from(point: Point) -> Self {
        Self::point(point.x(), point.y())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
