//! Planar coordinate type and polyline utilities.
//!
//! Road-network shapes are projected Cartesian coordinates in metres, so
//! distances are plain Euclidean.  `f64` throughout: shape coordinates in
//! projected networks routinely exceed the range where `f32` keeps
//! centimetre precision.

use std::str::FromStr;

use crate::CoreError;

/// A 2-D point in network (projected) coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at fraction `t` along the segment `self → other`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Parses a single `"x,y"` shape token.  A trailing `,z` is accepted and
/// dropped (3-D networks).
impl FromStr for Point {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return Err(CoreError::Parse(format!("shape point {s:?}: expected \"x,y\"")));
        };
        let z = parts.next();
        if parts.next().is_some() {
            return Err(CoreError::Parse(format!("shape point {s:?}: too many components")));
        }
        let coord = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| CoreError::Parse(format!("shape point {s:?}: bad coordinate {v:?}")))
        };
        if let Some(z) = z {
            coord(z)?;
        }
        Ok(Point::new(coord(x)?, coord(y)?))
    }
}

/// Parse a whitespace-separated list of `"x,y"` tokens.
///
/// Fails on the first malformed token; an empty string yields an empty shape.
pub fn parse_shape(shape: &str) -> Result<Vec<Point>, CoreError> {
    shape.split_whitespace().map(str::parse).collect()
}

/// Arc length of a polyline: the sum of its segment lengths.
///
/// Zero for fewer than two points.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Round to two decimal places (the precision of every exported value).
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Largest two-decimal value not above `v`.
///
/// Used where a rounded value must not cross an upper bound the unrounded one
/// stayed below.
#[inline]
pub fn floor2(v: f64) -> f64 {
    let r = round2(v);
    if r > v { r - 0.01 } else { r }
}
