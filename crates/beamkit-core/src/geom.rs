//! Geometric primitives for toolpath planning.
//!
//! Coordinates compare by exact value throughout the pipeline. The drawing
//! source is required to produce identical coordinates for coincident
//! endpoints; no snapping or tolerance quantization is applied here.

use serde::{Deserialize, Serialize};

/// A point in drawing or machine space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another point in the XY plane. Heights are ignored:
    /// travel decisions are made on the drawing plane.
    pub fn distance_xy(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns the same XY location at the given height.
    pub fn at_height(&self, z: f64) -> Point {
        Point::new(self.x, self.y, z)
    }

    /// True when every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// An input cut segment from the drawing source: an ordered endpoint pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// True when both endpoints coincide exactly.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Whether a motion cuts material or repositions the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    /// Material-cutting motion (beam on).
    Draw,
    /// Non-cutting repositioning motion (beam off).
    Travel,
}

/// A single straight-line machine motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub from: Point,
    pub to: Point,
    pub kind: MotionKind,
}

impl Motion {
    /// Creates a cutting motion.
    pub fn draw(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            kind: MotionKind::Draw,
        }
    }

    /// Creates a repositioning motion.
    pub fn travel(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            kind: MotionKind::Travel,
        }
    }

    /// True for cutting motions.
    pub fn is_draw(&self) -> bool {
        self.kind == MotionKind::Draw
    }

    /// Returns the same motion with both endpoints at the given height.
    /// The draw/travel kind is preserved.
    pub fn at_height(&self, z: f64) -> Motion {
        Motion {
            from: self.from.at_height(z),
            to: self.to.at_height(z),
            kind: self.kind,
        }
    }

    /// Length of the motion in the XY plane.
    pub fn length_xy(&self) -> f64 {
        self.from.distance_xy(&self.to)
    }
}

/// The final ordered, device-ready sequence of motions for one document.
///
/// Consecutive motions share an endpoint: `motions[i].to` equals
/// `motions[i + 1].from`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Toolpath {
    pub motions: Vec<Motion>,
}

impl Toolpath {
    /// Creates an empty toolpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an ordered motion list.
    pub fn from_motions(motions: Vec<Motion>) -> Self {
        Self { motions }
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    /// Iterates the cutting motions only.
    pub fn draws(&self) -> impl Iterator<Item = &Motion> {
        self.motions.iter().filter(|m| m.is_draw())
    }

    /// Total cutting distance in the XY plane.
    pub fn draw_length(&self) -> f64 {
        self.draws().map(Motion::length_xy).sum()
    }

    /// Total repositioning distance in the XY plane.
    pub fn travel_length(&self) -> f64 {
        self.motions
            .iter()
            .filter(|m| !m.is_draw())
            .map(Motion::length_xy)
            .sum()
    }

    /// True when every consecutive motion pair shares an endpoint.
    pub fn is_continuous(&self) -> bool {
        self.motions.windows(2).all(|w| w[0].to == w[1].from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_height() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, -2.5);
        assert_eq!(a.distance_xy(&b), 5.0);
    }

    #[test]
    fn test_at_height_preserves_kind() {
        let m = Motion::travel(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let lowered = m.at_height(-1.5);
        assert_eq!(lowered.kind, MotionKind::Travel);
        assert_eq!(lowered.from.z, -1.5);
        assert_eq!(lowered.to.z, -1.5);
    }

    #[test]
    fn test_degenerate_segment() {
        let p = Point::new(2.0, 2.0, 0.0);
        assert!(Segment::new(p, p).is_degenerate());
        assert!(!Segment::new(p, Point::new(2.0, 3.0, 0.0)).is_degenerate());
    }

    #[test]
    fn test_continuity_check() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(1.0, 1.0, 0.0);
        let good = Toolpath::from_motions(vec![Motion::draw(a, b), Motion::draw(b, c)]);
        assert!(good.is_continuous());
        let bad = Toolpath::from_motions(vec![Motion::draw(a, b), Motion::draw(c, a)]);
        assert!(!bad.is_continuous());
    }

    #[test]
    fn test_lengths() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(1.0, 2.0, 0.0);
        let path = Toolpath::from_motions(vec![Motion::draw(a, b), Motion::travel(b, c)]);
        assert_eq!(path.draw_length(), 1.0);
        assert_eq!(path.travel_length(), 2.0);
    }
}
