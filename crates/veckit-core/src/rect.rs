//! Axis-aligned rectangle math.
//!
//! Rectangles are value types defined by their top-left corner and
//! size. Width and height may be transiently negative while a resize
//! gesture crosses its origin; [`Rectangle::positive`] normalizes a
//! rectangle back to positive dimensions once a final shape is needed.

use serde::{Deserialize, Serialize};

use crate::compass::CardinalDirection;
use crate::vector2::Vector2;

/// An axis-aligned rectangle on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Scales the rectangle relative to the given origin.
    ///
    /// Negative factors flip the rectangle across the origin, producing
    /// negative width/height. Callers that need a final shape should
    /// normalize with [`Rectangle::positive`].
    pub fn scale(&self, origin: Vector2, factors: Vector2) -> Self {
        Self {
            x: origin.x + (self.x - origin.x) * factors.x,
            y: origin.y + (self.y - origin.y) * factors.y,
            width: self.width * factors.x,
            height: self.height * factors.y,
        }
    }

    /// Returns `[sx, sy]` required to scale this rectangle to `target`.
    pub fn scale_factors_to(&self, target: &Rectangle) -> Vector2 {
        Vector2::new(target.width / self.width, target.height / self.height)
    }

    /// Quantizes position and size to the given step.
    ///
    /// Coordinates are rounded to the nearest multiple of `step`, which
    /// stabilizes floating-point comparisons during snap tests.
    pub fn quantize(&self, step: f64) -> Self {
        Self {
            x: quantize(self.x, step),
            y: quantize(self.y, step),
            width: quantize(self.width, step),
            height: quantize(self.height, step),
        }
    }

    /// Normalizes the rectangle so width and height are positive.
    pub fn positive(&self) -> Self {
        Self {
            x: self.x.min(self.x + self.width),
            y: self.y.min(self.y + self.height),
            width: self.width.abs(),
            height: self.height.abs(),
        }
    }

    /// Returns the aspect ratio `width / height`.
    ///
    /// Undefined (infinite or NaN) for zero-height rectangles; callers
    /// must guard before dividing by it.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Computes the nine control points of the rectangle in the fixed
    /// index order used across the editor for alignment feedback:
    ///
    /// ```text
    /// 0: TL   1: TC   2: TR
    /// 3: ML   4: C    5: MR
    /// 6: BL   7: BC   8: BR
    /// ```
    pub fn nine_points(&self) -> [Vector2; 9] {
        let Rectangle {
            x,
            y,
            width,
            height,
        } = *self;
        let cx = x + width / 2.0;
        let cy = y + height / 2.0;
        [
            Vector2::new(x, y),
            Vector2::new(cx, y),
            Vector2::new(x + width, y),
            Vector2::new(x, cy),
            Vector2::new(cx, cy),
            Vector2::new(x + width, cy),
            Vector2::new(x, y + height),
            Vector2::new(cx, y + height),
            Vector2::new(x + width, y + height),
        ]
    }

    /// Returns the point on the boundary (or center of an edge) named
    /// by the cardinal direction.
    pub fn cardinal_point(&self, direction: CardinalDirection) -> Vector2 {
        let Rectangle {
            x,
            y,
            width,
            height,
        } = *self;
        match direction {
            CardinalDirection::N => Vector2::new(x + width / 2.0, y),
            CardinalDirection::S => Vector2::new(x + width / 2.0, y + height),
            CardinalDirection::E => Vector2::new(x + width, y + height / 2.0),
            CardinalDirection::W => Vector2::new(x, y + height / 2.0),
            CardinalDirection::NE => Vector2::new(x + width, y),
            CardinalDirection::NW => Vector2::new(x, y),
            CardinalDirection::SE => Vector2::new(x + width, y + height),
            CardinalDirection::SW => Vector2::new(x, y + height),
        }
    }
}

/// Quantizes a scalar to the nearest multiple of `step`.
fn quantize(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Computes the bounding rectangle of all input rectangles.
///
/// Returns `None` for an empty slice.
pub fn union(rects: &[Rectangle]) -> Option<Rectangle> {
    let mut iter = rects.iter();
    let first = iter.next()?;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x + first.width;
    let mut max_y = first.y + first.height;
    for r in iter {
        min_x = min_x.min(r.x);
        min_y = min_y.min(r.y);
        max_x = max_x.max(r.x + r.width);
        max_y = max_y.max(r.y + r.height);
    }
    Some(Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_points_order() {
        let r = Rectangle::new(0.0, 0.0, 100.0, 50.0);
        let p = r.nine_points();
        assert_eq!(p[0], Vector2::new(0.0, 0.0)); // TL
        assert_eq!(p[1], Vector2::new(50.0, 0.0)); // TC
        assert_eq!(p[2], Vector2::new(100.0, 0.0)); // TR
        assert_eq!(p[3], Vector2::new(0.0, 25.0)); // ML
        assert_eq!(p[4], Vector2::new(50.0, 25.0)); // C
        assert_eq!(p[5], Vector2::new(100.0, 25.0)); // MR
        assert_eq!(p[6], Vector2::new(0.0, 50.0)); // BL
        assert_eq!(p[7], Vector2::new(50.0, 50.0)); // BC
        assert_eq!(p[8], Vector2::new(100.0, 50.0)); // BR
    }

    #[test]
    fn scale_about_origin() {
        let r = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let scaled = r.scale(Vector2::new(50.0, 50.0), Vector2::new(2.0, 1.0));
        assert_eq!(scaled, Rectangle::new(-50.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn scale_factors_round_trip() {
        let a = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        let b = Rectangle::new(10.0, 20.0, 150.0, 25.0);
        let factors = a.scale_factors_to(&b);
        assert_eq!(factors, Vector2::new(1.5, 0.5));
        let scaled = a.scale(Vector2::new(a.x, a.y), factors);
        assert_eq!(scaled, b);
    }

    #[test]
    fn union_of_rects() {
        let rects = [
            Rectangle::new(0.0, 0.0, 10.0, 10.0),
            Rectangle::new(20.0, -5.0, 10.0, 10.0),
        ];
        assert_eq!(
            union(&rects),
            Some(Rectangle::new(0.0, -5.0, 30.0, 15.0))
        );
        assert_eq!(union(&[]), None);
    }

    #[test]
    fn positive_normalizes_negative_size() {
        let r = Rectangle::new(100.0, 100.0, -40.0, -30.0);
        assert_eq!(r.positive(), Rectangle::new(60.0, 70.0, 40.0, 30.0));
        // Already-positive rects are untouched.
        let p = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(p.positive(), p);
    }

    #[test]
    fn quantize_to_grid() {
        let r = Rectangle::new(0.4, 99.6, 100.2, 49.5);
        assert_eq!(r.quantize(1.0), Rectangle::new(0.0, 100.0, 100.0, 50.0));
    }

    #[test]
    fn cardinal_points() {
        let r = Rectangle::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.cardinal_point(CardinalDirection::E), Vector2::new(100.0, 25.0));
        assert_eq!(r.cardinal_point(CardinalDirection::NW), Vector2::new(0.0, 0.0));
        assert_eq!(r.cardinal_point(CardinalDirection::S), Vector2::new(50.0, 50.0));
    }
}
