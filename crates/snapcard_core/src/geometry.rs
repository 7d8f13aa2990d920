//! Geometry primitives for widget positioning
//!
//! Offsets are logical-pixel displacements from a widget's rest position.
//! Rects are used for the drop-target bounds check.

use std::ops::{Add, AddAssign, Neg, Sub};

/// A 2D displacement from a widget's rest position, in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round each axis to the nearest whole pixel
    pub fn round_to_int(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }

    /// Check if both axes are exactly at rest
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

/// A 2D position in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate a point by an offset
    pub fn translated(self, offset: Offset) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

/// A 2D extent in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square extent, handy for card widgets
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// An axis-aligned rectangle in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check whether a point lies inside the rect (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_arithmetic() {
        let mut offset = Offset::ZERO;
        offset += Offset::new(10.0, -4.0);
        offset += Offset::new(2.5, 1.0);
        assert_eq!(offset, Offset::new(12.5, -3.0));
        assert_eq!(-offset, Offset::new(-12.5, 3.0));
    }

    #[test]
    fn test_offset_rounding() {
        assert_eq!(Offset::new(12.5, -3.4).round_to_int(), (13, -3));
        assert_eq!(Offset::ZERO.round_to_int(), (0, 0));
        assert!(Offset::ZERO.is_zero());
        assert!(!Offset::new(0.1, 0.0).is_zero());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_center(Point::new(100.0, 100.0), Size::square(80.0));
        assert!(rect.contains(Point::new(100.0, 100.0)));
        assert!(rect.contains(Point::new(60.0, 140.0)));
        assert!(!rect.contains(Point::new(59.9, 100.0)));
        assert!(!rect.contains(Point::new(100.0, 140.1)));
    }

    #[test]
    fn test_point_translated() {
        let point = Point::new(5.0, 5.0).translated(Offset::new(-5.0, 10.0));
        assert_eq!(point, Point::new(0.0, 15.0));
    }
}
