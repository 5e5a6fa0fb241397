//! Integer screen rectangles.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels, `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True when the interiors overlap. Empty rectangles never intersect and
    /// rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(Rect::new(0, 10, 10, 10)));
        assert!(a.intersects(Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn empty_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(Rect::new(2, 2, 0, 5)));
        assert!(!Rect::new(2, 2, 5, -1).intersects(a));
    }

    #[test]
    fn containment_intersects_both_ways() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.intersects(inner));
        assert!(inner.intersects(outer));
    }
}
