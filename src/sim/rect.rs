//! Axis-aligned rectangle geometry for the island and paddle
//!
//! Rectangles are positioned by their top-left corner, Y increasing
//! downward, matching the render collaborator's coordinate system.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// X coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True if `x` lies within the rectangle's horizontal span (inclusive)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }

    /// AABB overlap test. Edges that merely touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(134.0, 11.0, 127.0, 37.0);
        assert_eq!(r.right(), 261.0);
        assert_eq!(r.bottom(), 48.0);
        assert_eq!(r.pos(), Vec2::new(134.0, 11.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        // Touching edges are not an overlap
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_spans_x() {
        let r = Rect::new(100.0, 0.0, 50.0, 10.0);
        assert!(r.spans_x(100.0));
        assert!(r.spans_x(125.0));
        assert!(r.spans_x(150.0));
        assert!(!r.spans_x(99.9));
        assert!(!r.spans_x(150.1));
    }
}
