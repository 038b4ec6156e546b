//! AABB collision tests and direction reflection
//!
//! All checks are predictive: they test the ball's projected *next*
//! bounding box, one tick ahead, rather than correcting after penetration.
//! Impact-side classification instead reads the ball's *current* X. That
//! stale read is part of the observable bounce geometry and must not be
//! "fixed" to use edge-of-entry.

use glam::Vec2;

use super::rect::Rect;

/// Which kind of surface a contact was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Side hit - the X direction component flips
    Vertical,
    /// Top/bottom hit - the Y direction component flips
    Horizontal,
}

/// True if the candidate Y would leave the vertical arena bounds
#[inline]
pub fn crosses_vertical_bound(next_y: f32, ball_size: f32, arena_height: f32) -> bool {
    next_y < 0.0 || next_y > arena_height - ball_size
}

/// True if the candidate X would leave the horizontal arena bounds
#[inline]
pub fn crosses_horizontal_bound(next_x: f32, ball_size: f32, arena_width: f32) -> bool {
    next_x < 0.0 || next_x > arena_width - ball_size
}

/// AABB overlap between the ball's projected next bounding box and a rect
pub fn overlaps_rect(next_pos: Vec2, ball_size: f32, rect: &Rect) -> bool {
    Rect::new(next_pos.x, next_pos.y, ball_size, ball_size).overlaps(rect)
}

/// Classify which surface of `rect` the ball contacted.
///
/// If the ball's current X lies outside the rect's horizontal span the
/// contact is a side hit, otherwise top/bottom. Position-based, not
/// velocity-based.
pub fn impact_side(current_x: f32, rect: &Rect) -> Surface {
    if rect.spans_x(current_x) {
        Surface::Horizontal
    } else {
        Surface::Vertical
    }
}

/// Flip the direction component matching the classified surface
#[inline]
pub fn reflect(dir: Vec2, surface: Surface) -> Vec2 {
    match surface {
        Surface::Vertical => Vec2::new(-dir.x, dir.y),
        Surface::Horizontal => Vec2::new(dir.x, -dir.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_bound() {
        assert!(crosses_vertical_bound(-0.1, 25.0, 800.0));
        assert!(crosses_vertical_bound(775.1, 25.0, 800.0));
        assert!(!crosses_vertical_bound(0.0, 25.0, 800.0));
        assert!(!crosses_vertical_bound(775.0, 25.0, 800.0));
    }

    #[test]
    fn test_horizontal_bound() {
        assert!(crosses_horizontal_bound(-0.1, 25.0, 400.0));
        assert!(crosses_horizontal_bound(375.1, 25.0, 400.0));
        assert!(!crosses_horizontal_bound(200.0, 25.0, 400.0));
    }

    #[test]
    fn test_overlaps_rect() {
        let island = Rect::new(134.0, 11.0, 127.0, 37.0);
        // Ball bounding box 25x25 poking into the island from below
        assert!(overlaps_rect(Vec2::new(150.0, 40.0), 25.0, &island));
        // Clear miss to the left
        assert!(!overlaps_rect(Vec2::new(50.0, 20.0), 25.0, &island));
        // Touching the bottom edge exactly is not a contact
        assert!(!overlaps_rect(Vec2::new(150.0, 48.0), 25.0, &island));
    }

    #[test]
    fn test_impact_side_classification() {
        let island = Rect::new(134.0, 11.0, 127.0, 37.0);
        assert_eq!(impact_side(100.0, &island), Surface::Vertical);
        assert_eq!(impact_side(300.0, &island), Surface::Vertical);
        assert_eq!(impact_side(200.0, &island), Surface::Horizontal);
    }

    #[test]
    fn test_reflect_flips_one_axis() {
        let dir = Vec2::new(0.6, 0.8);
        assert_eq!(reflect(dir, Surface::Horizontal), Vec2::new(0.6, -0.8));
        assert_eq!(reflect(dir, Surface::Vertical), Vec2::new(-0.6, 0.8));
    }
}
