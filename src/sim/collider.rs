//! Axis-aligned bounding boxes
//!
//! A collider stores a fixed local-space box (upper-left / lower-right
//! corners) that is translated by `position` every tick. Screen coordinates:
//! y grows downward, so "upper" means smaller y.

use glam::Vec2;

/// Rejected collider corners
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ColliderError {
    #[error("collider corners inverted or degenerate: upper_left={upper_left}, lower_right={lower_right}")]
    Inverted { upper_left: Vec2, lower_right: Vec2 },

    #[error("collider corners must be finite")]
    NonFinite,
}

/// Axis-aligned box collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbCollider {
    upper_left: Vec2,
    lower_right: Vec2,
    position: Vec2,
}

impl Default for AabbCollider {
    /// Unit box at the origin
    fn default() -> Self {
        Self {
            upper_left: Vec2::ZERO,
            lower_right: Vec2::ONE,
            position: Vec2::ZERO,
        }
    }
}

impl AabbCollider {
    /// Create a collider with the given local box, positioned at the origin
    pub fn new(upper_left: Vec2, lower_right: Vec2) -> Result<Self, ColliderError> {
        let mut collider = Self::default();
        collider.init_collider(upper_left, lower_right)?;
        Ok(collider)
    }

    /// Fix the local-space box.
    ///
    /// `upper_left` must be strictly up and left of `lower_right`. On error the
    /// previous box is kept.
    pub fn init_collider(&mut self, upper_left: Vec2, lower_right: Vec2) -> Result<(), ColliderError> {
        if !upper_left.is_finite() || !lower_right.is_finite() {
            return Err(ColliderError::NonFinite);
        }
        if upper_left.x >= lower_right.x || upper_left.y >= lower_right.y {
            return Err(ColliderError::Inverted {
                upper_left,
                lower_right,
            });
        }
        self.upper_left = upper_left;
        self.lower_right = lower_right;
        Ok(())
    }

    /// Builder-style position setter
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Local upper-left corner (relative to `position`)
    #[inline]
    pub fn upper_left(&self) -> Vec2 {
        self.upper_left
    }

    /// Local lower-right corner (relative to `position`)
    #[inline]
    pub fn lower_right(&self) -> Vec2 {
        self.lower_right
    }

    /// Half the box size on each axis
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        (self.lower_right - self.upper_left) * 0.5
    }

    #[inline]
    pub fn world_upper_left(&self) -> Vec2 {
        self.position + self.upper_left
    }

    #[inline]
    pub fn world_lower_right(&self) -> Vec2 {
        self.position + self.lower_right
    }

    /// World-space (min, max) corners, e.g. for debug overlays
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.world_upper_left(), self.world_lower_right())
    }

    pub fn center(&self) -> Vec2 {
        self.world_upper_left() + self.half_extents()
    }

    /// Closed-interval AABB intersection. Touching edges count as overlap.
    pub fn overlaps(&self, other: &AabbCollider) -> bool {
        let (min_a, max_a) = self.bounds();
        let (min_b, max_b) = other.bounds();
        min_a.x <= max_b.x && max_a.x >= min_b.x && min_a.y <= max_b.y && max_a.y >= min_b.y
    }
}
