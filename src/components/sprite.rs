//! 2D sprite component and derived bounding geometry.
//!
//! A sprite is identified by a texture key and a size in grid units. The
//! actual pixels/glyphs behind a key belong to the frontend; the simulation
//! core only cares about the axis-aligned bounding box derived from the
//! sprite size and the owning entity's [`MapPosition`].
//!
//! [`MapPosition`]: crate::components::mapposition::MapPosition

use bevy_ecs::prelude::Component;

use crate::maths::Vec2;

/// Sprite identified by a texture key, sized in grid units.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    /// One-cell sprite with the given texture key.
    pub fn cell(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: 1.0,
            height: 1.0,
        }
    }

    /// Bounding box at the given position, aligned to the grid.
    ///
    /// The box is anchored at the cell the position falls in, matching how
    /// the sprite is drawn. Collision therefore happens on whole cells even
    /// while the underlying position is mid-cell.
    pub fn bounding_box(&self, pos: Vec2) -> SpriteBox {
        let min = Vec2::new(pos.x.floor(), pos.y.floor());
        SpriteBox {
            min,
            max: min + Vec2::new(self.width, self.height),
        }
    }
}

/// Axis-aligned bounding rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl SpriteBox {
    /// AABB vs AABB overlap test. Touching edges do not count as overlap.
    pub fn intersects(&self, other: &SpriteBox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_on_same_cell_intersect() {
        let s = Sprite::cell("player");
        let a = s.bounding_box(Vec2::new(3.4, 2.0));
        let b = s.bounding_box(Vec2::new(3.0, 2.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn adjacent_cells_only_touch() {
        let s = Sprite::cell("wall");
        let a = s.bounding_box(Vec2::new(3.0, 2.0));
        let b = s.bounding_box(Vec2::new(4.0, 2.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn mid_cell_position_is_anchored_to_its_cell() {
        let s = Sprite::cell("player");
        let a = s.bounding_box(Vec2::new(3.9, 2.0));
        assert_eq!(a.min, Vec2::new(3.0, 2.0));
        let b = s.bounding_box(Vec2::new(2.0, 2.0));
        assert!(!a.intersects(&b));
    }
}
