//! Small 2D math helpers for grid-space geometry.
//!
//! Positions are expressed in grid units: [`Vec2`] for continuous positions
//! and [`Cell`] for discrete grid cells. A sprite moving at sub-cell speed
//! carries a `Vec2`; everything that reasons about occupancy (collision
//! classification, tail propagation, fruit placement) works on `Cell`.

use std::ops::{Add, AddAssign, Mul, Sub};

/// Continuous 2D position or offset in grid units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform scale, used for `direction * speed` advances.
    pub fn scale_by(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// The grid cell this position falls in (truncation toward -inf).
    pub fn cell(self) -> Cell {
        Cell {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        self.scale_by(factor)
    }
}

/// Discrete grid cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl Add for Cell {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_cell_truncates_toward_negative_infinity() {
        assert_eq!(Vec2::new(12.9, 3.0).cell(), Cell::new(12, 3));
        assert_eq!(Vec2::new(-0.1, 0.0).cell(), Cell::new(-1, 0));
    }

    #[test]
    fn vec2_scale_and_add() {
        let v = Vec2::new(1.0, -1.0) * 0.25;
        assert_eq!(v, Vec2::new(0.25, -0.25));
        assert_eq!(v + Vec2::new(1.0, 1.0), Vec2::new(1.25, 0.75));
    }

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(5, 7);
        let b = Cell::new(1, -1);
        assert_eq!(a + b, Cell::new(6, 6));
        assert_eq!(a - b, Cell::new(4, 8));
    }
}
