//! Input event types.
//!
//! The frontend (terminal input thread) translates raw key presses into
//! [`InputEvent`]s and sends them over the input bridge. The pump system
//! drains the bridge once per tick, so the movement system always sees the
//! complete, ordered sequence of events for the tick it is processing.

use crate::maths::{Cell, Vec2};

/// One of the four cardinal movement directions.
///
/// Screen coordinates: y grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit grid offset for this direction.
    pub fn delta(self) -> Cell {
        match self {
            Direction::Up => Cell::new(0, -1),
            Direction::Down => Cell::new(0, 1),
            Direction::Left => Cell::new(-1, 0),
            Direction::Right => Cell::new(1, 0),
        }
    }

    /// Continuous unit vector for this direction.
    pub fn as_vec2(self) -> Vec2 {
        self.delta().as_vec2()
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A discrete input event consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Directional key press; a candidate direction change.
    Turn(Direction),
    /// Quit signal (escape key, `q`, or terminal close).
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_offsets() {
        assert_eq!(Direction::Up.delta(), Cell::new(0, -1));
        assert_eq!(Direction::Down.delta(), Cell::new(0, 1));
        assert_eq!(Direction::Left.delta(), Cell::new(-1, 0));
        assert_eq!(Direction::Right.delta(), Cell::new(1, 0));
    }
}
