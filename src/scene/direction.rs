use sdl3::keyboard::Keycode;

use crate::error::AppError;
use crate::vec2f::Vec2f;

/// One of the four axis-aligned movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step for the direction, y grows downwards.
    pub fn unit(self) -> Vec2f {
        match self {
            Direction::Left => Vec2f(-1.0, 0.0),
            Direction::Right => Vec2f(1.0, 0.0),
            Direction::Up => Vec2f(0.0, -1.0),
            Direction::Down => Vec2f(0.0, 1.0),
        }
    }
}

impl TryFrom<Keycode> for Direction {
    type Error = AppError;

    fn try_from(key: Keycode) -> Result<Self, Self::Error> {
        match key {
            Keycode::Left => Ok(Direction::Left),
            Keycode::Right => Ok(Direction::Right),
            Keycode::Up => Ok(Direction::Up),
            Keycode::Down => Ok(Direction::Down),
            other => Err(AppError::InvalidDirection(format!("{other:?}"))),
        }
    }
}
