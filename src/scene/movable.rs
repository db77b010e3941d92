use std::time::Duration;

use log::warn;
use sdl3::keyboard::Keycode;

use crate::shared::bounds::Bounds;
use crate::shared::drawable::{Drawable, Rgb};
use crate::shared::shape::Rectangle;
use crate::vec2f::Vec2f;

use super::direction::Direction;

/// A rectangle that can be picked with the mouse and steered inside its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MovableRect {
    position: Vec2f,     // Center position.
    geometry: Rectangle, // Width and height.
    speed: f32,          // Units per second.
    bounds: Bounds,      // Area the full extent is kept inside of.
    selected: bool,      // Receives keyboard movement.
    fill: Rgb,           // Marker that reflects the selection.
}

impl MovableRect {
    /// Fill while not selected.
    pub const IDLE_FILL: Rgb = Rgb::GREEN;
    /// Fill while selected.
    pub const ACTIVE_FILL: Rgb = Rgb::RED;

    /// Creates an unselected, motionless rectangle centered on `position`.
    /// Bounds stay open until `set_bounds` or `set_speed` assigns them.
    pub fn new(geometry: Rectangle, position: Vec2f) -> Self {
        Self {
            position,
            geometry,
            speed: 0.0,
            bounds: Bounds::unbounded(),
            selected: false,
            fill: Self::IDLE_FILL,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2f {
        self.position
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Checks if the point lies within the rectangle's current extent.
    pub fn contains(&self, point: Vec2f) -> bool {
        self.extent().contains(point)
    }

    /// Area currently covered by the rectangle.
    pub fn extent(&self) -> Bounds {
        let half = self.geometry.half_extent();
        let min = self.position - half;
        let max = self.position + half;
        Bounds::new(min.0, max.0, min.1, max.1)
    }

    /// Stores new bounds and pulls the rectangle back inside them.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.position = self.bounds.clamp_center(self.position, self.geometry);
    }

    /// Assigns the movement speed together with the bounds it moves within.
    pub fn set_speed(&mut self, speed: f32, bounds: Bounds) {
        self.speed = speed;
        self.set_bounds(bounds);
    }

    /// Marks the rectangle as (de)selected and updates its fill to match.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.fill = if selected {
            Self::ACTIVE_FILL
        } else {
            Self::IDLE_FILL
        };
    }

    /// Travels `speed * elapsed` towards `direction`, then clamps into the bounds.
    pub fn move_in_direction(&mut self, elapsed: Duration, direction: Direction) {
        let travel = self.speed * elapsed.as_secs_f32();
        self.position += direction.unit().scale(travel);
        self.position = self.bounds.clamp_center(self.position, self.geometry);
    }

    /// Moves with a raw key. Keys that are not arrows are logged and ignored.
    /// Returns true if the key was accepted as a direction.
    pub fn steer(&mut self, elapsed: Duration, key: Keycode) -> bool {
        match Direction::try_from(key) {
            Ok(direction) => {
                self.move_in_direction(elapsed, direction);
                true
            }
            Err(why) => {
                warn!("Ignoring movement request: {why}");
                false
            }
        }
    }
}

impl Drawable for MovableRect {
    fn top_left(&self) -> Vec2f {
        self.position - self.geometry.half_extent()
    }

    fn size(&self) -> Rectangle {
        self.geometry
    }

    fn fill(&self) -> Rgb {
        self.fill
    }
}
