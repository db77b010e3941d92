use std::ops::RangeInclusive;

use crate::shared::bounds::Bounds;
use crate::shared::shape::Rectangle;

/// Values that shape the demo: window extent, how many rectangles and how they move.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: &'static str,              // Window title.
    pub width: u32,                       // Window width in pixels.
    pub height: u32,                      // Window height in pixels.
    pub count: usize,                     // Rectangles spawned at startup.
    pub rect_size: Rectangle,             // Size shared by every rectangle.
    pub speed_range: RangeInclusive<u32>, // Speeds are drawn from here, units per second.
}

impl DemoConfig {
    const TITLE: &'static str = "pickrect";
    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;
    const COUNT: usize = 10;
    const RECT_WIDTH: f32 = 120.0;
    const RECT_HEIGHT: f32 = 60.0;
    const MIN_SPEED: u32 = 100;
    const MAX_SPEED: u32 = 399;

    /// Playable area, the full window.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_extent(self.width, self.height)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: Self::TITLE,
            width: Self::WIDTH,
            height: Self::HEIGHT,
            count: Self::COUNT,
            rect_size: Rectangle::new(Self::RECT_WIDTH, Self::RECT_HEIGHT),
            speed_range: Self::MIN_SPEED..=Self::MAX_SPEED,
        }
    }
}
