use crate::vec2f::Vec2f;

use super::shape::Rectangle;

/// A fill color expressed as red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// Anything a renderer can paint as a filled, axis-aligned rectangle.
pub trait Drawable {
    /// Top-left corner in window coordinates.
    fn top_left(&self) -> Vec2f;

    fn size(&self) -> Rectangle;

    fn fill(&self) -> Rgb;
}
