mod direction;
mod movable;

pub use movable::MovableRect;

use std::time::Duration;

use log::debug;
use rand::Rng;
use sdl3::keyboard::Keycode;

use crate::config::DemoConfig;
use crate::vec2f::Vec2f;

/// Owns every rectangle and remembers which one, if any, is selected.
#[derive(Debug)]
pub struct Scene {
    rects: Vec<MovableRect>, // Rectangles in draw order.
    selected: Option<usize>, // Index of the selected rectangle.
}

impl Scene {
    /// Creates a scene from already configured rectangles, none selected.
    pub fn new(rects: Vec<MovableRect>) -> Self {
        Self {
            rects,
            selected: None,
        }
    }

    /// Spawns `config.count` rectangles at random positions with random speeds.
    #[allow(clippy::cast_precision_loss)]
    pub fn spawn<R: Rng>(config: &DemoConfig, rng: &mut R) -> Self {
        let bounds = config.bounds();
        let span_x = bounds.width() - config.rect_size.width;
        let span_y = bounds.height() - config.rect_size.height;

        let rects = (0..config.count)
            .map(|_| {
                let position = Vec2f(sample(rng, span_x), sample(rng, span_y));
                let speed = rng.random_range(config.speed_range.clone()) as f32;

                let mut rect = MovableRect::new(config.rect_size, position);
                rect.set_speed(speed, bounds);
                rect
            })
            .collect();

        Self::new(rects)
    }

    /// Amount of rectangles in the scene.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Index of the selected rectangle.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&MovableRect> {
        self.rects.get(index)
    }

    /// Iterates the rectangles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &MovableRect> {
        self.rects.iter()
    }

    /// Selects the first rectangle under `point`, deselecting the previous one.
    /// A click that hits nothing keeps the current selection.
    pub fn click(&mut self, point: Vec2f) -> Option<usize> {
        let hit = self.rects.iter().position(|rect| rect.contains(point))?;

        if let Some(previous) = self.selected.and_then(|idx| self.rects.get_mut(idx)) {
            previous.set_selected(false);
        }

        self.rects[hit].set_selected(true);
        self.selected = Some(hit);
        debug!("Selected rectangle {hit} at ({}, {}).", point.0, point.1);

        Some(hit)
    }

    /// Moves the selected rectangle with the held key. Returns true if anything moved.
    pub fn steer_selected(&mut self, elapsed: Duration, key: Keycode) -> bool {
        match self.selected.and_then(|idx| self.rects.get_mut(idx)) {
            Some(rect) => rect.steer(elapsed, key),
            None => false,
        }
    }
}

/// Uniform sample from `[0, upper)`, or zero when the range is empty.
fn sample<R: Rng>(rng: &mut R, upper: f32) -> f32 {
    if upper > 0.0 {
        rng.random_range(0.0..upper)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::shared::bounds::Bounds;
    use crate::shared::shape::Rectangle;

    /// Two rectangles side by side plus one overlapping the first.
    ///
    /// ```text
    /// [0: 100..220] [1: 400..520]
    ///    [2: 160..280]
    /// ```
    fn three_rects() -> Scene {
        let bounds = Bounds::new(0.0, 800.0, 0.0, 600.0);
        let size = Rectangle::new(120.0, 60.0);
        let rects = [
            Vec2f(160.0, 100.0),
            Vec2f(460.0, 100.0),
            Vec2f(220.0, 110.0),
        ]
        .into_iter()
        .map(|pos| {
            let mut rect = MovableRect::new(size, pos);
            rect.set_speed(200.0, bounds);
            rect
        })
        .collect();

        Scene::new(rects)
    }

    fn selected_flags(scene: &Scene) -> Vec<bool> {
        scene.iter().map(MovableRect::is_selected).collect()
    }

    #[test]
    fn click_selects_hit_rectangle() {
        let mut scene = three_rects();
        assert_eq!(scene.click(Vec2f(460.0, 100.0)), Some(1));
        assert_eq!(scene.selected(), Some(1));
        assert_eq!(selected_flags(&scene), vec![false, true, false]);
    }

    #[test]
    fn clicking_another_moves_the_selection() {
        let mut scene = three_rects();
        scene.click(Vec2f(120.0, 100.0));
        scene.click(Vec2f(500.0, 120.0));
        assert_eq!(scene.selected(), Some(1));
        assert_eq!(selected_flags(&scene), vec![false, true, false]);
    }

    #[test]
    fn overlapping_click_picks_first_in_order() {
        let mut scene = three_rects();
        assert_eq!(scene.click(Vec2f(200.0, 110.0)), Some(0));
        assert_eq!(scene.click(Vec2f(270.0, 110.0)), Some(2));
        assert_eq!(selected_flags(&scene), vec![false, false, true]);
    }

    #[test]
    fn empty_click_keeps_selection() {
        let mut scene = three_rects();
        scene.click(Vec2f(460.0, 100.0));
        assert_eq!(scene.click(Vec2f(700.0, 500.0)), None);
        assert_eq!(scene.selected(), Some(1));
        assert_eq!(selected_flags(&scene), vec![false, true, false]);
    }

    #[test]
    fn hit_then_miss_in_one_frame_keeps_the_hit() {
        let mut scene = three_rects();
        let clicks = [Vec2f(460.0, 100.0), Vec2f(700.0, 500.0)];
        let hits: Vec<_> = clicks.into_iter().map(|point| scene.click(point)).collect();

        assert_eq!(hits, vec![Some(1), None]);
        assert_eq!(scene.selected(), Some(1));
        assert_eq!(selected_flags(&scene), vec![false, true, false]);
    }

    #[test]
    fn reclicking_keeps_rectangle_selected() {
        let mut scene = three_rects();
        scene.click(Vec2f(460.0, 100.0));
        scene.click(Vec2f(470.0, 90.0));
        assert_eq!(selected_flags(&scene), vec![false, true, false]);
    }

    #[test]
    fn steer_without_selection_does_nothing() {
        let mut scene = three_rects();
        let before: Vec<_> = scene.iter().map(MovableRect::position).collect();
        assert!(!scene.steer_selected(Duration::from_secs(1), Keycode::Right));
        let after: Vec<_> = scene.iter().map(MovableRect::position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn steer_moves_only_the_selected() {
        let mut scene = three_rects();
        scene.click(Vec2f(460.0, 100.0));
        assert!(scene.steer_selected(Duration::from_secs(1), Keycode::Down));

        assert_eq!(scene.get(1).map(MovableRect::position), Some(Vec2f(460.0, 300.0)));
        assert_eq!(scene.get(0).map(MovableRect::position), Some(Vec2f(160.0, 100.0)));
        assert_eq!(scene.get(2).map(MovableRect::position), Some(Vec2f(220.0, 110.0)));
    }

    #[test]
    fn steer_with_unknown_key_is_ignored() {
        let mut scene = three_rects();
        scene.click(Vec2f(460.0, 100.0));
        assert!(!scene.steer_selected(Duration::from_secs(1), Keycode::Return));
        assert_eq!(scene.get(1).map(MovableRect::position), Some(Vec2f(460.0, 100.0)));
    }

    #[test]
    fn spawn_places_rectangles_inside_window() {
        let config = DemoConfig::default();
        let bounds = config.bounds();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let scene = Scene::spawn(&config, &mut rng);

        assert_eq!(scene.len(), 10);
        assert_eq!(scene.selected(), None);
        for rect in scene.iter() {
            let pos = rect.position();
            assert!(pos.0 >= bounds.min_x + 60.0 && pos.0 <= bounds.max_x - 60.0);
            assert!(pos.1 >= bounds.min_y + 30.0 && pos.1 <= bounds.max_y - 30.0);
            assert!((100.0..=399.0).contains(&rect.speed()));
            assert!(!rect.is_selected());
        }
    }

    #[test]
    fn spawn_handles_window_smaller_than_rectangle() {
        let config = DemoConfig {
            width: 100,
            height: 40,
            count: 3,
            ..DemoConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Scene::spawn(&config, &mut rng);

        for rect in scene.iter() {
            assert_eq!(rect.position(), Vec2f(50.0, 20.0));
        }
    }
}
