use std::time::Instant;

use log::{debug, info, warn};
use sdl3::Sdl;
use sdl3::pixels::Color;
use sdl3::render::{Canvas, FRect};
use sdl3::video::Window;

use crate::client::input::{Input, InputState};
use crate::config::DemoConfig;
use crate::error::{AppError, Result};
use crate::scene::Scene;
use crate::shared::drawable::{Drawable, Rgb};

/// Core of the demo. Owns the window and the scene it draws.
pub struct DemoCore {
    sdl: Sdl,               // SDL context.
    canvas: Canvas<Window>, // Canvas to draw on.
    scene: Scene,           // Rectangles and the current selection.
}

impl DemoCore {
    const BACKGROUND: Rgb = Rgb::BLACK;

    /// Creates a new demo core by initializing the SDL context and creating a window.
    pub fn new(config: &DemoConfig, scene: Scene) -> Result<Self> {
        let sdl = sdl3::init().map_err(|why| AppError::Sdl(why.to_string()))?;
        let video = sdl.video().map_err(|why| AppError::Sdl(why.to_string()))?;

        let window = video
            .window(config.title, config.width, config.height)
            .build()
            .map_err(|why| AppError::Window(why.to_string()))?;

        let canvas = window.into_canvas();
        info!(
            "Opened {}x{} window with {} rectangles.",
            config.width,
            config.height,
            scene.len()
        );
        if scene.is_empty() {
            warn!("Scene has no rectangles to select.");
        }

        Ok(Self { sdl, canvas, scene })
    }

    /// Runs the main loop: drain input, apply the click, steer the selection, draw.
    pub fn run(&mut self) -> Result<()> {
        let mut event_pump = self
            .sdl
            .event_pump()
            .map_err(|why| AppError::Sdl(why.to_string()))?;

        let mut last_frame_time = Instant::now();
        let mut input_state = InputState::new();

        'game_loop: loop {
            input_state.get_input(&mut event_pump, self.canvas.window().id());
            for input in &input_state.events {
                match input {
                    Input::Quit => break 'game_loop,
                    Input::Click(point) => {
                        if let Some(idx) = self.scene.click(*point) {
                            let speed = self.scene.get(idx).map_or(0.0, |rect| rect.speed());
                            debug!("Rectangle {idx} now steers at {speed} units/s.");
                        }
                    }
                }
            }

            // Elapsed time since the previous frame.
            let now = Instant::now();
            let elapsed = now - last_frame_time;
            last_frame_time = now;

            if let Some(keycode) = input_state.held_arrow() {
                self.scene.steer_selected(elapsed, keycode);
            }

            self.canvas.set_draw_color(Self::color(Self::BACKGROUND));
            self.canvas.clear();

            for rect in self.scene.iter() {
                Self::render(&mut self.canvas, rect);
            }

            self.canvas.present();
        }

        info!("Window closed, shutting down.");
        Ok(())
    }

    /// Fills the area covered by a drawable with its color.
    fn render(canvas: &mut Canvas<Window>, item: &impl Drawable) {
        let top_left = item.top_left();
        let size = item.size();

        canvas.set_draw_color(Self::color(item.fill()));
        let _ = canvas.fill_rect(FRect::new(top_left.0, top_left.1, size.width, size.height));
    }

    #[inline]
    fn color(rgb: Rgb) -> Color {
        Color::RGB(rgb.0, rgb.1, rgb.2)
    }
}
