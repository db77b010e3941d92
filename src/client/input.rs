use std::collections::HashSet;

use sdl3::EventPump;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;
use sdl3::mouse::MouseButton;

use crate::vec2f::Vec2f;

/// Represents the input from the user.
#[derive(Debug, PartialEq)]
pub(crate) enum Input {
    Quit,         // The user has requested to quit the application.
    Click(Vec2f), // Left mouse button pressed at this position.
}

/// Represents the state of the input.
pub(crate) struct InputState {
    held: HashSet<Keycode>, // The keys that are currently held down.
    pub events: Vec<Input>, // The events that have been triggered.
}

impl InputState {
    /// Arrow keys in the order they win when several are held.
    const STEERING: [Keycode; 4] = [Keycode::Left, Keycode::Right, Keycode::Up, Keycode::Down];

    /// Creates a new instance of the input state.
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Marks a key as held down.
    pub fn press(&mut self, keycode: Keycode) {
        self.held.insert(keycode);
    }

    /// Queues a left click at `point`. Every click is kept, in arrival order.
    pub fn click(&mut self, point: Vec2f) {
        self.events.push(Input::Click(point));
    }

    /// Marks a key as released.
    pub fn release(&mut self, keycode: Keycode) {
        self.held.remove(&keycode);
    }

    /// The arrow key steering this frame, if any. Only one axis moves per frame.
    pub fn held_arrow(&self) -> Option<Keycode> {
        Self::STEERING
            .into_iter()
            .find(|keycode| self.held.contains(keycode))
    }

    /// Drains pending events without blocking.
    pub fn get_input(&mut self, pump: &mut EventPump, win_id: u32) {
        self.events.clear();

        for event in pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.events = vec![Input::Quit];
                    return;
                }

                Event::MouseButtonDown {
                    x,
                    y,
                    window_id,
                    mouse_btn: MouseButton::Left,
                    ..
                } if window_id == win_id => self.click(Vec2f::from((x, y))),

                Event::KeyDown {
                    keycode: Some(keycode),
                    window_id,
                    repeat: false,
                    ..
                } if window_id == win_id => self.press(keycode),

                Event::KeyUp {
                    keycode: Some(keycode),
                    window_id,
                    ..
                } if window_id == win_id => self.release(keycode),

                _ => (),
            }
        }
    }
}
