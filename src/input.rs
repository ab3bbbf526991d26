// Input events and what they do to the scene.
// Visual:
// - moving the mouse sends the circle after the pointer (unless paused with S)
// - any click drops a 40x40 square of a random color under the pointer
// - T or Up arrow swaps the follower square's two colors

use log::debug;
use rand::Rng;

use crate::scene::Scene;
use crate::types::Point;

/// Side length of a click-spawned square.
pub const SPAWN_SIZE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// A key press, already classified: either a coded arrow key or a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Arrow(Arrow),
    Character(char),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved with no button held.
    PointerMoved(Point),
    /// Pointer moved while a button is held. Has no effect.
    PointerDragged(Point),
    PointerPressed(Point),
    KeyPressed(KeyEvent),
}

/// Apply one event to the scene. Never fails, never blocks.
pub fn dispatch(scene: &mut Scene, event: InputEvent, rng: &mut impl Rng) {
    match event {
        InputEvent::PointerMoved(at) => pointer_moved(scene, at),
        InputEvent::PointerDragged(_) => {}
        InputEvent::PointerPressed(at) => pointer_pressed(scene, at, rng),
        InputEvent::KeyPressed(key) => key_pressed(scene, key),
    }
}

fn pointer_moved(scene: &mut Scene, at: Point) {
    if scene.moving {
        scene.circle.set_target(at);
    }
}

fn pointer_pressed(scene: &mut Scene, at: Point, rng: &mut impl Rng) {
    let r = rng.gen_range(0..255);
    let g = rng.gen_range(0..255);
    let b = rng.gen_range(0..255);
    scene.shapes.spawn(at.x, at.y, SPAWN_SIZE, SPAWN_SIZE, r, g, b);
    debug!("click at ({}, {}): square #{} rgb({r}, {g}, {b})", at.x, at.y, scene.shapes.len());
}

fn key_pressed(scene: &mut Scene, key: KeyEvent) {
    match key {
        KeyEvent::Arrow(Arrow::Up) | KeyEvent::Character('t') => {
            scene.palette.swap();
            debug!("palette swapped: {:?}", scene.palette);
        }
        KeyEvent::Character('s') => {
            scene.moving = !scene.moving;
            debug!("circle follows pointer: {}", scene.moving);
        }
        _ => {}
    }
}

/* ---------- Window state -> events ---------- */

/// Turns sampled window state into events. Knows nothing about the window:
/// the host samples keys, pointer and buttons and feeds them in.
#[derive(Debug, Default)]
pub struct InputTracker {
    last_mouse: Option<Point>,   // pointer position seen on the previous sample
    buttons_down: [bool; 3],     // left, middle, right as seen on the previous sample
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// One sample. Events come out in dispatch order: key presses, then
    /// buttons that went from up to down, then pointer motion.
    ///
    /// `pos` is `None` while the pointer is outside the window; presses and
    /// motion there are dropped.
    pub fn sample(
        &mut self,
        keys: impl IntoIterator<Item = KeyEvent>,
        pos: Option<Point>,
        down: [bool; 3],
    ) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = keys.into_iter().map(InputEvent::KeyPressed).collect();

        for (was, now) in self.buttons_down.iter().zip(down) {
            if now && !was {
                if let Some(at) = pos {
                    events.push(InputEvent::PointerPressed(at));
                }
            }
        }
        self.buttons_down = down;

        if let Some(at) = pos {
            if self.last_mouse != Some(at) {
                events.push(if down.contains(&true) {
                    InputEvent::PointerDragged(at)
                } else {
                    InputEvent::PointerMoved(at)
                });
            }
        }
        self.last_mouse = pos;

        events
    }
}
