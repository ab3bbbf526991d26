// Window + software drawing.
// Visual effects provided here:
// 1) A window that shows the sketch canvas and is pumped for input often.
// 2) The canvas primitives (background, ellipse, rect with outline) drawn
//    into a pixel buffer.
// 3) Mouse and keyboard state turned into ordered sketch input events.

use log::trace;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::config::SketchConfig;
use crate::error::Error;
use crate::input::{Arrow, InputEvent, InputTracker, KeyEvent};
use crate::types::{Color, FrameBuffer, Point, gray, pack};

/// How often the window is pumped for input, independent of the draw rate.
/// minifb only reports whether a button is down *now*, so a click shorter
/// than one pump goes unseen.
pub const INPUT_POLL_HZ: usize = 240;

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Key0, Key::Key1, Key::Key2, Key::Key3, Key::Key4,
    Key::Key5, Key::Key6, Key::Key7, Key::Key8, Key::Key9,
];

pub struct Drawer {
    window: Window,          // the on-screen window you see
    tracker: InputTracker,   // edge detection between samples
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with the sketch title.
    pub fn new(config: &SketchConfig) -> Result<Self, Error> {
        let mut window =
            Window::new(&config.title, config.width, config.height, WindowOptions::default())
                .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Each update() sleeps to this rate; frames are paced separately.
        window.set_target_fps(config.fps.max(INPUT_POLL_HZ));
        Ok(Self { window, tracker: InputTracker::new() })
    }

    /// Push the pixels for this frame to the screen (also pumps events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump window events without presenting a new frame.
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Sample keys, pointer and buttons as of the last pump.
    pub fn poll_input(&mut self) -> Vec<InputEvent> {
        let shift =
            self.window.is_key_down(Key::LeftShift) || self.window.is_key_down(Key::RightShift);
        let keys: Vec<KeyEvent> = self
            .window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(|key| {
                let k = key_event(key, shift);
                if k.is_none() {
                    trace!("unmapped key {:?} ignored", key);
                }
                k
            })
            .collect();

        // Outside the window there is no position; presses there are not clicks.
        let pos = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x, y));
        let down = BUTTONS.map(|b| self.window.get_mouse_down(b));

        self.tracker.sample(keys, pos, down)
    }
}

/// Classify a minifb key the way the sketch sees it: arrows are coded keys,
/// printable keys become characters (uppercase while Shift is held).
pub fn key_event(key: Key, shift: bool) -> Option<KeyEvent> {
    let arrow = match key {
        Key::Up => Some(Arrow::Up),
        Key::Down => Some(Arrow::Down),
        Key::Left => Some(Arrow::Left),
        Key::Right => Some(Arrow::Right),
        _ => None,
    };
    if let Some(a) = arrow {
        return Some(KeyEvent::Arrow(a));
    }

    let c = if let Some(i) = LETTERS.iter().position(|&k| k == key) {
        (b'a' + i as u8) as char
    } else if let Some(i) = DIGITS.iter().position(|&k| k == key) {
        (b'0' + i as u8) as char
    } else if key == Key::Space {
        ' '
    } else {
        return None;
    };
    Some(KeyEvent::Character(if shift { c.to_ascii_uppercase() } else { c }))
}

/* ---------- Software drawing: canvas primitives into a pixel buffer ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill the pixels whose centers fall in [x0, x1) x [y0, y1).
fn fill_rect(fb: &mut FrameBuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
    let (ix0, ix1) = (x0.round() as i32, x1.round() as i32);
    let (iy0, iy1) = (y0.round() as i32, y1.round() as i32);
    // Clip to the buffer first so huge shapes stay cheap.
    let ix0 = ix0.max(0);
    let iy0 = iy0.max(0);
    let ix1 = ix1.min(fb.width as i32);
    let iy1 = iy1.min(fb.height as i32);
    for y in iy0..iy1 {
        for x in ix0..ix1 {
            put_pixel(fb, x, y, color);
        }
    }
}

/// Fill the pixels whose centers fall inside the ellipse.
fn fill_ellipse(fb: &mut FrameBuffer, cx: f32, cy: f32, rx: f32, ry: f32, color: u32) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let ymin = ((cy - ry).floor() as i32).max(0);
    let ymax = ((cy + ry).ceil() as i32).min(fb.height as i32 - 1);
    let xmin = ((cx - rx).floor() as i32).max(0);
    let xmax = ((cx + rx).ceil() as i32).min(fb.width as i32 - 1);
    for y in ymin..=ymax {
        let dy = (y as f32 + 0.5 - cy) / ry;
        for x in xmin..=xmax {
            let dx = (x as f32 + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Canvas that rasterizes into a frame buffer.
/// Style (fill, stroke, weight) persists across frames until changed.
pub struct Painter {
    fb: FrameBuffer,
    fill: Color,
    stroke: Color,
    weight: f32,
}

impl Painter {
    /// White fill, black 1 px outline, black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self { fb: FrameBuffer::new(width, height), fill: gray(255), stroke: gray(0), weight: 1.0 }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Half the outline width; the outline straddles the shape's edge.
    fn half_stroke(&self) -> f32 {
        self.weight / 2.0
    }
}

impl Canvas for Painter {
    fn background(&mut self, color: Color) {
        self.fb.pixels.fill(pack(color));
    }

    fn fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (rx, ry) = (w.abs() / 2.0, h.abs() / 2.0);
        let half = self.half_stroke();
        if half > 0.0 {
            fill_ellipse(&mut self.fb, x, y, rx + half, ry + half, pack(self.stroke));
        }
        fill_ellipse(&mut self.fb, x, y, rx - half, ry - half, pack(self.fill));
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        // Negative sizes extend left/up from the corner.
        let (x0, x1) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (y0, y1) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        let half = self.half_stroke();
        if half > 0.0 {
            fill_rect(&mut self.fb, x0 - half, y0 - half, x1 + half, y1 + half, pack(self.stroke));
        }
        if x1 - x0 > 2.0 * half && y1 - y0 > 2.0 * half {
            fill_rect(&mut self.fb, x0 + half, y0 + half, x1 - half, y1 - half, pack(self.fill));
        }
    }
}
