// The frame loop: setup once, then
//   pump + sample input (fast) ... when a frame is due:
//   dispatch queued input -> draw -> present -> fps bookkeeping.
// Everything runs on the calling thread; input is applied between frames only.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SketchConfig;
use crate::draw::{Drawer, Painter};
use crate::error::Error;
use crate::input::{self, InputEvent};
use crate::scene::Scene;

/// Fixed-rate frame deadlines, decoupled from how often input is sampled.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    /// The first frame is due at `start`.
    pub fn new(fps: usize, start: Instant) -> Self {
        Self { frame: Duration::from_secs_f64(1.0 / fps as f64), next: start }
    }

    /// True if a frame is due at `now`; schedules the next one.
    /// After a stall the schedule restarts from `now` instead of bursting.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }
}

/// Scene, canvas and color source for one sketch session.
/// Owns everything except the window, so a tick can run without one.
pub struct Sketch {
    scene: Scene,
    painter: Painter,
    rng: StdRng,
}

impl Sketch {
    pub fn new(config: &SketchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let painter = Painter::new(config.width, config.height);
        let scene = Scene::new(config);
        Self { scene, painter, rng }
    }

    /// Hooks that run once before the first frame.
    pub fn setup(&mut self) {
        self.scene.setup(&mut self.painter);
    }

    /// Apply this tick's input, then draw the frame.
    pub fn tick(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            input::dispatch(&mut self.scene, event, &mut self.rng);
        }
        self.scene.draw(&mut self.painter);
    }

    /// Open the window and run until it is closed or ESC is pressed.
    pub fn run(config: &SketchConfig) -> Result<(), Error> {
        info!(
            "Starting sketch {}x{} @ {} fps (seed: {:?})",
            config.width, config.height, config.fps, config.seed
        );

        let mut drawer = Drawer::new(config)?;
        let mut sketch = Sketch::new(config);
        sketch.setup();

        /* --- FPS counter (logged once per second) --- */
        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        // Input is sampled on every pump and queued until the next frame,
        // so presses shorter than a frame still count.
        let mut clock = FrameClock::new(config.fps, Instant::now());
        let mut pending: Vec<InputEvent> = Vec::new();

        while drawer.is_open() && !drawer.esc_pressed() {
            pending.extend(drawer.poll_input());

            let now = Instant::now();
            if !clock.due(now) {
                drawer.pump();
                continue;
            }

            sketch.tick(pending.drain(..));
            drawer.present(sketch.painter.frame())?;

            frames_this_second += 1;
            if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
                let secs = now.duration_since(last_fps_time).as_secs_f32();
                debug!(
                    "FPS: {:.1} (frame {}, {} shapes)",
                    frames_this_second as f32 / secs,
                    sketch.scene.frame_count,
                    sketch.scene.shapes.len()
                );
                frames_this_second = 0;
                last_fps_time = now;
            }
        }

        info!(
            "Sketch closed after {} frames with {} shapes",
            sketch.scene.frame_count,
            sketch.scene.shapes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, SPAWN_SIZE};
    use crate::types::{Point, gray, rgb};

    fn idle() -> Vec<InputEvent> {
        Vec::new()
    }

    fn sketch() -> Sketch {
        let mut s = Sketch::new(&SketchConfig::default().with_size(100, 100).with_seed(3));
        s.setup();
        s
    }

    //--- FrameClock -------------------------------------------------------

    #[test]
    fn clock_fires_once_per_frame_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(10, start);
        let ms = Duration::from_millis;

        assert!(clock.due(start), "first frame is due immediately");
        assert!(!clock.due(start + ms(50)));
        assert!(!clock.due(start + ms(99)));
        assert!(clock.due(start + ms(100)));
        assert!(!clock.due(start + ms(150)));
        assert!(clock.due(start + ms(210)));
        assert!(!clock.due(start + ms(250)), "schedule keeps its phase");
        assert!(clock.due(start + ms(300)));
    }

    #[test]
    fn clock_does_not_burst_after_a_stall() {
        let start = Instant::now();
        let mut clock = FrameClock::new(10, start);
        let ms = Duration::from_millis;

        assert!(clock.due(start));
        assert!(clock.due(start + ms(1000)));
        assert!(!clock.due(start + ms(1001)), "missed frames are not replayed");
        assert!(clock.due(start + ms(1100)));
    }

    #[test]
    fn input_queued_across_samples_lands_in_one_frame() {
        use crate::input::InputTracker;

        let mut s = sketch();
        let mut tracker = InputTracker::new();
        let mut pending = Vec::new();
        let p = Some(Point::new(20.0, 20.0));
        let no_keys: [KeyEvent; 0] = [];
        // Three quick clicks between two frames.
        for _ in 0..3 {
            pending.extend(tracker.sample(no_keys, p, [true, false, false]));
            pending.extend(tracker.sample(no_keys, p, [false; 3]));
        }
        s.tick(pending.drain(..));
        assert_eq!(s.scene.shapes.len(), 3);
        assert_eq!(s.scene.frame_count, 1);
    }

    #[test]
    fn tick_without_input_advances_one_frame() {
        let mut s = sketch();
        s.tick(idle());
        s.tick(idle());
        assert_eq!(s.scene.frame_count, 2);
    }

    #[test]
    fn input_is_applied_before_the_frame_is_drawn() {
        let mut s = sketch();
        s.tick([InputEvent::PointerMoved(Point::new(90.0, 10.0))]);
        // Target set first, so this frame already moved a quarter of the way.
        assert_eq!(s.scene.circle.current, Point::new(60.0, 40.0));
    }

    #[test]
    fn clicked_square_is_visible_on_the_same_frame() {
        let mut s = sketch();
        s.tick([InputEvent::PointerPressed(Point::new(70.0, 70.0))]);

        let shape = *s.scene.shapes.iter().next().unwrap();
        assert_eq!((shape.x, shape.y, shape.width), (70.0, 70.0, SPAWN_SIZE));
        // Inside the fill, past the 5 px half-outline.
        assert_eq!(s.painter.frame().pixel(80, 80), Some(shape.color));
        assert_eq!(s.painter.frame().pixel(70, 80), Some(gray(255)), "outline on the edge");
    }

    #[test]
    fn first_frame_shows_background_and_follower_square() {
        let mut s = sketch();
        s.tick(idle());
        let fb = s.painter.frame();
        assert_eq!(fb.pixel(2, 2), Some(gray(100)));
        // Square corner sits on the center; its fill starts past the outline.
        assert_eq!(fb.pixel(70, 70), Some(rgb(121, 0, 0)));

        s.tick([InputEvent::KeyPressed(KeyEvent::Character('t'))]);
        assert_eq!(s.painter.frame().pixel(70, 70), Some(rgb(0, 0, 121)));
    }

    #[test]
    fn same_seed_same_session() {
        let clicks = || (0..5).map(|i| InputEvent::PointerPressed(Point::new(i as f32, 0.0)));
        let mut a = sketch();
        let mut b = sketch();
        a.tick(clicks());
        b.tick(clicks());
        assert_eq!(a.painter.frame().pixels, b.painter.frame().pixels);
    }
}
