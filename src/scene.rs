// Scene state and the per-frame draw.
// Visual: grey canvas, a blue circle with a white outline gliding after the
// mouse and "breathing", a purple-ish square gliding to its own target, and
// every clicked square on top.

use log::trace;

use crate::canvas::Canvas;
use crate::config::SketchConfig;
use crate::easing::{DELAY, Follower};
use crate::shapes::ShapeRegistry;
use crate::types::{Color, Point, gray, rgb};

const BACKGROUND: u8 = 100;
const OUTLINE: u8 = 255;
const CIRCLE_FILL: Color = rgb(0, 121, 184);
const START_RADIUS: f32 = 50.0;
const SQUARE_SIZE: f32 = 30.0;

/// The two fill values the follower square mixes; key presses swap them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub yellow_fill: u8,
    pub red_fill: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self { yellow_fill: 0, red_fill: 121 }
    }
}

impl Palette {
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.yellow_fill, &mut self.red_fill);
    }

    /// Fill for the follower square: red channel, no green, yellow value in blue.
    pub fn square_fill(&self) -> Color {
        rgb(self.red_fill, 0, self.yellow_fill)
    }
}

/// Everything the draw routine and the input handlers share.
#[derive(Debug)]
pub struct Scene {
    pub circle: Follower,
    pub square: Follower,
    pub radius: f32,
    pub frame_count: u64,
    pub palette: Palette,
    /// When false, pointer motion no longer retargets the circle.
    pub moving: bool,
    pub shapes: ShapeRegistry,
    stroke_weight: f32,
}

impl Scene {
    /// Fresh scene: both followers at rest on the canvas center.
    pub fn new(config: &SketchConfig) -> Self {
        // Both coordinates come from the width, so a non-square canvas puts the
        // start point on the diagonal.
        let half = config.width as f32 / 2.0;
        let center = Point::new(half, half);
        Self {
            circle: Follower::at(center),
            square: Follower::at(center),
            radius: START_RADIUS,
            frame_count: 0,
            palette: Palette::default(),
            moving: true,
            shapes: ShapeRegistry::new(),
            stroke_weight: config.stroke_weight,
        }
    }

    /// Runs once before the first frame.
    pub fn setup(&self, canvas: &mut impl Canvas) {
        canvas.stroke_weight(self.stroke_weight);
    }

    /// One frame tick: advance the animation, then issue this frame's drawing.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        self.frame_count += 1;
        // Additive: the base radius drifts along with the oscillation.
        self.radius += (self.frame_count as f32 / 4.0).sin();

        self.circle.step(DELAY);

        canvas.background(gray(BACKGROUND));
        canvas.fill(CIRCLE_FILL);
        canvas.stroke(gray(OUTLINE));
        canvas.ellipse(self.circle.current.x, self.circle.current.y, self.radius, self.radius);

        canvas.fill(self.palette.square_fill());
        self.square.step(DELAY);
        canvas.rect(self.square.current.x, self.square.current.y, SQUARE_SIZE, SQUARE_SIZE);

        self.shapes.draw_all(canvas);

        trace!(
            "frame {}: circle {:?} r={:.2}, square {:?}, {} shapes",
            self.frame_count,
            self.circle.current,
            self.radius,
            self.square.current,
            self.shapes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CallLog, DrawCall};

    fn scene() -> Scene {
        Scene::new(&SketchConfig::default())
    }

    #[test]
    fn starts_centered_and_at_rest() {
        let s = scene();
        assert_eq!(s.circle.current, Point::new(250.0, 250.0));
        assert_eq!(s.circle.target, s.circle.current);
        assert_eq!(s.square.current, Point::new(250.0, 250.0));
        assert_eq!(s.radius, 50.0);
        assert_eq!(s.frame_count, 0);
        assert!(s.moving);
        assert!(s.shapes.is_empty());
    }

    #[test]
    fn start_point_uses_width_for_both_axes() {
        let s = Scene::new(&SketchConfig::default().with_size(300, 120));
        assert_eq!(s.circle.current, Point::new(150.0, 150.0));
    }

    #[test]
    fn setup_sets_stroke_weight_once() {
        let mut log = CallLog::new();
        scene().setup(&mut log);
        assert_eq!(log.calls, vec![DrawCall::StrokeWeight(10.0)]);
    }

    #[test]
    fn palette_swap_is_an_involution() {
        let mut p = Palette::default();
        p.swap();
        assert_eq!(p, Palette { yellow_fill: 121, red_fill: 0 });
        p.swap();
        assert_eq!(p, Palette::default());
    }

    #[test]
    fn square_fill_follows_palette() {
        let mut p = Palette::default();
        assert_eq!(p.square_fill(), rgb(121, 0, 0));
        p.swap();
        assert_eq!(p.square_fill(), rgb(0, 0, 121));
    }

    #[test]
    fn first_frame_issues_calls_in_order() {
        let mut s = scene();
        s.shapes.spawn(5.0, 6.0, 40.0, 40.0, 9, 8, 7);

        let mut log = CallLog::new();
        s.draw(&mut log);

        let r = 50.0 + (0.25f32).sin();
        assert_eq!(
            log.calls,
            vec![
                DrawCall::Background(gray(100)),
                DrawCall::Fill(rgb(0, 121, 184)),
                DrawCall::Stroke(gray(255)),
                DrawCall::Ellipse { x: 250.0, y: 250.0, w: r, h: r },
                DrawCall::Fill(rgb(121, 0, 0)),
                DrawCall::Rect { x: 250.0, y: 250.0, w: 30.0, h: 30.0 },
                DrawCall::Fill(rgb(9, 8, 7)),
                DrawCall::Rect { x: 5.0, y: 6.0, w: 40.0, h: 40.0 },
            ]
        );
    }

    #[test]
    fn radius_accumulates_sine_of_frame_over_four() {
        let mut s = scene();
        let mut log = CallLog::new();
        let mut expected = 50.0f32;
        for n in 1..=40u64 {
            s.draw(&mut log);
            expected += (n as f32 / 4.0).sin();
            assert_eq!(s.frame_count, n);
            assert!((s.radius - expected).abs() < 1e-4, "frame {n}");
        }
    }

    #[test]
    fn circle_eases_toward_target_each_frame() {
        let mut s = scene();
        s.circle.set_target(Point::new(450.0, 50.0));

        let mut log = CallLog::new();
        s.draw(&mut log);

        assert_eq!(s.circle.current, Point::new(300.0, 200.0));
    }

    #[test]
    fn circle_already_on_target_does_not_move() {
        let mut s = scene();
        s.circle.set_target(Point::new(250.0, 250.0));

        let mut log = CallLog::new();
        for _ in 0..5 {
            s.draw(&mut log);
        }
        assert_eq!(s.circle.current, Point::new(250.0, 250.0));
    }
}
