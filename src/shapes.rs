// Squares spawned by clicking. Each one is a plain record; drawing is a single
// function that matches on the kind. Shapes never move, change or go away.

use log::trace;

use crate::canvas::Canvas;
use crate::types::{rgb, Color};

/// What a shape looks like. Only filled rectangles exist for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    FilledRect,
}

/// A spawned shape: fixed position, size and fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub width: f32,
    pub color: Color,
}

impl Shape {
    pub fn draw(&self, canvas: &mut impl Canvas) {
        match self.kind {
            ShapeKind::FilledRect => {
                canvas.fill(self.color);
                // Height goes first, same argument order the shape was spawned with.
                canvas.rect(self.x, self.y, self.height, self.width);
            }
        }
    }
}

/// Ordered, append-only list of spawned shapes.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filled rectangle. Later shapes draw on top of earlier ones.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(&mut self, x: f32, y: f32, height: f32, width: f32, r: u8, g: u8, b: u8) {
        let shape = Shape {
            kind: ShapeKind::FilledRect,
            x,
            y,
            height,
            width,
            color: rgb(r, g, b),
        };
        trace!("spawned #{} {:?}", self.shapes.len(), shape);
        self.shapes.push(shape);
    }

    /// Draw every shape in insertion order.
    pub fn draw_all(&self, canvas: &mut impl Canvas) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CallLog, DrawCall};

    #[test]
    fn new_registry_is_empty() {
        let reg = ShapeRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn spawn_appends_in_order() {
        let mut reg = ShapeRegistry::new();
        reg.spawn(10.0, 10.0, 40.0, 40.0, 1, 2, 3);
        reg.spawn(20.0, 20.0, 40.0, 40.0, 4, 5, 6);

        let got: Vec<_> = reg.iter().map(|s| (s.x, s.y, s.color)).collect();
        assert_eq!(
            got,
            vec![(10.0, 10.0, rgb(1, 2, 3)), (20.0, 20.0, rgb(4, 5, 6))]
        );
    }

    #[test]
    fn draw_all_sets_fill_then_rect_per_shape() {
        let mut reg = ShapeRegistry::new();
        reg.spawn(10.0, 10.0, 40.0, 40.0, 1, 2, 3);
        reg.spawn(20.0, 20.0, 40.0, 40.0, 4, 5, 6);

        let mut log = CallLog::new();
        reg.draw_all(&mut log);

        assert_eq!(
            log.calls,
            vec![
                DrawCall::Fill(rgb(1, 2, 3)),
                DrawCall::Rect { x: 10.0, y: 10.0, w: 40.0, h: 40.0 },
                DrawCall::Fill(rgb(4, 5, 6)),
                DrawCall::Rect { x: 20.0, y: 20.0, w: 40.0, h: 40.0 },
            ]
        );
    }

    #[test]
    fn drawing_twice_repeats_the_same_calls() {
        let mut reg = ShapeRegistry::new();
        reg.spawn(7.0, 9.0, 40.0, 40.0, 200, 0, 17);

        let mut first = CallLog::new();
        let mut second = CallLog::new();
        reg.draw_all(&mut first);
        reg.draw_all(&mut second);

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn height_is_passed_as_rect_width() {
        let mut reg = ShapeRegistry::new();
        reg.spawn(0.0, 0.0, 10.0, 30.0, 0, 0, 0);

        let mut log = CallLog::new();
        reg.draw_all(&mut log);
        assert_eq!(log.rects(), vec![(0.0, 0.0, 10.0, 30.0)]);
    }
}
