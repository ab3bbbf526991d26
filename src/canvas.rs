// Drawing primitives the sketch emits every frame.
// The scene never reads anything back; it only issues these calls in order.
// `Painter` (draw.rs) rasterizes them into the window's frame buffer; tests
// record them with `CallLog`.

use crate::types::Color;

pub trait Canvas {
    /// Clear the whole surface to one color.
    fn background(&mut self, color: Color);

    /// Sets the color used to fill the next shapes.
    fn fill(&mut self, color: Color);

    /// Sets the outline color used for the next shapes.
    fn stroke(&mut self, color: Color);

    /// Sets the outline thickness in pixels.
    fn stroke_weight(&mut self, weight: f32);

    /// Ellipse centered on (x, y) with the given width and height.
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Rectangle with its top-left corner on (x, y).
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// One recorded primitive call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Color),
    Fill(Color),
    Stroke(Color),
    StrokeWeight(f32),
    Ellipse { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
}

/// Canvas that remembers every call instead of drawing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CallLog {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the rectangles, in the order they were drawn.
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Rect { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Canvas for CallLog {
    fn background(&mut self, color: Color) {
        self.calls.push(DrawCall::Background(color));
    }
    fn fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }
    fn stroke(&mut self, color: Color) {
        self.calls.push(DrawCall::Stroke(color));
    }
    fn stroke_weight(&mut self, weight: f32) {
        self.calls.push(DrawCall::StrokeWeight(weight));
    }
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Ellipse { x, y, w, h });
    }
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Rect { x, y, w, h });
    }
}
