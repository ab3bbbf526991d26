// Core value types shared by the scene, the canvas and the window.

use image::Rgb;

/// A fill or stroke color. Channels are 0..=255.
pub type Color = Rgb<u8>;

/// Shorthand for `Rgb([r, g, b])`.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgb([r, g, b])
}

/// A gray level, as taken by `background(100)` or `stroke(255)`.
#[inline]
pub const fn gray(v: u8) -> Color {
    Rgb([v, v, v])
}

/// Pack a color as 0x00RRGGBB, the layout minifb expects.
#[inline]
pub fn pack(color: Color) -> u32 {
    let [r, g, b] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// A point on the canvas in pixel coordinates (floating, like pointer positions).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Read one pixel back as a color. Out of bounds gives `None`.
    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let px = self.pixels[y * self.width + x];
        Some(rgb((px >> 16) as u8, (px >> 8) as u8, px as u8))
    }
}
