// Sketch settings: canvas size, frame rate, stroke weight, color seed.
// Defaults match the classic sketch (500x500 at 15 fps, 10 px outlines).
// The easing delay is not a setting.

use clap::Parser;

/// Window and pacing settings for a sketch run.
///
/// Built with `SketchConfig::default()` and refined with the `with_*`
/// methods, or converted from the command line via [`Cli`].
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub fps: usize,
    pub stroke_weight: f32,
    /// Seed for spawned square colors. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: String::from("Follow Sketch"),
            width: 500,
            height: 500,
            fps: 15,
            stroke_weight: 10.0,
            seed: None,
        }
    }
}

impl SketchConfig {
    /// # Panics
    ///
    /// Panics if either side is zero.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Canvas size must be positive, got {}x{}",
            width,
            height
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Target frame ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: usize) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// # Panics
    ///
    /// Panics if `weight` is negative or not finite.
    pub fn with_stroke_weight(mut self, weight: f32) -> Self {
        assert!(
            weight.is_finite() && weight >= 0.0,
            "Stroke weight must be >= 0, got {}",
            weight
        );
        self.stroke_weight = weight;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Command line overrides. Every flag is optional.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Frame ticks per second
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Outline width in pixels
    #[arg(long, default_value_t = 10.0, value_parser = parse_stroke_weight)]
    pub stroke_weight: f32,

    /// Seed for the spawned square colors (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_stroke_weight(s: &str) -> Result<f32, String> {
    let weight: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(format!("stroke weight must be a finite number >= 0, got {s}"))
    }
}

impl From<Cli> for SketchConfig {
    fn from(cli: Cli) -> Self {
        let config = SketchConfig::default()
            .with_size(cli.width as usize, cli.height as usize)
            .with_fps(cli.fps as usize)
            .with_stroke_weight(cli.stroke_weight);
        match cli.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
