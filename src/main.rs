// What you SEE:
// • A grey 500x500 canvas with a blue, white-outlined circle that glides after
//   the mouse and slowly "breathes".
// • A square gliding to its own target; T or Up swaps its two colors.
// • Any click drops a 40x40 square of a random color under the pointer.
// • S pauses/resumes the circle following the mouse. ESC quits.
//
// `scene`, `input`, `shapes` and `easing` are the sketch itself and never touch
// the window; `draw` and `sketch` host it (window, rasterizer, frame loop).
//
// Flags: --width --height --fps --stroke-weight --seed.
// Logging via RUST_LOG (e.g. RUST_LOG=debug).

mod canvas;
mod config;
mod draw;
mod easing;
mod error;
mod input;
mod scene;
mod shapes;
mod sketch;
mod types;

use clap::Parser;

use config::{Cli, SketchConfig};
use error::Error;
use sketch::Sketch;

fn main() -> Result<(), Error> {
    env_logger::init();

    let config = SketchConfig::from(Cli::parse());
    Sketch::run(&config)
}
