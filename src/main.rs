//! Trackball demo: an empty window whose camera follows the mouse, wheel,
//! touch and keyboard. Camera changes are logged; run with
//! `RUST_LOG=debug` to watch them.
//!
//! Usage: `trackball-demo [preset.toml]`

use std::path::Path;

use trackball::error::TrackballError;
use trackball::options::TrackballOptions;
use trackball::viewer::Viewer;

fn main() -> Result<(), TrackballError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => TrackballOptions::load(Path::new(&path))?,
        None => TrackballOptions::default(),
    };

    Viewer::builder()
        .with_title("Trackball demo")
        .with_options(options)
        .build()
        .run()
}
