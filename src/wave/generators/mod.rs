mod common;

// Individual wave families
mod jagged;
mod sharp;
mod smooth;

pub use common::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_STEPS, MID_LINE, MIN_FREQUENCY, Point, RandomSource};
pub(crate) use common::{SampleContext, WaveGenerator};

use crate::path::{PathCommand, WavePath};
use crate::wave::{WaveConfig, WaveType};

/// Get the generator implementation for a given wave type
pub(crate) fn get_generator(wave_type: WaveType) -> Box<dyn WaveGenerator> {
    match wave_type {
        WaveType::Smooth => Box::new(smooth::Smooth),
        WaveType::Sharp => Box::new(sharp::Sharp),
        WaveType::Abstract => Box::new(jagged::Abstract),
    }
}

/// Sample the wave described by `config` into canvas points.
///
/// Only the abstract wave draws from `rng`.
pub fn generate_points(config: &WaveConfig, rng: &mut dyn RandomSource) -> Vec<Point> {
    let ctx = SampleContext::from_config(config);
    get_generator(config.wave_type()).sample(&ctx, rng)
}

/// Build the full closed path for `config`, drawing randomness from `rng`.
pub fn build_path(config: &WaveConfig, rng: &mut dyn RandomSource) -> WavePath {
    let generator = get_generator(config.wave_type());
    let ctx = SampleContext::from_config(config);
    let points = generator.sample(&ctx, rng);

    let mut commands = Vec::with_capacity(points.len() + 3);
    for (index, point) in points.iter().enumerate() {
        let command = match index {
            0 => PathCommand::MoveTo(*point),
            _ => generator.connect(index, points[index - 1], *point),
        };
        commands.push(command);
    }
    // Sampling always yields the start point, but a path must begin with a move regardless
    if commands.is_empty() {
        commands.push(PathCommand::MoveTo(Point::new(0.0, MID_LINE)));
    }

    // Close along the bottom of the canvas so the wave bounds a filled region
    commands.push(PathCommand::LineTo(Point::new(CANVAS_WIDTH, CANVAS_HEIGHT)));
    commands.push(PathCommand::LineTo(Point::new(0.0, CANVAS_HEIGHT)));
    commands.push(PathCommand::Close);
    WavePath::new(commands)
}

/// Generate the SVG path data for `config`, drawing randomness from `rng`.
pub fn generate_path_with(config: &WaveConfig, rng: &mut dyn RandomSource) -> String {
    build_path(config, rng).to_string()
}

/// Generate the SVG path data for `config`.
///
/// The abstract wave uses a freshly seeded random source, so its output differs between calls.
pub fn generate_path(config: &WaveConfig) -> String {
    generate_path_with(config, &mut fastrand::Rng::new())
}
