use crate::path::PathCommand;
use crate::wave::WaveConfig;

/// Width of the logical canvas waves are computed on
pub const CANVAS_WIDTH: f64 = 1200.0;

/// Height of the logical canvas waves are computed on
pub const CANVAS_HEIGHT: f64 = 600.0;

/// The horizontal line every wave oscillates around
pub const MID_LINE: f64 = CANVAS_HEIGHT / 2.0;

/// Frequencies at or below zero are raised to this before dividing by them
pub const MIN_FREQUENCY: f64 = 1e-6;

/// Upper bound on samples per wave so absurd frequencies can't exhaust memory
pub const MAX_STEPS: usize = 100_000;

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Source of uniformly distributed numbers in `[0, 1)` used by the abstract wave
pub trait RandomSource {
    /// Draw the next number in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

/// Sanitized numeric inputs shared by every generator
#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleContext {
    /// Vertical displacement in pixels
    pub amplitude: f64,
    /// Oscillation scale, always strictly positive
    pub frequency: f64,
    /// Horizontal phase offset in radians
    pub phase: f64,
}

impl SampleContext {
    pub(crate) fn from_config(config: &WaveConfig) -> Self {
        let frequency = config.frequency();
        let frequency = if frequency.is_finite() && frequency > 0.0 {
            frequency
        } else {
            log::warn!("frequency {frequency} is not usable, clamping to {MIN_FREQUENCY}");
            MIN_FREQUENCY
        };
        Self { amplitude: finite_or_zero(config.amplitude()), frequency, phase: finite_or_zero(config.phase()) }
    }

    /// Number of intervals to sample when one interval spans `period / frequency` pixels
    pub(crate) fn steps(&self, period: f64) -> usize {
        clamp_steps((CANVAS_WIDTH / (period / self.frequency)).floor())
    }

    /// Angle fed to `sin` for a given x position
    pub(crate) fn angle_at(&self, x: f64) -> f64 {
        (x / CANVAS_WIDTH) * (2.0 * std::f64::consts::PI * self.frequency) + self.phase
    }
}

/// Trait for the wave families
pub(crate) trait WaveGenerator {
    /// Sample the wave into an ordered list of points, left to right
    fn sample(&self, ctx: &SampleContext, rng: &mut dyn RandomSource) -> Vec<Point>;

    /// Command that draws from `previous` to `point`, where `index` is the position of `point`
    fn connect(&self, index: usize, previous: Point, point: Point) -> PathCommand;
}

/// X position of sample `index` out of `steps` evenly spaced intervals
pub(crate) fn x_at(index: usize, steps: usize) -> f64 {
    if steps == 0 {
        return 0.0;
    }
    (index as f64 / steps as f64) * CANVAS_WIDTH
}

/// Sign function where zero maps to zero rather than one
pub(crate) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub(crate) fn clamp_steps(raw: f64) -> usize {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    if raw > MAX_STEPS as f64 {
        log::warn!("{raw} samples requested, capping at {MAX_STEPS}");
        return MAX_STEPS;
    }
    raw as usize
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 1.0)]
    #[case(-3.5, -1.0)]
    #[case(0.0, 0.0)]
    #[case(-0.0, 0.0)]
    #[case(0.25, 1.0)]
    fn sign_matches_expectation(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(sign(input), expected);
    }

    #[rstest]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, MAX_STEPS)]
    #[case(-4.0, 0)]
    #[case(0.9, 0)]
    #[case(480.0, 480)]
    #[case(1e12, MAX_STEPS)]
    fn steps_are_clamped(#[case] raw: f64, #[case] expected: usize) {
        assert_eq!(clamp_steps(raw), expected);
    }

    #[test]
    fn zero_steps_keep_start_point() {
        assert_eq!(x_at(0, 0), 0.0);
    }

    #[test]
    fn bad_frequency_is_clamped() {
        let config = WaveConfig::default().with(crate::wave::WaveField::Frequency(-1.0));
        let ctx = SampleContext::from_config(&config);
        assert_eq!(ctx.frequency, MIN_FREQUENCY);
        assert_eq!(ctx.steps(5.0), 0);
    }

    #[test]
    fn non_finite_amplitude_is_zeroed() {
        let config = WaveConfig::default().with(crate::wave::WaveField::Amplitude(f64::NAN));
        let ctx = SampleContext::from_config(&config);
        assert_eq!(ctx.amplitude, 0.0);
    }
}
