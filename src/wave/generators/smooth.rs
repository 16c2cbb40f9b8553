use super::common::{MID_LINE, Point, RandomSource, SampleContext, WaveGenerator, x_at};
use crate::path::PathCommand;

/// Pixels covered by one sample at frequency 1
const PERIOD: f64 = 5.0;

/// Smooth wave - a sine sampled densely and joined with cubic curves
pub(crate) struct Smooth;

impl WaveGenerator for Smooth {
    fn sample(&self, ctx: &SampleContext, _rng: &mut dyn RandomSource) -> Vec<Point> {
        let steps = ctx.steps(PERIOD);
        log::debug!("smooth wave: {steps} steps");
        (0..=steps)
            .map(|i| {
                let x = x_at(i, steps);
                Point::new(x, MID_LINE + ctx.amplitude * ctx.angle_at(x).sin())
            })
            .collect()
    }

    fn connect(&self, _index: usize, previous: Point, point: Point) -> PathCommand {
        // Control points sit at the horizontal midpoint, a quarter of the way in vertically
        let dx = point.x - previous.x;
        let dy = point.y - previous.y;
        PathCommand::CubicTo {
            ctrl1: Point::new(previous.x + dx / 2.0, previous.y + dy * 0.25),
            ctrl2: Point::new(point.x - dx / 2.0, point.y - dy * 0.25),
            to: point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(amplitude: f64, frequency: f64, phase: f64) -> SampleContext {
        SampleContext { amplitude, frequency, phase }
    }

    #[test]
    fn samples_cover_canvas() {
        let points = Smooth.sample(&context(50.0, 2.0, 0.0), &mut fastrand::Rng::with_seed(0));
        assert_eq!(points.len(), 481);
        assert_eq!(points[0], Point::new(0.0, 300.0));
        assert_eq!(points[1].x, 2.5);
        assert_eq!(points.last().map(|p| p.x), Some(1200.0));
    }

    #[test]
    fn phase_shifts_start() {
        let points = Smooth.sample(&context(50.0, 2.0, std::f64::consts::FRAC_PI_2), &mut fastrand::Rng::new());
        assert!((points[0].y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn control_points() {
        let command = Smooth.connect(1, Point::new(0.0, 300.0), Point::new(10.0, 340.0));
        let PathCommand::CubicTo { ctrl1, ctrl2, to } = command else {
            panic!("expected cubic curve");
        };
        assert_eq!(ctrl1, Point::new(5.0, 310.0));
        assert_eq!(ctrl2, Point::new(5.0, 330.0));
        assert_eq!(to, Point::new(10.0, 340.0));
    }
}
