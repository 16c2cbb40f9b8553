use super::common::{MID_LINE, Point, RandomSource, SampleContext, WaveGenerator, sign, x_at};
use crate::path::PathCommand;
use std::f64::consts::PI;

/// Pixels covered by one sample at frequency 1
const PERIOD: f64 = 50.0;

/// Angle lookahead used to detect an upcoming sign change
const LOOKAHEAD: f64 = 0.1;

/// Sharp wave - a square wave with vertical edges at every zero crossing
pub(crate) struct Sharp;

impl WaveGenerator for Sharp {
    fn sample(&self, ctx: &SampleContext, _rng: &mut dyn RandomSource) -> Vec<Point> {
        let steps = ctx.steps(PERIOD);
        log::debug!("sharp wave: {steps} steps");
        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let x = x_at(i, steps);
            let angle = ctx.angle_at(x);
            points.push(Point::new(x, MID_LINE + ctx.amplitude * sign(angle.sin())));

            // A crossing before the next sample gets an extra point at the same x on the other side
            if i < steps && angle.sin() * (angle + LOOKAHEAD).sin() <= 0.0 {
                points.push(Point::new(x, MID_LINE + ctx.amplitude * sign((angle + PI).sin())));
            }
        }
        points
    }

    fn connect(&self, _index: usize, _previous: Point, point: Point) -> PathCommand {
        PathCommand::LineTo(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amplitude: f64, frequency: f64) -> Vec<Point> {
        let ctx = SampleContext { amplitude, frequency, phase: 0.0 };
        Sharp.sample(&ctx, &mut fastrand::Rng::with_seed(1))
    }

    #[test]
    fn levels_are_square() {
        for point in sample(50.0, 2.0) {
            assert!([250.0, 300.0, 350.0].contains(&point.y), "unexpected level {}", point.y);
        }
    }

    #[test]
    fn start_gets_vertical_edge() {
        let points = sample(50.0, 2.0);
        assert_eq!(points[0], Point::new(0.0, 300.0));
        assert_eq!(points[1], Point::new(0.0, 350.0));
    }

    #[test]
    fn edges_share_x() {
        let points = sample(50.0, 2.0);
        let steps = 48;
        assert!(points.len() > steps + 1);
        let vertical = points.windows(2).filter(|pair| pair[0].x == pair[1].x).count();
        assert_eq!(points.len() - vertical, steps + 1);
    }

    #[test]
    fn last_sample_has_no_edge() {
        let points = sample(50.0, 2.0);
        let tail: Vec<_> = points.iter().filter(|p| p.x == 1200.0).collect();
        assert_eq!(tail.len(), 1);
    }
}
