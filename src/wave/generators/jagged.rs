use super::common::{MID_LINE, Point, RandomSource, SampleContext, WaveGenerator, clamp_steps, x_at};
use crate::path::PathCommand;

/// Segments per unit of frequency
const SEGMENTS_PER_CYCLE: f64 = 4.0;

/// Abstract wave - alternating peaks of random height joined with quadratic curves
pub(crate) struct Abstract;

impl WaveGenerator for Abstract {
    fn sample(&self, ctx: &SampleContext, rng: &mut dyn RandomSource) -> Vec<Point> {
        let segments = clamp_steps((SEGMENTS_PER_CYCLE * ctx.frequency).floor());
        log::debug!("abstract wave: {segments} segments");
        (0..=segments)
            .map(|i| {
                let height = ctx.amplitude * (0.5 + rng.next_unit());
                let offset = if i % 2 == 1 { height } else { -height };
                Point::new(x_at(i, segments), MID_LINE + offset)
            })
            .collect()
    }

    fn connect(&self, index: usize, previous: Point, point: Point) -> PathCommand {
        if index == 1 {
            return PathCommand::LineTo(point);
        }
        PathCommand::QuadTo { ctrl: Point::new((previous.x + point.x) / 2.0, point.y), to: point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn peaks_alternate() {
        let ctx = SampleContext { amplitude: 100.0, frequency: 1.0, phase: 0.0 };
        let points = Abstract.sample(&ctx, &mut Constant(0.5));
        let expected = [
            Point::new(0.0, 200.0),
            Point::new(300.0, 400.0),
            Point::new(600.0, 200.0),
            Point::new(900.0, 400.0),
            Point::new(1200.0, 200.0),
        ];
        assert_eq!(points, expected);
    }

    #[test]
    fn jitter_stays_in_range() {
        let ctx = SampleContext { amplitude: 40.0, frequency: 10.0, phase: 0.0 };
        let points = Abstract.sample(&ctx, &mut fastrand::Rng::with_seed(7));
        assert_eq!(points.len(), 41);
        for point in points {
            let offset = (point.y - 300.0).abs();
            assert!((20.0..60.0).contains(&offset), "offset {offset} out of range");
        }
    }

    #[test]
    fn first_segment_is_straight() {
        let first = Abstract.connect(1, Point::new(0.0, 250.0), Point::new(300.0, 350.0));
        assert_eq!(first, PathCommand::LineTo(Point::new(300.0, 350.0)));

        let second = Abstract.connect(2, Point::new(300.0, 350.0), Point::new(600.0, 250.0));
        assert_eq!(
            second,
            PathCommand::QuadTo { ctrl: Point::new(450.0, 250.0), to: Point::new(600.0, 250.0) }
        );
    }
}
