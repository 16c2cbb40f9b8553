use crate::wave::generators::Point;
use itertools::Itertools;
use std::fmt;

/// A single SVG path instruction in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x,y`
    MoveTo(Point),
    /// `L x,y`
    LineTo(Point),
    /// `C x1,y1 x2,y2 x,y`
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// `Q x1,y1 x,y`
    QuadTo { ctrl: Point, to: Point },
    /// `Z`
    Close,
}

impl PathCommand {
    /// The command letter
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CubicTo { .. } => 'C',
            Self::QuadTo { .. } => 'Q',
            Self::Close => 'Z',
        }
    }

    /// The point the pen ends up on, if any
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(to) | Self::LineTo(to) | Self::CubicTo { to, .. } | Self::QuadTo { to, .. } => Some(*to),
            Self::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(to) => write!(f, "M {}", Coords(*to)),
            Self::LineTo(to) => write!(f, "L {}", Coords(*to)),
            Self::CubicTo { ctrl1, ctrl2, to } => write!(f, "C {} {} {}", Coords(*ctrl1), Coords(*ctrl2), Coords(*to)),
            Self::QuadTo { ctrl, to } => write!(f, "Q {} {}", Coords(*ctrl), Coords(*to)),
            Self::Close => write!(f, "Z"),
        }
    }
}

/// An ordered list of path commands, rendered as the `d` attribute of a `<path>`
#[derive(Debug, Clone, PartialEq)]
pub struct WavePath {
    commands: Vec<PathCommand>,
}

impl WavePath {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Command letters in order, e.g. `"MCCLLZ"`
    pub fn structure(&self) -> String {
        self.commands.iter().map(PathCommand::letter).collect()
    }
}

impl fmt::Display for WavePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commands.iter().join(" "))
    }
}

/// A number formatted the way path consumers expect: no trailing `.0`, no `-0`, never `NaN`
#[derive(Debug, Clone, Copy)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() || value == 0.0 {
            return write!(f, "0");
        }
        write!(f, "{value}")
    }
}

struct Coords(Point);

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Number(self.0.x), Number(self.0.y))
    }
}
