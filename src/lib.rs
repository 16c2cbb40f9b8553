//! Parametric decorative waves rendered as SVG paths.
//!
//! A [WaveConfig] describes the wave; [generate_path] turns it into path data and [compose_svg]
//! wraps that path into a standalone document.

pub mod config;
pub mod export;
pub mod path;
pub mod svg;
pub mod wave;

pub use config::ConfigError;
pub use export::{DOWNLOAD_FILE_NAME, ExportError, SVG_MIME_TYPE};
pub use path::{PathCommand, WavePath};
pub use svg::{SvgTarget, compose_svg, compose_svg_with};
pub use wave::generators::{Point, RandomSource, build_path, generate_path, generate_path_with, generate_points};
pub use wave::{WaveConfig, WaveField, WaveType};
