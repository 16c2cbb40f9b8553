use crate::path::Number;
use crate::wave::WaveConfig;
use crate::wave::generators::{CANVAS_HEIGHT, CANVAS_WIDTH, RandomSource, build_path};

/// The id the gradient definition is registered under
pub const GRADIENT_ID: &str = "wave-gradient";

/// The viewBox the exported document declares
pub const EXPORT_VIEW_BOX: (f64, f64) = (800.0, 600.0);

/// Which document flavor to produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SvgTarget {
    /// The copy/download document, declaring an 800x600 viewBox while the path spans 1200x600.
    #[default]
    Export,

    /// The on-screen document: the full 1200x600 canvas stretched to fit, over the background color.
    Preview,
}

impl SvgTarget {
    /// The viewBox width and height
    pub fn view_box(&self) -> (f64, f64) {
        match self {
            Self::Export => EXPORT_VIEW_BOX,
            Self::Preview => (CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }
}

/// Compose the standalone export document for `config`.
pub fn compose_svg(config: &WaveConfig) -> String {
    compose_svg_with(config, SvgTarget::Export, &mut fastrand::Rng::new())
}

/// Compose a document for `target`, drawing any randomness from `rng`.
pub fn compose_svg_with(config: &WaveConfig, target: SvgTarget, rng: &mut dyn RandomSource) -> String {
    let path = build_path(config, rng).to_string();
    let (width, height) = target.view_box();

    let mut svg = format!(r#"<svg viewBox="0 0 {} {}""#, Number(width), Number(height));
    if target == SvgTarget::Preview {
        svg.push_str(r#" preserveAspectRatio="none""#);
    }
    svg.push_str(" xmlns=\"http://www.w3.org/2000/svg\">\n");

    if config.use_gradient() {
        let [from, to] = config.gradient_colors();
        svg.push_str(&format!(
            concat!(
                "  <defs>\n",
                "    <linearGradient id=\"{id}\" x1=\"0\" x2=\"0\" y1=\"0\" y2=\"1\">\n",
                "      <stop offset=\"0%\" stop-color=\"{from}\" />\n",
                "      <stop offset=\"100%\" stop-color=\"{to}\" />\n",
                "    </linearGradient>\n",
                "  </defs>\n",
            ),
            id = GRADIENT_ID,
            from = escape(from),
            to = escape(to),
        ));
    }

    if target == SvgTarget::Preview {
        let background = escape(config.background_color());
        svg.push_str(&format!("  <rect width=\"100%\" height=\"100%\" fill=\"{background}\" />\n"));
    }

    let fill = if config.use_gradient() { format!("url(#{GRADIENT_ID})") } else { escape(config.color()) };
    svg.push_str(&format!(
        concat!("  <path\n", "    d=\"{}\"\n", "    fill=\"{}\"\n", "    fill-opacity=\"{}\"\n", "  />\n", "</svg>"),
        path,
        fill,
        Number(config.fill_opacity()),
    ));
    svg
}

/// Escape text for use inside a double quoted attribute
fn escape(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            _ => output.push(c),
        }
    }
    output
}
