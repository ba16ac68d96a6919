//! SVG backend: serializes [`Canvas`] primitives as SVG elements.

use icn_engine::{Canvas, Color, Rect, Vec2};

/// Accumulates primitives into an SVG document of a fixed pixel size.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    background: Option<Color>,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, background: Option<Color>) -> Self {
        Self { width, height, background, body: String::new() }
    }

    /// Number of elements emitted so far (background excluded).
    pub fn element_count(&self) -> usize {
        self.body.lines().count()
    }

    pub fn finish(self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        );
        if let Some(bg) = self.background {
            out.push_str(&format!(
                "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" {}/>\n",
                paint_attr("fill", bg)
            ));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn element(&mut self, el: String) {
        self.body.push_str(&el);
        self.body.push('\n');
    }
}

fn paint_attr(kind: &str, color: Color) -> String {
    let [r, g, b, a] = color.to_srgb_u8();
    if a == 255 {
        format!("{kind}=\"#{r:02x}{g:02x}{b:02x}\"")
    } else {
        format!("{kind}=\"#{r:02x}{g:02x}{b:02x}\" {kind}-opacity=\"{:.3}\"", a as f32 / 255.0)
    }
}

fn stroke_attrs(width: f32, color: Color) -> String {
    format!("fill=\"none\" stroke-width=\"{}\" {}", width, paint_attr("stroke", color))
}

impl Canvas for SvgCanvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.element(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(width, color)
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.element(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x,
            center.y,
            radius,
            paint_attr("fill", color)
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.element(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            rect.origin.x,
            rect.origin.y,
            rect.size.x,
            rect.size.y,
            paint_attr("fill", color)
        ));
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.element(format!(
            "<polygon points=\"{},{} {},{} {},{}\" {}/>",
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            paint_attr("fill", color)
        ));
    }

    fn draw_quad_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color) {
        self.element(format!(
            "<path d=\"M {} {} Q {} {} {} {}\" {}/>",
            from.x,
            from.y,
            control.x,
            control.y,
            to.x,
            to.y,
            stroke_attrs(width, color)
        ));
    }
}
