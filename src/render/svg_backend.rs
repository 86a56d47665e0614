use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle, RenderFrame, Renderer, TextHAlign};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document.
///
/// Grouped circles get `seat party-<id>` classes and a `data-party-id`; an
/// embedded stylesheet dims every other group while one group is hovered.
/// Circle titles become native `<title>` tooltips.
#[derive(Debug)]
pub struct SvgRenderer {
    document: String,
    hover_dim_fill: Color,
    hover_dim_opacity: f64,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: String::new(),
            hover_dim_fill: Color::token("#cbd5e1"),
            hover_dim_opacity: 0.55,
            last_stats: SvgRenderStats::default(),
        }
    }

    pub fn set_hover_style(&mut self, fill: Color, opacity: f64) -> ChartResult<()> {
        fill.validate()?;
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(ChartError::InvalidData(
                "hover opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.hover_dim_fill = fill;
        self.hover_dim_opacity = opacity;
        Ok(())
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the latest successful render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&self, frame: &RenderFrame, out: &mut String) -> std::fmt::Result {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        write!(
            out,
            r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="{FONT_FAMILY}">"#
        )?;

        let groups = frame.circle_groups();
        if !groups.is_empty() {
            out.push_str("<style>.seat{cursor:pointer}");
            for group in groups {
                write!(
                    out,
                    "svg:has(.party-{group}:hover) .seat:not(.party-{group}){{fill:{};opacity:{}}}",
                    escape_xml(self.hover_dim_fill.as_str()),
                    fmt_num(self.hover_dim_opacity)
                )?;
            }
            out.push_str("</style>");
        }

        for rect in &frame.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                fmt_num(rect.x),
                fmt_num(rect.y),
                fmt_num(rect.width),
                fmt_num(rect.height),
                escape_xml(rect.fill_color.as_str())
            )?;
        }

        for circle in &frame.circles {
            out.push_str("<circle");
            if let Some(group) = circle.group {
                write!(out, r#" class="seat party-{group}" data-party-id="{group}""#)?;
            }
            write!(
                out,
                r#" cx="{}" cy="{}" r="{}" fill="{}" opacity="{}""#,
                fmt_num(circle.cx),
                fmt_num(circle.cy),
                fmt_num(circle.radius),
                escape_xml(circle.fill.as_str()),
                fmt_num(circle.opacity)
            )?;
            match &circle.title {
                Some(title) => write!(out, "><title>{}</title></circle>", escape_xml(title))?,
                None => out.push_str("/>"),
            }
        }

        for line in &frame.lines {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}""#,
                fmt_num(line.x1),
                fmt_num(line.y1),
                fmt_num(line.x2),
                fmt_num(line.y2),
                escape_xml(line.color.as_str()),
                fmt_num(line.stroke_width),
                fmt_num(line.opacity)
            )?;
            if let LineStrokeStyle::Dashed { dash, gap } = line.stroke_style {
                write!(out, r#" stroke-dasharray="{} {}""#, fmt_num(dash), fmt_num(gap))?;
            }
            out.push_str(" pointer-events=\"none\"/>");
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
                fmt_num(text.x),
                fmt_num(text.y),
                fmt_num(text.font_size_px),
                escape_xml(text.color.as_str())
            )?;
            if text.bold {
                out.push_str(" font-weight=\"700\"");
            }
            write!(out, ">{}</text>", escape_xml(&text.text))?;
        }

        out.push_str("</svg>");
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut document = String::with_capacity(256 + frame.circles.len() * 160);
        self.write_document(frame, &mut document)
            .map_err(|err| map_backend_error("failed to write svg document", err))?;

        self.document = document;
        self.last_stats = SvgRenderStats {
            rects_drawn: frame.rects.len(),
            circles_drawn: frame.circles.len(),
            lines_drawn: frame.lines.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

/// Compact decimal: at most two fractional digits, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn map_backend_error(prefix: &str, err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
