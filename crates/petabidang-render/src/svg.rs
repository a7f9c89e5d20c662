use crate::markup::{MarkupPrimitive, RenderResult, TextAnchor};

/// Serializes a render into the SVG string the preview client displays.
/// Geometry goes into one group, labels into a second so text always paints
/// on top.
pub fn to_svg(result: &RenderResult) -> String {
    let mut shapes: Vec<String> = Vec::new();
    let mut texts: Vec<String> = Vec::new();

    for primitive in &result.primitives {
        match primitive {
            MarkupPrimitive::Segment { a, b, stroke } => {
                shapes.push(format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"0.5\"/>",
                    fmt_num(a.x),
                    fmt_num(a.y),
                    fmt_num(b.x),
                    fmt_num(b.y),
                    stroke
                ));
            }
            MarkupPrimitive::Polyline {
                points,
                closed,
                stroke,
            } => {
                let pts = points
                    .iter()
                    .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let tag = if *closed { "polygon" } else { "polyline" };
                shapes.push(format!(
                    "<{tag} points=\"{pts}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"0.5\"/>"
                ));
            }
            MarkupPrimitive::Circle {
                center,
                radius,
                stroke,
            } => {
                shapes.push(format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\"/>",
                    fmt_num(center.x),
                    fmt_num(center.y),
                    fmt_num(*radius),
                    stroke
                ));
            }
            MarkupPrimitive::ArcPath {
                start,
                end,
                radius,
                large_arc,
                sweep,
                stroke,
            } => {
                shapes.push(format!(
                    "<path d=\"M {} {} A {} {} 0 {} {} {} {}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\"/>",
                    fmt_num(start.x),
                    fmt_num(start.y),
                    fmt_num(*radius),
                    fmt_num(*radius),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    fmt_num(end.x),
                    fmt_num(end.y),
                    stroke
                ));
            }
            MarkupPrimitive::Label {
                position,
                content,
                font_size,
                rotation,
                fill,
                anchor,
            } => {
                let (text_anchor, baseline) = match anchor {
                    TextAnchor::Start => ("start", "alphabetic"),
                    TextAnchor::Middle => ("middle", "middle"),
                };
                let transform = if *rotation != 0.0 {
                    format!(
                        " transform=\"rotate({} {} {})\"",
                        fmt_num(*rotation),
                        fmt_num(position.x),
                        fmt_num(position.y)
                    )
                } else {
                    String::new()
                };
                texts.push(format!(
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"{}>{}</text>",
                    fmt_num(position.x),
                    fmt_num(position.y),
                    fmt_num(*font_size),
                    fill,
                    text_anchor,
                    baseline,
                    transform,
                    escape_xml(content)
                ));
            }
        }
    }

    let w = fmt_num(result.canvas_width);
    let h = fmt_num(result.canvas_height);
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  <g>{}</g>",
        shapes.join("\n    ")
    );
    if !texts.is_empty() {
        svg.push_str(&format!("\n  <g>{}</g>", texts.join("\n    ")));
    }
    svg.push_str("\n</svg>");
    svg
}

pub fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let mut buf = ryu::Buffer::new();
    let s = buf.format(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
