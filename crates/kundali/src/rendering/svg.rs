//! SVG serialisation of a [`ChartSpec`].

use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn paint(fill: Option<Color>, stroke: Option<&Stroke>) -> String {
    let mut attrs = match fill {
        Some(c) => format!(r#" fill="{}""#, c.to_css_string()),
        None => r#" fill="none""#.to_string(),
    };
    if let Some(s) = stroke {
        attrs.push_str(&format!(
            r#" stroke="{}" stroke-width="{}""#,
            s.color.to_css_string(),
            s.width
        ));
        if let Some(dash) = &s.dash_array {
            let dash: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
            attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
        }
    }
    attrs
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shape_to_svg(shape: &Shape) -> String {
    match shape {
        Shape::Rect {
            origin,
            width,
            height,
            fill,
            stroke,
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            origin.x,
            origin.y,
            width,
            height,
            paint(*fill, stroke.as_ref())
        ),
        Shape::Line { from, to, stroke } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            paint(None, Some(stroke))
        ),
        Shape::Polygon {
            points,
            fill,
            stroke,
        } => format!(
            r#"<polygon points="{}"{}/>"#,
            points_attr(points),
            paint(*fill, stroke.as_ref())
        ),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = if *bold { r#" font-weight="600""# } else { "" };
            format!(
                r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
                position.x,
                position.y,
                size,
                color.to_css_string(),
                anchor,
                weight,
                escape_xml(content)
            )
        }
    }
}

/// Standalone SVG document for `spec`.
pub fn to_svg(spec: &ChartSpec) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = spec.width,
        h = spec.height
    );
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        spec.width,
        spec.height,
        spec.background_color.to_css_string()
    ));
    out.push('\n');
    for shape in &spec.shapes {
        out.push_str(&shape_to_svg(shape));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_document_shape() {
        let mut spec = ChartSpec::new(100.0, 50.0);
        spec.shapes.push(Shape::Text {
            position: Point { x: 1.0, y: 2.5 },
            content: "Su & Mo".to_string(),
            size: 12.0,
            color: Color::BLACK,
            anchor: TextAnchor::Middle,
            bold: false,
        });
        let svg = to_svg(&spec);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.contains(r##"<text x="1" y="2.5" font-size="12" fill="#000000" text-anchor="middle">Su &amp; Mo</text>"##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
