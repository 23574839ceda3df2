//! SVG generation from diagram geometry

use crate::geometry::{BoundingBox, DiagramGeometry};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Marker roles along the arm, each with its own palette token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Shoulder,
    Elbow,
    Wrist,
}

impl Marker {
    fn name(&self) -> &'static str {
        match self {
            Marker::Shoulder => "shoulder",
            Marker::Elbow => "elbow",
            Marker::Wrist => "wrist",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Marker::Shoulder => "Shoulder",
            Marker::Elbow => "Elbow",
            Marker::Wrist => "Wrist",
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    styles: Vec<String>,
    elements: Vec<String>,
    annotations: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            styles: vec![],
            elements: vec![],
            annotations: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add CSS custom properties from a stylesheet plus the class rules that use them
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let (nl, indent) = if self.config.pretty_print {
            ("\n", "      ")
        } else {
            ("", "")
        };
        let mut css = format!(":root {{{nl}");
        for (token, value) in stylesheet.resolved_colors() {
            css.push_str(&format!("{indent}--{}: {};{nl}", token, value));
        }
        css.push_str(if self.config.pretty_print { "    }" } else { "}" });
        self.styles.push(css);

        let p = self.prefix();
        self.styles.push(format!(
            ".{p}arm {{ fill: var(--base-200); stroke: var(--base-300); }}"
        ));
        for marker in [Marker::Shoulder, Marker::Elbow, Marker::Wrist] {
            let name = marker.name();
            self.styles.push(format!(
                ".{p}{name} {{ stroke: var(--diagram-{name}); fill: var(--diagram-{name}); }}"
            ));
        }
        self.styles.push(format!(
            ".{p}label {{ font-family: system-ui, sans-serif; }}"
        ));
    }

    /// Add a two-headed arrow marker definition in a marker's color
    fn add_arrow_marker(&mut self, marker: Marker) {
        let p = self.prefix();
        let name = marker.name();
        self.defs.push(format!(
            r#"<marker id="{p}arrowhead-{name}" markerWidth="1.5" markerHeight="1" refX="0.75" refY="0.5" orient="auto"><polygon points="0 0, 1.5 0.5, 0 1" class="{p}{name}"/></marker>"#
        ));
    }

    /// Add a rounded rectangle
    pub fn add_rect(&mut self, id: &str, bounds: &BoundingBox, radius: f64, class: &str) {
        let p = self.prefix();
        self.elements.push(format!(
            r#"{}<rect id="{p}{}" class="{p}{}" x="{}" y="{}" width="{}" height="{}" rx="{}" stroke-width="0.5"/>"#,
            self.indent_str(),
            id,
            class,
            num(bounds.x),
            num(bounds.y),
            num(bounds.width),
            num(bounds.height),
            num(radius),
        ));
    }

    /// Add a vertical marker line across the arm
    fn add_marker_line(&mut self, marker: Marker, x: f64, y1: f64, y2: f64, stroke_width: f64) {
        let p = self.prefix();
        let name = marker.name();
        self.elements.push(format!(
            r#"{}<line id="{p}{name}-marker" class="{p}marker {p}{name}" x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            self.indent_str(),
            num(x),
            num(y1),
            num(x),
            num(y2),
            num(stroke_width),
        ));
    }

    /// Add a text element centered on `x`
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        class: &str,
        font_size: f64,
        font_weight: u16,
    ) {
        let p = self.prefix();
        let line = format!(
            r#"{}<text class="{p}label {p}{}" x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="{}">{}</text>"#,
            self.indent_str(),
            class,
            num(x),
            num(y),
            num(font_size),
            font_weight,
            escape_xml(text)
        );
        self.elements.push(line);
    }

    /// Add a dimension line between two x-coordinates with a centered label
    fn add_dimension(&mut self, marker: Marker, from_x: f64, to_x: f64, y: f64, label: &str) {
        let p = self.prefix();
        let name = marker.name();
        let indent = self.indent_str().to_string();
        self.annotations.push(format!(
            r#"{indent}<line id="{p}{name}-span" class="{p}dimension {p}{name}" x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="0.2" marker-start="url(#{p}arrowhead-{name})" marker-end="url(#{p}arrowhead-{name})"/>"#,
            num(from_x),
            num(y),
            num(to_x),
            num(y),
        ));
        self.annotations.push(format!(
            r#"{indent}<text class="{p}label {p}{name}" x="{}" y="{}" text-anchor="middle" font-size="2.5" font-weight="500">{}</text>"#,
            num((from_x + to_x) / 2.0),
            num(y + 4.0),
            escape_xml(label)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
            num(width),
            num(height)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(self.indent_str());
                svg.push_str(self.indent_str());
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(self.indent_str());
                svg.push_str(self.indent_str());
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Dimension lines sit on top of the arm
        for annotation in &self.annotations {
            svg.push_str(annotation);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render the arm diagram to an SVG string (with default stylesheet)
pub fn render_arm_diagram(geometry: &DiagramGeometry, config: &SvgConfig) -> String {
    render_arm_diagram_with_stylesheet(geometry, config, &Stylesheet::default())
}

/// Render the arm diagram to an SVG string with a custom stylesheet
pub fn render_arm_diagram_with_stylesheet(
    geometry: &DiagramGeometry,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let arm = &geometry.arm;
    let top = arm.y;
    let bottom = arm.bottom();

    builder.add_rect("arm", arm, 2.0, "arm");

    // Anchors extend a little further past the arm than the elbow does
    let anchors = [
        (Marker::Shoulder, geometry.shoulder_x, 3.0, 6.0, 0.8),
        (Marker::Elbow, geometry.elbow_x(), 2.5, 5.0, 0.6),
        (Marker::Wrist, geometry.wrist_x, 3.0, 6.0, 0.8),
    ];
    for (marker, x, overhang, label_gap, stroke_width) in anchors {
        builder.add_marker_line(marker, x, top - overhang, bottom + overhang, stroke_width);
        builder.add_text(
            marker.title(),
            x,
            top - label_gap,
            marker.name(),
            3.0,
            600,
        );
    }

    if config.annotate {
        builder.add_arrow_marker(Marker::Elbow);
        builder.add_arrow_marker(Marker::Wrist);
        builder.add_dimension(
            Marker::Elbow,
            geometry.shoulder_x,
            geometry.elbow_x(),
            bottom + 6.0,
            &geometry.shoulder_to_elbow.text(),
        );
        builder.add_dimension(
            Marker::Wrist,
            geometry.shoulder_x,
            geometry.wrist_x,
            bottom + 12.0,
            &geometry.shoulder_to_wrist.text(),
        );
    }

    builder.build(geometry.canvas_width, geometry.canvas_height)
}

/// Format a coordinate with at most three decimals and no trailing zeros
fn num(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
