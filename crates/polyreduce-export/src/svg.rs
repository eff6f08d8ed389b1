//! SVG overlay serializer.
//!
//! Draws a 2-D polyline and its simplification on top of each other so
//! the effect of an algorithm can be inspected in a browser. The original
//! is a thin grey path. The simplification is a coloured path with a
//! marker on every kept vertex.
//!
//! The `viewBox` is fitted to the bounding box of the original with a
//! small margin, and the y axis is flipped so that larger y values are
//! drawn higher up.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Description, Group, Path, Title};
use svg::node::{Text, Value};

/// Okabe-Ito colours, readable for colour-blind viewers.
mod colors {
    pub const ORIGINAL: &str = "#999999";
    pub const SIMPLIFIED: &str = "#D55E00";
    pub const VERTEX: &str = "#0072B2";
}

/// Margin around the bounding box, as a fraction of its larger side.
const MARGIN: f64 = 0.02;
/// Stroke width of the original, as a fraction of the larger side.
const THIN_STROKE: f64 = 0.002;
/// Stroke width of the simplification.
const THICK_STROKE: f64 = 0.004;
/// Vertex marker radius.
const MARKER_RADIUS: f64 = 0.006;

/// Metadata to embed in the SVG document.
///
/// When present, a `<title>` and/or `<desc>` element is emitted right
/// after the opening `<svg>` tag. Text is XML-escaped by the `svg` crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, typically the polyline file stem.
    pub title: Option<&'a str>,

    /// Document description, typically the algorithm and its parameters.
    pub description: Option<&'a str>,
}

/// Axis-aligned bounds of a set of 2-D points.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(coords: &[f64]) -> Option<Self> {
        let mut points = coords.chunks_exact(2);
        let first = points.next()?;
        let init = Self {
            min_x: first[0],
            min_y: first[1],
            max_x: first[0],
            max_y: first[1],
        };
        Some(points.fold(init, |b, p| Self {
            min_x: b.min_x.min(p[0]),
            min_y: b.min_y.min(p[1]),
            max_x: b.max_x.max(p[0]),
            max_y: b.max_y.max(p[1]),
        }))
    }

    /// Length of the larger side, or 1 for a degenerate box.
    fn extent(&self) -> f64 {
        let extent = (self.max_x - self.min_x).max(self.max_y - self.min_y);
        if extent > 0.0 { extent } else { 1.0 }
    }

    /// Mirror `y` within the box.
    fn flip(&self, y: f64) -> f64 {
        self.min_y + self.max_y - y
    }
}

/// Build an SVG path `d` attribute for 2-D flat coordinates.
///
/// Returns an empty string for fewer than 2 points.
fn build_path_data(coords: &[f64], bounds: &Bounds) -> String {
    let mut points = coords.chunks_exact(2);
    let Some(first) = points.next() else {
        return String::new();
    };
    if points.len() == 0 {
        return String::new();
    }

    let mut data = Data::new().move_to((first[0], bounds.flip(first[1])));
    for p in points {
        data = data.line_to((p[0], bounds.flip(p[1])));
    }
    String::from(Value::from(data))
}

/// Serialize a 2-D polyline and its simplification into an overlay SVG.
///
/// Both inputs are flat `x, y` coordinate sequences. A trailing odd
/// coordinate is ignored. The `viewBox` follows the original, or the
/// simplification when the original is empty.
///
/// # Examples
///
/// ```
/// use polyreduce_export::{SvgMetadata, to_overlay_svg};
///
/// let original = [0.0, 0.0, 5.0, 5.0, 10.0, 0.0];
/// let simplified = [0.0, 0.0, 10.0, 0.0];
/// let svg = to_overlay_svg(&original, &simplified, &SvgMetadata::default());
/// assert!(svg.contains("M0,5 L5,0 L10,5"));
/// assert!(svg.contains("M0,5 L10,5"));
/// ```
#[must_use]
pub fn to_overlay_svg(
    original: &[f64],
    simplification: &[f64],
    metadata: &SvgMetadata<'_>,
) -> String {
    let bounds = Bounds::of(original)
        .or_else(|| Bounds::of(simplification))
        .unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        });
    let extent = bounds.extent();
    let margin = extent * MARGIN;
    let width = bounds.max_x - bounds.min_x + 2.0 * margin;
    let height = bounds.max_y - bounds.min_y + 2.0 * margin;

    let mut doc = Document::new().set(
        "viewBox",
        format!(
            "{} {} {width} {height}",
            bounds.min_x - margin,
            bounds.min_y - margin
        ),
    );

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }
    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    let d = build_path_data(original, &bounds);
    if !d.is_empty() {
        doc = doc.add(
            Path::new()
                .set("id", "original")
                .set("d", d)
                .set("fill", "none")
                .set("stroke", colors::ORIGINAL)
                .set("stroke-width", extent * THIN_STROKE),
        );
    }

    let d = build_path_data(simplification, &bounds);
    if !d.is_empty() {
        doc = doc.add(
            Path::new()
                .set("id", "simplification")
                .set("d", d)
                .set("fill", "none")
                .set("stroke", colors::SIMPLIFIED)
                .set("stroke-width", extent * THICK_STROKE),
        );
    }

    let mut vertices = Group::new()
        .set("id", "vertices")
        .set("fill", colors::VERTEX);
    for p in simplification.chunks_exact(2) {
        vertices = vertices.add(
            Circle::new()
                .set("cx", p[0])
                .set("cy", bounds.flip(p[1]))
                .set("r", extent * MARKER_RADIUS),
        );
    }
    doc = doc.add(vertices);

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}
