use crate::chart::geometry::{Label, PieLayout, Slice, SWATCH_SIZE};
use crate::chart::ChartBackend;
use crate::utils::error::Result;
use svg::node::element::{Circle, Path, Rectangle, Text};
use svg::{node, Document};

/// Draws a [`PieLayout`] into an SVG file.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    path: String,
}

impl SvgBackend {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ChartBackend for SvgBackend {
    fn render(&self, layout: &PieLayout) -> Result<()> {
        svg::save(&self.path, &document(layout))?;
        Ok(())
    }
}

fn document(layout: &PieLayout) -> Document {
    let mut doc = Document::new()
        .set("viewBox", (0.0, 0.0, layout.width, layout.height))
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", layout.width)
                .set("height", layout.height)
                .set("fill", "white"),
        )
        .add(text(&layout.title, "middle").set("font-weight", "bold"));

    if let Some(placeholder) = &layout.placeholder {
        return doc.add(text(placeholder, "middle"));
    }

    for slice in &layout.slices {
        // An arc whose endpoints coincide would not draw, so a slice covering
        // the whole circle becomes a disc.
        if slice.sweep_deg >= 360.0 - 1e-6 {
            doc = doc.add(disc(slice));
        } else {
            doc = doc.add(sector(slice));
        }
    }
    for slice in &layout.slices {
        doc = doc.add(text(&slice.percent, "middle"));
    }
    for entry in &layout.legend {
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", entry.swatch_x)
                    .set("y", entry.swatch_y)
                    .set("width", SWATCH_SIZE)
                    .set("height", SWATCH_SIZE)
                    .set("fill", entry.color),
            )
            .add(text(&entry.label, "start"));
    }
    if let Some(rim) = &layout.rim {
        doc = doc.add(
            Circle::new()
                .set("cx", rim.cx)
                .set("cy", rim.cy)
                .set("r", rim.r)
                .set("fill", "none")
                .set("stroke", "#444"),
        );
    }
    doc
}

fn sector(slice: &Slice) -> Path {
    let (x1, y1) = point_on_circle(slice, slice.start_deg);
    let (x2, y2) = point_on_circle(slice, slice.start_deg + slice.sweep_deg);
    let large_arc = i32::from(slice.sweep_deg > 180.0);
    // Angles grow counter-clockwise on screen, so the SVG sweep flag is 0.
    let data = format!(
        "M {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        slice.cx, slice.cy, x1, y1, slice.r, slice.r, large_arc, x2, y2
    );
    Path::new()
        .set("fill", slice.color)
        .set("stroke", "white")
        .set("d", data)
}

fn disc(slice: &Slice) -> Circle {
    Circle::new()
        .set("cx", slice.cx)
        .set("cy", slice.cy)
        .set("r", slice.r)
        .set("fill", slice.color)
        .set("stroke", "white")
}

fn point_on_circle(slice: &Slice, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (
        slice.cx + slice.r * angle.cos(),
        slice.cy - slice.r * angle.sin(),
    )
}

fn text(label: &Label, anchor: &str) -> Text {
    Text::new()
        .add(node::Text::new(label.text.clone()))
        .set("x", label.x)
        .set("y", label.y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .set("font-size", 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::geometry;
    use crate::core::aggregate::Segment;

    fn render_to_string(segments: &[Segment]) -> String {
        let layout = geometry::layout(segments, "Title", 980.0, 560.0);
        document(&layout).to_string()
    }

    #[test]
    fn test_document_contains_slices_and_legend() {
        let rendered = render_to_string(&[Segment::new("Acme", 3), Segment::new("Globex", 1)]);
        assert!(rendered.contains("Acme: 3"));
        assert!(rendered.contains("Globex: 1"));
        assert!(rendered.contains("75%"));
        assert!(rendered.contains("#f66"));
    }

    #[test]
    fn test_document_no_data_placeholder() {
        let rendered = render_to_string(&[]);
        assert!(rendered.contains("No data"));
        assert!(rendered.contains("Title"));
        assert!(!rendered.contains("<path"));
    }

    #[test]
    fn test_full_circle_slice_renders_as_disc() {
        let rendered = render_to_string(&[Segment::new("only", 2)]);
        assert!(rendered.contains("circle"));
        assert!(rendered.contains("100%"));
    }

    #[test]
    fn test_backend_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let backend = SvgBackend::new(path.to_str().unwrap());
        let layout = geometry::layout(&[Segment::new("Acme", 1)], "By customer", 980.0, 560.0);

        backend.render(&layout).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(written.contains("By customer"));
    }
}
