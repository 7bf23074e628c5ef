use crate::core::aggregate::Segment;

/// Slice and legend swatch colors, cycled by entry index.
pub const PALETTE: [&str; 11] = [
    "#f66", "#6f6", "#66f", "#fc3", "#3cf", "#c6f", "#aaa", "#6cc", "#c96", "#9c6", "#ddd",
];

pub const SWATCH_SIZE: f64 = 10.0;

const LEGEND_LINE_STEP: f64 = 18.0;
const LEGEND_COLUMN_STEP: f64 = 240.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One pie slice. Angles are degrees, counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: &'static str,
    pub percent: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub color: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rim {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Everything a backend needs to draw one chart at one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub width: f64,
    pub height: f64,
    pub title: Label,
    pub placeholder: Option<Label>,
    pub slices: Vec<Slice>,
    pub legend: Vec<LegendEntry>,
    pub rim: Option<Rim>,
}

/// Pure layout: proportional slice angles, percent labels on the slice
/// bisector, side legend with column wrap. Entries are laid out in the
/// order given; zero-valued entries get a legend row but no slice.
pub fn layout(segments: &[Segment], title: &str, width: f64, height: f64) -> PieLayout {
    let r = width.min(height) * 0.38;
    let cx = width * 0.40;
    let cy = height * 0.52;

    let title = Label {
        x: width / 2.0,
        y: 22.0,
        text: title.to_string(),
    };

    let total: u64 = segments.iter().map(|segment| segment.value).sum();
    if total == 0 {
        return PieLayout {
            width,
            height,
            title,
            placeholder: Some(Label {
                x: width / 2.0,
                y: height / 2.0,
                text: "No data".to_string(),
            }),
            slices: Vec::new(),
            legend: Vec::new(),
            rim: None,
        };
    }

    let mut slices = Vec::new();
    let mut legend = Vec::new();
    let mut angle = 0.0_f64;
    let mut legend_x = cx + r + 28.0;
    let mut legend_y = height * 0.16;

    for (index, segment) in segments.iter().enumerate() {
        let sweep = 360.0 * segment.value as f64 / total as f64;
        let color = PALETTE[index % PALETTE.len()];

        if segment.value > 0 {
            let mid = (angle + sweep / 2.0).to_radians();
            slices.push(Slice {
                cx,
                cy,
                r,
                start_deg: angle,
                sweep_deg: sweep,
                color,
                percent: Label {
                    x: cx + 0.7 * r * mid.cos(),
                    y: cy - 0.7 * r * mid.sin(),
                    text: format!("{:.0}%", 100.0 * segment.value as f64 / total as f64),
                },
            });
        }

        if legend_y > height - 30.0 {
            legend_y = height * 0.16;
            legend_x += LEGEND_COLUMN_STEP;
        }
        legend.push(LegendEntry {
            swatch_x: legend_x,
            swatch_y: legend_y - SWATCH_SIZE,
            color,
            label: Label {
                x: legend_x + 16.0,
                y: legend_y - 5.0,
                text: format!("{}: {}", segment.label, segment.value),
            },
        });
        legend_y += LEGEND_LINE_STEP;

        angle += sweep;
    }

    PieLayout {
        width,
        height,
        title,
        placeholder: None,
        slices,
        legend,
        rim: Some(Rim { cx, cy, r }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(values: &[(&str, u64)]) -> Vec<Segment> {
        values
            .iter()
            .map(|(label, value)| Segment::new(*label, *value))
            .collect()
    }

    #[test]
    fn test_sweeps_are_proportional_and_sum_to_full_circle() {
        let layout = layout(&segments(&[("A", 3), ("B", 1)]), "t", 980.0, 560.0);
        assert_eq!(layout.slices.len(), 2);
        assert!((layout.slices[0].sweep_deg - 270.0).abs() < 1e-9);
        assert!((layout.slices[1].sweep_deg - 90.0).abs() < 1e-9);
        assert!((layout.slices[1].start_deg - 270.0).abs() < 1e-9);

        let sum: f64 = layout.slices.iter().map(|slice| slice.sweep_deg).sum();
        assert!((sum - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_labels() {
        let layout = layout(&segments(&[("A", 1), ("B", 1), ("C", 1)]), "t", 980.0, 560.0);
        assert_eq!(layout.slices[0].percent.text, "33%");
    }

    #[test]
    fn test_zero_valued_entries_have_legend_rows_but_no_slice() {
        let layout = layout(&segments(&[("A", 2), ("B", 0)]), "t", 980.0, 560.0);
        assert_eq!(layout.slices.len(), 1);
        assert_eq!(layout.legend.len(), 2);
        assert_eq!(layout.legend[1].label.text, "B: 0");
    }

    #[test]
    fn test_entries_keep_given_order() {
        let layout = layout(&segments(&[("small", 1), ("big", 9)]), "t", 980.0, 560.0);
        assert_eq!(layout.legend[0].label.text, "small: 1");
        assert!((layout.slices[0].sweep_deg - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_data_placeholder_for_empty_and_all_zero_input() {
        for input in [segments(&[]), segments(&[("A", 0), ("B", 0)])] {
            let layout = layout(&input, "t", 980.0, 560.0);
            assert!(layout.slices.is_empty());
            assert!(layout.legend.is_empty());
            assert!(layout.rim.is_none());
            assert_eq!(layout.placeholder.as_ref().unwrap().text, "No data");
        }
    }

    #[test]
    fn test_geometry_constants_track_viewport() {
        let layout = layout(&segments(&[("A", 1)]), "t", 1000.0, 500.0);
        let rim = layout.rim.unwrap();
        assert!((rim.r - 500.0 * 0.38).abs() < 1e-9);
        assert!((rim.cx - 400.0).abs() < 1e-9);
        assert!((rim.cy - 260.0).abs() < 1e-9);
        assert!((layout.title.x - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_legend_wraps_to_second_column_on_short_viewport() {
        let entries: Vec<(String, u64)> = (0..8).map(|i| (format!("c{}", i), 1)).collect();
        let entries: Vec<Segment> = entries
            .iter()
            .map(|(label, value)| Segment::new(label.clone(), *value))
            .collect();
        let layout = layout(&entries, "t", 600.0, 120.0);

        let first_x = layout.legend[0].swatch_x;
        let last_x = layout.legend.last().unwrap().swatch_x;
        assert!(last_x > first_x);
        assert_eq!(last_x - first_x, 240.0);
    }

    #[test]
    fn test_single_entry_spans_the_full_circle() {
        let layout = layout(&segments(&[("only", 5)]), "t", 980.0, 560.0);
        assert_eq!(layout.slices.len(), 1);
        assert!((layout.slices[0].sweep_deg - 360.0).abs() < 1e-9);
    }
}
