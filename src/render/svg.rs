//! SVG emission: the only place engine coordinates meet canvas
//! coordinates.

use std::fmt::Write as _;

use crate::foundation::core::{DrawingFrame, PointSequence};

/// Map engine-space points into canvas coordinates: fit the bounding box
/// inside the margin, center it, and flip the Y axis for the SVG
/// coordinate system.
pub fn normalize_to_canvas(points: &PointSequence, frame: &DrawingFrame) -> PointSequence {
    let Some(bbox) = points.bounding_box() else {
        return PointSequence::default();
    };

    let data_width = if bbox.width() > 0.0 { bbox.width() } else { 1.0 };
    let data_height = if bbox.height() > 0.0 {
        bbox.height()
    } else {
        1.0
    };

    let available_width = frame.width * (1.0 - 2.0 * frame.margin);
    let available_height = frame.height * (1.0 - 2.0 * frame.margin);
    let scale = (available_width / data_width).min(available_height / data_height);

    let center = bbox.center();
    points
        .points()
        .map(|p| {
            let x = (p.x - center.x) * scale + frame.width / 2.0;
            let y = (p.y - center.y) * scale + frame.height / 2.0;
            (x, frame.height - y)
        })
        .collect()
}

/// Emit a complete SVG document for the sequence.
///
/// The path is left open: no closing segment is added between the last and
/// first point.
pub fn svg_document(points: &PointSequence, frame: &DrawingFrame) -> String {
    let normalized = normalize_to_canvas(points, frame);

    let mut path_data = String::with_capacity(normalized.len() * 20);
    for (i, p) in normalized.points().enumerate() {
        let (sep, cmd) = if i == 0 { ("", 'M') } else { (" ", 'L') };
        let _ = write!(path_data, "{sep}{cmd} {:.4} {:.4}", p.x, p.y);
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{width}" height="{height}"
     viewBox="0 0 {width} {height}">
  <rect width="100%" height="100%" fill="{background}"/>
  <path d="{path_data}"
        fill="none"
        stroke="{stroke}"
        stroke-width="{stroke_width}"
        stroke-linecap="round"
        stroke-linejoin="round"/>
</svg>
"#,
        width = frame.width,
        height = frame.height,
        background = frame.background_color,
        stroke = frame.stroke_color,
        stroke_width = frame.stroke_width,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
