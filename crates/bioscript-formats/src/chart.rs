//! Line chart of sequence length by accession.
//!
//! The chart is drawn as SVG with the `svg` crate and rasterized to PNG with
//! `resvg`. Records are plotted in the order given; callers pass them sorted
//! longest first.

use std::path::Path;

use bioscript_core::SequenceRecord;
use resvg::{tiny_skia, usvg};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::ReportError;

pub const TITLE: &str = "GenBank Sequences by Length";
pub const X_LABEL: &str = "Accession Number";
pub const Y_LABEL: &str = "Sequence Length";

const W: f32 = 1000.0;
const H: f32 = 600.0;
const LEFT: f32 = 90.0;
const RIGHT: f32 = W - 30.0;
const TOP: f32 = 50.0;
const BOTTOM: f32 = H - 150.0;
const Y_TICKS: usize = 5;
const LINE_COLOR: &str = "#1f77b4";

fn point_x(index: usize, count: usize) -> f32 {
    let step = (RIGHT - LEFT) / count.max(1) as f32;
    LEFT + step * (index as f32 + 0.5)
}

fn point_y(length: usize, y_max: f32) -> f32 {
    BOTTOM - (length as f32 / y_max) * (BOTTOM - TOP)
}

/// Top of the y axis, leaving a little headroom above the longest record
fn axis_max(records: &[SequenceRecord]) -> f32 {
    let longest = records.iter().map(|r| r.length).max().unwrap_or(0);
    if longest == 0 {
        1.0
    } else {
        longest as f32 * 1.05
    }
}

pub fn render_svg(records: &[SequenceRecord]) -> Document {
    let y_max = axis_max(records);

    let mut doc = Document::new()
        .set("viewBox", (0, 0, W, H))
        .set("width", W)
        .set("height", H)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", W)
                .set("height", H)
                .set("fill", "#ffffff"),
        );

    // Axes
    doc = doc
        .add(
            Line::new()
                .set("x1", LEFT)
                .set("y1", BOTTOM)
                .set("x2", RIGHT)
                .set("y2", BOTTOM)
                .set("stroke", "#000000")
                .set("stroke-width", 1),
        )
        .add(
            Line::new()
                .set("x1", LEFT)
                .set("y1", TOP)
                .set("x2", LEFT)
                .set("y2", BOTTOM)
                .set("stroke", "#000000")
                .set("stroke-width", 1),
        );

    for tick in 0..=Y_TICKS {
        let value = y_max * tick as f32 / Y_TICKS as f32;
        let y = BOTTOM - (BOTTOM - TOP) * tick as f32 / Y_TICKS as f32;
        doc = doc
            .add(
                Line::new()
                    .set("x1", LEFT - 5.0)
                    .set("y1", y)
                    .set("x2", LEFT)
                    .set("y2", y)
                    .set("stroke", "#000000"),
            )
            .add(
                Text::new(format!("{}", value.round() as u64))
                    .set("x", LEFT - 8.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-family", "sans-serif")
                    .set("font-size", 11),
            );
    }

    if !records.is_empty() {
        let points: Vec<(f32, f32)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (point_x(i, records.len()), point_y(r.length, y_max)))
            .collect();

        let mut data = Data::new().move_to(points[0]);
        for &p in &points[1..] {
            data = data.line_to(p);
        }
        doc = doc.add(
            SvgPath::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", LINE_COLOR)
                .set("stroke-width", 1.5),
        );

        for ((x, y), record) in points.iter().zip(records) {
            doc = doc
                .add(
                    Circle::new()
                        .set("cx", *x)
                        .set("cy", *y)
                        .set("r", 3)
                        .set("fill", LINE_COLOR),
                )
                .add(
                    // Accession labels run vertically below the axis
                    Text::new(record.accession.clone())
                        .set("x", *x)
                        .set("y", BOTTOM + 8.0)
                        .set("text-anchor", "end")
                        .set("font-family", "sans-serif")
                        .set("font-size", 8)
                        .set("transform", format!("rotate(-90 {} {})", x, BOTTOM + 8.0)),
                );
        }
    }

    doc.add(
        Text::new(TITLE)
            .set("x", W / 2.0)
            .set("y", TOP - 20.0)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 16),
    )
    .add(
        Text::new(X_LABEL)
            .set("x", (LEFT + RIGHT) / 2.0)
            .set("y", H - 12.0)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 12),
    )
    .add(
        Text::new(Y_LABEL)
            .set("x", 20.0)
            .set("y", (TOP + BOTTOM) / 2.0)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 12)
            .set("transform", format!("rotate(-90 20 {})", (TOP + BOTTOM) / 2.0)),
    )
}

/// Rasterize the chart and write it as a PNG file
pub fn render_png(records: &[SequenceRecord], path: &Path) -> Result<(), ReportError> {
    let svg_text = render_svg(records).to_string();

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&svg_text, &options)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ReportError::Render("chart has zero size".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    std::fs::write(path, png)?;
    Ok(())
}
