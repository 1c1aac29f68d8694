//! Replays a recorded [`Frame`] onto an egui [`Painter`].
//!
//! Frame coordinates are canvas pixels with (0,0) at the top-left; the caller
//! picks where that corner lands on screen.

use egui::{Color32, Painter, Pos2, Rect, Shape, pos2, vec2};
use touchline_core::{Color, Frame, Glow, ShapeData, ShapeDesc, Stroke};

/// Segments used to approximate a circle.
const CIRCLE_SEGMENTS: usize = 64;

/// Concentric halos used to fake a blurred glow.
const GLOW_RINGS: usize = 4;

pub fn color32(c: Color) -> Color32 { Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a) }

fn stroke32(s: Stroke) -> egui::Stroke { egui::Stroke::new(s.width as f32, color32(s.color)) }

pub fn frame_size(frame: &Frame) -> egui::Vec2 { vec2(frame.width as f32, frame.height as f32) }

/// Paint background and every command in order. `origin` is the screen
/// position of the frame's top-left corner.
pub fn paint(frame: &Frame, painter: &Painter, origin: Pos2) {
    let rect = Rect::from_min_size(origin, frame_size(frame));
    painter.rect_filled(rect, 0.0, color32(frame.background));

    for shape in frame.shapes() {
        paint_shape(shape, painter, origin);
    }
}

/// Screen vertices for a shape: 64-gon for circles, 4 corners for rects,
/// 2 ends for lines.
pub fn tessellate(desc: &ShapeDesc, origin: Pos2) -> Vec<Pos2> {
    let at = |x: f64, y: f64| pos2(origin.x + x as f32, origin.y + y as f32);
    match desc {
        ShapeDesc::Circle { center, radius } => circle_points(at(center.0, center.1), *radius as f32),
        ShapeDesc::Rect { min, size } => vec![
            at(min.0, min.1),
            at(min.0 + size.0, min.1),
            at(min.0 + size.0, min.1 + size.1),
            at(min.0, min.1 + size.1),
        ],
        ShapeDesc::Line { from, to } => vec![at(from.0, from.1), at(to.0, to.1)],
    }
}

fn circle_points(center: Pos2, radius: f32) -> Vec<Pos2> {
    (0..CIRCLE_SEGMENTS).map(|i| {
        let t = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
        pos2(center.x + radius * t.cos(), center.y + radius * t.sin())
    }).collect()
}

fn paint_shape(data: &ShapeData, painter: &Painter, origin: Pos2) {
    let pts = tessellate(&data.desc, origin);
    if pts.is_empty() { return; }

    if let (Some(glow), ShapeDesc::Circle { radius, .. }) = (data.style.glow, &data.desc) {
        paint_glow(painter, centroid(&pts), *radius as f32, glow);
    }

    if let ShapeDesc::Line { .. } = data.desc {
        if let (Some(stroke), [from, to]) = (data.style.stroke, pts.as_slice()) {
            painter.line_segment([*from, *to], stroke32(stroke));
        }
        return;
    }

    if let Some(fill) = data.style.fill {
        painter.add(Shape::convex_polygon(pts.clone(), color32(fill), egui::Stroke::NONE));
    }
    if let Some(stroke) = data.style.stroke {
        painter.add(Shape::closed_line(pts, stroke32(stroke)));
    }
}

/// Halos from the shape edge out to `radius + blur / 2`, fading outward.
fn paint_glow(painter: &Painter, center: Pos2, radius: f32, glow: Glow) {
    let reach = glow.blur as f32 / 2.0;
    for ring in (1..=GLOW_RINGS).rev() {
        let f = ring as f32 / GLOW_RINGS as f32;
        let alpha = (glow.color.a as f32 * 0.25 * (1.0 - f) + 8.0).min(255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(glow.color.r, glow.color.g, glow.color.b, alpha);
        painter.add(Shape::convex_polygon(circle_points(center, radius + reach * f), color, egui::Stroke::NONE));
    }
}

fn centroid(pts: &[Pos2]) -> Pos2 {
    let n = pts.len() as f32;
    let (sx, sy) = pts.iter().fold((0.0, 0.0), |(ax, ay), p| (ax + p.x, ay + p.y));
    pos2(sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_corners_offset_by_origin() {
        let pts = tessellate(&ShapeDesc::Rect { min: (20.0, 20.0), size: (840.0, 560.0) }, pos2(5.0, 10.0));
        assert_eq!(pts, vec![pos2(25.0, 30.0), pos2(865.0, 30.0), pos2(865.0, 590.0), pos2(25.0, 590.0)]);
    }

    #[test]
    fn line_has_two_points() {
        let pts = tessellate(&ShapeDesc::Line { from: (90.0, 90.0), to: (160.0, 160.0) }, Pos2::ZERO);
        assert_eq!(pts, vec![pos2(90.0, 90.0), pos2(160.0, 160.0)]);
    }

    #[test]
    fn circle_points_on_radius() {
        let pts = tessellate(&ShapeDesc::Circle { center: (440.0, 300.0), radius: 6.0 }, Pos2::ZERO);
        assert_eq!(pts.len(), CIRCLE_SEGMENTS);
        for p in &pts {
            assert!((p.distance(pos2(440.0, 300.0)) - 6.0).abs() < 1e-3);
        }
        let c = centroid(&pts);
        assert!((c.x - 440.0).abs() < 1e-3 && (c.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn colour_keeps_alpha() {
        let c = color32(Color::rgb(0x3b, 0x82, 0xf6).with_opacity(0.4));
        assert_eq!(c.a(), 102);
        assert_eq!(color32(Color::WHITE), Color32::WHITE);
    }
}
