use crate::geometry::PitchGeometry;
use crate::surface::Surface;
use crate::types::draw::{Color, DrawCommand, Layer, ShapeData, ShapeDesc, Stroke, Style};

/// Colours and line width of the static pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchStyle {
    pub background: Color,
    pub lines:      Color,
    pub line_width: f64,
}

impl PitchStyle {
    pub const BACKGROUND: Color = Color::rgb(0x0f, 0x17, 0x2a);
    pub const LINES:      Color = Color::rgb(0x1e, 0x29, 0x3b);
    pub const LINE_WIDTH: f64 = 2.0;
}

impl Default for PitchStyle {
    fn default() -> Self {
        Self { background: Self::BACKGROUND, lines: Self::LINES, line_width: Self::LINE_WIDTH }
    }
}

/// Clear and resize `surface`, then paint the pitch markings:
/// outline, halfway line, centre circle, penalty areas, goal areas.
pub fn draw_pitch(geometry: &PitchGeometry, style: &PitchStyle, surface: &mut impl Surface) {
    let (canvas_w, canvas_h) = geometry.canvas_size();
    surface.reset(canvas_w, canvas_h, style.background);

    let (w, h) = geometry.pitch_px();
    let p = geometry.padding;
    let (cx, cy) = geometry.center_px();
    let line = Style::stroked(Stroke::new(style.line_width, style.lines));
    let mut stroke = |desc: ShapeDesc| {
        surface.draw(DrawCommand::DrawShape(ShapeData::new(desc, line.clone(), Layer::Pitch)));
    };

    stroke(ShapeDesc::Rect { min: (p, p), size: (w, h) });
    stroke(ShapeDesc::Line { from: (cx, p), to: (cx, h + p) });
    stroke(ShapeDesc::Circle {
        center: (cx, cy),
        radius: geometry.px(PitchGeometry::CENTER_CIRCLE_RADIUS),
    });

    // Boxes are flush with each goal line and vertically centred.
    let boxes = [
        (PitchGeometry::PENALTY_AREA_WIDTH, PitchGeometry::PENALTY_AREA_HEIGHT),
        (PitchGeometry::GOAL_AREA_WIDTH, PitchGeometry::GOAL_AREA_HEIGHT),
    ];
    for (bw, bh) in boxes {
        let (bw, bh) = (geometry.px(bw), geometry.px(bh));
        let top = (h - bh) / 2.0 + p;
        stroke(ShapeDesc::Rect { min: (p, top), size: (bw, bh) });
        stroke(ShapeDesc::Rect { min: (w - bw + p, top), size: (bw, bh) });
    }
}
