// ─── Colour ───────────────────────────────────────────────────────────────────

/// Straight (non-premultiplied) RGBA colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 0xff } }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    /// Same colour with its alpha multiplied by `opacity` (clamped to [0, 1]).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

// ─── Shape description ────────────────────────────────────────────────────────

/// Geometry of a single draw call, already in canvas pixels
/// (0,0 = top-left of the padded canvas, y-down).
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDesc {
    Circle { center: (f64, f64), radius: f64 },
    Rect   { min: (f64, f64), size: (f64, f64) },
    Line   { from: (f64, f64), to: (f64, f64) },
}

// ─── Style ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f64, color: Color) -> Self { Self { width, color } }
}

/// Soft halo drawn behind a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur:  f64,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill:   Option<Color>,
    pub stroke: Option<Stroke>,
    pub glow:   Option<Glow>,
}

impl Style {
    pub fn stroked(stroke: Stroke) -> Self { Self { stroke: Some(stroke), ..Self::default() } }

    pub fn filled(color: Color) -> Self { Self { fill: Some(color), ..Self::default() } }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_glow(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }
}

// ─── Layer ────────────────────────────────────────────────────────────────────

/// What a shape belongs to. Layers only tag commands; painting order is
/// always the command order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer { Pitch, Marker, Trajectory }

// ─── Shape data ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeData {
    pub desc:  ShapeDesc,
    pub style: Style,
    pub layer: Layer,
}

impl ShapeData {
    pub fn new(desc: ShapeDesc, style: Style, layer: Layer) -> Self {
        Self { desc, style, layer }
    }
}

// ─── Draw command ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    DrawShape(ShapeData),
}

impl DrawCommand {
    pub fn shape(&self) -> &ShapeData {
        let Self::DrawShape(data) = self;
        data
    }
}
