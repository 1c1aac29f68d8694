/// Pitch dimensions and the canvas mapping shared by the pitch renderer and
/// the coordinate transformer.
///
/// Real-world dimensions are associated constants in canonical event units
/// (0–120 along the length, 0–80 across). Only the pixel mapping (`scale`,
/// `padding`) is per-instance, so one value of this type fixes both where the
/// markings are painted and where events land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchGeometry {
    /// Pixels per canonical unit.
    pub scale:   f64,
    /// Margin around the pitch outline, in pixels.
    pub padding: f64,
}

impl PitchGeometry {
    pub const WIDTH:  f64 = 120.0;
    pub const HEIGHT: f64 = 80.0;

    pub const CENTER_CIRCLE_RADIUS: f64 = 9.15;
    pub const PENALTY_AREA_WIDTH:   f64 = 16.5;
    pub const PENALTY_AREA_HEIGHT:  f64 = 40.3;
    pub const GOAL_AREA_WIDTH:      f64 = 5.5;
    pub const GOAL_AREA_HEIGHT:     f64 = 18.3;

    pub const DEFAULT_SCALE:   f64 = 7.0;
    pub const DEFAULT_PADDING: f64 = 20.0;

    pub fn new(scale: f64, padding: f64) -> Self { Self { scale, padding } }

    /// Canonical length → pixels (no padding).
    pub fn px(&self, units: f64) -> f64 { units * self.scale }

    /// Pitch outline size in pixels.
    pub fn pitch_px(&self) -> (f64, f64) { (self.px(Self::WIDTH), self.px(Self::HEIGHT)) }

    /// Full surface size: pitch plus padding on every side.
    pub fn canvas_size(&self) -> (f64, f64) {
        let (w, h) = self.pitch_px();
        (w + 2.0 * self.padding, h + 2.0 * self.padding)
    }

    /// Midpoint of the canvas, which is also the kick-off spot.
    pub fn center_px(&self) -> (f64, f64) {
        let (w, h) = self.pitch_px();
        (w / 2.0 + self.padding, h / 2.0 + self.padding)
    }
}

impl Default for PitchGeometry {
    fn default() -> Self { Self::new(Self::DEFAULT_SCALE, Self::DEFAULT_PADDING) }
}
