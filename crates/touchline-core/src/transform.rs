use crate::event::Location;
use crate::geometry::PitchGeometry;

/// Canvas position in pixels (0,0 = top-left of the padded surface, y-down).
pub type Pixel = (f64, f64);

/// Which way a team's events are drawn.
///
/// Event feeds record both teams attacking from low x to high x. Away events
/// are mirrored through the pitch centre so the two sides attack opposite
/// goals on the rendered pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Home,
    Away,
}

impl Orientation {
    pub fn is_away(self) -> bool { self == Self::Away }

    /// Reflect a canonical point for this orientation. Home is the identity.
    pub fn apply(self, loc: Location) -> Location {
        match self {
            Self::Home => loc,
            Self::Away => Location::new(PitchGeometry::WIDTH - loc.x, PitchGeometry::HEIGHT - loc.y),
        }
    }
}

/// Map a canonical location into canvas pixels.
///
/// Out-of-range input is not clamped; it maps linearly off the pitch.
pub fn to_pixel(geometry: &PitchGeometry, loc: Location, orientation: Orientation) -> Pixel {
    let Location { x, y } = orientation.apply(loc);
    (geometry.px(x) + geometry.padding, geometry.px(y) + geometry.padding)
}
