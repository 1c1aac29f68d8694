pub mod types;
pub mod error;
pub mod geometry;
pub mod transform;
pub mod event;
pub mod classify;
pub mod surface;
pub mod pitch;
pub mod plot;
pub mod config;

pub use types::draw::{Color, DrawCommand, Glow, Layer, ShapeData, ShapeDesc, Stroke, Style};
pub use error::{Error, Result};
pub use geometry::PitchGeometry;
pub use transform::{Orientation, Pixel, to_pixel};
pub use event::{Event, EventDetail, Location, MatchContext, load_events, parse_events};
pub use classify::{Classifier, Filter, FilterGroups, Palette};
pub use surface::{Frame, Surface};
pub use pitch::{PitchStyle, draw_pitch};
pub use plot::{PlotSummary, Plotter};
pub use config::VizConfig;
