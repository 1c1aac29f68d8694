use crate::classify::{Classifier, Filter};
use crate::event::{Event, Location, MatchContext};
use crate::geometry::PitchGeometry;
use crate::pitch::{PitchStyle, draw_pitch};
use crate::surface::Surface;
use crate::transform::{Orientation, to_pixel};
use crate::types::draw::{Color, DrawCommand, Glow, Layer, ShapeData, ShapeDesc, Stroke, Style};

/// What a plot pass reports back for display next to the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSummary {
    /// Events that passed the filter and could be positioned.
    pub count: usize,
    /// "All Events" or the active category.
    pub label: String,
}

/// Draws a filtered event batch on top of a freshly painted pitch.
///
/// Geometry is shared between the pitch renderer and the transformer so the
/// plotted events line up with the markings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plotter {
    pub geometry:   PitchGeometry,
    pub classifier: Classifier,
    pub pitch:      PitchStyle,
}

impl Plotter {
    pub const MARKER_RADIUS:      f64 = 3.5;
    pub const SHOT_RADIUS:        f64 = 6.0;
    pub const GLOW_BLUR:          f64 = 8.0;
    pub const BORDER_WIDTH:       f64 = 1.0;
    pub const TRAJECTORY_WIDTH:   f64 = 0.75;
    pub const TRAJECTORY_OPACITY: f64 = 0.4;

    /// Marker borders tell the teams apart once away events are mirrored.
    pub const HOME_BORDER: Color = Color::BLACK;
    pub const AWAY_BORDER: Color = Color::WHITE;

    pub fn new(geometry: PitchGeometry, classifier: Classifier, pitch: PitchStyle) -> Self {
        Self { geometry, classifier, pitch }
    }

    /// Events that pass `filter` and have a location, in batch order.
    pub fn qualifying<'a>(
        &'a self,
        events: &'a [Event],
        filter: &'a Filter,
    ) -> impl Iterator<Item = (&'a Event, Location)> + 'a {
        events.iter()
            .filter(move |e| self.classifier.matches(filter, e))
            .filter_map(|e| e.location.map(|loc| (e, loc)))
    }

    /// Repaint the whole surface: pitch first, then every qualifying event.
    pub fn plot(
        &self,
        events: &[Event],
        filter: &Filter,
        context: &MatchContext,
        surface: &mut impl Surface,
    ) -> PlotSummary {
        draw_pitch(&self.geometry, &self.pitch, surface);

        if context.away_team.is_none() {
            log::warn!("match context has no away team; drawing every event home-oriented");
        }

        let mut count = 0;
        for (event, loc) in self.qualifying(events, filter) {
            self.plot_event(event, loc, context.orientation_of(&event.team), surface);
            count += 1;
        }

        log::debug!("plotted {count} of {} events for filter `{}`", events.len(), filter.name());
        PlotSummary { count, label: filter.label().to_string() }
    }

    fn marker_radius(&self, category: &str) -> f64 {
        if category == "Shot" { Self::SHOT_RADIUS } else { Self::MARKER_RADIUS }
    }

    fn plot_event(&self, event: &Event, loc: Location, orientation: Orientation, surface: &mut impl Surface) {
        let category = self.classifier.classify(event);
        let color = self.classifier.palette.color_for(category);
        let start = to_pixel(&self.geometry, loc, orientation);

        let border = if orientation.is_away() { Self::AWAY_BORDER } else { Self::HOME_BORDER };
        let marker = Style::filled(color)
            .with_glow(Glow { blur: Self::GLOW_BLUR, color })
            .with_stroke(Stroke::new(Self::BORDER_WIDTH, border));
        surface.draw(DrawCommand::DrawShape(ShapeData::new(
            ShapeDesc::Circle { center: start, radius: self.marker_radius(category) },
            marker,
            Layer::Marker,
        )));

        // A pass keeps its start orientation for the end point.
        if event.kind == "Pass"
            && let Some(end) = event.pass_end()
        {
            let end = to_pixel(&self.geometry, end, orientation);
            let line = Stroke::new(Self::TRAJECTORY_WIDTH, color.with_opacity(Self::TRAJECTORY_OPACITY));
            surface.draw(DrawCommand::DrawShape(ShapeData::new(
                ShapeDesc::Line { from: start, to: end },
                Style::stroked(line),
                Layer::Trajectory,
            )));
        }
    }
}
