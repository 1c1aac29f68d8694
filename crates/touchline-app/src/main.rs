use std::path::PathBuf;

use clap::Parser;
use eframe::egui::{self, Color32, RichText};
use touchline_core::{
    Event, Filter, Frame, MatchContext, PlotSummary, Plotter, VizConfig, load_events,
};

// ─── Arguments ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "touchline-app")]
#[command(about = "Plot match events on a soccer pitch", long_about = None)]
struct Args {
    /// Event batch (JSON array)
    events: PathBuf,

    /// Home team; inferred from the events when omitted
    home: Option<String>,

    /// Away team; inferred from the events when omitted
    away: Option<String>,

    /// Visual config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn match_context(&self, events: &[Event]) -> MatchContext {
        match (&self.home, &self.away) {
            (Some(home), Some(away)) => MatchContext::new(home.as_str(), away.as_str()),
            (Some(home), None) => MatchContext::with_home(home.as_str(), events),
            (None, _) => MatchContext::infer(events),
        }
    }
}

fn main() -> eframe::Result {
    let args = Args::parse();

    let (config, config_error) = match &args.config {
        Some(path) => match VizConfig::load(path) {
            Ok(config) => (config, None),
            Err(e) => (VizConfig::default(), Some(e)),
        },
        None => (VizConfig::default(), None),
    };

    // RUST_LOG wins over the configured level.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .try_init();
    if let Some(e) = config_error {
        log::error!("{e}; using defaults");
    }

    let app = App::new(&args, &config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1500.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native("Touchline", options, Box::new(|_cc| Ok(Box::new(app))))
}

// ─── App state ────────────────────────────────────────────────────────────────

struct App {
    events:     Vec<Event>,
    context:    MatchContext,
    plotter:    Plotter,
    filter:     Filter,
    search:     String,
    show_pitch: bool,
    frame:      Frame,
    summary:    PlotSummary,
    load_error: Option<String>,
}

impl App {
    fn new(args: &Args, config: &VizConfig) -> Self {
        let (events, load_error) = match load_events(&args.events) {
            Ok(events) => (events, None),
            Err(e) => {
                log::error!("{e}");
                (Vec::new(), Some(e.to_string()))
            }
        };

        let context = args.match_context(&events);

        let mut app = Self {
            events,
            context,
            plotter: config.plotter(),
            filter: Filter::All,
            search: String::new(),
            show_pitch: true,
            frame: Frame::new(),
            summary: PlotSummary { count: 0, label: Filter::All.label().into() },
            load_error,
        };
        app.replot();
        app
    }

    /// Full repaint with the current filter. Never incremental.
    fn replot(&mut self) {
        self.summary = self.plotter.plot(&self.events, &self.filter, &self.context, &mut self.frame);
    }
}

// ─── UI ───────────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // ── Header ────────────────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.heading(self.context.title());
                if let Some(err) = &self.load_error {
                    ui.label(RichText::new(format!("✗  {err}")).color(Color32::from_rgb(220, 80, 80)));
                } else {
                    ui.label(RichText::new(format!("{} events", self.events.len())).color(Color32::GRAY));
                }
            });

            ui.separator();

            ui.columns(2, |cols| {
                // ── Left: event list ──────────────────────────────────────────
                cols[0].vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Search");
                        ui.add(egui::TextEdit::singleline(&mut self.search)
                            .hint_text("player, team or type")
                            .desired_width(f32::INFINITY));
                    });
                    ui.separator();
                    egui::ScrollArea::vertical().id_salt("events").show(ui, |ui| self.show_events(ui));
                });

                // ── Right: pitch ──────────────────────────────────────────────
                cols[1].vertical(|ui| {
                    let mut dirty = false;

                    ui.horizontal(|ui| {
                        dirty |= ui.checkbox(&mut self.show_pitch, "show pitch").changed();
                        ui.separator();
                        let before = self.filter.clone();
                        for option in self.plotter.classifier.filter_options() {
                            let text = match &option {
                                Filter::All => RichText::new("All"),
                                Filter::Category(c) => RichText::new(c.as_str()).color(
                                    touchline_renderer::color32(self.plotter.classifier.palette.color_for(c)),
                                ),
                            };
                            ui.selectable_value(&mut self.filter, option, text);
                        }
                        dirty |= self.filter != before;
                    });

                    if dirty {
                        self.replot();
                    }

                    ui.horizontal(|ui| {
                        ui.label(RichText::new(self.summary.count.to_string()).strong().monospace());
                        ui.label(RichText::new(&self.summary.label).color(Color32::GRAY));
                    });

                    ui.separator();

                    if self.show_pitch {
                        egui::ScrollArea::both().id_salt("pitch").show(ui, |ui| self.show_canvas(ui));
                    }
                });
            });
        });
    }
}

impl App {
    fn show_canvas(&self, ui: &mut egui::Ui) {
        let desired = touchline_renderer::frame_size(&self.frame);
        let (canvas_rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter_at(canvas_rect);
        touchline_renderer::paint(&self.frame, &painter, canvas_rect.min);
    }

    fn show_events(&self, ui: &mut egui::Ui) {
        let visible: Vec<&Event> = self.events.iter()
            .filter(|e| e.matches_query(&self.search))
            .collect();

        if visible.is_empty() {
            ui.label(RichText::new("No events.").color(Color32::GRAY));
            return;
        }

        egui::Grid::new("events_grid")
            .striped(true)
            .min_col_width(48.0)
            .show(ui, |ui| {
                for header in ["time", "team", "player", "type", "detail"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for event in visible {
                    let color = touchline_renderer::color32(self.plotter.classifier.color_for(event));
                    ui.label(RichText::new(event.clock_label()).monospace().color(Color32::GRAY));
                    ui.label(event.team.as_str());
                    ui.label(event.player.as_deref().unwrap_or(""));
                    ui.label(RichText::new(&event.kind).color(color));
                    ui.label(RichText::new(event.detail_label()).monospace());
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("touchline-app").chain(list.iter().copied()))
    }

    #[test]
    fn positional_teams() {
        let a = args(&["events.json", "Barcelona", "Real Madrid"]).expect("args");
        assert_eq!(a.events, PathBuf::from("events.json"));
        assert_eq!(a.home.as_deref(), Some("Barcelona"));
        assert_eq!(a.away.as_deref(), Some("Real Madrid"));
        assert!(a.config.is_none());
    }

    #[test]
    fn config_flag_anywhere() {
        let a = args(&["--config", "viz.json", "events.json"]).expect("args");
        assert_eq!(a.config, Some(PathBuf::from("viz.json")));
        assert_eq!(a.events, PathBuf::from("events.json"));
        assert!(a.home.is_none());
    }

    #[test]
    fn missing_events_path() {
        assert!(args(&[]).is_err());
        assert!(args(&["events.json", "--config"]).is_err());
        assert!(args(&["events.json", "a", "b", "c"]).is_err());
    }

    #[test]
    fn home_only_keeps_given_home() {
        let events = vec![
            Event::new("Starting XI", "Real Madrid"),
            Event::new("Starting XI", "Barcelona"),
        ];
        let a = args(&["events.json", "Barcelona"]).expect("args");
        assert_eq!(a.match_context(&events), MatchContext::new("Barcelona", "Real Madrid"));

        let a = args(&["events.json"]).expect("args");
        assert_eq!(a.match_context(&events), MatchContext::new("Real Madrid", "Barcelona"));
    }
}
