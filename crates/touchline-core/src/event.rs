use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::transform::Orientation;

// ─── Location ─────────────────────────────────────────────────────────────────

/// A point in canonical pitch units: x ∈ [0, 120] along the length,
/// y ∈ [0, 80] across, origin at the top-left of the left-to-right attack.
///
/// Decodes from a JSON array. Shot end locations carry a third (height)
/// component, which is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl TryFrom<Vec<f64>> for Location {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(format!("location needs at least 2 coordinates, got {}", v.len())),
        }
    }
}

// ─── Event ────────────────────────────────────────────────────────────────────

/// Type-specific payload carried by some events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    Pass { end_location: Option<Location>, outcome: Option<String> },
    Shot { outcome: Option<String> },
    Substitution { outcome: Option<String> },
}

/// One match event. Read-only once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    /// Raw type label, e.g. "Pass", "Ball Recovery".
    pub kind:     String,
    pub team:     String,
    pub player:   Option<String>,
    pub minute:   u32,
    pub second:   u32,
    pub location: Option<Location>,
    pub detail:   Option<EventDetail>,
}

impl Event {
    pub fn new(kind: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            team: team.into(),
            player: None,
            minute: 0,
            second: 0,
            location: None,
            detail: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.location = Some(Location::new(x, y));
        self
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn with_clock(mut self, minute: u32, second: u32) -> Self {
        self.minute = minute;
        self.second = second;
        self
    }

    pub fn with_detail(mut self, detail: EventDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// End of a pass trajectory, if this event carries one.
    pub fn pass_end(&self) -> Option<Location> {
        match &self.detail {
            Some(EventDetail::Pass { end_location, .. }) => *end_location,
            _ => None,
        }
    }

    /// Match clock as `m:ss`.
    pub fn clock_label(&self) -> String { format!("{}:{:02}", self.minute, self.second) }

    /// Short human summary for listings.
    pub fn detail_label(&self) -> String {
        let or_unknown = |o: &Option<String>| o.clone().unwrap_or_else(|| "Unknown".into());
        match &self.detail {
            Some(EventDetail::Shot { outcome }) => format!("Shot: {}", or_unknown(outcome)),
            Some(EventDetail::Pass { outcome, .. }) => {
                format!("Pass: {}", outcome.as_deref().unwrap_or("Complete"))
            }
            Some(EventDetail::Substitution { outcome }) => format!("Sub: {}", or_unknown(outcome)),
            None => self.kind.clone(),
        }
    }

    /// Case-insensitive substring match on player, team or type.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&q);
        self.player.as_deref().is_some_and(hit) || hit(&self.team) || hit(&self.kind)
    }
}

// ─── Wire format ──────────────────────────────────────────────────────────────

/// A name that is either a bare string (flattened exports) or an object with
/// a `name` field (open-data feeds: `{"id": 30, "name": "Pass"}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Named {
    Plain(String),
    Object { name: String },
}

impl Named {
    fn into_name(self) -> String {
        match self {
            Self::Plain(s) | Self::Object { name: s } => s,
        }
    }
}

#[derive(Deserialize, Default)]
struct RawDetail {
    #[serde(default)]
    end_location: Option<Location>,
    #[serde(default)]
    outcome: Option<Named>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Named,
    #[serde(default)]
    team: Option<Named>,
    #[serde(default)]
    player: Option<Named>,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
    #[serde(default)]
    location: Option<Location>,

    // nested
    #[serde(default)]
    pass: Option<RawDetail>,
    #[serde(default)]
    shot: Option<RawDetail>,
    #[serde(default)]
    substitution: Option<RawDetail>,

    // flattened
    #[serde(default)]
    pass_end_location: Option<Location>,
    #[serde(default)]
    pass_outcome: Option<Named>,
    #[serde(default)]
    shot_outcome: Option<Named>,
    #[serde(default)]
    substitution_outcome: Option<Named>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let kind = raw.kind.into_name();
        let name = |n: Option<Named>| n.map(Named::into_name);

        let shot = raw.shot.map(|d| name(d.outcome))
            .or_else(|| raw.shot_outcome.map(|o| Some(o.into_name())));
        let pass = raw.pass.map(|d| (d.end_location, name(d.outcome)))
            .or_else(|| {
                (raw.pass_end_location.is_some() || raw.pass_outcome.is_some())
                    .then(|| (raw.pass_end_location, name(raw.pass_outcome)))
            });
        let substitution = raw.substitution.map(|d| name(d.outcome))
            .or_else(|| raw.substitution_outcome.map(|o| Some(o.into_name())));

        let detail = if let Some(outcome) = shot {
            Some(EventDetail::Shot { outcome })
        } else if let Some((end_location, outcome)) = pass {
            Some(EventDetail::Pass { end_location, outcome })
        } else {
            substitution.map(|outcome| EventDetail::Substitution { outcome })
        };

        Self {
            kind,
            team: name(raw.team).unwrap_or_default(),
            player: name(raw.player),
            minute: raw.minute,
            second: raw.second,
            location: raw.location,
            detail,
        }
    }
}

/// Decode a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode an event batch from disk.
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let events = parse_events(&json)?;
    log::info!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

// ─── Match context ────────────────────────────────────────────────────────────

/// The two sides of the displayed match. Only `away_team` affects drawing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchContext {
    pub home_team: String,
    /// `None` degrades to drawing every event home-oriented.
    pub away_team: Option<String>,
}

impl MatchContext {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self { home_team: home_team.into(), away_team: Some(away_team.into()) }
    }

    /// First two distinct teams in event order, home first.
    pub fn infer(events: &[Event]) -> Self {
        let home = events.iter().map(|e| e.team.as_str()).find(|t| !t.is_empty()).unwrap_or_default();
        Self::with_home(home, events)
    }

    /// Known home team; the away team is the first other team in event order.
    pub fn with_home(home_team: impl Into<String>, events: &[Event]) -> Self {
        let home_team = home_team.into();
        let away_team = events.iter()
            .map(|e| e.team.as_str())
            .find(|t| !t.is_empty() && *t != home_team)
            .map(str::to_string);
        if away_team.is_none() {
            log::warn!("could not infer an away team from {} events; drawing all home-oriented", events.len());
        }
        Self { home_team, away_team }
    }

    pub fn orientation_of(&self, team: &str) -> Orientation {
        match &self.away_team {
            Some(away) if away == team => Orientation::Away,
            _ => Orientation::Home,
        }
    }

    pub fn title(&self) -> String {
        match &self.away_team {
            Some(away) => format!("{} vs {}", self.home_team, away),
            None => self.home_team.clone(),
        }
    }
}
