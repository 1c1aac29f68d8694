use std::fmt;

use crate::event::Event;
use crate::types::draw::Color;

// ─── Palette ──────────────────────────────────────────────────────────────────

/// Ordered category → colour table with a fallback for unlisted categories.
/// Insertion order is the order filter buttons are offered in.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Color)>,
    default: Color,
}

impl Palette {
    pub const PASS:         Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const SHOT:         Color = Color::rgb(0xef, 0x44, 0x44);
    pub const DRIBBLE:      Color = Color::rgb(0xf5, 0x9e, 0x0b);
    pub const INTERCEPTION: Color = Color::rgb(0x10, 0xb9, 0x81);
    pub const DEFAULT:      Color = Color::rgb(0x64, 0x74, 0x8b);

    pub fn new(default: Color) -> Self { Self { entries: Vec::new(), default } }

    pub fn with(mut self, category: impl Into<String>, color: Color) -> Self {
        self.set(category, color);
        self
    }

    /// Insert or replace, keeping the original position on replace.
    pub fn set(&mut self, category: impl Into<String>, color: Color) {
        let category = category.into();
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((category, color)),
        }
    }

    pub fn set_default(&mut self, color: Color) { self.default = color; }

    pub fn get(&self, category: &str) -> Option<Color> {
        self.entries.iter().find(|(c, _)| c == category).map(|(_, color)| *color)
    }

    pub fn color_for(&self, category: &str) -> Color { self.get(category).unwrap_or(self.default) }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
            .with("Pass", Self::PASS)
            .with("Shot", Self::SHOT)
            .with("Dribble", Self::DRIBBLE)
            .with("Interception", Self::INTERCEPTION)
    }
}

// ─── Filter groups ────────────────────────────────────────────────────────────

/// Named filter categories that also admit other raw types.
/// A group always admits its own name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl FilterGroups {
    pub fn with_group<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, members);
        self
    }

    pub fn insert<I, S>(&mut self, name: impl Into<String>, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let members = members.into_iter().map(Into::into).collect();
        match self.groups.iter_mut().find(|(n, _)| *n == name) {
            Some(group) => group.1 = members,
            None => self.groups.push((name, members)),
        }
    }

    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.groups.iter().find(|(n, _)| n == name).map(|(_, m)| m.as_slice())
    }

    /// Does category `name` admit raw type `kind`?
    pub fn admits(&self, name: &str, kind: &str) -> bool {
        name == kind || self.members(name).is_some_and(|m| m.iter().any(|k| k == kind))
    }

    /// Standard groups: "Interception" also covers ball-winning actions.
    pub fn standard() -> Self {
        Self::default().with_group("Interception", ["Interception", "Ball Recovery", "Duel"])
    }
}

// ─── Filter ───────────────────────────────────────────────────────────────────

/// Active event filter. `All` is not a raw type and matches every event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    /// Wire name: "all" or the category.
    pub fn name(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(c) => c.as_str(),
        }
    }

    /// Display label shown next to the qualifying count.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Events",
            Self::Category(c) => c.as_str(),
        }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self { Self::parse(s) }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

// ─── Classifier ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    pub palette: Palette,
    pub groups:  FilterGroups,
}

impl Classifier {
    pub fn new(palette: Palette, groups: FilterGroups) -> Self { Self { palette, groups } }

    /// Display category of an event: its raw type label. Grouping only
    /// widens filters; colour and legend always follow the raw type.
    pub fn classify<'e>(&self, event: &'e Event) -> &'e str { &event.kind }

    pub fn matches(&self, filter: &Filter, event: &Event) -> bool {
        match filter {
            Filter::All => true,
            Filter::Category(name) => self.groups.admits(name, self.classify(event)),
        }
    }

    pub fn color_for(&self, event: &Event) -> Color { self.palette.color_for(self.classify(event)) }

    /// `All` followed by every palette category, in palette order.
    pub fn filter_options(&self) -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(self.palette.categories().map(|c| Filter::Category(c.to_string())))
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self { Self::new(Palette::default(), FilterGroups::standard()) }
}
