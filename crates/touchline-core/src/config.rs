use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::classify::{Classifier, FilterGroups, Palette};
use crate::error::{Error, Result};
use crate::geometry::PitchGeometry;
use crate::pitch::PitchStyle;
use crate::plot::Plotter;
use crate::types::draw::Color;

/// Viewer configuration, read from JSON. Every field is optional.
///
/// ```json
/// {
///   "scale": 6,
///   "log_level": "debug",
///   "palette": { "Carry": "#a855f7", "default": "#94a3b8" },
///   "groups": { "Pass": ["Pass", "Carry"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    pub scale:      f64,
    pub padding:    f64,
    pub line_width: f64,
    pub log_level:  String,
    /// Category → `#rrggbb`. The key `default` replaces the fallback colour.
    pub palette:    BTreeMap<String, String>,
    /// Extra filter groups, merged over the standard ones.
    pub groups:     BTreeMap<String, Vec<String>>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            scale: PitchGeometry::DEFAULT_SCALE,
            padding: PitchGeometry::DEFAULT_PADDING,
            line_width: PitchStyle::LINE_WIDTH,
            log_level: "info".into(),
            palette: BTreeMap::new(),
            groups: BTreeMap::new(),
        }
    }
}

impl VizConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::parse(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::config(format!("scale must be positive, got {}", self.scale)));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(Error::config(format!("padding must be non-negative, got {}", self.padding)));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(Error::config(format!("line_width must be positive, got {}", self.line_width)));
        }
        self.level_filter()?;
        for (category, hex) in &self.palette {
            if Color::from_hex(hex).is_none() {
                return Err(Error::config(format!("colour for `{category}` is not #rrggbb: `{hex}`")));
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level.parse()
            .map_err(|_| Error::config(format!("unknown log level `{}`", self.log_level)))
    }

    pub fn geometry(&self) -> PitchGeometry { PitchGeometry::new(self.scale, self.padding) }

    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for (category, hex) in &self.palette {
            let Some(color) = Color::from_hex(hex) else {
                log::warn!("ignoring colour `{hex}` for `{category}`");
                continue;
            };
            if category == "default" {
                palette.set_default(color);
            } else {
                palette.set(category.as_str(), color);
            }
        }
        palette
    }

    pub fn groups(&self) -> FilterGroups {
        let mut groups = FilterGroups::standard();
        for (name, members) in &self.groups {
            groups.insert(name.as_str(), members.iter().map(String::as_str));
        }
        groups
    }

    /// Build the plotter; its single geometry feeds both pitch and events.
    pub fn plotter(&self) -> Plotter {
        let pitch = PitchStyle { line_width: self.line_width, ..PitchStyle::default() };
        Plotter::new(self.geometry(), Classifier::new(self.palette(), self.groups()), pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Filter;
    use crate::event::Event;

    #[test]
    fn empty_object_is_default() {
        let config = VizConfig::parse("{}").expect("parse");
        assert_eq!(config, VizConfig::default());
        assert_eq!(config.plotter(), Plotter::default());
    }

    #[test]
    fn palette_overrides_and_default() {
        let config = VizConfig::parse(r##"{ "palette": { "Carry": "#a855f7", "default": "#000000" } }"##)
            .expect("parse");
        let palette = config.palette();
        assert_eq!(palette.color_for("Carry"), Color::rgb(0xa8, 0x55, 0xf7));
        assert_eq!(palette.color_for("Foul Won"), Color::BLACK);
        assert_eq!(palette.color_for("Pass"), Palette::PASS);
    }

    #[test]
    fn extra_groups_merge_with_standard() {
        let config = VizConfig::parse(r#"{ "groups": { "Pass": ["Carry"] } }"#).expect("parse");
        let c = config.plotter().classifier;
        assert!(c.matches(&Filter::parse("Pass"), &Event::new("Carry", "A")));
        assert!(c.matches(&Filter::parse("Pass"), &Event::new("Pass", "A")));
        assert!(c.matches(&Filter::parse("Interception"), &Event::new("Duel", "A")));
    }

    #[test]
    fn geometry_from_scale_and_padding() {
        let config = VizConfig::parse(r#"{ "scale": 5, "padding": 10 }"#).expect("parse");
        assert_eq!(config.geometry().canvas_size(), (620.0, 420.0));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(VizConfig::parse(r#"{ "scale": 0 }"#), Err(Error::Config(_))));
        assert!(matches!(VizConfig::parse(r#"{ "padding": -1 }"#), Err(Error::Config(_))));
        assert!(matches!(VizConfig::parse(r#"{ "log_level": "loud" }"#), Err(Error::Config(_))));
        assert!(matches!(VizConfig::parse(r#"{ "palette": { "Pass": "blue" } }"#), Err(Error::Config(_))));
        assert!(matches!(VizConfig::parse(r#"{ "zoom": 2 }"#), Err(Error::Json(_))));
    }

    #[test]
    fn log_level_parses() {
        let config = VizConfig::parse(r#"{ "log_level": "debug" }"#).expect("parse");
        assert_eq!(config.level_filter().expect("level"), log::LevelFilter::Debug);
    }
}
