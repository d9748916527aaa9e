//! Site configuration.
//!
//! Every selector, timing and constant the page effects use lives here, with
//! `Default` matching the portfolio markup. With the `serde` feature each
//! section deserializes with `#[serde(default)]`, so a partial JSON document
//! from the page only overrides the fields it names.

use crate::error::PortfolioError;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub badge: BadgeConfig,
    pub typewriter: TypewriterConfig,
    pub header: HeaderConfig,
    pub map: MapConfig,
    pub counter: CounterConfig,
    pub particles: ParticleConfig,
    pub cursor: CursorConfig,
}

impl SiteConfig {
    /// Reject values the effects cannot run with.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        check_ratio("reveal.threshold", self.reveal.threshold)?;
        check_ratio("counter.threshold", self.counter.threshold)?;
        for (name, ms) in [
            ("typewriter.type_ms", self.typewriter.type_ms),
            ("typewriter.delete_ms", self.typewriter.delete_ms),
            ("counter.frame_ms", self.counter.frame_ms),
            ("counter.duration_ms", self.counter.duration_ms),
        ] {
            if ms == 0 {
                return Err(PortfolioError::InvalidConfig(format!("{name} must be > 0")));
            }
        }
        let (lat, lon) = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(PortfolioError::InvalidConfig(format!(
                "map.center ({lat}, {lon}) is not a coordinate"
            )));
        }
        let p = &self.particles;
        if !(p.area_per_particle > 0.0) {
            return Err(PortfolioError::InvalidConfig(
                "particles.area_per_particle must be > 0".into(),
            ));
        }
        if !(p.min_radius >= 0.0 && p.max_radius >= p.min_radius) {
            return Err(PortfolioError::InvalidConfig(
                "particles radius range is empty".into(),
            ));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn check_ratio(name: &str, value: f64) -> Result<(), PortfolioError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PortfolioError::InvalidConfig(format!("{name} must be within [0, 1]")))
    }
}

// --- Sections ---------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub storage_key: String,
    pub light_class: String, // applied to <body> in light mode
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".into(),
            storage_key: "theme".into(),
            light_class: "light-mode".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub hamburger_id: String,
    pub panel_id: String,
    pub link_selector: String,
    pub theme_toggle_id: String, // clicking it also closes the menu
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hamburger_id: "hamburger".into(),
            panel_id: "navLinks".into(),
            link_selector: ".nav-links a".into(),
            theme_toggle_id: "theme-toggle".into(),
            open_class: "active".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![".fade-in".into(), ".fade-section".into()],
            threshold: 0.1,
            visible_class: "visible".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    pub anchor_selector: String,
    pub header_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".into(),
            header_selector: "header".into(),
        }
    }
}

/// How the floating profile badge reacts to scrolling once revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum BadgePolicy {
    /// Revealed once after the delay, never hidden again.
    ShowOnce,
    /// Hidden while the page is scrolled further than `hide_above` px.
    ScrollLinked { hide_above: f64 },
}

impl Default for BadgePolicy {
    fn default() -> Self {
        BadgePolicy::ScrollLinked { hide_above: 120.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BadgeConfig {
    pub element_id: String,
    pub reveal_delay_ms: u32,
    pub policy: BadgePolicy,
    pub visible_class: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            element_id: "floatingProfile".into(),
            reveal_delay_ms: 800,
            policy: BadgePolicy::default(),
            visible_class: "visible".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypewriterConfig {
    pub element_id: String,
    pub phrases: Vec<String>,
    pub start_delay_ms: u32,
    pub type_ms: u32,   // per appended character
    pub delete_ms: u32, // per removed character
    pub hold_ms: u32,   // dwell on the full phrase
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            element_id: "typed-title".into(),
            phrases: vec![
                "Full Stack Developer".into(),
                "Software Engineer".into(),
                "AI & CyberSecurity Enthusiast".into(),
            ],
            start_delay_ms: 1000,
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderConfig {
    pub selector: String,
    pub compact_above: f64,
    pub compact_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: "header".into(),
            compact_above: 50.0,
            compact_class: "scrolled".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub container_id: String,
    pub center: (f64, f64), // (lat, lon)
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub popup: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".into(),
            center: (24.8607, 67.0011),
            zoom: 11,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap contributors".into(),
            popup: "Karachi, Pakistan".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterConfig {
    pub selector: String,
    pub target_attr: String,
    pub threshold: f64,
    pub duration_ms: u32,
    pub frame_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number".into(),
            target_attr: "data-target".into(),
            threshold: 0.5,
            duration_ms: 2000,
            frame_ms: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParticleConfig {
    pub canvas_id: String,
    pub area_per_particle: f64,
    pub max_particles: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub max_speed: f64, // each velocity component lies in [-max_speed, max_speed)
    pub fill: String,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            canvas_id: "particleCanvas".into(),
            area_per_particle: 10_000.0,
            max_particles: 80,
            min_radius: 0.5,
            max_radius: 2.0,
            max_speed: 0.1,
            fill: "rgba(0, 188, 212, 0.1)".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorConfig {
    pub enabled: bool, // opt-in; the page markup may carry a dormant `.cursor`
    pub selector: String,
    pub hover_selector: String,
    pub active_class: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            selector: ".cursor".into(),
            hover_selector: "a, button, .btn".into(),
            active_class: "active".into(),
        }
    }
}
