//! Theme value types: source and mode enums, the immutable [`Theme`] and its
//! construction-time builder.

/// Imagery provider a theme is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapSource {
    /// Google Static Maps API.
    #[default]
    Google,
    /// Mapbox static tiles API.
    Mapbox,
}

impl MapSource {
    /// Provider wire name, as used in catalog documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Mapbox => "mapbox",
        }
    }

    /// Total conversion from a catalog attribute value.
    ///
    /// Unrecognized names fall back to [`MapSource::Google`]; the catalog
    /// never rejects a theme over a bad source name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mapbox" => Self::Mapbox,
            _ => Self::Google,
        }
    }
}

/// Rendering mode for Google-sourced themes.
///
/// Meaningful only when the theme's source is [`MapSource::Google`]; Mapbox
/// themes carry a tileset id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    /// Standard road map.
    #[default]
    Roadmap,
    /// Satellite imagery.
    Satellite,
    /// Terrain relief.
    Terrain,
    /// Satellite imagery with road overlay.
    Hybrid,
    /// A styled variant of the road map, defined entirely by style rules.
    Custom,
}

impl MapMode {
    /// Wire name emitted in the `maptype` query parameter.
    ///
    /// [`MapMode::Custom`] renders on the roadmap base.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roadmap | Self::Custom => "roadmap",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
            Self::Hybrid => "hybrid",
        }
    }

    /// Total conversion from a catalog attribute value.
    ///
    /// Exact match against the fixed mode-name table; anything else falls
    /// back to [`MapMode::Roadmap`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "satellite" => Self::Satellite,
            "terrain" => Self::Terrain,
            "hybrid" => Self::Hybrid,
            _ => Self::Roadmap,
        }
    }
}

/// A named map rendering configuration.
///
/// Immutable once built. The `source` field decides which of the remaining
/// fields are meaningful: Google themes use `mode`, `styles` and `inverted`;
/// Mapbox themes use only `tile_id`. URL construction branches on `source`
/// exclusively and never mixes fields across providers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    /// Theme name, unique within a catalog.
    pub name: String,
    /// Imagery provider.
    pub source: MapSource,
    /// Rendering mode (Google themes only).
    pub mode: MapMode,
    /// Mapbox tileset id (Mapbox themes only).
    pub tile_id: Option<String>,
    /// Raw style directives, passed through verbatim to the provider.
    /// Insertion order is significant: it decides rule precedence.
    pub styles: Vec<String>,
    /// Appends the fixed invert-lightness rule after all explicit styles.
    pub inverted: bool,
}

impl Theme {
    /// Starts building a theme with the given name.
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder {
            theme: Theme {
                name: name.into(),
                ..Theme::default()
            },
        }
    }

    /// Returns a copy of this theme with the inversion flag replaced.
    ///
    /// User preference overrides whatever the catalog declared.
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Returns the built-in theme for one of the four standard selection
/// indices (0 roadmap, 1 satellite, 2 terrain, 3 hybrid), or `None` for a
/// catalog-defined theme index.
///
/// Standard modes never touch the catalog document.
pub fn standard_theme(index: usize) -> Option<Theme> {
    let (mode, name) = match index {
        0 => (MapMode::Roadmap, "Map"),
        1 => (MapMode::Satellite, "Satellite"),
        2 => (MapMode::Terrain, "Terrain"),
        3 => (MapMode::Hybrid, "Hybrid"),
        _ => return None,
    };
    Some(Theme::builder(name).mode(mode).build())
}

/// Mutable construction record used while parsing a catalog entry.
///
/// Finalized into an immutable [`Theme`] with [`build`](Self::build); no
/// consumer ever sees a partially constructed theme.
#[derive(Debug)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Sets the imagery provider.
    pub fn source(mut self, source: MapSource) -> Self {
        self.theme.source = source;
        self
    }

    /// Sets the rendering mode.
    pub fn mode(mut self, mode: MapMode) -> Self {
        self.theme.mode = mode;
        self
    }

    /// Sets the Mapbox tileset id.
    pub fn tile_id(mut self, tile_id: impl Into<String>) -> Self {
        self.theme.tile_id = Some(tile_id.into());
        self
    }

    /// Appends a raw style rule, preserving insertion order.
    pub fn style(mut self, rule: impl Into<String>) -> Self {
        self.theme.styles.push(rule.into());
        self
    }

    /// Sets the inversion flag.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.theme.inverted = inverted;
        self
    }

    /// Freezes the builder into an immutable theme.
    pub fn build(self) -> Theme {
        self.theme
    }
}
