//! Catalog document parsing and theme resolution.
//!
//! The catalog is an XML document of `<theme>` elements, each carrying a
//! `name` attribute plus provider attributes (`mapSource`, `mapType`,
//! `mapId`) and zero or more nested `<style>` elements whose text content is
//! an opaque provider style rule:
//!
//! ```xml
//! <themes>
//!     <theme name="Dark" mapSource="google" mapType="roadmap">
//!         <style>element:geometry|color:0x212121</style>
//!         <style>feature:water|color:0x000000</style>
//!     </theme>
//!     <theme name="Pencil" mapSource="mapbox" mapId="examples.a4c252ab" />
//! </themes>
//! ```
//!
//! Parsing is a single forward pass over the event stream producing a map
//! from lower-cased theme name to [`Theme`]; there is no cursor state shared
//! with callers. Tag names match case-insensitively.

use std::collections::HashMap;

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use tracing::warn;

use super::types::{MapMode, MapSource, Theme};

const TAG_THEME: &[u8] = b"theme";
const TAG_STYLE: &[u8] = b"style";
const ATTR_NAME: &[u8] = b"name";
const ATTR_MAP_SOURCE: &[u8] = b"mapSource";
const ATTR_MAP_TYPE: &[u8] = b"mapType";
const ATTR_MAP_ID: &[u8] = b"mapId";

/// Errors raised while parsing a catalog document.
///
/// Callers on the tick path do not propagate these; resolution degrades to
/// [`Theme::default()`] instead (see [`resolve_theme`]).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not well-formed XML.
    #[error("malformed theme catalog: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element carries a malformed attribute.
    #[error("malformed attribute in theme catalog: {0}")]
    Attribute(#[from] AttrError),
}

/// A parsed set of named themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: HashMap<String, Theme>,
}

impl ThemeCatalog {
    /// Parses a catalog document in a single pass.
    ///
    /// Unknown elements and attributes are skipped. Later themes with the
    /// same (case-insensitive) name replace earlier ones.
    pub fn parse(xml: &str) -> Result<Self, CatalogError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut themes = HashMap::new();
        let mut current: Option<Theme> = None;
        let mut in_style = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref().eq_ignore_ascii_case(TAG_THEME) => {
                    current = Some(theme_from_attributes(&e)?);
                }
                Event::Empty(e) if e.name().as_ref().eq_ignore_ascii_case(TAG_THEME) => {
                    let theme = theme_from_attributes(&e)?;
                    themes.insert(theme.name.to_lowercase(), theme);
                }
                Event::Start(e)
                    if current.is_some() && e.name().as_ref().eq_ignore_ascii_case(TAG_STYLE) =>
                {
                    in_style = true;
                }
                Event::Text(t) if in_style => {
                    if let Some(theme) = current.as_mut() {
                        theme.styles.push(t.unescape()?.into_owned());
                    }
                }
                Event::CData(t) if in_style => {
                    if let Some(theme) = current.as_mut() {
                        theme.styles.push(String::from_utf8_lossy(&t).into_owned());
                    }
                }
                Event::End(e) if e.name().as_ref().eq_ignore_ascii_case(TAG_STYLE) => {
                    in_style = false;
                }
                Event::End(e) if e.name().as_ref().eq_ignore_ascii_case(TAG_THEME) => {
                    if let Some(theme) = current.take() {
                        themes.insert(theme.name.to_lowercase(), theme);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { themes })
    }

    /// Number of themes in the catalog.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if the catalog holds no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Looks a theme up by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(&name.to_lowercase())
    }

    /// Resolves a theme by name, falling back to the default theme.
    ///
    /// A miss is logged at warn and yields `Theme::default()`; the tick must
    /// never fail over a missing catalog entry.
    pub fn theme(&self, name: &str) -> Theme {
        match self.get(name) {
            Some(theme) => theme.clone(),
            None => {
                warn!(theme = name, "theme not found in catalog, using default");
                Theme::default()
            }
        }
    }
}

/// Builds a theme from a `<theme>` element's attributes.
///
/// `mapSource` defaults to google. Google themes read `mapType` and ignore
/// `mapId`; Mapbox themes read `mapId` and ignore `mapType`.
fn theme_from_attributes(element: &BytesStart<'_>) -> Result<Theme, CatalogError> {
    let mut name = String::new();
    let mut source = MapSource::Google;
    let mut map_type: Option<String> = None;
    let mut map_id: Option<String> = None;

    for attr in element.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            k if k == ATTR_NAME => name = value.into_owned(),
            k if k == ATTR_MAP_SOURCE => source = MapSource::from_name(&value),
            k if k == ATTR_MAP_TYPE => map_type = Some(value.into_owned()),
            k if k == ATTR_MAP_ID => map_id = Some(value.into_owned()),
            _ => {}
        }
    }

    let mut builder = Theme::builder(name).source(source);
    builder = match source {
        MapSource::Google => match map_type {
            Some(mode) => builder.mode(MapMode::from_name(&mode)),
            None => builder,
        },
        MapSource::Mapbox => match map_id {
            Some(id) => builder.tile_id(id),
            None => builder,
        },
    };
    Ok(builder.build())
}

/// Resolves the active theme from a selection index into an ordered list of
/// display names.
///
/// If `index` is out of bounds, or the catalog fails to parse, or the name
/// is missing from the catalog, the default theme is returned and the cause
/// logged. No error ever reaches the caller.
pub fn resolve_theme(xml: &str, titles: &[String], index: usize) -> Theme {
    let Some(name) = titles.get(index) else {
        warn!(index, titles = titles.len(), "theme selection out of bounds, using default");
        return Theme::default();
    };

    match ThemeCatalog::parse(xml) {
        Ok(catalog) => catalog.theme(name),
        Err(e) => {
            warn!(theme = %name, error = %e, "failed to parse theme catalog, using default");
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        <themes>
            <theme name="Dark" mapSource="google" mapType="satellite">
                <style>foo:bar</style>
            </theme>
            <theme name="Night" mapType="roadmap">
                <style>element:geometry|color:0x212121</style>
                <style>feature:water|color:0x000000</style>
            </theme>
            <theme name="Pencil" mapSource="mapbox" mapId="examples.a4c252ab" />
        </themes>
    "#;

    #[test]
    fn parses_google_theme_with_styles() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        let theme = catalog.theme("Dark");
        assert_eq!(theme.source, MapSource::Google);
        assert_eq!(theme.mode, MapMode::Satellite);
        assert_eq!(theme.styles, vec!["foo:bar".to_string()]);
    }

    #[test]
    fn preserves_style_document_order() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        let theme = catalog.theme("Night");
        assert_eq!(
            theme.styles,
            vec![
                "element:geometry|color:0x212121".to_string(),
                "feature:water|color:0x000000".to_string(),
            ]
        );
    }

    #[test]
    fn parses_mapbox_theme_with_tile_id() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        let theme = catalog.theme("Pencil");
        assert_eq!(theme.source, MapSource::Mapbox);
        assert_eq!(theme.tile_id.as_deref(), Some("examples.a4c252ab"));
        // Mapbox themes never read mapType.
        assert_eq!(theme.mode, MapMode::Roadmap);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        assert_eq!(catalog.theme("dark"), catalog.theme("DARK"));
        assert_eq!(catalog.theme("dark").mode, MapMode::Satellite);
    }

    #[test]
    fn missing_source_defaults_to_google() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        assert_eq!(catalog.theme("Night").source, MapSource::Google);
    }

    #[test]
    fn unknown_theme_yields_default() {
        let catalog = ThemeCatalog::parse(CATALOG).unwrap();
        assert_eq!(catalog.theme("Nonexistent"), Theme::default());
    }

    #[test]
    fn tag_names_match_case_insensitively() {
        let xml = r#"<Themes><THEME name="Loud" mapType="hybrid"><STYLE>a:b</STYLE></THEME></Themes>"#;
        let catalog = ThemeCatalog::parse(xml).unwrap();
        let theme = catalog.theme("Loud");
        assert_eq!(theme.mode, MapMode::Hybrid);
        assert_eq!(theme.styles, vec!["a:b".to_string()]);
    }

    #[test]
    fn cdata_style_rules_are_collected() {
        let xml = r#"
            <themes>
                <theme name="Ink" mapType="roadmap">
                    <style><![CDATA[feature:water|color:0x000000]]></style>
                    <style>element:labels|visibility:off</style>
                </theme>
            </themes>
        "#;
        let catalog = ThemeCatalog::parse(xml).unwrap();
        let theme = catalog.theme("Ink");
        assert_eq!(
            theme.styles,
            vec![
                "feature:water|color:0x000000".to_string(),
                "element:labels|visibility:off".to_string(),
            ]
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(ThemeCatalog::parse("<themes><theme name=").is_err());
    }

    #[test]
    fn resolve_theme_by_index() {
        let titles = vec!["Dark".to_string(), "Night".to_string()];
        let theme = resolve_theme(CATALOG, &titles, 0);
        assert_eq!(theme.mode, MapMode::Satellite);
    }

    #[test]
    fn resolve_theme_out_of_bounds_yields_default() {
        let titles = vec!["Dark".to_string()];
        assert_eq!(resolve_theme(CATALOG, &titles, 7), Theme::default());
    }

    #[test]
    fn resolve_theme_on_parse_error_yields_default() {
        let titles = vec!["Dark".to_string()];
        assert_eq!(resolve_theme("<themes><theme", &titles, 0), Theme::default());
    }
}
