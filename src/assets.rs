//! Embedded assets for docpane
//!
//! Uses rust-embed to bundle icon glyphs and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icon glyphs used by the docpane components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphName {
    /// Search (magnifier) glyph
    Search,
    /// Clear badge glyph (circled cross)
    ClearBadge,
    /// Print glyph
    Print,
    /// Content answers (sparkle) glyph
    Answers,
}

impl GlyphName {
    /// Get the SVG path for this glyph
    pub fn path(self) -> SharedString {
        match self {
            GlyphName::Search => "icons/search.svg",
            GlyphName::ClearBadge => "icons/clear-badge.svg",
            GlyphName::Print => "icons/print.svg",
            GlyphName::Answers => "icons/answers.svg",
        }
        .into()
    }
}

impl From<GlyphName> for Icon {
    fn from(val: GlyphName) -> Self {
        Icon::empty().path(val.path())
    }
}
