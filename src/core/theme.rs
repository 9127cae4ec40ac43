//! Theme colors for the backdrop.
//!
//! The browser reads them from CSS custom properties; everything else gets the
//! literal fallbacks.

use super::color::hsl_from_token;
use super::constants::{FALLBACK_BACKGROUND, FALLBACK_PRIMARY, FALLBACK_SECONDARY};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub primary: String,
    pub secondary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: FALLBACK_BACKGROUND.to_string(),
            primary: FALLBACK_PRIMARY.to_string(),
            secondary: FALLBACK_SECONDARY.to_string(),
        }
    }
}

impl Palette {
    /// Build a palette from raw HSL token values, falling back per token when
    /// a value is missing or blank.
    pub fn from_tokens(
        background: Option<&str>,
        primary: Option<&str>,
        secondary: Option<&str>,
    ) -> Self {
        Self {
            background: background
                .and_then(hsl_from_token)
                .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string()),
            primary: primary
                .and_then(hsl_from_token)
                .unwrap_or_else(|| FALLBACK_PRIMARY.to_string()),
            secondary: secondary
                .and_then(hsl_from_token)
                .unwrap_or_else(|| FALLBACK_SECONDARY.to_string()),
        }
    }
}

/// CSS `background-image` shown while the canvas is not animating.
pub fn placeholder_gradient(palette: &Palette) -> String {
    format!(
        "linear-gradient(to bottom right, color-mix(in srgb, {} 5%, transparent), {}, color-mix(in srgb, {} 5%, transparent))",
        palette.primary, palette.background, palette.secondary
    )
}

pub trait ThemeProvider {
    fn palette(&mut self) -> Palette;

    /// Signal that the underlying styles may have changed.
    fn invalidate(&mut self) {}
}

/// Provider for hosts without a styling context.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackTheme;

impl ThemeProvider for FallbackTheme {
    fn palette(&mut self) -> Palette {
        Palette::default()
    }
}

/// Resolves the inner provider once and reuses the result until invalidated.
#[derive(Debug)]
pub struct CachedTheme<T> {
    inner: T,
    cached: Option<Palette>,
}

impl<T: ThemeProvider> CachedTheme<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            cached: None,
        }
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: ThemeProvider> ThemeProvider for CachedTheme<T> {
    fn palette(&mut self) -> Palette {
        if let Some(p) = &self.cached {
            return p.clone();
        }
        let p = self.inner.palette();
        self.cached = Some(p.clone());
        p
    }

    fn invalidate(&mut self) {
        self.cached = None;
        self.inner.invalidate();
    }
}

impl<T: ThemeProvider + ?Sized> ThemeProvider for Box<T> {
    fn palette(&mut self) -> Palette {
        (**self).palette()
    }

    fn invalidate(&mut self) {
        (**self).invalidate()
    }
}
