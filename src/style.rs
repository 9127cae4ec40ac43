use web_sys as web;

use crate::core::constants::{BACKGROUND_TOKEN, PRIMARY_TOKEN, SECONDARY_TOKEN};
use crate::core::{Palette, ThemeProvider};

/// Reads the theme tokens from the computed style of the document root.
pub struct CssTheme {
    window: web::Window,
    warned: bool,
}

impl CssTheme {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
            warned: false,
        }
    }

    /// Raw `--background`, `--primary` and `--secondary` values; the last one
    /// is optional since only the placeholder uses it.
    fn read_tokens(&self) -> Option<(String, String, Option<String>)> {
        let root = self.window.document()?.document_element()?;
        let style = self.window.get_computed_style(&root).ok().flatten()?;
        let background = style.get_property_value(BACKGROUND_TOKEN).ok()?;
        let primary = style.get_property_value(PRIMARY_TOKEN).ok()?;
        let secondary = style.get_property_value(SECONDARY_TOKEN).ok();
        Some((background, primary, secondary))
    }
}

impl ThemeProvider for CssTheme {
    fn palette(&mut self) -> Palette {
        match self.read_tokens() {
            Some((background, primary, secondary)) => Palette::from_tokens(
                Some(background.as_str()),
                Some(primary.as_str()),
                secondary.as_deref(),
            ),
            None => {
                if !self.warned {
                    log::warn!("[theme] computed style unavailable; using fallback colors");
                    self.warned = true;
                }
                Palette::default()
            }
        }
    }
}
