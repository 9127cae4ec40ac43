use std::fmt;

/// HSL color as understood by CSS; saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Wraps a raw CSS custom property value (e.g. `221 83% 53%`) as `hsl(...)`.
///
/// Returns `None` when the token is blank.
pub fn hsl_from_token(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| format!("hsl({token})"))
}
