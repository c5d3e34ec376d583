//! The `Rgba` color value and the conversions the decision math needs.
//!
//! Parsing and RGB↔HSL conversion are delegated to [`csscolorparser`]; this
//! module owns only what the selection policies require: relative luminance,
//! the achromaticity test, hue replacement, and CSS output formatting.

use std::str::FromStr;

use csscolorparser::Color;

use crate::hue::normalize_degrees;

/// A color as sRGB components in f32-style 0.0-1.0 range, plus alpha.
///
/// Alpha is carried through parsing and hue replacement but ignored by the
/// selection math; text color decisions are made on the opaque channels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub f64, pub f64, pub f64, pub f64);

impl Rgba {
    /// Construct from HSL plus alpha. `h` is in degrees (any real value,
    /// wrapped), `s`/`l`/`a` in 0.0-1.0.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let Color { r, g, b, a } = Color::from_hsla(normalize_degrees(h), s, l, a);
        Self(r, g, b, a)
    }

    /// Returns `(hue, saturation, lightness, alpha)` with hue in `[0, 360)`
    /// and the rest in 0.0-1.0.
    pub fn to_hsla(self) -> (f64, f64, f64, f64) {
        Color::new(self.0, self.1, self.2, self.3).to_hsla()
    }

    /// WCAG relative luminance in `[0, 1]`: each sRGB channel is linearized,
    /// then weighted 0.2126 / 0.7152 / 0.0722.
    pub fn relative_luminance(self) -> f64 {
        fn to_linear(v: f64) -> f64 {
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * to_linear(self.0) + 0.7152 * to_linear(self.1) + 0.0722 * to_linear(self.2)
    }

    /// True for grays, black, and white: HSL saturation is exactly zero, so
    /// the hue component carries no information and rotating it is a no-op
    /// in disguise.
    pub fn is_achromatic(self) -> bool {
        let (_, s, _, _) = self.to_hsla();
        s == 0.0
    }

    /// Replace only the hue, preserving the color's own saturation,
    /// lightness, and alpha.
    pub fn with_hue(self, hue: f64) -> Self {
        let (_, s, l, a) = self.to_hsla();
        Self::from_hsla(hue, s, l, a)
    }

    /// Returns a string of the form `#RRGGBB`
    pub fn to_rgb_string(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.0 * 255.) as u8,
            (self.1 * 255.) as u8,
            (self.2 * 255.) as u8
        )
    }

    pub fn to_rgba_string(self) -> String {
        format!(
            "rgba({}% {}% {}% {}%)",
            (self.0 * 100.),
            (self.1 * 100.),
            (self.2 * 100.),
            (self.3 * 100.)
        )
    }

    /// Format as a color string: `#RRGGBB` if opaque, `rgba(...)` if
    /// transparent.
    pub fn to_color_string(self) -> String {
        if self.3 == 1.0 {
            self.to_rgb_string()
        } else {
            self.to_rgba_string()
        }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_color_string())
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        Self(color.r, color.g, color.b, color.a)
    }
}

impl FromStr for Rgba {
    type Err = csscolorparser::ParseColorError;

    /// Accepts every form the CSS parser recognizes: `#RGB`/`#RRGGBB` hex,
    /// named colors, `rgb()`, `rgba()`, `hsl()`, and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        csscolorparser::parse(s).map(Into::into)
    }
}
