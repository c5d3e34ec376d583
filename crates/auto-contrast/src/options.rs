//! Selection configuration: the strategy enumeration, rotation direction,
//! and the `ContrastOptions` bundle with its silent input normalization.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::hue::normalize_degrees;

/// Default threshold on relative luminance separating "light enough for
/// dark text" from the rest.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// The policy deciding how the text color is derived from the background.
///
/// This is a closed set: every variant has exactly one handler in the
/// resolver and new variants fail to compile until one is written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Light or dark text by luminance threshold. The only policy that is
    /// meaningful on achromatic backgrounds.
    #[default]
    Accessibility,
    /// Rotate the background hue by 180°.
    Complementary,
    /// Rotate the background hue by 15°, signed by direction.
    Analogous,
    /// Rotate the background hue by 60°, signed by direction.
    Adjacent,
    /// Rotate the background hue by 120°, signed by direction.
    Contrast,
    /// Rotate the background hue by a caller-supplied signed degree.
    Custom,
}

impl Strategy {
    /// All six strategies, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Accessibility,
        Self::Complementary,
        Self::Analogous,
        Self::Adjacent,
        Self::Contrast,
        Self::Custom,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Adjacent => "adjacent",
            Self::Contrast => "contrast",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accessibility" => Ok(Self::Accessibility),
            "complementary" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "adjacent" => Ok(Self::Adjacent),
            "contrast" => Ok(Self::Contrast),
            "custom" => Ok(Self::Custom),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Sense of a fixed-magnitude hue rotation.
///
/// Ignored by `accessibility` (no rotation) and `complementary` (180° is
/// direction-symmetric), and not applied to `custom` degrees, which arrive
/// already signed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Apply this direction's sign to a rotation magnitude.
    pub const fn signed(self, degrees: f64) -> f64 {
        match self {
            Self::Clockwise => degrees,
            Self::CounterClockwise => -degrees,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter-clockwise",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a direction name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clockwise" => Ok(Self::Clockwise),
            "counter-clockwise" | "counterclockwise" => Ok(Self::CounterClockwise),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// Everything the engine needs besides the background color itself.
///
/// Numeric fields are end-user-adjustable continuous controls, so values
/// outside their effective range are normalized rather than rejected; see
/// [`ContrastOptions::normalized`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct ContrastOptions {
    pub strategy: Strategy,
    /// Sign applied to the analogous/adjacent/contrast magnitudes.
    pub direction: Direction,
    /// Signed rotation for [`Strategy::Custom`], in degrees.
    pub custom_degree: f64,
    /// Text color for dark backgrounds (accessibility policy and
    /// achromatic fallback). Returned verbatim, never re-parsed.
    pub light_color: String,
    /// Text color for light backgrounds, likewise verbatim.
    pub dark_color: String,
    /// Luminance cut-over in `[0, 1]`: strictly above it the background
    /// counts as light and gets `dark_color`.
    pub threshold: f64,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Accessibility,
            direction: Direction::Clockwise,
            custom_degree: 180.0,
            light_color: "#FFFFFF".to_string(),
            dark_color: "#000000".to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ContrastOptions {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn custom_degree(mut self, degrees: f64) -> Self {
        self.custom_degree = degrees;
        self
    }

    #[must_use]
    pub fn light_color(mut self, color: impl Into<String>) -> Self {
        self.light_color = color.into();
        self
    }

    #[must_use]
    pub fn dark_color(mut self, color: impl Into<String>) -> Self {
        self.dark_color = color.into();
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns a copy with the numeric fields pulled into their effective
    /// ranges: `threshold` clamped into `[0, 1]` (non-finite values become
    /// the 0.5 default), `custom_degree` wrapped into `[0, 360)`
    /// (non-finite values become 0). Rewrites are logged at debug level.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let threshold = if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        if threshold != self.threshold {
            debug!(
                raw = self.threshold,
                effective = threshold,
                "threshold normalized"
            );
        }

        let custom_degree = if self.custom_degree.is_finite() {
            normalize_degrees(self.custom_degree)
        } else {
            0.0
        };
        if custom_degree != self.custom_degree {
            debug!(
                raw = self.custom_degree,
                effective = custom_degree,
                "custom degree normalized"
            );
        }

        Self {
            threshold,
            custom_degree,
            ..self.clone()
        }
    }
}
