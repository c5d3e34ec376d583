//! Strategy dispatch: one handler per policy, plus the achromatic fallback.

use tracing::debug;

use crate::color::Rgba;
use crate::hue::rotate;
use crate::options::{ContrastOptions, Direction, Strategy};

/// Rotation magnitudes for the fixed strategies, in degrees.
pub const ANALOGOUS_DEGREES: f64 = 15.0;
pub const ADJACENT_DEGREES: f64 = 60.0;
pub const CONTRAST_DEGREES: f64 = 120.0;
pub const COMPLEMENTARY_DEGREES: f64 = 180.0;

/// The outcome of a selection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The chosen text color, as a CSS-compatible string.
    pub color: String,
    /// The policy that actually produced `color`. Differs from the
    /// configured strategy exactly when the achromatic fallback engaged.
    pub strategy: Strategy,
    /// True when an achromatic background rerouted a rotation strategy to
    /// the accessibility policy.
    pub achromatic_fallback: bool,
}

/// Apply the configured strategy to an already-parsed background.
///
/// `options` must already be normalized; the engine takes care of that.
pub(crate) fn resolve(background: Rgba, options: &ContrastOptions) -> Selection {
    // Hue rotation is meaningless on a color with no hue, so achromatic
    // backgrounds always get the accessibility decision, whatever was asked.
    if options.strategy != Strategy::Accessibility && background.is_achromatic() {
        debug!(
            requested = %options.strategy,
            "achromatic background, falling back to accessibility"
        );
        return Selection {
            color: accessibility(background, options),
            strategy: Strategy::Accessibility,
            achromatic_fallback: true,
        };
    }

    let degrees = match options.strategy {
        Strategy::Accessibility => {
            return Selection {
                color: accessibility(background, options),
                strategy: Strategy::Accessibility,
                achromatic_fallback: false,
            };
        }
        // 180° lands on the same hue either way round the circle.
        Strategy::Complementary => COMPLEMENTARY_DEGREES,
        Strategy::Analogous => options.direction.signed(ANALOGOUS_DEGREES),
        Strategy::Adjacent => options.direction.signed(ADJACENT_DEGREES),
        Strategy::Contrast => options.direction.signed(CONTRAST_DEGREES),
        // Already signed by the caller; direction does not re-sign it.
        Strategy::Custom => options.custom_degree,
    };

    let (h, _, _, _) = background.to_hsla();
    let color = background.with_hue(rotate(h, degrees)).to_color_string();
    Selection {
        color,
        strategy: options.strategy,
        achromatic_fallback: false,
    }
}

/// Light-or-dark decision: strictly above the threshold the background is
/// light and gets the dark text color. The configured strings are returned
/// verbatim.
fn accessibility(background: Rgba, options: &ContrastOptions) -> String {
    if background.relative_luminance() > options.threshold {
        options.dark_color.clone()
    } else {
        options.light_color.clone()
    }
}
