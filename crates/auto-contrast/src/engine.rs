//! The public entry points: parse, normalize, resolve.

use std::str::FromStr;

use crate::color::Rgba;
use crate::error::InvalidColorError;
use crate::options::ContrastOptions;
use crate::resolve::{self, Selection};

/// Pick a text color for `background` and report how it was picked.
///
/// `background` may be any CSS-style color string (hex, named, `rgb()`,
/// `rgba()`, `hsl()`, ...). Numeric options outside their effective ranges
/// are normalized, never rejected; the only failure is an unparseable
/// background.
///
/// Pure and deterministic: identical inputs always produce the identical
/// selection, and no state is kept between calls. Callers that recompute
/// on every keystroke and want to skip redundant work should memoize on
/// `(background, options)` themselves.
pub fn select_text_color(
    background: &str,
    options: &ContrastOptions,
) -> Result<Selection, InvalidColorError> {
    let parsed = Rgba::from_str(background).map_err(|source| InvalidColorError {
        input: background.to_string(),
        source,
    })?;
    Ok(resolve::resolve(parsed, &options.normalized()))
}

/// Like [`select_text_color`], returning just the color string.
pub fn text_color(background: &str, options: &ContrastOptions) -> Result<String, InvalidColorError> {
    select_text_color(background, options).map(|selection| selection.color)
}
