//! Contrast-aware text color selection.
//!
//! Given a CSS background color string and a [`ContrastOptions`]
//! configuration, pick a foreground ("text") color under one of six
//! policies:
//!
//! - **accessibility** — light or dark text, decided by comparing the
//!   background's WCAG relative luminance against a threshold;
//! - **complementary** / **analogous** / **adjacent** / **contrast** —
//!   rotate the background's hue by 180° / 15° / 60° / 120°, keeping its
//!   saturation and lightness;
//! - **custom** — rotate by a caller-supplied signed degree.
//!
//! Achromatic backgrounds (grays, black, white) have no hue to rotate, so
//! every rotation strategy falls back to the accessibility decision there;
//! the returned [`Selection`] says when that happened.
//!
//! Everything is a synchronous pure function: no state between calls, no
//! I/O, safe to invoke concurrently. Hue rotation picks *related* colors,
//! not guaranteed-readable ones; it makes no WCAG contrast-ratio promises.
//!
//! ```
//! use auto_contrast::{text_color, ContrastOptions, Strategy};
//!
//! // dark purple background → light text
//! let color = text_color("#800080", &ContrastOptions::default()).unwrap();
//! assert_eq!(color, "#FFFFFF");
//!
//! // complementary hue, same saturation and lightness
//! let color = text_color("#800080", &ContrastOptions::new(Strategy::Complementary)).unwrap();
//! assert_eq!(color, "#008000");
//! ```

pub mod color;
pub mod engine;
pub mod error;
pub mod hue;
pub mod options;
pub mod resolve;

pub use color::Rgba;
pub use engine::{select_text_color, text_color};
pub use error::InvalidColorError;
pub use options::{ContrastOptions, Direction, Strategy, DEFAULT_THRESHOLD};
pub use resolve::Selection;
