//! Angle arithmetic on the hue circle.
//!
//! Hue angles are degrees wrapped into `[0, 360)`. All functions here are
//! pure; none of them care whether the angle came from a real color.

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Works for negative and large-magnitude inputs. The upper bound is strict:
/// a tiny negative input whose `rem_euclid` rounds up to `360.0` is mapped
/// back to `0.0`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate `hue` by `degrees` (signed), wrapping the result into `[0, 360)`.
pub fn rotate(hue: f64, degrees: f64) -> f64 {
    normalize_degrees(hue + degrees)
}

/// The minimal-magnitude signed rotation taking `current` to `target`,
/// in `(-180, 180]`.
///
/// The antipodal case is single-valued: a 180° separation always reports
/// `+180`, never `-180`. This is the intended way to derive a custom
/// rotation when the caller thinks in terms of a target hue rather than
/// a degree offset.
pub fn shortest_rotation(current: f64, target: f64) -> f64 {
    let mut diff = normalize_degrees(target) - normalize_degrees(current);
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff <= -180.0 {
        diff += 360.0;
    }
    diff
}
