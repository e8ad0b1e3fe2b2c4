use crate::core::data::complex::Complex;

/// Squared escape radius. Once `|z|² >= 4` the orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts applications of `z ← z² + k`, starting from `z0`, until `|z|² >= 4`
/// or `max_iterations` is reached.
///
/// The escape test runs before every step, so a start point already outside
/// the radius returns 0. An orbit that stays bounded returns exactly
/// `max_iterations`, which colour maps treat as the interior sentinel.
#[inline]
#[must_use]
pub fn escape_time(z0: Complex, k: Complex, max_iterations: u32) -> u32 {
    let mut z = z0;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square() + k;
    }

    max_iterations
}
