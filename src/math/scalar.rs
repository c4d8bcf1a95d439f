//! Scalar helpers shared by the curve and surface evaluators.

use std::f64::consts::PI;

/// Returns -1.0, 0.0, or 1.0 matching the sign of `n`.
pub fn sgn(n: f64) -> f64 {
    if n < 0.0 {
        -1.0
    } else if n > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Converts degrees to radians.
pub fn to_rad(deg: f64) -> f64 {
    (PI * deg) / 180.0
}

/// Converts radians to degrees.
pub fn to_deg(rad: f64) -> f64 {
    (180.0 * rad) / PI
}

/// Computes the binomial coefficient "n choose k" exactly.
///
/// Evaluated through the recurrence `C(n, k) = n * C(n-1, k-1) / k` with the
/// integer division performed last, so intermediate products stay exact well
/// past the factorial-overflow point. Recursion depth equals `k`.
///
/// Returns 1 when `k == 0` or `k >= n`. Callers never pass `k > n`; if this
/// ever becomes a general-purpose utility, note that the mathematical value
/// for `k > n` would be 0, not 1.
pub fn combination(n: u32, k: u32) -> u64 {
    if k == 0 || k >= n {
        return 1;
    }

    let intermediate = u64::from(n) * combination(n - 1, k - 1);
    intermediate / u64::from(k)
}

/// Evaluates the Bernstein basis polynomial `C(n, i) * u^i * (1-u)^(n-i)`.
///
/// `u` is expected in `[0, 1]` but is not clamped; the exponents are
/// non-negative integers, so out-of-range `u` still evaluates cleanly.
pub fn bernstein_polynomial(n: u32, i: u32, u: f64) -> f64 {
    let combo = combination(n, i) as f64;
    let u_to_i = u.powi(i as i32);
    let one_minus_u_to_n_minus_i = (1.0 - u).powi((n - i) as i32);
    combo * u_to_i * one_minus_u_to_n_minus_i
}

/// Derivative weights of the four cubic Bernstein basis polynomials at `t`.
///
/// Used by the bicubic patch to take an analytic partial derivative along
/// one axis of the control net while the other axis is summed against the
/// ordinary basis.
pub fn cubic_bernstein_derivatives(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    [
        -3.0 * mt * mt,
        3.0 * mt * mt - 6.0 * t * mt,
        6.0 * t * mt - 3.0 * t * t,
        3.0 * t * t,
    ]
}
