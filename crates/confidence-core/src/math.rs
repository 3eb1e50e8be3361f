//! Const-evaluable mathematical primitives
//!
//! Everything in this module is a `const fn` built from plain floating-point
//! arithmetic, so it can run in const contexts where `f32::exp` and friends
//! are unavailable.

/// Euler's number
pub const E: f32 = std::f32::consts::E;

/// `sqrt(2 * pi)`, the normalising constant of the normal density
#[allow(clippy::excessive_precision)]
pub const ROOT_OF_2PI: f32 = 2.506_628_274_63;

/// Stop adding Taylor terms once a term falls to this magnitude
pub const SERIES_ACCURACY: f32 = 1e-6;

// exp(104) overflows f32 and exp(-104) is below the smallest subnormal.
const SATURATION: f32 = 104.0;

/// Raise `x` to the non-negative integer power `n` in O(log n) multiplications.
pub const fn int_pow(mut x: f32, mut n: u32) -> f32 {
    let mut p = 1.0;
    while n > 0 {
        if n & 1 == 1 {
            p *= x;
        }
        x *= x;
        n >>= 1;
    }
    p
}

/// Exponential function usable in const contexts.
///
/// `|x|` is split into an integer part `n` and a fractional part `r`. The
/// fractional factor `exp(r)` comes from a Taylor series truncated once a term
/// drops to [`SERIES_ACCURACY`], the integral factor from [`int_pow`] on `e`
/// (or `1/e` for negative inputs, where the series factor is inverted too).
///
/// NaN propagates; inputs beyond `±104` saturate to `inf` / `0`.
pub const fn exp(x: f32) -> f32 {
    if x.is_nan() {
        return f32::NAN;
    }
    if x > SATURATION {
        return f32::INFINITY;
    }
    if x < -SATURATION {
        return 0.0;
    }

    let positive = x >= 0.0;
    let x = if positive { x } else { -x };

    let n = x as u32;
    let r = x - n as f32;

    let mut sum = 0.0;
    let mut term = 1.0;
    let mut i = 1u32;
    while term > SERIES_ACCURACY {
        sum += term;
        term *= r / i as f32;
        i += 1;
    }
    if !positive {
        sum = 1.0 / sum;
    }

    let base = if positive { E } else { 1.0 / E };
    int_pow(base, n) * sum
}

/// Normal probability density with the given mean and standard deviation.
///
/// `stdev` must be strictly positive; this is not checked here.
pub const fn normal_pdf(x: f32, mean: f32, stdev: f32) -> f32 {
    let z = (x - mean) / stdev;
    (1.0 / (stdev * ROOT_OF_2PI)) * exp(-0.5 * (z * z))
}
