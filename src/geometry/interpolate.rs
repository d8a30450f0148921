//! Clamped piecewise-linear interpolation

/// Map `x` through a breakpoint table, saturating outside the range.
///
/// `stops` must be non-decreasing. Zero-width segments (repeated stops, e.g.
/// when the limit is 0) are skipped, so the result is never NaN for finite
/// tables. A NaN `x` maps to the first output.
pub fn interpolate_clamped<const N: usize>(x: f32, stops: &[f32; N], values: &[f32; N]) -> f32 {
    if N == 0 {
        return 0.0;
    }
    if x.is_nan() || x <= stops[0] {
        return values[0];
    }
    if x >= stops[N - 1] {
        return values[N - 1];
    }

    for i in 0..N - 1 {
        let (x0, x1) = (stops[i], stops[i + 1]);
        if x >= x0 && x <= x1 && x1 > x0 {
            let t = (x - x0) / (x1 - x0);
            return crate::lerp(values[i], values[i + 1], t);
        }
    }

    values[N - 1]
}

/// Scale a table of fractions by `limit`
#[inline]
pub fn scaled_stops<const N: usize>(fractions: &[f32; N], limit: f32) -> [f32; N] {
    fractions.map(|f| f * limit)
}
