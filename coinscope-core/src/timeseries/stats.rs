use crate::Correlation;

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

/// True when every value equals the first one (vacuously true for empty input).
#[must_use]
pub fn is_constant(values: &[f64]) -> bool {
    values.split_first().is_none_or(|(first, rest)| rest.iter().all(|v| v == first))
}

/// Bessel-corrected sample standard deviation.
///
/// Returns exactly `0.0` for fewer than two values or a constant slice, so
/// rounding in the mean never leaks a tiny non-zero deviation.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 || is_constant(values) {
        return 0.0;
    }
    let Some(m) = mean(values) else {
        return 0.0;
    };
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    #[allow(clippy::cast_precision_loss)]
    let dof = (values.len() - 1) as f64;
    (ss / dof).sqrt()
}

/// Pearson correlation of two equally long slices.
///
/// Returns `Correlation::Undefined` when either side has zero variance
/// (including fewer than two points) or the lengths differ. Defined
/// coefficients are clamped to `[-1, 1]`.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    if xs.len() != ys.len() || xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return Correlation::Undefined;
    }
    let (Some(mx), Some(my)) = (mean(xs), mean(ys)) else {
        return Correlation::Undefined;
    };
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return Correlation::Undefined;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if r.is_nan() {
        return Correlation::Undefined;
    }
    Correlation::Coefficient(r.clamp(-1.0, 1.0))
}
