/// Grams per kilogram. Weights are stored as whole grams so plate sums stay exact.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Converts a kilogram value into whole grams.
///
/// Returns `None` for non-finite, non-positive, or out of range input.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grams(kg: f64) -> Option<u32> {
    if !kg.is_finite() || kg <= 0.0 {
        return None;
    }

    let grams = (kg * GRAMS_PER_KG).round();
    if grams < 1.0 || grams > f64::from(u32::MAX) {
        return None;
    }

    Some(grams as u32)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kg(grams: impl Into<u64>) -> f64 {
    grams.into() as f64 / GRAMS_PER_KG
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn signed_kg(grams: i64) -> f64 {
    grams as f64 / GRAMS_PER_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_fractional_plates() {
        assert_eq!(grams(1.25), Some(1250));
        assert_eq!(grams(0.5), Some(500));
        assert_eq!(grams(102.5), Some(102_500));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(grams(0.0), None);
        assert_eq!(grams(-2.5), None);
        assert_eq!(grams(f64::NAN), None);
        assert_eq!(grams(f64::INFINITY), None);
        assert_eq!(grams(0.0001), None);
    }

    #[test]
    fn back_to_kg() {
        assert!((kg(41_250u32) - 41.25).abs() < f64::EPSILON);
        assert!((kg(6_000_020_000u64) - 6_000_020.0).abs() < f64::EPSILON);
        assert!((signed_kg(-7_500) + 7.5).abs() < f64::EPSILON);
    }
}
