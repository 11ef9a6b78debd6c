use std::{cmp::Ordering, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{bar::Bar, plate::Plate, target::LoadingTarget, units};

/// Deviations below this many grams of total bar weight count as an exact match.
pub const EXACT_TOLERANCE: u32 = 100;

/// The plates to put on each sleeve for one target weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLoading")]
pub struct Loading {
    plates: Vec<Plate>,
    bar: Bar,
    target: LoadingTarget,
}

impl Loading {
    /// Builds a loading from one side's plates; the plates are ordered heaviest first.
    #[must_use]
    pub fn new(plates: Vec<Plate>, bar: Bar, target: LoadingTarget) -> Self {
        Loading {
            plates: plates.into_iter().sorted_by(|a, b| b.cmp(a)).collect(),
            bar,
            target,
        }
    }

    /// Plates on one side, heaviest first.
    #[must_use]
    pub fn plates_per_side(&self) -> &[Plate] {
        &self.plates
    }

    /// Plates on one side in kg, heaviest first.
    #[must_use]
    pub fn plates_kg(&self) -> Vec<f64> {
        self.plates.iter().map(Plate::kg).collect()
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn target(&self) -> LoadingTarget {
        self.target
    }

    /// Plates on one side, in grams.
    #[must_use]
    pub fn per_side(&self) -> u64 {
        self.plates.iter().map(|p| u64::from(p.weight())).sum()
    }

    /// Bar plus both sides, in grams.
    #[must_use]
    pub fn weight(&self) -> u64 {
        u64::from(self.bar.weight()) + self.per_side() * 2
    }

    /// Signed total deviation from the target in grams; negative when the bar is light.
    #[must_use]
    pub fn error(&self) -> i64 {
        i64::try_from(self.weight()).unwrap_or(i64::MAX) - i64::from(self.target.total())
    }

    #[must_use]
    pub fn actual_kg(&self) -> f64 {
        units::kg(self.weight())
    }

    #[must_use]
    pub fn error_kg(&self) -> f64 {
        units::signed_kg(self.error())
    }

    #[must_use]
    pub fn per_side_error_kg(&self) -> f64 {
        self.error_kg() / 2.0
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.error().unsigned_abs() < u64::from(EXACT_TOLERANCE)
    }

    /// How many times `plate` appears on one side.
    #[must_use]
    pub fn count(&self, plate: Plate) -> usize {
        self.plates.iter().filter(|p| **p == plate).count()
    }

    /// Orders loadings from best to worst: closest to target, then fewest plates,
    /// then heaviest plates first.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        self.error()
            .unsigned_abs()
            .cmp(&other.error().unsigned_abs())
            .then_with(|| self.plates.len().cmp(&other.plates.len()))
            .then_with(|| other.plates.cmp(&self.plates))
    }
}

#[derive(Deserialize)]
struct RawLoading {
    plates: Vec<Plate>,
    bar: Bar,
    target: LoadingTarget,
}

impl From<RawLoading> for Loading {
    fn from(raw: RawLoading) -> Self {
        Loading::new(raw.plates, raw.bar, raw.target)
    }
}

impl Display for Loading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] per side ({}kg, ",
            self.plates.iter().join(", "),
            self.actual_kg()
        )?;

        if self.is_exact() {
            write!(f, "exact)")
        } else {
            write!(f, "{:+}kg)", self.error_kg())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(plates: &[u32], target: u32) -> Loading {
        Loading::new(
            plates.iter().copied().map(Plate::new).collect(),
            Bar::new(20_000),
            LoadingTarget::new(target),
        )
    }

    #[test]
    fn weight_counts_both_sides() {
        let l = loading(&[5_000, 25_000, 10_000], 100_000);
        assert_eq!(l.plates_per_side()[0], Plate::new(25_000));
        assert_eq!(l.per_side(), 40_000);
        assert_eq!(l.weight(), 100_000);
        assert_eq!(l.error(), 0);
        assert!(l.is_exact());
    }

    #[test]
    fn reports_signed_error() {
        let l = loading(&[], 35_000);
        assert_eq!(l.error(), -15_000);
        assert!((l.per_side_error_kg() + 7.5).abs() < f64::EPSILON);
        assert!(!l.is_exact());
    }

    #[test]
    fn ranks_fewer_then_heavier_plates() {
        let target = 60_000;
        let two = loading(&[20_000], target);
        let split = loading(&[10_000, 10_000], target);
        assert_eq!(two.rank(&split), Ordering::Less);

        let heavy = loading(&[25_000], 65_000);
        let light = loading(&[20_000], 65_000);
        assert_eq!(heavy.error(), -light.error());
        assert_eq!(heavy.rank(&light), Ordering::Less);
    }

    #[test]
    fn deserialising_orders_plates() {
        let parsed: Loading =
            serde_json::from_str(r#"{"plates":[5000,10000,5000],"bar":20000,"target":60000}"#)
                .unwrap();
        assert_eq!(parsed, loading(&[10_000, 5_000, 5_000], 60_000));
        assert_eq!(parsed.count(Plate::new(5_000)), 2);
    }

    #[test]
    fn sums_past_u32() {
        let l = loading(&[u32::MAX, u32::MAX], 100_000);
        assert_eq!(l.per_side(), 2 * u64::from(u32::MAX));
        assert_eq!(l.weight(), 20_000 + 4 * u64::from(u32::MAX));
        assert!(l.error() > 0);
    }

    #[test]
    fn displays_breakdown() {
        assert_eq!(
            loading(&[25_000, 10_000, 5_000], 100_000).to_string(),
            "[25, 10, 5] per side (100kg, exact)"
        );
        assert_eq!(
            loading(&[20_000], 65_000).to_string(),
            "[20] per side (60kg, -5kg)"
        );
    }
}
