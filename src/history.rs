//! Log of completed AMRAP sets and the estimated maxes derived from them.

use chrono::NaiveDate;
use multimap::MultiMap;
use serde::{Deserialize, Serialize};

use crate::{lift::Lift, program::Week};

/// Epley estimate of a one-rep max from a set of `reps` at `weight` grams.
///
/// A single rep is the max itself; zero reps gives no estimate.
#[must_use]
pub fn estimated_max(weight: u32, reps: u32) -> Option<u32> {
    match reps {
        0 => None,
        1 => Some(weight),
        r => {
            // w × (1 + r/30)
            let estimate = u64::from(weight) * (30 + u64::from(r)) / 30;
            Some(u32::try_from(estimate).unwrap_or(u32::MAX))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub date: NaiveDate,
    pub lift: Lift,
    pub cycle: u32,
    pub week: Week,
    /// Bar weight in grams.
    pub weight: u32,
    pub reps: u32,
}

impl Completion {
    #[must_use]
    pub fn estimated_max(&self) -> Option<u32> {
        estimated_max(self.weight, self.reps)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    completions: MultiMap<Lift, Completion>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, completion: Completion) {
        self.completions.insert(completion.lift, completion);
    }

    /// Completions for `lift` in the order they were recorded.
    #[must_use]
    pub fn for_lift(&self, lift: Lift) -> &[Completion] {
        self.completions
            .get_vec(&lift)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completions.iter_all().map(|(_, v)| v.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Highest Epley estimate over every recorded set of `lift`, in grams.
    #[must_use]
    pub fn best_estimated_max(&self, lift: Lift) -> Option<u32> {
        self.for_lift(lift)
            .iter()
            .filter_map(Completion::estimated_max)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(lift: Lift, weight: u32, reps: u32) -> Completion {
        Completion {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            lift,
            cycle: 1,
            week: Week::FIRST,
            weight,
            reps,
        }
    }

    #[test]
    fn epley_estimates() {
        assert_eq!(estimated_max(100_000, 0), None);
        assert_eq!(estimated_max(100_000, 1), Some(100_000));
        // 100 x (1 + 5/30) = 116.666
        assert_eq!(estimated_max(100_000, 5), Some(116_666));
        assert_eq!(estimated_max(90_000, 10), Some(120_000));
    }

    #[test]
    fn groups_by_lift() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(completion(Lift::Squat, 100_000, 5));
        history.record(completion(Lift::Squat, 105_000, 3));
        history.record(completion(Lift::Bench, 70_000, 8));

        assert_eq!(history.len(), 3);
        assert_eq!(history.for_lift(Lift::Squat).len(), 2);
        assert!(history.for_lift(Lift::Deadlift).is_empty());
        // 105 x 1.1 = 115.5 < 116.666
        assert_eq!(history.best_estimated_max(Lift::Squat), Some(116_666));
        assert_eq!(history.best_estimated_max(Lift::Deadlift), None);
    }

    #[test]
    fn survives_json() {
        let mut history = History::new();
        history.record(completion(Lift::Deadlift, 140_000, 4));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"deadlift\""));
        assert_eq!(serde_json::from_str::<History>(&json).unwrap(), history);
    }
}
