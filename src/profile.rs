use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::Settings,
    cycle::{Advance, CyclePosition},
    history::{Completion, History},
    lift::Lift,
    load_error::InventoryError,
    program,
    workout::Workout,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("No training max set for {0}.")]
    MissingTrainingMax(Lift),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Everything a lifter has set up or done: settings, maxes, position and history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub settings: Settings,
    /// Training maxes in grams.
    training_maxes: BTreeMap<Lift, u32>,
    position: CyclePosition,
    history: History,
}

impl Profile {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Profile {
            settings,
            ..Profile::default()
        }
    }

    /// Records a tested one-rep max and derives the training max from it.
    pub fn set_one_rep_max(&mut self, lift: Lift, one_rep_max: u32) -> u32 {
        let training_max = program::training_max(one_rep_max, self.settings.training_max_percent);
        self.set_training_max(lift, training_max);
        training_max
    }

    pub fn set_training_max(&mut self, lift: Lift, training_max: u32) {
        self.training_maxes.insert(lift, training_max);
    }

    #[must_use]
    pub fn training_max(&self, lift: Lift) -> Option<u32> {
        self.training_maxes.get(&lift).copied()
    }

    #[must_use]
    pub fn position(&self) -> CyclePosition {
        self.position
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    ///
    /// # Errors
    /// If the current lift has no training max or the plate settings are invalid.
    ///
    pub fn today(&self) -> Result<Workout, ProfileError> {
        let lift = self.position.lift();
        let training_max = self
            .training_max(lift)
            .ok_or(ProfileError::MissingTrainingMax(lift))?;

        Ok(Workout::prescribe(
            lift,
            self.settings.template,
            self.position.week(),
            training_max,
            &self.settings.inventory()?,
            &self.settings.solver(),
        ))
    }

    /// Logs today's AMRAP result, if any, and moves on to the next day.
    ///
    /// Finishing a cycle raises every training max by its lift's increment.
    ///
    /// # Errors
    /// See [`Profile::today`].
    ///
    pub fn complete_day(
        &mut self,
        date: NaiveDate,
        amrap_reps: Option<u32>,
    ) -> Result<Advance, ProfileError> {
        let workout = self.today()?;

        if let (Some(set), Some(reps)) = (workout.amrap(), amrap_reps) {
            self.history.record(Completion {
                date,
                lift: workout.lift(),
                cycle: self.position.cycle(),
                week: workout.week(),
                weight: set.weight(),
                reps,
            });
        }

        let advance = self.position.advance();
        if advance == Advance::NewCycle {
            for (lift, training_max) in &mut self.training_maxes {
                *training_max = training_max.saturating_add(lift.cycle_increment());
            }
            info!(
                "Starting cycle {} with training maxes {:?}",
                self.position.cycle(),
                self.training_maxes
            );
        }

        Ok(advance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        let mut profile = Profile::default();
        for lift in Lift::all() {
            profile.set_one_rep_max(*lift, 100_000);
        }
        profile
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn derives_training_max() {
        let mut profile = Profile::default();
        assert_eq!(profile.set_one_rep_max(Lift::Squat, 140_000), 126_000);
        assert_eq!(profile.training_max(Lift::Squat), Some(126_000));
    }

    #[test]
    fn missing_training_max() {
        assert_eq!(
            Profile::default().today(),
            Err(ProfileError::MissingTrainingMax(Lift::OverheadPress))
        );
    }

    #[test]
    fn records_amrap_and_advances() {
        let mut profile = profile();
        assert_eq!(profile.complete_day(date(), Some(8)), Ok(Advance::NextDay));

        let logged = profile.history().for_lift(Lift::OverheadPress);
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].weight, 76_500);
        assert_eq!(logged[0].reps, 8);
        assert_eq!(profile.position().lift(), Lift::Deadlift);
    }

    #[test]
    fn new_cycle_bumps_training_maxes() {
        let mut profile = profile();
        let advances = (0..16)
            .map(|_| profile.complete_day(date(), None).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(advances.last(), Some(&Advance::NewCycle));
        assert!(profile.history().is_empty());
        assert_eq!(profile.training_max(Lift::Squat), Some(95_000));
        assert_eq!(profile.training_max(Lift::Bench), Some(92_500));
        assert_eq!(profile.position().cycle(), 2);
    }
}
