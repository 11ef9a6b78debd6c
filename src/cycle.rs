use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{lift::Lift, program::Week};

/// What changed when moving to the next training day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextDay,
    NextWeek,
    /// The deload is done; training maxes should go up.
    NewCycle,
}

/// Where a lifter is in the program: cycle, week and training day.
///
/// Each week has one day per main lift, trained in [`Lift::all`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePosition {
    cycle: u32,
    week: Week,
    day: u8,
}

impl CyclePosition {
    #[must_use]
    pub fn days_per_week() -> u8 {
        u8::try_from(Lift::all().len()).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    #[must_use]
    pub fn week(&self) -> Week {
        self.week
    }

    /// 1-based day within the week.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn lift(&self) -> Lift {
        Lift::all()[usize::from(self.day.saturating_sub(1)) % Lift::all().len()]
    }

    pub fn advance(&mut self) -> Advance {
        if self.day < Self::days_per_week() {
            self.day += 1;
            return Advance::NextDay;
        }

        self.day = 1;
        match self.week.next() {
            Some(week) => {
                self.week = week;
                Advance::NextWeek
            }
            None => {
                self.week = Week::FIRST;
                self.cycle += 1;
                Advance::NewCycle
            }
        }
    }
}

impl Default for CyclePosition {
    fn default() -> Self {
        CyclePosition {
            cycle: 1,
            week: Week::FIRST,
            day: 1,
        }
    }
}

impl Display for CyclePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cycle {}, {}, Day {} ({})",
            self.cycle,
            self.week,
            self.day,
            self.lift()
        )
    }
}
