//! 5/3/1 percentage tables and the rounding rules built on them.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Set weights and training maxes are rounded to this many grams.
pub const ROUNDING: u32 = 500;

/// Training max as a percentage of a true one-rep max.
pub const DEFAULT_TRAINING_MAX_PERCENT: u32 = 90;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("Week must be between 1 and 4, got {0}.")]
    InvalidWeek(u8),
    #[error("Unknown template {0}, expected one of 555, 333, 531.")]
    UnknownTemplate(String),
}

/// One prescribed set: a percentage of the training max for a number of reps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetScheme {
    pub percent: u32,
    pub reps: u32,
    /// At least `reps`, then as many as possible.
    pub amrap: bool,
}

const fn set(percent: u32, reps: u32) -> SetScheme {
    SetScheme {
        percent,
        reps,
        amrap: false,
    }
}

const fn amrap(percent: u32, reps: u32) -> SetScheme {
    SetScheme {
        percent,
        reps,
        amrap: true,
    }
}

const DELOAD: [SetScheme; 3] = [set(40, 5), set(50, 5), set(60, 5)];

const FIVE_THREE_ONE: [[SetScheme; 3]; 4] = [
    [set(65, 5), set(75, 5), amrap(85, 5)],
    [set(70, 3), set(80, 3), amrap(90, 3)],
    [set(75, 5), set(85, 3), amrap(95, 1)],
    DELOAD,
];

const FIVE_FIVE_FIVE: [[SetScheme; 3]; 4] = [
    [set(65, 5), set(75, 5), amrap(85, 5)],
    [set(70, 5), set(80, 5), amrap(90, 5)],
    [set(75, 5), set(85, 5), amrap(95, 5)],
    DELOAD,
];

const THREE_THREE_THREE: [[SetScheme; 3]; 4] = [
    [set(65, 3), set(75, 3), amrap(85, 3)],
    [set(70, 3), set(80, 3), amrap(90, 3)],
    [set(75, 3), set(85, 3), amrap(95, 3)],
    DELOAD,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    #[serde(rename = "555")]
    FiveFiveFive,
    #[serde(rename = "333")]
    ThreeThreeThree,
    #[default]
    #[serde(rename = "531")]
    FiveThreeOne,
}

impl Template {
    #[must_use]
    pub fn all() -> &'static [Template] {
        &[
            Template::FiveFiveFive,
            Template::ThreeThreeThree,
            Template::FiveThreeOne,
        ]
    }

    /// The main work sets for `week`, lightest first.
    #[must_use]
    pub fn sets(&self, week: Week) -> &'static [SetScheme] {
        let table = match self {
            Template::FiveFiveFive => &FIVE_FIVE_FIVE,
            Template::ThreeThreeThree => &THREE_THREE_THREE,
            Template::FiveThreeOne => &FIVE_THREE_ONE,
        };

        &table[usize::from(week.number() - 1)]
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::FiveFiveFive => write!(f, "5/5/5+"),
            Template::ThreeThreeThree => write!(f, "3/3/3+"),
            Template::FiveThreeOne => write!(f, "5/3/1+"),
        }
    }
}

impl FromStr for Template {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('+').replace('/', "").as_str() {
            "555" => Ok(Template::FiveFiveFive),
            "333" => Ok(Template::ThreeThreeThree),
            "531" => Ok(Template::FiveThreeOne),
            _ => Err(ProgramError::UnknownTemplate(s.to_string())),
        }
    }
}

/// Week of a four-week cycle. Week 4 is the deload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    pub const COUNT: u8 = 4;
    pub const FIRST: Week = Week(1);
    pub const DELOAD: Week = Week(4);

    ///
    /// # Errors
    /// If `number` is outside `1..=4`.
    ///
    pub fn new(number: u8) -> Result<Self, ProgramError> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(Week(number))
        } else {
            Err(ProgramError::InvalidWeek(number))
        }
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_deload(&self) -> bool {
        *self == Self::DELOAD
    }

    /// The following week, or `None` after the deload.
    #[must_use]
    pub fn next(&self) -> Option<Week> {
        Week::new(self.0 + 1).ok()
    }
}

impl TryFrom<u8> for Week {
    type Error = ProgramError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Week::new(number)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Week {}", self.0)
    }
}

/// `weight × percent / 100`, rounded to the nearest 0.5 kg with halves rounding up.
#[must_use]
pub fn round_percent(weight: u32, percent: u32) -> u32 {
    let half = u64::from(ROUNDING) * 100;
    let steps = (u64::from(weight) * u64::from(percent) + half / 2) / half;
    u32::try_from(steps * u64::from(ROUNDING)).unwrap_or(u32::MAX)
}

/// Weight for a set at `percent` of `training_max`, both in grams.
#[must_use]
pub fn set_weight(training_max: u32, percent: u32) -> u32 {
    round_percent(training_max, percent)
}

/// Training max derived from a one-rep max, both in grams.
#[must_use]
pub fn training_max(one_rep_max: u32, percent: u32) -> u32 {
    round_percent(one_rep_max, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_week_three() {
        let sets = Template::FiveThreeOne.sets(Week::new(3).unwrap());
        assert_eq!(sets.iter().map(|s| s.reps).collect::<Vec<_>>(), vec![5, 3, 1]);
        assert_eq!(sets.iter().map(|s| s.percent).collect::<Vec<_>>(), vec![75, 85, 95]);
        assert!(sets[2].amrap);
        assert!(!sets[1].amrap);
    }

    #[test]
    fn deload_is_shared_and_has_no_amrap() {
        for template in Template::all() {
            let sets = template.sets(Week::DELOAD);
            assert_eq!(sets, &DELOAD);
            assert!(sets.iter().all(|s| !s.amrap));
        }
    }

    #[test]
    fn every_work_week_ends_in_amrap() {
        for template in Template::all() {
            for week in 1..Week::COUNT {
                let sets = template.sets(Week::new(week).unwrap());
                assert!(sets.last().unwrap().amrap);
            }
        }
    }

    #[test]
    fn rounds_to_half_kilo() {
        assert_eq!(set_weight(100_000, 65), 65_000);
        // 92.5 x 0.85 = 78.625
        assert_eq!(set_weight(92_500, 85), 78_500);
        // 95 x 0.75 = 71.25, half way rounds up
        assert_eq!(set_weight(95_000, 75), 71_500);
        assert_eq!(training_max(140_000, 90), 126_000);
        assert_eq!(training_max(137_500, 90), 124_000);
    }

    #[test]
    fn weeks_are_bounded() {
        assert_eq!(Week::new(0), Err(ProgramError::InvalidWeek(0)));
        assert_eq!(Week::new(5), Err(ProgramError::InvalidWeek(5)));
        assert_eq!(Week::new(3).unwrap().next(), Some(Week::DELOAD));
        assert_eq!(Week::DELOAD.next(), None);
    }

    #[test]
    fn parses_templates() {
        assert_eq!("5/3/1+".parse::<Template>(), Ok(Template::FiveThreeOne));
        assert_eq!("555".parse::<Template>(), Ok(Template::FiveFiveFive));
        assert_eq!("3/3/3".parse::<Template>(), Ok(Template::ThreeThreeThree));
        assert!("deload".parse::<Template>().is_err());
    }
}
