use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four main lifts, in the order they are trained through a week.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Lift {
    OverheadPress,
    Deadlift,
    Bench,
    Squat,
}

impl Lift {
    #[must_use]
    pub fn all() -> &'static [Lift] {
        &[Lift::OverheadPress, Lift::Deadlift, Lift::Bench, Lift::Squat]
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Lift::OverheadPress => "Overhead Press",
            Lift::Deadlift => "Deadlift",
            Lift::Bench => "Bench Press",
            Lift::Squat => "Squat",
        }
    }

    /// Training max increase after a completed cycle, in grams.
    #[must_use]
    pub fn cycle_increment(&self) -> u32 {
        match self {
            Lift::OverheadPress | Lift::Bench => 2_500,
            Lift::Deadlift | Lift::Squat => 5_000,
        }
    }
}

impl Display for Lift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Lift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "press" | "ohp" | "overhead" | "overhead press" | "overhead_press" => {
                Ok(Lift::OverheadPress)
            }
            "deadlift" | "dl" => Ok(Lift::Deadlift),
            "bench" | "bench press" | "bp" => Ok(Lift::Bench),
            "squat" | "sq" => Ok(Lift::Squat),
            _ => Err(format!("Unknown lift {s}.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_body_moves_faster() {
        assert_eq!(Lift::Squat.cycle_increment(), 5_000);
        assert_eq!(Lift::Bench.cycle_increment(), 2_500);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("OHP".parse::<Lift>(), Ok(Lift::OverheadPress));
        assert_eq!("bench press".parse::<Lift>(), Ok(Lift::Bench));
        assert!("curl".parse::<Lift>().is_err());
    }
}
