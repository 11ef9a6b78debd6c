use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{load_error::LoadError, units};

/// Desired total bar weight: the bar plus every plate on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadingTarget {
    total: u32,
}

impl LoadingTarget {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        LoadingTarget { total }
    }

    ///
    /// # Errors
    /// If `kg` is not a finite, strictly positive weight.
    ///
    pub fn from_kg(kg: f64) -> Result<Self, LoadError> {
        units::grams(kg)
            .map(LoadingTarget::new)
            .ok_or(LoadError::InvalidTarget(kg))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn kg(&self) -> f64 {
        units::kg(self.total)
    }
}

impl Display for LoadingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kg", self.kg())
    }
}

impl FromStr for LoadingTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let weight = s.strip_suffix("kg").unwrap_or(&s).trim();
        let weight = weight
            .parse::<f64>()
            .map_err(|_| "Invalid weight".to_string())?;
        LoadingTarget::from_kg(weight).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_suffix() {
        assert_eq!("102.5".parse::<LoadingTarget>().unwrap().total(), 102_500);
        assert_eq!("100KG".parse::<LoadingTarget>().unwrap().total(), 100_000);
        assert_eq!(" 60 kg".parse::<LoadingTarget>().unwrap().total(), 60_000);
    }

    #[test]
    fn rejects_garbage() {
        assert!("heavy".parse::<LoadingTarget>().is_err());
        assert!("-20".parse::<LoadingTarget>().is_err());
        assert!("0kg".parse::<LoadingTarget>().is_err());
    }
}
