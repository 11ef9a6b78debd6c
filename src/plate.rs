use std::{fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

use crate::{load_error::InventoryError, units};

/// A single plate denomination, in grams.
#[derive(
    Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Plate {
    weight: u32,
}

impl Plate {
    #[must_use]
    pub const fn new(weight: u32) -> Self {
        Plate { weight }
    }

    ///
    /// # Errors
    /// If `kg` is not a finite, strictly positive weight.
    ///
    pub fn from_kg(kg: f64) -> Result<Self, InventoryError> {
        units::grams(kg)
            .map(Plate::new)
            .ok_or(InventoryError::InvalidDenomination(kg))
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kg(&self) -> f64 {
        units::kg(self.weight)
    }

    ///
    /// # Errors
    /// On the first weight that is not a valid plate.
    ///
    pub fn from_weights(weights: &[f64]) -> Result<Vec<Plate>, InventoryError> {
        weights.iter().map(|w| Plate::from_kg(*w)).collect()
    }
}

impl Sum for Plate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Plate::new(0), |acc, plate| {
            Plate::new(acc.weight.saturating_add(plate.weight))
        })
    }
}

impl<'a> Sum<&'a Plate> for Plate {
    fn sum<I: Iterator<Item = &'a Plate>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kg())
    }
}
