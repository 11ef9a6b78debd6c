use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{load_error::InventoryError, units};

/// The empty bar, both sleeves included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar {
    weight: u32,
}

impl Bar {
    #[must_use]
    pub const fn new(weight: u32) -> Self {
        Bar { weight }
    }

    ///
    /// # Errors
    /// If `kg` is not a finite, strictly positive weight.
    ///
    pub fn from_kg(kg: f64) -> Result<Self, InventoryError> {
        units::grams(kg)
            .map(Bar::new)
            .ok_or(InventoryError::InvalidBarWeight(kg))
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kg(&self) -> f64 {
        units::kg(self.weight)
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar::new(20_000)
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bar ({}kg)", self.kg())
    }
}
