use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{bar::Bar, load_error::InventoryError, plate::Plate};

/// Plate sizes used when nothing else is configured, in kilograms.
pub const DEFAULT_DENOMINATIONS: [f64; 6] = [25.0, 20.0, 10.0, 5.0, 2.5, 1.25];

/// The bar and the distinct plate sizes available for it.
///
/// Every denomination is assumed to come in pairs, one plate per side.
/// Denominations are kept deduplicated and sorted heaviest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInventory", into = "RawInventory")]
pub struct PlateInventory {
    bar: Bar,
    denominations: Vec<Plate>,
}

impl PlateInventory {
    ///
    /// # Errors
    /// If the bar weight or any denomination is not positive, or no denominations are given.
    ///
    pub fn new(bar_kg: f64, denominations_kg: &[f64]) -> Result<Self, InventoryError> {
        Self::from_parts(Bar::from_kg(bar_kg)?, Plate::from_weights(denominations_kg)?)
    }

    ///
    /// # Errors
    /// If `denominations` is empty or holds a zero-weight plate.
    ///
    pub fn from_parts(bar: Bar, denominations: Vec<Plate>) -> Result<Self, InventoryError> {
        if bar.weight() == 0 {
            return Err(InventoryError::InvalidBarWeight(bar.kg()));
        }
        if let Some(plate) = denominations.iter().find(|p| p.weight() == 0) {
            return Err(InventoryError::InvalidDenomination(plate.kg()));
        }

        let denominations = denominations
            .into_iter()
            .sorted_by(|a, b| b.cmp(a))
            .dedup()
            .collect::<Vec<_>>();

        if denominations.is_empty() {
            return Err(InventoryError::NoDenominations);
        }

        Ok(PlateInventory { bar, denominations })
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    /// Heaviest first.
    #[must_use]
    pub fn denominations(&self) -> &[Plate] {
        &self.denominations
    }

    #[must_use]
    pub fn contains(&self, plate: Plate) -> bool {
        self.denominations.contains(&plate)
    }
}

impl Default for PlateInventory {
    fn default() -> Self {
        PlateInventory {
            bar: Bar::default(),
            denominations: DEFAULT_DENOMINATIONS
                .iter()
                .filter_map(|kg| Plate::from_kg(*kg).ok())
                .collect(),
        }
    }
}

impl Display for PlateInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} with plates [{}]",
            self.bar,
            self.denominations.iter().join(", ")
        )
    }
}

#[derive(Serialize, Deserialize)]
struct RawInventory {
    bar: Bar,
    denominations: Vec<Plate>,
}

impl TryFrom<RawInventory> for PlateInventory {
    type Error = InventoryError;

    fn try_from(raw: RawInventory) -> Result<Self, Self::Error> {
        PlateInventory::from_parts(raw.bar, raw.denominations)
    }
}

impl From<PlateInventory> for RawInventory {
    fn from(inventory: PlateInventory) -> Self {
        RawInventory {
            bar: inventory.bar,
            denominations: inventory.denominations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let inventory = PlateInventory::new(20.0, &[1.25, 25.0, 5.0, 25.0, 2.5]).unwrap();
        let weights = inventory
            .denominations()
            .iter()
            .map(Plate::weight)
            .collect::<Vec<_>>();
        assert_eq!(weights, vec![25_000, 5_000, 2_500, 1_250]);
    }

    #[test]
    fn default_matches_standard_gym() {
        let inventory = PlateInventory::default();
        assert_eq!(inventory.bar().weight(), 20_000);
        assert_eq!(inventory.denominations().len(), 6);
        assert!(inventory.contains(Plate::new(1_250)));
        assert!(!inventory.contains(Plate::new(15_000)));
    }

    #[test]
    fn rejects_invalid_inventories() {
        assert_eq!(
            PlateInventory::new(20.0, &[]),
            Err(InventoryError::NoDenominations)
        );
        assert_eq!(
            PlateInventory::new(0.0, &[25.0]),
            Err(InventoryError::InvalidBarWeight(0.0))
        );
        assert_eq!(
            PlateInventory::new(20.0, &[25.0, -1.0]),
            Err(InventoryError::InvalidDenomination(-1.0))
        );
    }

    #[test]
    fn deserialisation_validates() {
        let parsed: PlateInventory =
            serde_json::from_str(r#"{"bar": 15000, "denominations": [1250, 10000]}"#).unwrap();
        assert_eq!(parsed.denominations()[0], Plate::new(10_000));

        let empty = r#"{"bar": 15000, "denominations": []}"#;
        assert!(serde_json::from_str::<PlateInventory>(empty).is_err());
    }
}
