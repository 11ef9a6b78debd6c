use thiserror::Error;

use crate::plate::Plate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Bar weight must be a positive number of kilograms, got {0}.")]
    InvalidBarWeight(f64),
    #[error("Plate weight must be a positive number of kilograms, got {0}.")]
    InvalidDenomination(f64),
    #[error("At least one plate denomination is required.")]
    NoDenominations,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Cannot load {target_kg}kg: it is not heavier than the {bar_kg}kg bar.")]
    NoSolution { target_kg: f64, bar_kg: f64 },
    #[error("Invalid plate inventory: {0}")]
    InvalidInventory(#[from] InventoryError),
    #[error("Target weight must be a positive number of kilograms, got {0}.")]
    InvalidTarget(f64),
    #[error("Plate {0}kg is not in the inventory.")]
    UnknownPlate(Plate),
    #[error("Plate {plate}kg is used {count} times per side, at most {cap} allowed.")]
    CapExceeded { plate: Plate, count: usize, cap: usize },
    #[error("Overshoot limit must be zero or more kilograms, got {0}.")]
    InvalidOvershootLimit(f64),
}

impl LoadError {
    /// Whether the target was simply too light for the bar, as opposed to bad input.
    #[must_use]
    pub fn is_no_solution(&self) -> bool {
        matches!(self, LoadError::NoSolution { .. })
    }
}
