use std::{fs::File, io::BufReader, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    inventory::{DEFAULT_DENOMINATIONS, PlateInventory},
    load_error::InventoryError,
    program::{DEFAULT_TRAINING_MAX_PERCENT, Template},
    rest::{DEFAULT_REST, RestTimer},
    solver::{Solver, SolverConfig},
};

/// User settings, read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Empty bar weight in kg
    pub bar_weight: f64,
    /// Plate sizes in kg, each available in pairs
    pub denominations: Vec<f64>,
    pub template: Template,
    /// Training max as a percentage of the one-rep max
    pub training_max_percent: u32,
    pub solver: SolverConfig,
    pub rest_seconds: u64,
}

impl Settings {
    ///
    /// # Errors
    /// If the file cannot be opened or is not valid settings JSON.
    ///
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    ///
    /// # Errors
    /// If the configured bar or plates are invalid.
    ///
    pub fn inventory(&self) -> Result<PlateInventory, InventoryError> {
        PlateInventory::new(self.bar_weight, &self.denominations)
    }

    #[must_use]
    pub fn solver(&self) -> Solver {
        Solver::new(self.solver)
    }

    #[must_use]
    pub fn rest_timer(&self) -> RestTimer {
        RestTimer::new(Duration::from_secs(self.rest_seconds))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bar_weight: 20.0,
            denominations: DEFAULT_DENOMINATIONS.to_vec(),
            template: Template::default(),
            training_max_percent: DEFAULT_TRAINING_MAX_PERCENT,
            solver: SolverConfig::default(),
            rest_seconds: DEFAULT_REST.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"bar_weight": 15, "solver": {"max_per_denomination": 3}}"#)
                .unwrap();

        assert!((settings.bar_weight - 15.0).abs() < f64::EPSILON);
        assert_eq!(settings.denominations, DEFAULT_DENOMINATIONS.to_vec());
        assert_eq!(settings.template, Template::FiveThreeOne);
        assert_eq!(settings.solver.max_per_denomination, 3);
        assert_eq!(settings.solver.search_budget, SolverConfig::default().search_budget);
    }

    #[test]
    fn default_inventory_is_valid() {
        assert_eq!(
            Settings::default().inventory().unwrap(),
            PlateInventory::default()
        );
    }

    #[test]
    fn rejects_bad_plates() {
        let settings = Settings {
            denominations: vec![],
            ..Settings::default()
        };
        assert_eq!(settings.inventory(), Err(InventoryError::NoDenominations));
    }
}
