use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    inventory::PlateInventory,
    load_error::LoadError,
    loading::Loading,
    target::LoadingTarget,
    units,
};

/// Plates of one size a lifter can fit per side in a typical gym.
pub const DEFAULT_MAX_PER_DENOMINATION: usize = 2;

/// Leaves visited before the search gives up and keeps its best result.
pub const DEFAULT_SEARCH_BUDGET: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// How many plates of a single denomination may go on one side.
    pub max_per_denomination: usize,
    /// Longest plate stack allowed on one side, if limited.
    pub max_plates_per_side: Option<usize>,
    /// Discard stacks heavier than the per-side target by more than this many kg.
    /// Must be zero or more.
    pub overshoot_limit: Option<f64>,
    pub search_budget: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_per_denomination: DEFAULT_MAX_PER_DENOMINATION,
            max_plates_per_side: None,
            overshoot_limit: None,
            search_budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

/// Chooses plates per side to get a bar as close as possible to a target weight.
///
/// The search enumerates every count vector `0..=max_per_denomination` over the
/// inventory's denominations and keeps the best ranked loading (see [`Loading::rank`]).
/// It holds no state between calls and can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    ///
    /// # Errors
    /// `NoSolution` if the target is not heavier than the bar, `InvalidOvershootLimit`
    /// if the configured limit is negative or not a number.
    ///
    pub fn solve(
        &self,
        target: LoadingTarget,
        inventory: &PlateInventory,
    ) -> Result<Loading, LoadError> {
        self.check(target, inventory)?;

        let best = self
            .candidates(target, inventory, self.overshoot()?)
            .min_by(Loading::rank)
            .unwrap_or_else(|| Loading::new(vec![], inventory.bar(), target));

        debug!("[SOLVER] {target} -> {best}");
        Ok(best)
    }

    /// The `k` best distinct loadings, best first.
    ///
    /// # Errors
    /// See [`Solver::solve`].
    ///
    pub fn solve_top_k(
        &self,
        target: LoadingTarget,
        inventory: &PlateInventory,
        k: usize,
    ) -> Result<Vec<Loading>, LoadError> {
        self.check(target, inventory)?;

        Ok(self
            .candidates(target, inventory, self.overshoot()?)
            .sorted_by(Loading::rank)
            .dedup_by(|a, b| a.plates_per_side() == b.plates_per_side())
            .take(k)
            .collect())
    }

    /// Largest plate first, as many as fit without passing the target.
    ///
    /// Cheap, but not always optimal: skipping a big plate can leave room for a closer fit.
    ///
    /// # Errors
    /// `NoSolution` if the target is not heavier than the bar.
    ///
    pub fn greedy(
        &self,
        target: LoadingTarget,
        inventory: &PlateInventory,
    ) -> Result<Loading, LoadError> {
        let mut remaining = self.check(target, inventory)?;
        let mut plates = Vec::new();

        for plate in inventory.denominations() {
            let pair = u64::from(plate.weight()) * 2;
            let mut used = 0;

            while used < self.config.max_per_denomination
                && pair <= remaining
                && self.config.max_plates_per_side.is_none_or(|max| plates.len() < max)
            {
                plates.push(*plate);
                remaining -= pair;
                used += 1;
            }
        }

        Ok(Loading::new(plates, inventory.bar(), target))
    }

    ///
    /// # Errors
    /// If `loading` uses a plate missing from `inventory`, or more of one plate than allowed.
    ///
    pub fn validate(
        &self,
        loading: &Loading,
        inventory: &PlateInventory,
    ) -> Result<(), LoadError> {
        let counts = loading.plates_per_side().iter().copied().counts();

        for (plate, count) in counts.into_iter().sorted_by(|a, b| b.0.cmp(&a.0)) {
            if !inventory.contains(plate) {
                return Err(LoadError::UnknownPlate(plate));
            }
            if count > self.config.max_per_denomination {
                return Err(LoadError::CapExceeded {
                    plate,
                    count,
                    cap: self.config.max_per_denomination,
                });
            }
        }

        Ok(())
    }

    /// Weight the plates must add across both sides, in grams.
    fn check(&self, target: LoadingTarget, inventory: &PlateInventory) -> Result<u64, LoadError> {
        let bar = inventory.bar();
        if target.total() <= bar.weight() {
            return Err(LoadError::NoSolution {
                target_kg: target.kg(),
                bar_kg: bar.kg(),
            });
        }

        self.overshoot()?;
        Ok(u64::from(target.total() - bar.weight()))
    }

    /// Allowed overshoot across both sides, in grams.
    fn overshoot(&self) -> Result<Option<u64>, LoadError> {
        match self.config.overshoot_limit {
            None => Ok(None),
            Some(kg) if kg.is_nan() || kg < 0.0 => Err(LoadError::InvalidOvershootLimit(kg)),
            Some(kg) => Ok(Some(units::grams(kg).map_or(0, u64::from) * 2)),
        }
    }

    fn candidates(
        &self,
        target: LoadingTarget,
        inventory: &PlateInventory,
        overshoot: Option<u64>,
    ) -> impl Iterator<Item = Loading> {
        let config = self.config;
        let denominations = inventory.denominations();
        let needed = u64::from(target.total().saturating_sub(inventory.bar().weight()));

        let leaves = u32::try_from(denominations.len()).ok().and_then(|n| {
            config
                .max_per_denomination
                .checked_add(1)
                .and_then(|base| base.checked_pow(n))
        });
        if leaves.is_none_or(|leaves| leaves > config.search_budget) {
            warn!(
                "[SOLVER] search space of {} denominations exceeds budget of {} combinations, \
                 keeping best found",
                denominations.len(),
                config.search_budget
            );
        }

        denominations
            .iter()
            .map(move |_| 0..=config.max_per_denomination)
            .multi_cartesian_product()
            .take(config.search_budget.max(1))
            .filter(move |counts| {
                config
                    .max_plates_per_side
                    .is_none_or(|max| counts.iter().sum::<usize>() <= max)
            })
            .map(move |counts| {
                counts
                    .into_iter()
                    .zip(denominations)
                    .flat_map(|(count, plate)| std::iter::repeat_n(*plate, count))
                    .collect::<Vec<_>>()
            })
            .filter(move |plates| {
                overshoot.is_none_or(|limit| {
                    let per_side = plates.iter().map(|p| u64::from(p.weight())).sum::<u64>();
                    per_side * 2 <= needed + limit
                })
            })
            .map(move |plates| Loading::new(plates, inventory.bar(), target))
    }
}

///
/// # Errors
/// `NoSolution` if the target is not heavier than the bar.
///
pub fn solve(target: LoadingTarget, inventory: &PlateInventory) -> Result<Loading, LoadError> {
    Solver::default().solve(target, inventory)
}

///
/// # Errors
/// `NoSolution` if the target is not heavier than the bar.
///
pub fn solve_top_k(
    target: LoadingTarget,
    inventory: &PlateInventory,
    k: usize,
) -> Result<Vec<Loading>, LoadError> {
    Solver::default().solve_top_k(target, inventory, k)
}

///
/// # Errors
/// `NoSolution` if the target is not heavier than the bar.
///
pub fn greedy(target: LoadingTarget, inventory: &PlateInventory) -> Result<Loading, LoadError> {
    Solver::default().greedy(target, inventory)
}

///
/// # Errors
/// If `loading` uses an unknown plate or more than two of one plate per side.
///
pub fn validate(loading: &Loading, inventory: &PlateInventory) -> Result<(), LoadError> {
    Solver::default().validate(loading, inventory)
}

/// Solves straight from kilogram values.
///
/// # Errors
/// `InvalidInventory` for a bad bar or plate set, `InvalidTarget` for a non-finite target,
/// `NoSolution` if the target is not heavier than the bar.
///
pub fn solve_kg(
    target_kg: f64,
    bar_kg: f64,
    denominations_kg: &[f64],
) -> Result<Loading, LoadError> {
    let inventory = PlateInventory::new(bar_kg, denominations_kg)?;
    solve(target_from_kg(target_kg, &inventory)?, &inventory)
}

///
/// # Errors
/// See [`solve_kg`].
///
pub fn solve_top_k_kg(
    target_kg: f64,
    bar_kg: f64,
    denominations_kg: &[f64],
    k: usize,
) -> Result<Vec<Loading>, LoadError> {
    let inventory = PlateInventory::new(bar_kg, denominations_kg)?;
    solve_top_k(target_from_kg(target_kg, &inventory)?, &inventory, k)
}

pub(crate) fn target_from_kg(
    target_kg: f64,
    inventory: &PlateInventory,
) -> Result<LoadingTarget, LoadError> {
    if !target_kg.is_finite() {
        return Err(LoadError::InvalidTarget(target_kg));
    }
    if target_kg <= inventory.bar().kg() {
        return Err(LoadError::NoSolution {
            target_kg,
            bar_kg: inventory.bar().kg(),
        });
    }

    LoadingTarget::from_kg(target_kg)
}
