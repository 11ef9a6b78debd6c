use std::fmt::Display;

use crate::{
    inventory::PlateInventory,
    lift::Lift,
    load_error::LoadError,
    loading::Loading,
    program::{self, SetScheme, Template, Week},
    solver::Solver,
    target::LoadingTarget,
    units,
    workout_error::WorkoutError,
};

/// One set of the day with the plates needed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct PrescribedSet {
    scheme: SetScheme,
    weight: u32,
    loading: Result<Loading, LoadError>,
}

impl PrescribedSet {
    #[must_use]
    pub fn scheme(&self) -> SetScheme {
        self.scheme
    }

    /// Prescribed bar weight in grams.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kg(&self) -> f64 {
        units::kg(self.weight)
    }

    /// The plates for this set, or why it cannot be loaded (e.g. lighter than the bar).
    #[must_use]
    pub fn loading(&self) -> Result<&Loading, &LoadError> {
        self.loading.as_ref()
    }
}

impl Display for PrescribedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% x {}{}: {}kg, ",
            self.scheme.percent,
            self.scheme.reps,
            if self.scheme.amrap { "+" } else { "" },
            self.kg()
        )?;

        match &self.loading {
            Ok(loading) => write!(f, "{loading}"),
            Err(e) => write!(f, "cannot load ({e})"),
        }
    }
}

/// A day's main work for one lift.
#[derive(Clone, Debug, PartialEq)]
pub struct Workout {
    lift: Lift,
    template: Template,
    week: Week,
    sets: Vec<PrescribedSet>,
}

impl Workout {
    #[must_use]
    pub fn prescribe(
        lift: Lift,
        template: Template,
        week: Week,
        training_max: u32,
        inventory: &PlateInventory,
        solver: &Solver,
    ) -> Self {
        let sets = template
            .sets(week)
            .iter()
            .map(|scheme| {
                let weight = program::set_weight(training_max, scheme.percent);
                PrescribedSet {
                    scheme: *scheme,
                    weight,
                    loading: solver.solve(LoadingTarget::new(weight), inventory),
                }
            })
            .collect();

        Workout {
            lift,
            template,
            week,
            sets,
        }
    }

    /// Prescribes from raw names and kilogram values, as entered in the app.
    ///
    /// # Errors
    /// If the lift, template, week, training max or inventory is not valid. Sets that
    /// cannot be loaded are still prescribed and carry their own error.
    ///
    pub fn prescribe_kg(
        lift: &str,
        template: &str,
        week: u8,
        training_max_kg: f64,
        bar_kg: f64,
        denominations_kg: &[f64],
    ) -> Result<Self, WorkoutError> {
        let lift = lift
            .parse::<Lift>()
            .map_err(|_| WorkoutError::UnknownLift(lift.to_string()))?;
        let template = template.parse::<Template>()?;
        let week = Week::new(week)?;
        let training_max = units::grams(training_max_kg)
            .ok_or(WorkoutError::InvalidTrainingMax(training_max_kg))?;
        let inventory = PlateInventory::new(bar_kg, denominations_kg)?;

        Ok(Workout::prescribe(
            lift,
            template,
            week,
            training_max,
            &inventory,
            &Solver::default(),
        ))
    }

    #[must_use]
    pub fn lift(&self) -> Lift {
        self.lift
    }

    #[must_use]
    pub fn template(&self) -> Template {
        self.template
    }

    #[must_use]
    pub fn week(&self) -> Week {
        self.week
    }

    #[must_use]
    pub fn sets(&self) -> &[PrescribedSet] {
        &self.sets
    }

    /// The closing as-many-reps-as-possible set, if this week has one.
    #[must_use]
    pub fn amrap(&self) -> Option<&PrescribedSet> {
        self.sets.iter().find(|set| set.scheme.amrap)
    }
}

impl Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} - {} ({})", self.lift, self.week, self.template)?;
        for set in &self.sets {
            writeln!(f, "  - {set}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Workout {
    type Item = PrescribedSet;
    type IntoIter = std::vec::IntoIter<PrescribedSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}
