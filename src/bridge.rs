use crate::load_error::LoadError;
use crate::loading::Loading;
use crate::solver;
use crate::workout::{PrescribedSet, Workout};
use crate::workout_error::WorkoutError;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Loading;
        type LoadError;
        type Alternatives;
        type Workout;
        type PrescribedSet;
        type WorkoutError;

        fn load_bar(
            target_kg: f64,
            bar_kg: f64,
            denominations_kg: Vec<f64>,
        ) -> Result<Loading, LoadError>;
        fn load_bar_alternatives(
            target_kg: f64,
            bar_kg: f64,
            denominations_kg: Vec<f64>,
            k: usize,
        ) -> Result<Alternatives, LoadError>;
        fn prescribe_sets(
            lift: &str,
            template: &str,
            week: u8,
            training_max_kg: f64,
            bar_kg: f64,
            denominations_kg: Vec<f64>,
        ) -> Result<Workout, WorkoutError>;

        fn plates_kg(self: &Loading) -> Vec<f64>;
        fn actual_kg(self: &Loading) -> f64;
        fn error_kg(self: &Loading) -> f64;
        fn per_side_error_kg(self: &Loading) -> f64;
        fn is_exact(self: &Loading) -> bool;

        fn message(self: &LoadError) -> String;
        fn is_no_solution(self: &LoadError) -> bool;

        fn count(self: &Alternatives) -> usize;
        fn loadings(self: &Alternatives) -> Vec<Loading>;

        fn lift_name(self: &Workout) -> String;
        fn prescribed_sets(self: &Workout) -> Vec<PrescribedSet>;

        fn percent(self: &PrescribedSet) -> u32;
        fn reps(self: &PrescribedSet) -> u32;
        fn is_amrap(self: &PrescribedSet) -> bool;
        fn kg(self: &PrescribedSet) -> f64;
        fn is_loadable(self: &PrescribedSet) -> bool;
        fn set_plates_kg(self: &PrescribedSet) -> Vec<f64>;

        fn message(self: &WorkoutError) -> String;
    }
}

/// Ranked loadings for one target, best first.
pub struct Alternatives(Vec<Loading>);

fn load_bar(
    target_kg: f64,
    bar_kg: f64,
    denominations_kg: Vec<f64>,
) -> Result<Loading, LoadError> {
    solver::solve_kg(target_kg, bar_kg, &denominations_kg)
}

fn load_bar_alternatives(
    target_kg: f64,
    bar_kg: f64,
    denominations_kg: Vec<f64>,
    k: usize,
) -> Result<Alternatives, LoadError> {
    solver::solve_top_k_kg(target_kg, bar_kg, &denominations_kg, k).map(Alternatives)
}

fn prescribe_sets(
    lift: &str,
    template: &str,
    week: u8,
    training_max_kg: f64,
    bar_kg: f64,
    denominations_kg: Vec<f64>,
) -> Result<Workout, WorkoutError> {
    Workout::prescribe_kg(
        lift,
        template,
        week,
        training_max_kg,
        bar_kg,
        &denominations_kg,
    )
}

impl Alternatives {
    fn count(&self) -> usize {
        self.0.len()
    }

    fn loadings(&self) -> Vec<Loading> {
        self.0.clone()
    }
}

impl LoadError {
    fn message(&self) -> String {
        self.to_string()
    }
}

impl Workout {
    fn lift_name(&self) -> String {
        self.lift().display_name().to_string()
    }

    fn prescribed_sets(&self) -> Vec<PrescribedSet> {
        self.sets().to_vec()
    }
}

impl PrescribedSet {
    fn percent(&self) -> u32 {
        self.scheme().percent
    }

    fn reps(&self) -> u32 {
        self.scheme().reps
    }

    fn is_amrap(&self) -> bool {
        self.scheme().amrap
    }

    fn is_loadable(&self) -> bool {
        self.loading().is_ok()
    }

    fn set_plates_kg(&self) -> Vec<f64> {
        self.loading().map(Loading::plates_kg).unwrap_or_default()
    }
}

impl WorkoutError {
    fn message(&self) -> String {
        self.to_string()
    }
}
