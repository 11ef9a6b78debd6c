use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::{LevelFilter, info, warn};
use wendler_rs::{
    config::Settings,
    lift::Lift,
    profile::Profile,
    program::{self, Week},
    rest::RestTimer,
    store::{JsonFileStore, ProfileStore},
    target::LoadingTarget,
    units,
    workout::Workout,
};

#[derive(Parser)]
#[command(name = "wendler", version, about = "5/3/1 training assistant")]
struct Args {
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plates per side for a bar weight, e.g. `load 102.5kg`.
    Load {
        #[arg(value_parser = clap::value_parser!(LoadingTarget))]
        target: LoadingTarget,
        /// Show this many alternatives instead of only the best loading.
        #[arg(short, long)]
        k: Option<usize>,
    },
    /// Training max for a one-rep max in kg.
    Tm { one_rep_max: f64 },
    /// Sets and plates for one lift and week.
    Plan {
        #[arg(long)]
        lift: Lift,
        #[arg(long)]
        week: u8,
        /// Training max in kg.
        #[arg(long)]
        training_max: f64,
    },
    /// Set a lift's one-rep max in the profile.
    Max {
        #[arg(long, default_value = "profile.json")]
        profile: PathBuf,
        lift: Lift,
        one_rep_max: f64,
    },
    /// Show the next workout from the profile.
    Next {
        #[arg(long, default_value = "profile.json")]
        profile: PathBuf,
    },
    /// Mark the next workout done, logging the AMRAP reps.
    Done {
        #[arg(long, default_value = "profile.json")]
        profile: PathBuf,
        #[arg(short, long)]
        reps: Option<u32>,
    },
    /// Count down a rest interval.
    Rest { seconds: Option<u64> },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let settings = match &args.config_file {
        None => {
            warn!("No config file provided, using default bar and plates");
            Settings::default()
        }
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("incorrect config file: {}", path.display()))?,
    };
    info!("Settings: {settings:?}");

    match args.command {
        Command::Load { target, k } => {
            let inventory = settings.inventory()?;
            let solver = settings.solver();
            println!("{inventory}");

            match k {
                None => println!("{}", solver.solve(target, &inventory)?),
                Some(k) => {
                    let loadings = solver.solve_top_k(target, &inventory, k)?;
                    for (i, loading) in loadings.iter().enumerate() {
                        println!("{}. {loading}", i + 1);
                    }
                }
            }
        }
        Command::Tm { one_rep_max } => {
            let one_rep_max = grams(one_rep_max)?;
            let training_max = program::training_max(one_rep_max, settings.training_max_percent);
            println!("{}kg", units::kg(training_max));
        }
        Command::Plan {
            lift,
            week,
            training_max,
        } => {
            let workout = Workout::prescribe(
                lift,
                settings.template,
                Week::new(week)?,
                grams(training_max)?,
                &settings.inventory()?,
                &settings.solver(),
            );
            print!("{workout}");
        }
        Command::Max {
            profile,
            lift,
            one_rep_max,
        } => {
            let store = JsonFileStore::new(profile);
            let mut profile = load_profile(&store, settings)?;
            let training_max = profile.set_one_rep_max(lift, grams(one_rep_max)?);
            store.save(&profile)?;
            println!("{lift}: training max {}kg", units::kg(training_max));
        }
        Command::Next { profile } => {
            let store = JsonFileStore::new(profile);
            let profile = load_profile(&store, settings)?;
            println!("{}", profile.position());
            print!("{}", profile.today()?);
        }
        Command::Done { profile, reps } => {
            let store = JsonFileStore::new(profile);
            let mut profile = load_profile(&store, settings)?;
            let advance = profile.complete_day(Local::now().date_naive(), reps)?;
            store.save(&profile)?;
            info!("{advance:?}");
            println!("Next: {}", profile.position());
        }
        Command::Rest { seconds } => {
            let timer = seconds.map_or_else(
                || settings.rest_timer(),
                |s| RestTimer::new(Duration::from_secs(s)),
            );
            let rest = timer.start(Instant::now());
            while !rest.is_done(Instant::now()) {
                let remaining = rest.remaining(Instant::now()).as_secs();
                println!("{}:{:02}", remaining / 60, remaining % 60);
                thread::sleep(Duration::from_secs(1).min(rest.remaining(Instant::now())));
            }
            println!("Rest over");
        }
    }

    Ok(())
}

fn grams(kg: f64) -> anyhow::Result<u32> {
    units::grams(kg).with_context(|| format!("invalid weight {kg}kg"))
}

/// A saved profile keeps its own settings; a new one starts from the config file.
fn load_profile(store: &JsonFileStore, settings: Settings) -> anyhow::Result<Profile> {
    Ok(store
        .load()
        .with_context(|| format!("cannot read profile {}", store.path().display()))?
        .unwrap_or_else(|| Profile::new(settings)))
}
