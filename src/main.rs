use std::{
    env::args,
    fs,
    io::{stdin, stdout},
    process::exit,
};

use lifegrid::{seed, setup, Boundary, Config, Evolver, Generation, Sim, View};

const USAGE: &str = "usage: lifegrid [--wrap] [--seed N] [PATTERN_FILE]";

#[derive(Debug, Default)]
struct Args {
    wrap: bool,
    seed: Option<u64>,
    path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut result = Args::default();
    while let Some(arg) = args.next() {
        if arg == "--wrap" {
            result.wrap = true;
        } else if arg == "--seed" {
            let value = args.next().ok_or_else(|| format!("--seed needs a value\n{USAGE}"))?;
            let seed = value
                .parse()
                .map_err(|_| format!("invalid seed {value:?}: expected a whole number"))?;
            result.seed = Some(seed);
        } else if arg == "-h" || arg == "--help" {
            return Err(USAGE.to_string());
        } else if arg.starts_with('-') {
            return Err(format!("unknown option {arg}\n{USAGE}"));
        } else if result.path.is_none() {
            result.path = Some(arg);
        } else {
            return Err(USAGE.to_string());
        }
    }
    Ok(result)
}

fn load(path: Option<String>, rng_seed: Option<u64>) -> Result<(Config, Generation), String> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|err| format!("{path}: {err}"))?;
            let generation =
                seed::parse_pattern(&content).map_err(|err| format!("{path}: {err}"))?;
            eprintln!("[info] loaded {path}");
            Ok((Config::default(), generation))
        }
        None => {
            let mut config =
                setup::prompt(stdin().lock(), stdout()).map_err(|err| err.to_string())?;
            config.seed = rng_seed;
            let generation = config.initial_generation().map_err(|err| err.to_string())?;
            Ok((config, generation))
        }
    }
}

pub fn main() {
    let (config, initial) = parse_args(args().skip(1))
        .and_then(|args| {
            let (mut config, initial) = load(args.path, args.seed)?;
            if args.wrap {
                config.boundary = Boundary::Toroidal;
            }
            Ok((config, initial))
        })
        .unwrap_or_else(|err| {
            eprintln!("[error] {err}");
            exit(1);
        });

    let evolver = Evolver::new(config.boundary);
    let simulation = Sim::spawn(initial, evolver, config.tick_interval);
    let view = View::spawn(simulation.handle(), config.glyphs);

    let view_result = view.join();
    if simulation.join().is_err() {
        eprintln!("[error] simulation thread panicked");
        exit(1);
    }
    if let Err(err) = view_result {
        eprintln!("[error] {err}");
        exit(1);
    }
}
