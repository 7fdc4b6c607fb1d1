#[macro_use]
extern crate serde_derive;
extern crate docopt;

use docopt::Docopt;
use failure::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;

mod input;
mod puzzles;

const USAGE: &str = "
Advent of Code 2018.

Usage:
    aoc2018 <day> [--input=<path>]
    aoc2018 (-h | --help)

Options:
    -h --help         Show this screen.
    --input=<path>    Read the puzzle input from <path> instead of input/day_<day>.txt.
";

#[derive(Deserialize)]
struct Args {
    arg_day: usize,
    flag_input: Option<String>,
}

fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn input_file(day: usize, flag_input: Option<String>) -> PathBuf {
    flag_input
        .map(PathBuf::from)
        .unwrap_or_else(|| input::input_path(day))
}

fn main() -> Result<(), Error> {
    let args: Args = Docopt::new(USAGE)
        .and_then(|dopt| dopt.deserialize())
        .unwrap_or_else(|e| e.exit());

    init_logging();

    let day = args.arg_day;
    info!(day, "solving");

    let path = input_file(day, args.flag_input);

    match day {
        1 => puzzles::day1::main(&path),
        2 => puzzles::day2::main(&path),
        _ => {
            eprintln!("Can't solve puzzle for day {}", day);
            Ok(())
        }
    }
}
