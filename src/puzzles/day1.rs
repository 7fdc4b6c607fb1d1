use std::collections::HashSet;
use std::convert::TryFrom;
use std::num::ParseIntError;
use std::path::Path;

use failure::{Error, Fail};
use tracing::{debug, error};

use crate::input::read_input_file;

pub(crate) type Frequency = i64;

#[derive(Debug, Fail, PartialEq, Eq)]
pub(crate) enum FrequencyError {
    #[fail(display = "No frequency changes to apply")]
    InvalidInput,

    #[fail(display = "Frequency changes never revisit a frequency")]
    NeverRepeats,

    #[fail(display = "Frequency overflowed")]
    Overflow,
}

fn parse_frequency(s: &str) -> Result<Frequency, ParseIntError> {
    s.trim().trim_start_matches('+').parse::<Frequency>()
}

pub(crate) fn read_frequency_changes(path: &Path) -> Result<Vec<Frequency>, Error> {
    read_input_file(path, parse_frequency).map_err(|e| {
        error!("Could not open or read the file containing the frequency changes.");
        e.into()
    })
}

/// Applies every change once, starting from zero.
pub(crate) fn calibrate_frequency(changes: &[Frequency]) -> Result<Frequency, FrequencyError> {
    changes.iter().try_fold(0, |frequency: Frequency, change| {
        frequency
            .checked_add(*change)
            .ok_or(FrequencyError::Overflow)
    })
}

/// First frequency reached twice when the changes are replayed from zero.
pub(crate) fn first_repeated_frequency(changes: &[Frequency]) -> Result<Frequency, FrequencyError> {
    find_first_repeated_frequency(changes, 0, HashSet::new())
}

/// Replays `changes` cyclically from `frequency` until a frequency already
/// in `seen` comes up again, and returns it.
///
/// An empty `seen` starts out holding only `frequency`. A non-empty one is
/// taken as the complete history, so the starting frequency only counts as
/// seen if it is in there.
///
/// Only the first pass is walked. Every later frequency is a first-pass
/// frequency shifted by a whole number of passes, and the earliest one to
/// land on something seen always lands on a frequency known after the first
/// pass, so the answer is worked out from there. If nothing can ever land,
/// this returns [`FrequencyError::NeverRepeats`].
pub(crate) fn find_first_repeated_frequency(
    changes: &[Frequency],
    mut frequency: Frequency,
    mut seen: HashSet<Frequency>,
) -> Result<Frequency, FrequencyError> {
    if changes.is_empty() {
        return Err(FrequencyError::InvalidInput);
    }

    let start = frequency;
    if seen.is_empty() {
        seen.insert(frequency);
    }

    let mut first_pass = Vec::with_capacity(changes.len());
    for change in changes {
        frequency = step(frequency, *change)?;
        if !seen.insert(frequency) {
            return Ok(frequency);
        }
        first_pass.push(frequency);
    }

    let drift = i128::from(frequency) - i128::from(start);
    let (passes, index) =
        first_landing(&first_pass, &seen, drift).ok_or(FrequencyError::NeverRepeats)?;

    if !stays_in_range(&first_pass, drift, passes, index) {
        return Err(FrequencyError::Overflow);
    }

    debug!(passes = %passes, index, "found repeated frequency");
    shifted(first_pass[index], drift, passes)
        .ok_or(FrequencyError::Overflow)
}

fn step(frequency: Frequency, change: Frequency) -> Result<Frequency, FrequencyError> {
    frequency
        .checked_add(change)
        .ok_or(FrequencyError::Overflow)
}

fn shifted(frequency: Frequency, drift: i128, passes: i128) -> Option<Frequency> {
    Frequency::try_from(i128::from(frequency) + passes * drift).ok()
}

/// Earliest `(passes, index)` for which `first_pass[index]`, moved forward by
/// `passes` extra passes, lands on a seen frequency.
fn first_landing(
    first_pass: &[Frequency],
    seen: &HashSet<Frequency>,
    drift: i128,
) -> Option<(i128, usize)> {
    if drift == 0 {
        // The second pass retraces the first one.
        return Some((1, 0));
    }

    first_pass
        .iter()
        .enumerate()
        .flat_map(move |(i, &f)| {
            seen.iter().filter_map(move |&s| {
                let gap = i128::from(s) - i128::from(f);
                if gap % drift == 0 && gap / drift >= 1 {
                    Some((gap / drift, i))
                } else {
                    None
                }
            })
        })
        .min()
}

/// Whether every running total up to the landing fits in a [`Frequency`].
///
/// Totals move linearly with the pass count, so the extremes sit in the
/// first pass, the pass before the landing, or the landing pass itself.
fn stays_in_range(first_pass: &[Frequency], drift: i128, passes: i128, index: usize) -> bool {
    let previous = first_pass
        .iter()
        .all(|&f| shifted(f, drift, passes - 1).is_some());
    let landing = first_pass[..=index]
        .iter()
        .all(|&f| shifted(f, drift, passes).is_some());
    previous && landing
}

pub(crate) fn main(path: &Path) -> Result<(), Error> {
    let changes = read_frequency_changes(path)?;

    println!("Part 1: {}", calibrate_frequency(&changes)?);
    println!("Part 2: {}", first_repeated_frequency(&changes)?);

    Ok(())
}
