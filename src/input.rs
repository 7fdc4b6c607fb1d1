use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use failure::Fail;
use tracing::{debug, error};

/// Directory holding one input file per puzzle, relative to the working directory.
const INPUT_DIR: &str = "input";

#[derive(Debug, Fail)]
pub(crate) enum InputError {
    #[fail(display = "Can't read {}: {}", path, error)]
    Io {
        path: String,
        #[cause]
        error: std::io::Error,
    },

    #[fail(display = "Invalid record on line {}: {:?} ({})", line, content, reason)]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}

pub(crate) fn input_path(day: usize) -> PathBuf {
    let mut p = PathBuf::from(INPUT_DIR);
    p.push(format!("day_{}.txt", day));
    p
}

/// Reads every line of `path` through `parser`.
///
/// The whole file is consumed before anything is returned, so a bad line
/// anywhere means no records at all. Failures are logged before they are
/// handed back to the caller.
pub(crate) fn read_input_file<T, E, F>(path: &Path, parser: F) -> Result<Vec<T>, InputError>
where
    F: Fn(&str) -> Result<T, E>,
    E: fmt::Display,
{
    let records = read_lines(path, parser).map_err(|err| {
        error!("{}", err);
        err
    })?;
    debug!(path = %path.display(), records = records.len(), "read input");
    Ok(records)
}

fn read_lines<T, E, F>(path: &Path, parser: F) -> Result<Vec<T>, InputError>
where
    F: Fn(&str) -> Result<T, E>,
    E: fmt::Display,
{
    let io_error = |error| InputError::Io {
        path: path.display().to_string(),
        error,
    };

    let f = File::open(path).map_err(io_error)?;

    BufReader::new(f)
        .lines()
        .enumerate()
        .map(|(i, lr)| {
            let l = lr.map_err(io_error)?;
            parser(&l).map_err(|e| InputError::Parse {
                line: i + 1,
                content: l.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}
