//! CLI helpers.
//!
//! This is the only part of the crate which touches the process environment.

mod error;
mod output;
mod stderr_logger;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub use self::error::{CliError, LineCol};
pub use self::output::Output;

use self::error::error_context;
use crate::grid::ElevationMap;
use crate::solver::{Slope, Solver};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Path to the map file.
    pub path: PathBuf,
}

impl Opts {
    /// Parse CLI options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::from_args(std::env::args_os().skip(1))?;

        log::set_max_level(log::LevelFilter::Warn);
        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut it = args.into_iter();
        let mut positional = Vec::new();

        for arg in it.by_ref() {
            match arg.to_str() {
                Some("--") => break,
                Some(flag) if flag.len() > 1 && flag.starts_with('-') => {
                    return Err(CliError::Unsupported(arg));
                }
                _ => positional.push(arg),
            }
        }

        positional.extend(it);

        let mut positional = positional.into_iter();

        let Some(path) = positional.next() else {
            return Err(CliError::MissingPath);
        };

        if let Some(extra) = positional.next() {
            return Err(CliError::Extra(extra));
        }

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}

/// Read the map named by `opts` and print its answer to stdout.
pub fn run(opts: &Opts) -> Result<Slope> {
    let data = fs::read(&opts.path).map_err(|source| CliError::Open {
        path: opts.path.clone().into(),
        source,
    })?;

    log::debug!("read {} bytes from {}", data.len(), opts.path.display());

    let stdout = io::stdout();
    let mut o = Output::new(stdout.lock());
    answer(&opts.path, &data, &mut o)
}

/// Solve the map in `data` and write the answer to `o`.
///
/// `path` is only used to give errors context. Nothing is written unless the
/// map is solved.
pub fn answer<O>(path: &Path, data: &[u8], o: &mut Output<O>) -> Result<Slope>
where
    O: Write,
{
    let map = ElevationMap::parse(data).map_err(|e| error_context(path, data, e))?;
    let best = Solver::default()
        .solve(&map)
        .map_err(|e| error_context(path, data, e))?;
    o.answer(&best)?;
    Ok(best)
}
