use core::fmt;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::error::Error;
use crate::input::pos_from;

/// Errors raised by the command-line driver itself.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CliError {
    #[error("missing path to map file; usage: redmart <path>")]
    MissingPath,
    #[error("unsupported argument `{}`; usage: redmart <path>", .0.to_string_lossy())]
    Unsupported(OsString),
    #[error("unexpected argument `{}`; usage: redmart <path>", .0.to_string_lossy())]
    Extra(OsString),
    #[error("can't open {}", .path.display())]
    Open {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
}

/// Associate a solver or input error with the file it came from.
///
/// Malformed input is reported at the line and column it was found.
pub(crate) fn error_context(path: &Path, data: &[u8], error: Error) -> anyhow::Error {
    let pos = match &error {
        Error::MalformedInput(e) => Some(pos_from(data, e.span())),
        _ => None,
    };

    let context = ErrorContext {
        path: path.into(),
        pos,
    };

    anyhow::Error::from(error).context(context)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: Box<Path>,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();

        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}"),
            None => write!(f, "{path}"),
        }
    }
}
