use core::fmt;
use core::ops::Range;

use bstr::BString;

use crate::input::Size;

/// The kind of an [IStrError].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A word which could not be parsed as an integer of the requested type.
    NotInteger(BString),
    /// Input ended while more values were expected.
    UnexpectedEof,
    /// A grid dimension was negative.
    NegativeDimension(i64),
    /// A grid dimension does not fit in a `usize`.
    DimensionRange(i64),
    /// The grid area does not fit the supported index range.
    AreaOverflow { columns: usize, rows: usize },
    /// An elevation was outside of `0..=i32::MAX`.
    ElevationRange(i64),
    /// The number of elevations disagrees with the declared shape.
    ShapeMismatch { expected: usize, actual: usize },
    /// Input continued after the last expected elevation.
    TrailingInput(BString),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(word) => {
                write!(f, "not an integer or integer overflow `{word}`")
            }
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::NegativeDimension(n) => write!(f, "negative grid dimension `{n}`"),
            ErrorKind::DimensionRange(n) => write!(f, "grid dimension `{n}` out of range"),
            ErrorKind::AreaOverflow { columns, rows } => {
                write!(f, "grid of {columns}x{rows} cells is too large")
            }
            ErrorKind::ElevationRange(n) => write!(f, "elevation `{n}` out of range"),
            ErrorKind::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} elevations, but got {actual}")
            }
            ErrorKind::TrailingInput(word) => write!(f, "unexpected trailing input `{word}`"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through input processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Construct an error which is not associated with a location in the input.
    #[inline]
    pub(crate) fn detached(kind: ErrorKind) -> Self {
        Self::new(Size::ZERO..Size::ZERO, kind)
    }

    /// The span of input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, Size::usize_range(self.span.clone()))
    }
}

impl std::error::Error for IStrError {}
