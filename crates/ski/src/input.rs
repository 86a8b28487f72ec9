//! Input parser.

mod error;
mod span;

use core::ops::Range;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::span::Size;
pub(crate) use self::span::pos_from;

pub(self) type Result<T> = std::result::Result<T, IStrError>;

/// Helper to parse whitespace-separated input.
///
/// # Examples
///
/// ```
/// use ski::input::IStr;
///
/// let mut input = IStr::new(b"4 4\n  -1 2");
/// assert_eq!(input.next::<i64>()?, 4);
/// assert_eq!(input.next::<i64>()?, 4);
/// assert_eq!(input.ws(), 3);
/// assert_eq!(input.next::<i64>()?, -1);
/// assert_eq!(input.next::<i64>()?, 2);
/// assert_eq!(input.try_next::<i64>()?, None);
/// # Ok::<_, ski::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: Size::ZERO,
        }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Try parse the next value as `T` along with the span it was parsed from.
    ///
    /// Leading whitespace is not part of the span.
    pub fn try_next_spanned<T>(&mut self) -> Result<Option<(Range<Size>, T)>>
    where
        T: FromInput<'a>,
    {
        self.ws();
        let start = self.index;

        let Some(value) = T::try_from_input(self)? else {
            return Ok(None);
        };

        Ok(Some((start..self.index, value)))
    }

    /// Consume leading whitespace, returning the number of bytes skipped.
    #[inline]
    pub fn ws(&mut self) -> usize {
        let n = self.find(0, |b| !u8::is_ascii_whitespace(b));
        self.advance(n);
        n
    }

    /// Try to read the next word, which is a run of non-whitespace bytes.
    ///
    /// Leading whitespace is skipped.
    pub(crate) fn try_next_word(&mut self) -> Option<(Size, &'a [u8])> {
        self.ws();
        let n = self.find(0, u8::is_ascii_whitespace);

        if n == 0 {
            return None;
        }

        let word = self.data.get(..n)?;
        let start = self.index;
        self.advance(n);
        Some((start, word))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, ignoring leading whitespace.
    ///
    /// Returns `Ok(None)` if the input is exhausted.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl<'a> FromInput<'a> for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                let Some((start, word)) = p.try_next_word() else {
                    return Ok(None);
                };

                let parsed = core::str::from_utf8(word).ok().and_then(|s| s.parse::<$ty>().ok());

                let Some(n) = parsed else {
                    return Err(IStrError::new(start..p.index, ErrorKind::NotInteger(word.into())));
                };

                Ok(Some(n))
            }
        }
    };
}

integer!(i64);

/// Parse a raw word of input, which runs until the next whitespace.
pub struct W<'a>(pub &'a BStr);

impl<'a> FromInput<'a> for W<'a> {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some((_, word)) = p.try_next_word() else {
            return Ok(None);
        };

        Ok(Some(Self(BStr::new(word))))
    }
}
