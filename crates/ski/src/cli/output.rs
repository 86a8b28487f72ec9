use std::io::{self, Write};

use crate::solver::Slope;

/// Writes answers in the expected output format.
pub struct Output<O> {
    out: O,
}

impl<O> Output<O>
where
    O: Write,
{
    /// Construct a new output around the given writer.
    pub fn new(out: O) -> Self {
        Self { out }
    }

    /// Write the answer for a solved map.
    ///
    /// Both lines are written at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::cli::Output;
    /// use ski::Slope;
    ///
    /// let mut o = Output::new(Vec::new());
    /// o.answer(&Slope { length: 5, drop: 8 })?;
    /// assert_eq!(o.into_inner(), b"Length: 5\nDrop: 8\n");
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub fn answer(&mut self, best: &Slope) -> io::Result<()> {
        let text = format!("Length: {}\nDrop: {}\n", best.length, best.drop);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }
}
