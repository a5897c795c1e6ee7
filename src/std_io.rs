use std::io::Write;

use crate::{DisplayMode, SequenceStore};

/// Counts the bytes passing through to the inner writer.
struct Counting<W> {
    inner: W,
    written: usize,
}

impl<W: Write> Write for Counting<W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let num = self.inner.write(buf)?;
        self.written += num;
        Ok(num)
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl<const N: usize> SequenceStore<N> {
    /// Writes the rendering of the live elements to `writer`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::{SequenceStore, DisplayMode};
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[1, 2])?;
    /// let mut out = Vec::new();
    /// let n = store.write_to(&mut out, DisplayMode::SingleLine).unwrap();
    /// assert_eq!(n, 7);
    /// assert_eq!(out, b"{1, 2}\n");
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: W, mode: DisplayMode) -> std::io::Result<usize> {
        let mut counting = Counting {
            inner: writer,
            written: 0,
        };
        write!(counting, "{}", self.display(mode))?;
        Ok(counting.written)
    }
}
