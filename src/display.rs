//! Text rendering of a store's live elements.
//!
//! Rendering only reads through [`SequenceStore::as_slice`], it never mutates.

use core::fmt;

use crate::SequenceStore;

/// How [`Rendered`] lays out the elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// `{1, 2, 3}` followed by a newline.
    #[default]
    SingleLine,
    /// One element per line, each followed by a newline.
    OnePerLine,
    /// Elements separated by a single space, no newline.
    Raw,
}

impl DisplayMode {
    #[inline]
    const fn separator(self) -> &'static str {
        match self {
            DisplayMode::SingleLine => ", ",
            DisplayMode::OnePerLine => "\n",
            DisplayMode::Raw => " ",
        }
    }
}

/// A [`Display`](fmt::Display) adapter returned by [`SequenceStore::display`].
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a, const N: usize> {
    store: &'a SequenceStore<N>,
    mode: DisplayMode,
}

impl<const N: usize> SequenceStore<N> {
    /// Renders the live elements in the given mode.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::{SequenceStore, DisplayMode};
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[1, -2, 3])?;
    /// assert_eq!(store.display(DisplayMode::SingleLine).to_string(), "{1, -2, 3}\n");
    /// assert_eq!(store.display(DisplayMode::OnePerLine).to_string(), "1\n-2\n3\n");
    /// assert_eq!(store.display(DisplayMode::Raw).to_string(), "1 -2 3");
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    #[inline]
    pub fn display(&self, mode: DisplayMode) -> Rendered<'_, N> {
        Rendered { store: self, mode }
    }
}

impl<const N: usize> Rendered<'_, N> {
    fn write_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.mode.separator();
        let mut items = self.store.as_slice().iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, "{separator}{item}")?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Rendered<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            DisplayMode::SingleLine => {
                f.write_str("{")?;
                self.write_elements(f)?;
                f.write_str("}\n")
            }
            DisplayMode::OnePerLine => {
                self.write_elements(f)?;
                f.write_str("\n")
            }
            DisplayMode::Raw => self.write_elements(f),
        }
    }
}

impl<const N: usize> fmt::Display for SequenceStore<N> {
    /// Single-line form without the trailing newline: `{1, 2, 3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        Rendered {
            store: self,
            mode: DisplayMode::SingleLine,
        }
        .write_elements(f)?;
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};

    #[test]
    fn empty_store_in_every_mode() {
        let store: SequenceStore = SequenceStore::new();
        assert_eq!(store.display(DisplayMode::SingleLine).to_string(), "{}\n");
        assert_eq!(store.display(DisplayMode::OnePerLine).to_string(), "\n");
        assert_eq!(store.display(DisplayMode::Raw).to_string(), "");
        assert_eq!(store.to_string(), "{}");
    }

    #[test]
    fn only_live_elements_are_rendered() {
        let mut store: SequenceStore = SequenceStore::from_raw_array(&[1, 2, 3]).unwrap();
        store.pop().unwrap();
        assert_eq!(format!("{store}"), "{1, 2}");
        assert_eq!(store.display(DisplayMode::Raw).to_string(), "1 2");
    }

    #[test]
    fn extremes_render_signed() {
        let store: SequenceStore =
            SequenceStore::from_raw_array(&[i64::MIN, 0, i64::MAX]).unwrap();
        assert_eq!(
            store.display(DisplayMode::default()).to_string(),
            "{-9223372036854775808, 0, 9223372036854775807}\n"
        );
    }
}
