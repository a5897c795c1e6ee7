//! Nullable ownership of a store.
//!
//! [`StoreHandle`] is for callers that keep a store in a slot which may be
//! empty, e.g. across an FFI boundary or in a registry. Operations on an empty
//! handle report [`Error::NullReference`], and releasing one is a no-op.

use crate::error::{Error, Result};
use crate::{INLINE_CAPACITY, SequenceStore};

/// An owned, possibly absent [`SequenceStore`].
///
/// # Examples
///
/// ```
/// use seqstore::{Error, SequenceStore, StoreHandle};
///
/// let mut handle: StoreHandle = StoreHandle::new(SequenceStore::from_raw_array(&[1, 2])?);
/// handle.get_mut()?.push(3)?;
/// assert_eq!(handle.get()?.len(), 3);
///
/// handle.release();
/// handle.release(); // already released, nothing happens
/// assert_eq!(handle.get().unwrap_err(), Error::NullReference);
/// # Ok::<(), seqstore::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StoreHandle<const N: usize = INLINE_CAPACITY>(Option<SequenceStore<N>>);

impl<const N: usize> StoreHandle<N> {
    /// A handle owning `store`.
    #[inline]
    pub const fn new(store: SequenceStore<N>) -> Self {
        Self(Some(store))
    }

    /// A handle owning nothing.
    #[inline]
    pub const fn null() -> Self {
        Self(None)
    }

    /// Returns `true` if the handle owns no store.
    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the store.
    ///
    /// # Errors
    /// [`Error::NullReference`] if the handle is empty.
    #[inline]
    pub fn get(&self) -> Result<&SequenceStore<N>> {
        self.0.as_ref().ok_or(Error::NullReference)
    }

    /// Mutably borrows the store.
    ///
    /// # Errors
    /// [`Error::NullReference`] if the handle is empty.
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut SequenceStore<N>> {
        self.0.as_mut().ok_or(Error::NullReference)
    }

    /// Drops the owned store, if any. Releasing an empty handle does nothing.
    #[inline]
    pub fn release(&mut self) {
        self.0 = None;
    }

    /// Moves the store out, leaving the handle empty.
    #[inline]
    pub fn take(&mut self) -> Option<SequenceStore<N>> {
        self.0.take()
    }

    /// Exchanges the stores owned by two handles.
    ///
    /// # Errors
    /// [`Error::NullReference`] if either handle is empty; nothing is exchanged then.
    pub fn swap(&mut self, other: &mut Self) -> Result<()> {
        match (self.0.as_mut(), other.0.as_mut()) {
            (Some(a), Some(b)) => {
                a.swap(b);
                Ok(())
            }
            _ => Err(Error::NullReference),
        }
    }

    /// Deep copy of the owned store into a new handle.
    ///
    /// # Errors
    /// - [`Error::NullReference`] if the handle is empty.
    /// - [`Error::OutOfMemory`] if the allocation fails.
    pub fn try_clone(&self) -> Result<Self> {
        self.get()?.try_clone().map(Self::new)
    }
}

impl<const N: usize> From<SequenceStore<N>> for StoreHandle<N> {
    #[inline]
    fn from(store: SequenceStore<N>) -> Self {
        Self::new(store)
    }
}

impl<const N: usize> From<Option<SequenceStore<N>>> for StoreHandle<N> {
    #[inline]
    fn from(store: Option<SequenceStore<N>>) -> Self {
        Self(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_reports_null_reference() {
        let mut handle: StoreHandle = StoreHandle::null();
        assert!(handle.is_null());
        assert_eq!(handle.get().unwrap_err(), Error::NullReference);
        assert_eq!(handle.get_mut().unwrap_err(), Error::NullReference);
        assert_eq!(handle.try_clone().unwrap_err(), Error::NullReference);
        assert!(handle.take().is_none());
        handle.release();
        assert!(handle.is_null());
    }

    #[test]
    fn swap_requires_both_sides() {
        let mut a: StoreHandle = SequenceStore::from_raw_array(&[1]).unwrap().into();
        let mut b: StoreHandle = SequenceStore::from_raw_array(&[2, 3]).unwrap().into();
        let mut empty: StoreHandle = StoreHandle::null();

        assert_eq!(a.swap(&mut empty), Err(Error::NullReference));
        assert_eq!(empty.swap(&mut a), Err(Error::NullReference));
        assert_eq!(a.get().unwrap(), &[1]);

        a.swap(&mut b).unwrap();
        assert_eq!(a.get().unwrap(), &[2, 3]);
        assert_eq!(b.get().unwrap(), &[1]);
    }

    #[test]
    fn cloned_handle_is_independent() {
        let mut a: StoreHandle = SequenceStore::from_raw_array(&[4; 8]).unwrap().into();
        let b = a.try_clone().unwrap();
        a.get_mut().unwrap().fill(0).unwrap();
        assert_eq!(b.get().unwrap(), &[4; 8]);
        assert_eq!(b.get().unwrap().capacity(), 16);
    }
}
