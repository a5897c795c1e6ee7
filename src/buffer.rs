use alloc::vec::Vec;

use crate::Element;
use crate::error::{Error, Result};

/// Which buffer currently holds the live elements of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// The fixed inline buffer embedded in the store.
    Inline,
    /// A separately allocated buffer.
    Allocated,
}

/// The active buffer of a store.
///
/// The discriminant is the "active" flag: there is never a moment where live
/// data is split between the inline array and an allocation.
///
/// For `Allocated`, the vector's length is its slot count. Every slot is
/// initialized, so indexing up to the slot count never reads uninit memory.
#[derive(Clone, Debug)]
pub(crate) enum Buffer<const N: usize> {
    Inline([Element; N]),
    Allocated(Vec<Element>),
}

#[cold]
#[inline(never)]
fn alloc_failed(requested: usize) -> Error {
    log::error!("{}:{}: failed allocation of {} slots", file!(), line!(), requested);
    Error::OutOfMemory { requested }
}

impl<const N: usize> Buffer<N> {
    #[inline(always)]
    pub(crate) const fn inline() -> Self {
        Self::Inline([0; N])
    }

    /// Builds an inline buffer whose leading slots hold `live`.
    ///
    /// # Panics
    /// Panics if `live.len() > N`, callers guarantee it fits.
    #[inline]
    pub(crate) fn inline_from(live: &[Element]) -> Self {
        let mut slots = [0; N];
        slots[..live.len()].copy_from_slice(live);
        Self::Inline(slots)
    }

    /// Builds an allocated buffer of exactly `slots` slots whose leading slots hold `live`.
    ///
    /// Nothing is touched outside the new buffer, so on failure the caller's
    /// current buffer is still intact.
    pub(crate) fn try_allocated(live: &[Element], slots: usize) -> Result<Self> {
        debug_assert!(live.len() <= slots);
        let mut vec: Vec<Element> = Vec::new();
        vec.try_reserve_exact(slots)
            .map_err(|_| alloc_failed(slots))?;
        vec.extend_from_slice(live);
        vec.resize(slots, 0);
        Ok(Self::Allocated(vec))
    }

    /// Reallocates an allocated buffer to exactly `slots` slots.
    ///
    /// Growth reserves before writing anything, so a failed request leaves the
    /// buffer as it was. Inline buffers are left alone.
    pub(crate) fn try_realloc(&mut self, slots: usize) -> Result<()> {
        if let Self::Allocated(vec) = self {
            let current = vec.len();
            if slots > current {
                vec.try_reserve_exact(slots - current)
                    .map_err(|_| alloc_failed(slots))?;
                vec.resize(slots, 0);
            } else if slots < current {
                vec.truncate(slots);
                vec.shrink_to_fit();
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) const fn kind(&self) -> StorageKind {
        match self {
            Self::Inline(_) => StorageKind::Inline,
            Self::Allocated(_) => StorageKind::Allocated,
        }
    }

    /// Number of slots backing this buffer, live or not.
    #[inline(always)]
    pub(crate) fn slot_count(&self) -> usize {
        match self {
            Self::Inline(_) => N,
            Self::Allocated(vec) => vec.len(),
        }
    }

    #[inline(always)]
    pub(crate) fn slots(&self) -> &[Element] {
        match self {
            Self::Inline(arr) => arr.as_slice(),
            Self::Allocated(vec) => vec.as_slice(),
        }
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Element] {
        match self {
            Self::Inline(arr) => arr.as_mut_slice(),
            Self::Allocated(vec) => vec.as_mut_slice(),
        }
    }
}
