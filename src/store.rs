use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::buffer::{Buffer, StorageKind};
use crate::error::{Error, Result};
use crate::{Element, INLINE_CAPACITY, SENTINEL, policy, utils};

/// A sequence of [`Element`]s stored inline by default, moved to an allocated
/// buffer once the inline slots run out.
///
/// Every store starts on an inline buffer of `N` slots and only allocates when
/// its element count would exceed that. Capacity never drops below `N` through
/// [`clear`](SequenceStore::clear), [`resize`](SequenceStore::resize) or
/// [`shrink_to_fit`](SequenceStore::shrink_to_fit): shrinking far enough moves
/// the data back inline.
///
/// Every mutation is bounds checked and reports an [`Error`] instead of
/// panicking; a failed call leaves the store untouched.
///
/// # Example
///
/// ```
/// use seqstore::SequenceStore;
///
/// let mut store: SequenceStore = SequenceStore::with_capacity(5)?;
/// // Small requests are rounded up to the inline floor.
/// assert_eq!(store.capacity(), 10);
///
/// for i in 0..10 {
///     store.push(i)?;
/// }
/// assert!(store.is_inline());
///
/// // The eleventh element no longer fits inline.
/// store.push(10)?;
/// assert!(!store.is_inline());
/// assert_eq!(store.capacity(), 21);
///
/// // Shrinking far enough moves the data back.
/// store.resize(4)?;
/// assert!(store.is_inline());
/// assert_eq!(store, [0, 1, 2, 3]);
/// # Ok::<(), seqstore::Error>(())
/// ```
#[derive(Clone)]
pub struct SequenceStore<const N: usize = INLINE_CAPACITY> {
    buf: Buffer<N>,
    len: usize,
    capacity: usize,
}

impl<const N: usize> SequenceStore<N> {
    /// Number of slots of the inline buffer.
    pub const INLINE_CAPACITY: usize = N;

    #[inline(always)]
    const fn from_parts(buf: Buffer<N>, len: usize, capacity: usize) -> Self {
        const {
            assert!(N > 0, "the inline buffer needs at least one slot");
        }
        Self { buf, len, capacity }
    }

    /// Constructs an empty store on its inline buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore<8> = SequenceStore::new();
    /// assert_eq!(store.capacity(), 8);
    /// assert!(store.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::from_parts(Buffer::inline(), 0, N)
    }

    /// Constructs an empty store able to hold `capacity` elements.
    ///
    /// Capacities above `N` allocate exactly `capacity` slots. Anything at or
    /// below `N` uses the inline buffer and reports `N`.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `capacity == 0`.
    /// - [`Error::OutOfMemory`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore = SequenceStore::with_capacity(32)?;
    /// assert!(!store.is_inline());
    /// assert_eq!(store.capacity(), 32);
    ///
    /// assert!(SequenceStore::<10>::with_capacity(0).is_err());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity must be non-zero"));
        }
        let capacity = policy::initial_capacity(capacity, N);
        if capacity > N {
            let buf = Buffer::try_allocated(&[], capacity)?;
            Ok(Self::from_parts(buf, 0, capacity))
        } else {
            Ok(Self::new())
        }
    }

    /// Constructs a store of `length` copies of `value` with room for `capacity` elements.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `length == 0` or `capacity < length`.
    /// - [`Error::OutOfMemory`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore = SequenceStore::filled(4, 3, -1)?;
    /// assert_eq!(store, [-1, -1, -1]);
    /// assert_eq!(store.capacity(), 10);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn filled(capacity: usize, length: usize, value: Element) -> Result<Self> {
        if length == 0 {
            return Err(Error::invalid("length must be non-zero"));
        }
        if capacity < length {
            return Err(Error::invalid("capacity is smaller than the requested length"));
        }
        let mut store = Self::with_capacity(capacity)?;
        store.buf.slots_mut()[..length].fill(value);
        store.len = length;
        Ok(store)
    }

    /// Constructs a store holding a copy of `src`, with a capacity of `2 * src.len()`.
    ///
    /// The doubled capacity is headroom for later growth. It is kept even when
    /// it is below `N`, in which case the elements sit in the inline buffer.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `src` is empty.
    /// - [`Error::OutOfMemory`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[1, 2, 3])?;
    /// assert_eq!(store.len(), 3);
    /// assert_eq!(store.capacity(), 6);
    /// assert_eq!(store.to_vec(), [1, 2, 3]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn from_raw_array(src: &[Element]) -> Result<Self> {
        if src.is_empty() {
            return Err(Error::invalid("source array is empty"));
        }
        let capacity = policy::raw_array_capacity(src.len()).ok_or(Error::OutOfMemory {
            requested: usize::MAX,
        })?;
        let buf = if capacity > N {
            Buffer::try_allocated(src, capacity)?
        } else {
            Buffer::inline_from(src)
        };
        Ok(Self::from_parts(buf, src.len(), capacity))
    }

    /// Deep copy with the same capacity and elements, reporting allocation failure.
    ///
    /// The [`Clone`] impl does the same but aborts on allocation failure like [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut a: SequenceStore = SequenceStore::from_raw_array(&[1, 2, 3, 4, 5, 6])?;
    /// let b = a.try_clone()?;
    /// a.set(0, 100)?;
    /// assert_eq!(b, [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(b.capacity(), a.capacity());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn try_clone(&self) -> Result<Self> {
        let buf = match &self.buf {
            Buffer::Inline(_) => Buffer::inline_from(self.as_slice()),
            Buffer::Allocated(_) => Buffer::try_allocated(self.as_slice(), self.capacity)?,
        };
        Ok(Self::from_parts(buf, self.len, self.capacity))
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no live elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the store can hold before it has to grow.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the live elements are in the inline buffer.
    #[inline(always)]
    pub const fn is_inline(&self) -> bool {
        matches!(self.storage(), StorageKind::Inline)
    }

    /// Returns which buffer is currently active.
    #[inline(always)]
    pub const fn storage(&self) -> StorageKind {
        self.buf.kind()
    }

    /// Extracts a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.buf.slots()[..self.len]
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        let len = self.len;
        &mut self.buf.slots_mut()[..len]
    }

    /// Moves the live elements into a buffer offering `capacity` slots.
    ///
    /// At or below `N` this lands on the inline buffer with the capacity reset
    /// to `N`. Above it, the allocated buffer is resized (or created) to exactly
    /// `capacity` slots. Elements past `capacity` are dropped.
    fn relocate(&mut self, capacity: usize) -> Result<()> {
        let keep = self.len.min(capacity);
        if capacity <= N {
            if let Buffer::Allocated(_) = self.buf {
                log::trace!("moving {} elements back to the inline buffer", keep);
                self.buf = Buffer::inline_from(&self.buf.slots()[..keep]);
            }
            self.capacity = N;
        } else {
            match self.buf {
                Buffer::Inline(_) => {
                    let spilled = Buffer::try_allocated(&self.buf.slots()[..keep], capacity)?;
                    log::trace!("spilling {} elements to {} allocated slots", keep, capacity);
                    self.buf = spilled;
                }
                Buffer::Allocated(_) => {
                    self.buf.try_realloc(capacity)?;
                    log::trace!("reallocated to {} slots", capacity);
                }
            }
            self.capacity = capacity;
        }
        self.len = keep;
        Ok(())
    }

    /// Makes room for `additional` more elements.
    ///
    /// When `len + additional` exceeds the capacity, the capacity becomes
    /// `capacity * 2 + additional`. Results that still fit inline keep the
    /// inline buffer, anything larger moves to an allocated buffer.
    ///
    /// # Errors
    /// [`Error::OutOfMemory`] if the allocation fails or the new capacity
    /// overflows. The store is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::new();
    /// store.reserve(5)?;
    /// assert!(store.is_inline());
    ///
    /// store.reserve(11)?;
    /// assert!(!store.is_inline());
    /// assert_eq!(store.capacity(), 31);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        if !policy::needs_growth(self.len, additional, self.capacity) {
            return Ok(());
        }
        let capacity = policy::grown_capacity(self.capacity, additional).ok_or(
            Error::OutOfMemory {
                requested: usize::MAX,
            },
        )?;
        self.relocate(capacity)
    }

    /// Sets the capacity to `new_size`, never below the inline floor.
    ///
    /// - `new_size <= N`: the first `min(len, new_size)` elements move to the
    ///   inline buffer, any allocation is released and the capacity is `N`.
    /// - `new_size > N`: the allocated buffer holds exactly `new_size` slots.
    ///
    /// In both cases the length becomes `min(len, new_size)`.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `new_size == 0`.
    /// - [`Error::OutOfMemory`] if the allocation fails, the store is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::filled(40, 30, 7)?;
    /// store.resize(50)?;
    /// assert_eq!((store.len(), store.capacity()), (30, 50));
    ///
    /// store.resize(3)?;
    /// assert_eq!((store.len(), store.capacity()), (3, 10));
    /// assert!(store.is_inline());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size == 0 {
            return Err(Error::invalid("size must be non-zero"));
        }
        self.relocate(new_size)
    }

    /// Drops unused capacity down to the live length, or the inline floor.
    ///
    /// Same as `resize(len)`.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if the store is empty.
    /// - [`Error::OutOfMemory`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::with_capacity(100)?;
    /// store.insert_many(0, &[1; 12])?;
    /// store.shrink_to_fit()?;
    /// assert_eq!(store.capacity(), 12);
    ///
    /// store.erase(0, 8)?;
    /// store.shrink_to_fit()?;
    /// assert_eq!(store.capacity(), 10);
    /// assert!(store.is_inline());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    #[inline]
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.resize(self.len)
    }

    /// Removes every element, releases the allocated buffer and returns to the inline floor.
    pub fn clear(&mut self) {
        if let Buffer::Allocated(_) = self.buf {
            log::trace!("releasing allocated buffer of {} slots", self.buf.slot_count());
            self.buf = Buffer::inline();
        }
        self.capacity = N;
        self.len = 0;
    }

    /// Reads the slot at `index`.
    ///
    /// The bound is the *capacity*, not the length: slots in `len..capacity`
    /// can be read but hold unspecified values.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::{SequenceStore, Error};
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[4, 5])?;
    /// assert_eq!(store.get(1)?, 5);
    /// assert!(store.get(3).is_ok()); // within capacity, value unspecified
    /// assert_eq!(store.get(4), Err(Error::OutOfRange { index: 4, bound: 4 }));
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<Element> {
        if index < self.capacity {
            Ok(self.buf.slots()[index])
        } else {
            Err(Error::out_of_range(index, self.capacity))
        }
    }

    /// Like [`get`](SequenceStore::get) but returns [`SENTINEL`] when out of range.
    ///
    /// The sentinel is a valid element value, so this cannot tell a stored
    /// `i64::MAX` from a miss. Prefer `get` where that matters.
    #[inline]
    pub fn get_or_sentinel(&self, index: usize) -> Element {
        self.get(index).unwrap_or(SENTINEL)
    }

    /// Overwrites the live element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        self.buf.slots_mut()[index] = value;
        Ok(())
    }

    /// Appends an element, growing the store if needed.
    ///
    /// # Errors
    /// [`Error::OutOfMemory`] if growing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore<2> = SequenceStore::new();
    /// store.push(1)?;
    /// store.push(2)?;
    /// assert!(store.is_inline());
    /// store.push(3)?;
    /// assert!(!store.is_inline());
    /// assert_eq!(store, [1, 2, 3]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    #[inline]
    pub fn push(&mut self, value: Element) -> Result<()> {
        self.reserve(1)?;
        let len = self.len;
        self.buf.slots_mut()[len] = value;
        self.len = len + 1;
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// The buffer is never changed by this call.
    ///
    /// # Errors
    /// [`Error::Empty`] if there is nothing to pop.
    #[inline]
    pub fn pop(&mut self) -> Result<Element> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        Ok(self.buf.slots()[self.len])
    }

    /// Inserts `value` at `index`, shifting `index..len` one slot to the right.
    ///
    /// Only positions of existing elements are accepted; use
    /// [`push`](SequenceStore::push) to append.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if `index >= len`.
    /// - [`Error::OutOfMemory`] if growing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::from_raw_array(&[1, 3])?;
    /// store.insert(1, 2)?;
    /// assert_eq!(store, [1, 2, 3]);
    /// assert!(store.insert(3, 4).is_err());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: Element) -> Result<()> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        self.reserve(1)?;
        let len = self.len;
        let slots = self.buf.slots_mut();
        slots.copy_within(index..len, index + 1);
        slots[index] = value;
        self.len = len + 1;
        Ok(())
    }

    /// Inserts all of `src` at `index`, shifting the tail right by `src.len()`.
    ///
    /// `index == len` appends. Returns the number of inserted elements.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `src` is empty.
    /// - [`Error::OutOfRange`] if `index > len`.
    /// - [`Error::OutOfMemory`] if growing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::from_raw_array(&[1, 5])?;
    /// assert_eq!(store.insert_many(1, &[2, 3, 4])?, 3);
    /// assert_eq!(store, [1, 2, 3, 4, 5]);
    /// store.insert_many(5, &[6])?;
    /// assert_eq!(store, [1, 2, 3, 4, 5, 6]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn insert_many(&mut self, index: usize, src: &[Element]) -> Result<usize> {
        if src.is_empty() {
            return Err(Error::invalid("source slice is empty"));
        }
        if index > self.len {
            return Err(Error::out_of_range(index, self.len + 1));
        }
        let count = src.len();
        self.reserve(count)?;
        let len = self.len;
        let slots = self.buf.slots_mut();
        slots.copy_within(index..len, index + count);
        slots[index..index + count].copy_from_slice(src);
        self.len = len + count;
        Ok(count)
    }

    /// Removes the element at `index` and returns it, shifting the tail left.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Element> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }
        let slots = self.buf.slots_mut();
        let value = slots[index];
        slots.copy_within(index + 1..len, index);
        self.len = len - 1;
        Ok(value)
    }

    /// Removes `length` elements starting at `index`. Returns `length`.
    ///
    /// The span must end before the last element, so `erase` never removes
    /// the tail; use [`resize`](SequenceStore::resize) or [`pop`](SequenceStore::pop) for that.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `length == 0` or `index + length >= len`.
    /// - [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut store: SequenceStore = SequenceStore::new();
    /// store.insert_many(0, &[10, 20, 30, 40, 50])?;
    /// assert_eq!(store.erase(1, 2)?, 2);
    /// assert_eq!(store, [10, 40, 50]);
    /// assert!(store.erase(1, 2).is_err());
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn erase(&mut self, index: usize, length: usize) -> Result<usize> {
        let len = self.len;
        let end = utils::live_span(index, length, len)?;
        if end >= len {
            return Err(Error::invalid("erase must leave the last element"));
        }
        self.buf.slots_mut().copy_within(end..len, index);
        self.len = len - length;
        Ok(length)
    }

    /// Overwrites every live element with `value`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the store is empty.
    #[inline]
    pub fn fill(&mut self, value: Element) -> Result<()> {
        self.fill_range(0, self.len, value)
    }

    /// Overwrites `length` live elements starting at `index` with `value`.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `length == 0` or `index + length > len`.
    /// - [`Error::OutOfRange`] if `index >= len`.
    pub fn fill_range(&mut self, index: usize, length: usize, value: Element) -> Result<()> {
        let end = utils::live_span(index, length, self.len)?;
        self.buf.slots_mut()[index..end].fill(value);
        Ok(())
    }

    /// Exchanges the whole state of two stores, buffers included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let mut a: SequenceStore = SequenceStore::from_raw_array(&[1])?;
    /// let mut b: SequenceStore = SequenceStore::with_capacity(64)?;
    /// a.swap(&mut b);
    /// assert!(a.is_empty() && !a.is_inline());
    /// assert_eq!(b, [1]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Copies `length` live elements starting at `index` into `out`.
    ///
    /// Returns the number of copied elements.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if `index >= len`.
    /// - [`Error::InvalidArgument`] if `length == 0`, `index + length > len`
    ///   or `out` is shorter than `length`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[1, 2, 3, 4])?;
    /// let mut out = [0; 2];
    /// assert_eq!(store.extract(1, 2, &mut out)?, 2);
    /// assert_eq!(out, [2, 3]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn extract(&self, index: usize, length: usize, out: &mut [Element]) -> Result<usize> {
        let end = utils::live_span(index, length, self.len)?;
        if out.len() < length {
            return Err(Error::invalid("destination buffer is too small"));
        }
        out[..length].copy_from_slice(&self.buf.slots()[index..end]);
        Ok(length)
    }

    /// Range-based form of [`extract`](SequenceStore::extract).
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqstore::SequenceStore;
    /// let store: SequenceStore = SequenceStore::from_raw_array(&[1, 2, 3, 4])?;
    /// let mut out = [0; 4];
    /// assert_eq!(store.extract_range(2.., &mut out)?, 2);
    /// assert_eq!(&out[..2], &[3, 4]);
    /// # Ok::<(), seqstore::Error>(())
    /// ```
    pub fn extract_range<R>(&self, range: R, out: &mut [Element]) -> Result<usize>
    where
        R: core::ops::RangeBounds<usize>,
    {
        let (index, length) = utils::split_range_bound(&range, self.len);
        self.extract(index, length, out)
    }

    /// Copies every live element into `out`. Returns the number of copied elements.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `out` is shorter than the store.
    pub fn to_array(&self, out: &mut [Element]) -> Result<usize> {
        if self.len == 0 {
            return Ok(0);
        }
        self.extract(0, self.len, out)
    }

    /// Copies the live elements into a new [`Vec`].
    #[inline]
    pub fn to_vec(&self) -> Vec<Element> {
        self.as_slice().to_vec()
    }

    /// Converts the store into a [`Vec`] of its live elements.
    ///
    /// An allocated buffer is reused, inline data is copied into a fresh allocation.
    pub fn into_vec(self) -> Vec<Element> {
        let len = self.len;
        match self.buf {
            Buffer::Inline(arr) => arr[..len].to_vec(),
            Buffer::Allocated(mut vec) => {
                vec.truncate(len);
                vec
            }
        }
    }
}

impl<const N: usize> Default for SequenceStore<N> {
    /// Equivalent to [`SequenceStore::new`].
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&[Element]> for SequenceStore<N> {
    type Error = Error;

    /// See [`SequenceStore::from_raw_array`].
    #[inline]
    fn try_from(src: &[Element]) -> Result<Self> {
        Self::from_raw_array(src)
    }
}

impl<const N: usize> From<SequenceStore<N>> for Vec<Element> {
    #[inline]
    fn from(store: SequenceStore<N>) -> Self {
        store.into_vec()
    }
}

impl<const N: usize> core::ops::Deref for SequenceStore<N> {
    type Target = [Element];
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const N: usize> core::ops::DerefMut for SequenceStore<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<const N: usize> core::fmt::Debug for SequenceStore<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<const N: usize> AsRef<[Element]> for SequenceStore<N> {
    #[inline]
    fn as_ref(&self) -> &[Element] {
        self.as_slice()
    }
}

impl<const N: usize> AsMut<[Element]> for SequenceStore<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Element] {
        self.as_mut_slice()
    }
}

impl<const N: usize> core::borrow::Borrow<[Element]> for SequenceStore<N> {
    #[inline]
    fn borrow(&self) -> &[Element] {
        self.as_slice()
    }
}

impl<const N: usize> core::borrow::BorrowMut<[Element]> for SequenceStore<N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [Element] {
        self.as_mut_slice()
    }
}

impl<const N: usize> core::hash::Hash for SequenceStore<N> {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(self.as_slice(), state);
    }
}

impl<const N: usize, const P: usize> PartialEq<SequenceStore<P>> for SequenceStore<N> {
    /// Compares live elements only; capacity and storage are ignored.
    #[inline]
    fn eq(&self, other: &SequenceStore<P>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for SequenceStore<N> {}

impl<const N: usize> PartialEq<[Element]> for SequenceStore<N> {
    #[inline]
    fn eq(&self, other: &[Element]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<&[Element]> for SequenceStore<N> {
    #[inline]
    fn eq(&self, other: &&[Element]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize, const P: usize> PartialEq<[Element; P]> for SequenceStore<N> {
    #[inline]
    fn eq(&self, other: &[Element; P]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize, const P: usize> PartialEq<&[Element; P]> for SequenceStore<N> {
    #[inline]
    fn eq(&self, other: &&[Element; P]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialOrd for SequenceStore<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for SequenceStore<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<'a, const N: usize> IntoIterator for &'a SequenceStore<N> {
    type Item = &'a Element;
    type IntoIter = core::slice::Iter<'a, Element>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a mut SequenceStore<N> {
    type Item = &'a mut Element;
    type IntoIter = core::slice::IterMut<'a, Element>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// An iterator that moves the live elements out of a [`SequenceStore`].
#[derive(Clone, Debug)]
pub enum IntoIter<const N: usize> {
    Inline(core::iter::Take<core::array::IntoIter<Element, N>>),
    Allocated(alloc::vec::IntoIter<Element>),
}

impl<const N: usize> IntoIterator for SequenceStore<N> {
    type Item = Element;
    type IntoIter = IntoIter<N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        match self.buf {
            Buffer::Inline(arr) => IntoIter::Inline(arr.into_iter().take(len)),
            Buffer::Allocated(mut vec) => {
                vec.truncate(len);
                IntoIter::Allocated(vec.into_iter())
            }
        }
    }
}

impl<const N: usize> Iterator for IntoIter<N> {
    type Item = Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IntoIter::Inline(iter) => iter.next(),
            IntoIter::Allocated(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            IntoIter::Inline(iter) => iter.size_hint(),
            IntoIter::Allocated(iter) => iter.size_hint(),
        }
    }
}

impl<const N: usize> DoubleEndedIterator for IntoIter<N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            IntoIter::Inline(iter) => iter.next_back(),
            IntoIter::Allocated(iter) => iter.next_back(),
        }
    }
}

impl<const N: usize> ExactSizeIterator for IntoIter<N> {}

impl<const N: usize> FusedIterator for IntoIter<N> {}
