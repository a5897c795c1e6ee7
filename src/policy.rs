//! Capacity arithmetic.
//!
//! Pure functions only: deciding *how much* room a store gets is kept apart
//! from *where* the slots live, which is the job of [`Buffer`](crate::buffer::Buffer).

/// Capacity granted to a store constructed with `requested` slots.
///
/// Requests at or below the inline floor `inline` are rounded up to it.
#[inline]
pub(crate) const fn initial_capacity(requested: usize, inline: usize) -> usize {
    if requested > inline { requested } else { inline }
}

/// Whether `additional` more elements overflow the current capacity.
#[inline(always)]
pub(crate) const fn needs_growth(len: usize, additional: usize, capacity: usize) -> bool {
    match len.checked_add(additional) {
        Some(required) => required > capacity,
        None => true,
    }
}

/// Capacity after growing for `additional` elements: `capacity * 2 + additional`.
///
/// `None` when the arithmetic overflows.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize, additional: usize) -> Option<usize> {
    match capacity.checked_mul(2) {
        Some(doubled) => doubled.checked_add(additional),
        None => None,
    }
}

/// Logical capacity of a store built from a raw array of `len` elements.
#[inline]
pub(crate) const fn raw_array_capacity(len: usize) -> Option<usize> {
    len.checked_mul(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_requests_round_up_to_the_floor() {
        assert_eq!(initial_capacity(1, 10), 10);
        assert_eq!(initial_capacity(10, 10), 10);
        assert_eq!(initial_capacity(11, 10), 11);
    }

    #[test]
    fn growth_only_when_the_room_runs_out() {
        assert!(!needs_growth(9, 1, 10));
        assert!(needs_growth(10, 1, 10));
        assert!(needs_growth(0, 11, 10));
        assert!(needs_growth(usize::MAX, 1, usize::MAX));
    }

    #[test]
    fn doubling_plus_request() {
        assert_eq!(grown_capacity(10, 1), Some(21));
        assert_eq!(grown_capacity(21, 5), Some(47));
        assert_eq!(grown_capacity(usize::MAX / 2 + 1, 0), None);
        assert_eq!(grown_capacity(usize::MAX / 2, 2), None);
    }

    #[test]
    fn raw_arrays_get_double_headroom() {
        assert_eq!(raw_array_capacity(3), Some(6));
        assert_eq!(raw_array_capacity(usize::MAX), None);
    }
}
