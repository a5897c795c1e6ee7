use crate::error::{Error, Result};

/// Turns any `RangeBounds` into `(index, length)` against a sequence of `len` elements.
///
/// Inverted ranges produce a zero length, which every caller rejects.
#[inline(always)]
pub(crate) fn split_range_bound(
    src: &impl core::ops::RangeBounds<usize>,
    len: usize,
) -> (usize, usize) {
    let start = match src.start_bound() {
        core::ops::Bound::Included(&i) => i,
        core::ops::Bound::Excluded(&i) => i.saturating_add(1),
        core::ops::Bound::Unbounded => 0,
    };

    let end = match src.end_bound() {
        core::ops::Bound::Included(&i) => i.saturating_add(1),
        core::ops::Bound::Excluded(&i) => i,
        core::ops::Bound::Unbounded => len,
    };
    (start, end.saturating_sub(start))
}

/// Validates a live span `[index, index + length)` of a sequence holding `len` elements.
///
/// Returns the exclusive end of the span.
#[inline]
pub(crate) fn live_span(index: usize, length: usize, len: usize) -> Result<usize> {
    if length == 0 {
        return Err(Error::invalid("length must be non-zero"));
    }
    if index >= len {
        return Err(Error::out_of_range(index, len));
    }
    match index.checked_add(length) {
        Some(end) if end <= len => Ok(end),
        _ => Err(Error::invalid("range exceeds the live elements")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_become_index_and_length() {
        assert_eq!(split_range_bound(&(1..4), 10), (1, 3));
        assert_eq!(split_range_bound(&(2..=4), 10), (2, 3));
        assert_eq!(split_range_bound(&(..), 7), (0, 7));
        assert_eq!(split_range_bound(&(3..), 7), (3, 4));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 5..2;
        assert_eq!(split_range_bound(&inverted, 7), (5, 0));
    }

    #[test]
    fn live_span_checks_every_edge() {
        assert_eq!(live_span(0, 5, 5), Ok(5));
        assert_eq!(live_span(1, 2, 5), Ok(3));
        assert!(matches!(
            live_span(0, 0, 5),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(live_span(5, 1, 5), Err(Error::out_of_range(5, 5)));
        assert!(matches!(
            live_span(3, 3, 5),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            live_span(1, usize::MAX, 5),
            Err(Error::InvalidArgument { .. })
        ));
    }
}
