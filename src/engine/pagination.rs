//! Page validation and slicing arithmetic.

use std::ops::Range;

use crate::domain::{ListViewError, Result};

/// Rejects a zero page size or a page index below 1.
///
/// # Errors
///
/// Returns [`ListViewError::InvalidArgument`] naming the offending parameter.
pub fn validate(page_index: usize, page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(ListViewError::InvalidArgument(
            "pageSize must be positive, got 0".to_string(),
        ));
    }
    if page_index == 0 {
        return Err(ListViewError::InvalidArgument(
            "pageIndex is 1-based, got 0".to_string(),
        ));
    }
    Ok(())
}

/// Index range of the requested page within `total` rows.
///
/// Pages past the end, including offsets that would overflow, produce an
/// empty range at `total`. Callers validate first; a zero `page_index` is
/// treated as page 1.
#[must_use]
pub fn page_range(total: usize, page_index: usize, page_size: usize) -> Range<usize> {
    let start = page_index
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Number of pages needed for `total` rows; zero when there are no rows.
#[must_use]
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total / page_size + if total % page_size == 0 { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(validate(1, 0), Err(ListViewError::InvalidArgument(_))));
        assert!(matches!(validate(0, 10), Err(ListViewError::InvalidArgument(_))));
        assert!(validate(1, 1).is_ok());
    }

    #[test]
    fn ranges() {
        assert_eq!(page_range(23, 1, 10), 0..10);
        assert_eq!(page_range(23, 3, 10), 20..23);
        assert_eq!(page_range(23, 4, 10), 23..23);
        assert_eq!(page_range(0, 1, 10), 0..0);
        assert_eq!(page_range(5, usize::MAX, usize::MAX), 5..5);
    }

    #[test]
    fn page_counts() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 0);
    }
}
