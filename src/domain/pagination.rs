//! Slider pagination arithmetic

use crate::domain::latch::TransitionLatch;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Pages the grid part of a movie list (everything after the banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    /// Create a paginator. A zero page size is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `floor((total - 1) / page_size) - 1`, where `total` counts the banner.
    ///
    /// `None` when the result would be negative: the grid holds less than a
    /// full page and there is nothing to page through.
    pub fn max_page_index(&self, total: usize) -> Option<usize> {
        let full_pages = total.saturating_sub(1) / self.page_size;
        full_pages.checked_sub(1)
    }

    /// Computes the page index after a banner click.
    ///
    /// While the latch is engaged the index is returned unchanged and the
    /// latch is left alone. An accepted advance engages the latch; it is not
    /// engaged when the page would not actually change, since no exit
    /// animation would ever release it.
    pub fn advance(&self, current: usize, latch: &mut TransitionLatch, total: usize) -> usize {
        if latch.is_engaged() {
            return current;
        }

        let Some(max_index) = self.max_page_index(total) else {
            return current;
        };

        let next = if current >= max_index { 0 } else { current + 1 };
        if next != current {
            latch.engage();
        }
        next
    }

    /// The grid items shown on page `index`
    pub fn page<'a, T>(&self, grid: &'a [T], index: usize) -> &'a [T] {
        let start = index.saturating_mul(self.page_size);
        if start >= grid.len() {
            return &[];
        }
        let end = (start + self.page_size).min(grid.len());
        &grid[start..end]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, None)]
    #[case(1, None)]
    #[case(6, None)]
    #[case(7, Some(0))]
    #[case(12, Some(0))]
    #[case(13, Some(1))]
    #[case(19, Some(2))]
    #[case(20, Some(2))]
    fn test_max_page_index(#[case] total: usize, #[case] expected: Option<usize>) {
        assert_eq!(Paginator::default().max_page_index(total), expected);
    }

    #[test]
    fn test_scenario_thirteen_records() {
        let paginator = Paginator::default();
        let mut latch = TransitionLatch::default();

        let index = paginator.advance(0, &mut latch, 13);
        assert_eq!(index, 1);
        assert!(latch.is_engaged());

        latch.release();
        let index = paginator.advance(index, &mut latch, 13);
        assert_eq!(index, 0);
        assert!(latch.is_engaged());
    }

    #[test]
    fn test_advance_while_locked_is_idempotent() {
        let paginator = Paginator::default();
        let mut latch = TransitionLatch::Engaged;

        assert_eq!(paginator.advance(1, &mut latch, 20), 1);
        assert_eq!(paginator.advance(1, &mut latch, 20), 1);
        assert_eq!(latch, TransitionLatch::Engaged);
    }

    #[test]
    fn test_advance_without_grid_is_noop() {
        let paginator = Paginator::default();
        let mut latch = TransitionLatch::default();

        assert_eq!(paginator.advance(0, &mut latch, 1), 0);
        assert_eq!(paginator.advance(0, &mut latch, 0), 0);
        assert_eq!(paginator.advance(0, &mut latch, 5), 0);
        assert!(!latch.is_engaged());
    }

    #[test]
    fn test_single_page_does_not_engage_latch() {
        let paginator = Paginator::default();
        let mut latch = TransitionLatch::default();

        assert_eq!(paginator.advance(0, &mut latch, 10), 0);
        assert!(!latch.is_engaged());
    }

    #[test]
    fn test_wrap_law() {
        let paginator = Paginator::default();
        for total in 13..80 {
            let Some(max_index) = paginator.max_page_index(total) else {
                continue;
            };
            let mut latch = TransitionLatch::default();
            assert_eq!(paginator.advance(max_index, &mut latch, total), 0);
        }
    }

    #[test]
    fn test_advance_stays_in_range() {
        let paginator = Paginator::default();
        for total in 1..100 {
            let max_index = paginator.max_page_index(total);
            let mut index = 0;
            for _ in 0..10 {
                let mut latch = TransitionLatch::default();
                index = paginator.advance(index, &mut latch, total);
                match max_index {
                    Some(max_index) => assert!(index <= max_index, "total={total} index={index}"),
                    None => assert_eq!(index, 0),
                }
            }
        }
    }

    #[test]
    fn test_page_slices() {
        let paginator = Paginator::default();
        let grid: Vec<u32> = (0..14).collect();

        assert_eq!(paginator.page(&grid, 0), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(paginator.page(&grid, 1), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(paginator.page(&grid, 2), &[12, 13]);
        assert!(paginator.page(&grid, 3).is_empty());
        assert!(paginator.page::<u32>(&[], 0).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
