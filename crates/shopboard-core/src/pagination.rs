//! Page index bookkeeping for the rotating display.

use crate::models::{PageView, Slot, Vehicle};

/// Number of pages needed for `count` vehicles; never less than one.
///
/// # Examples
///
/// ```rust
/// use shopboard_core::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 6), 1);
/// assert_eq!(total_pages(6, 6), 1);
/// assert_eq!(total_pages(7, 6), 2);
/// assert_eq!(total_pages(20, 6), 4);
/// ```
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Current page of a fixed-size grid.
///
/// The page is always kept inside `0..total_pages` for the vehicle count it
/// was last clamped or advanced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Start on the first page. A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True when `count` vehicles need more than one page.
    pub fn needs_rotation(&self, count: usize) -> bool {
        count > self.page_size
    }

    /// Pull the page back inside bounds after the vehicle count changed.
    ///
    /// A dataset that fits on one page always shows page 0; otherwise a page
    /// past the new end moves to the last page.
    pub fn clamp(&mut self, count: usize) {
        let total = total_pages(count, self.page_size);
        if !self.needs_rotation(count) {
            self.page = 0;
        } else if self.page >= total {
            self.page = total - 1;
        }
    }

    /// Move to the next page, wrapping to the first.
    ///
    /// The page count is derived from `count` on every call. Datasets that
    /// fit on one page stay on page 0.
    pub fn advance(&mut self, count: usize) {
        if self.needs_rotation(count) {
            self.page = (self.page + 1) % total_pages(count, self.page_size);
        } else {
            self.page = 0;
        }
    }

    /// Fixed-size slot grid for the current page of `vehicles`.
    pub fn slots(&self, vehicles: &[Vehicle]) -> Vec<Slot> {
        let start = (self.page * self.page_size).min(vehicles.len());
        let end = (start + self.page_size).min(vehicles.len());
        let visible = &vehicles[start..end];

        let mut slots: Vec<Slot> = visible.iter().cloned().map(Slot::Vehicle).collect();
        slots.resize(self.page_size, Slot::Empty);
        slots
    }

    /// Full page view for the presentation layer.
    pub fn view(&self, board_name: &str, vehicles: &[Vehicle]) -> PageView {
        PageView {
            board_name: board_name.to_string(),
            page: self.page,
            total_pages: total_pages(vehicles.len(), self.page_size),
            vehicle_count: vehicles.len(),
            slots: self.slots(vehicles),
        }
    }
}
