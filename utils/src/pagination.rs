// SPDX-License-Identifier: GPL-3.0-only

use std::ops::Range;

/// Holds the pagination state (generic, for various entities)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    pub items_per_page: usize,
    pub current_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            items_per_page: 3,
            current_page: 0,
        }
    }
}

/// Identifies a pagination action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Back,
    Forward,
}

impl PaginationConfig {
    /// Number of pages needed to show `total` items (at least one)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page.max(1)).max(1)
    }

    /// Moves the current page, staying inside the valid pages
    pub fn apply(&mut self, action: PaginationAction, total: usize) {
        match action {
            PaginationAction::Back => {
                if self.current_page > 0 {
                    self.current_page -= 1;
                }
            }
            PaginationAction::Forward => {
                let next_page_start = (self.current_page + 1) * self.items_per_page;
                if next_page_start < total {
                    self.current_page += 1;
                }
            }
        }
    }

    /// Jumps to the page containing the item at `index`
    pub fn reveal(&mut self, index: usize) {
        self.current_page = index / self.items_per_page.max(1);
    }

    /// Indices of the items visible on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = usize::min(self.current_page * self.items_per_page, total);
        let end = usize::min(start + self.items_per_page, total);
        start..end
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_forward(&self, total: usize) -> bool {
        (self.current_page + 1) * self.items_per_page < total
    }
}
