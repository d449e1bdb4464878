use serde::Deserialize;

use crate::domain::entities::page::{pages_for, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Every page change goes back to the record source.
    #[default]
    Server,
    /// The full list is fetched once and sliced locally.
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Rejected,
    Applied,
    Fetch(PageRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    mode: PaginationMode,
    current_page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u32,
}

impl PaginationController {
    pub fn new(mode: PaginationMode, page_size: u32) -> Self {
        Self {
            mode,
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 1,
        }
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Request for the page currently shown.
    pub fn current_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// Out-of-range pages are rejected. In server mode nothing changes until
    /// the fetch succeeds and [`commit`](Self::commit) is called.
    pub fn go_to_page(&mut self, page: u32) -> PageChange {
        if page < 1 || page > self.total_pages {
            return PageChange::Rejected;
        }
        match self.mode {
            PaginationMode::Server => PageChange::Fetch(PageRequest {
                page,
                page_size: self.page_size,
            }),
            PaginationMode::Client => {
                self.current_page = page;
                PageChange::Applied
            }
        }
    }

    /// A new page size always lands on page 1.
    pub fn change_page_size(&mut self, page_size: u32) -> PageChange {
        if page_size == 0 {
            return PageChange::Rejected;
        }
        match self.mode {
            PaginationMode::Server => PageChange::Fetch(PageRequest { page: 1, page_size }),
            PaginationMode::Client => {
                self.page_size = page_size;
                self.current_page = 1;
                self.total_pages = pages_for(self.total_items, page_size);
                PageChange::Applied
            }
        }
    }

    /// Adopts the metadata of a successfully fetched server page.
    pub fn commit<T>(&mut self, page: &Page<T>) {
        if self.mode == PaginationMode::Client {
            return;
        }
        self.current_page = page.current_page;
        self.page_size = page.page_size;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
    }

    /// Client mode: totals follow the reduced row count.
    pub fn sync_client_total(&mut self, visible_rows: usize) {
        if self.mode == PaginationMode::Server {
            return;
        }
        self.total_items = visible_rows as u64;
        self.total_pages = pages_for(self.total_items, self.page_size);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    pub fn reset_to_first(&mut self) {
        if self.mode == PaginationMode::Client {
            self.current_page = 1;
        }
    }

    /// Rows to display. Server pages are shown as delivered.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        match self.mode {
            PaginationMode::Server => rows,
            PaginationMode::Client => {
                let size = self.page_size as usize;
                let start = (self.current_page as usize - 1)
                    .saturating_mul(size)
                    .min(rows.len());
                let end = start.saturating_add(size).min(rows.len());
                &rows[start..end]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(rows: usize, page_size: u32) -> PaginationController {
        let mut controller = PaginationController::new(PaginationMode::Client, page_size);
        controller.sync_client_total(rows);
        controller
    }

    #[test]
    fn out_of_range_pages_are_no_ops() {
        let mut controller = client_with(25, 10);
        assert_eq!(controller.go_to_page(2), PageChange::Applied);

        assert_eq!(controller.go_to_page(0), PageChange::Rejected);
        assert_eq!(controller.go_to_page(4), PageChange::Rejected);
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut controller = client_with(100, 10);
        controller.go_to_page(3);

        assert_eq!(controller.change_page_size(50), PageChange::Applied);

        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.total_pages(), 2);
    }

    #[test]
    fn server_mode_waits_for_commit() {
        let mut controller = PaginationController::new(PaginationMode::Server, 10);
        controller.commit(&Page::new(vec![0; 10], 30, 3, 1, 10));

        let change = controller.go_to_page(2);

        assert_eq!(
            change,
            PageChange::Fetch(PageRequest {
                page: 2,
                page_size: 10
            })
        );
        assert_eq!(controller.current_page(), 1, "nothing committed yet");

        controller.commit(&Page::new(vec![0; 10], 30, 3, 2, 10));
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn server_page_size_change_requests_first_page() {
        let mut controller = PaginationController::new(PaginationMode::Server, 10);
        controller.commit(&Page::new(vec![0; 10], 100, 10, 3, 10));

        assert_eq!(
            controller.change_page_size(50),
            PageChange::Fetch(PageRequest {
                page: 1,
                page_size: 50
            })
        );
    }

    #[test]
    fn client_slice_returns_requested_window() {
        let rows: Vec<u32> = (1..=25).collect();
        let mut controller = client_with(rows.len(), 10);
        controller.go_to_page(3);

        assert_eq!(controller.slice(&rows), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn server_slice_is_identity() {
        let rows = vec![1, 2, 3];
        let controller = PaginationController::new(PaginationMode::Server, 2);
        assert_eq!(controller.slice(&rows), &[1, 2, 3]);
    }

    #[test]
    fn shrinking_client_total_clamps_current_page() {
        let mut controller = client_with(50, 10);
        controller.go_to_page(5);

        controller.sync_client_total(12);

        assert_eq!(controller.current_page(), 2);
    }
}
