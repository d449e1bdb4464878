use crate::domain::entities::page::{pages_for, Page};
use crate::domain::entities::record::{Record, RecordAction};
use crate::domain::view::column::{Column, FilterKind};
use crate::domain::view::dialog::ActionDialog;
use crate::domain::view::filter::{FilterState, FilterValue};
use crate::domain::view::pagination::{
    PageChange, PageRequest, PaginationController, PaginationMode,
};
use crate::domain::view::reducer::reduce;
use crate::domain::view::sort::SortState;
use crate::usecase::ports::source::{PageCriteria, SourceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// State of one list screen: the fetched page plus search, filters, sort and
/// pagination. I/O is split in two phases (build criteria, apply result) so the
/// UI can run the fetch off its own task.
pub struct ListView<T: Record> {
    columns: Vec<Column<T>>,
    page: Page<T>,
    search: String,
    filters: FilterState,
    sort: SortState,
    pagination: PaginationController,
    notice: Option<Notice>,
}

impl<T: Record> Clone for ListView<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            page: self.page.clone(),
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            pagination: self.pagination.clone(),
            notice: self.notice.clone(),
        }
    }
}

impl<T: Record> PartialEq for ListView<T> {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page
            && self.search == other.search
            && self.filters == other.filters
            && self.sort == other.sort
            && self.pagination == other.pagination
            && self.notice == other.notice
    }
}

impl<T: Record> ListView<T> {
    pub fn new(mode: PaginationMode, page_size: u32) -> Self {
        Self {
            columns: T::columns(),
            page: Page::empty(page_size),
            search: String::new(),
            filters: FilterState::new(),
            sort: SortState::default(),
            pagination: PaginationController::new(mode, page_size),
            notice: None,
        }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn items(&self) -> &[T] {
        &self.page.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    /// Rows to render, in order, for the current page.
    pub fn visible_rows(&self) -> Vec<&T> {
        let reduced = self.reduced();
        self.pagination.slice(&reduced).to_vec()
    }

    /// Number of rows left after search and filters, before paging.
    pub fn matching_count(&self) -> usize {
        self.reduced().len()
    }

    fn reduced(&self) -> Vec<&T> {
        reduce(
            &self.page.items,
            &self.columns,
            &self.search,
            &self.filters,
            &self.sort,
        )
    }

    fn sync_client_pages(&mut self) {
        if self.pagination.mode() == PaginationMode::Client {
            let count = self.matching_count();
            self.pagination.sync_client_total(count);
        }
    }

    pub fn set_search(&mut self, term: &str) {
        if self.search == term {
            return;
        }
        self.search = term.to_string();
        self.pagination.reset_to_first();
        self.sync_client_pages();
    }

    pub fn set_filter(&mut self, field: &str, value: Option<FilterValue>) {
        if self.filters.set_filter(field, value) {
            self.pagination.reset_to_first();
            self.sync_client_pages();
        }
    }

    /// Filter bar input for `field`: categories match whole values, every
    /// other column matches substrings.
    pub fn set_filter_text(&mut self, field: &str, text: &str) {
        let value = match self.columns.iter().find(|column| column.key == field) {
            Some(column) if matches!(column.filter, FilterKind::Category(_)) => {
                FilterValue::OneOf(vec![text.to_string()])
            }
            _ => FilterValue::Contains(text.to_string()),
        };
        self.set_filter(field, Some(value));
    }

    /// Resets search, filters and sort.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filters.clear_all();
        self.sort.clear();
        self.pagination.reset_to_first();
        self.sync_client_pages();
    }

    /// Whether search, filters or sort currently narrow or reorder the rows.
    pub fn has_criteria(&self) -> bool {
        !self.search.trim().is_empty() || !self.filters.is_empty() || self.sort.is_active()
    }

    pub fn cycle_sort(&mut self, key: &str) {
        self.sort.cycle(key);
    }

    /// Criteria for fetching `request`. Client mode always asks for the full list.
    pub fn criteria(&self, request: PageRequest) -> PageCriteria {
        match self.pagination.mode() {
            PaginationMode::Client => PageCriteria::default(),
            PaginationMode::Server => PageCriteria {
                page: Some(request.page),
                page_size: Some(request.page_size),
                search: Some(self.search.trim().to_string()).filter(|s| !s.is_empty()),
                filters: self
                    .filters
                    .active()
                    .map(|(field, value)| (field.to_string(), value.query_value()))
                    .collect(),
            },
        }
    }

    pub fn reload_criteria(&self) -> PageCriteria {
        self.criteria(self.pagination.current_request())
    }

    /// Server mode: search and filters are sent along and paging restarts.
    pub fn first_page_criteria(&self) -> PageCriteria {
        self.criteria(PageRequest {
            page: 1,
            page_size: self.pagination.page_size(),
        })
    }

    /// Server mode refetches the first page with the current search and
    /// filters. Client mode narrows locally and needs nothing.
    pub fn refresh_criteria(&self) -> Option<PageCriteria> {
        (self.pagination.mode() == PaginationMode::Server).then(|| self.first_page_criteria())
    }

    /// A delete that emptied the shown server page while rows remain elsewhere.
    pub fn refill_criteria(&self) -> Option<PageCriteria> {
        let emptied = self.pagination.mode() == PaginationMode::Server
            && self.page.items.is_empty()
            && self.page.total_items > 0;
        emptied.then(|| self.reload_criteria())
    }

    /// What to fetch after [`request_page`](Self::request_page) or
    /// [`request_page_size`](Self::request_page_size), if anything.
    pub fn fetch_for(&self, change: PageChange) -> Option<PageCriteria> {
        match change {
            PageChange::Fetch(request) => Some(self.criteria(request)),
            PageChange::Applied | PageChange::Rejected => None,
        }
    }

    pub fn request_page(&mut self, page: u32) -> PageChange {
        self.pagination.go_to_page(page)
    }

    pub fn request_page_size(&mut self, page_size: u32) -> PageChange {
        let change = self.pagination.change_page_size(page_size);
        if change == PageChange::Applied {
            self.sync_client_pages();
        }
        change
    }

    /// Replaces the page on success. On failure the current rows stay as they
    /// are and an error notice is set.
    pub fn apply_fetch(&mut self, result: Result<Page<T>, SourceError>) -> bool {
        match result {
            Ok(page) => {
                self.pagination.commit(&page);
                self.page = page;
                self.sync_client_pages();
                if self.notice.as_ref().is_some_and(Notice::is_error) {
                    self.notice = None;
                }
                true
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!(
                    "Falha ao carregar {}: {err}",
                    T::TITLE.to_lowercase()
                )));
                false
            }
        }
    }

    /// Optimistic merge of a successful mutation: deleted records leave the
    /// list, status changes are patched in place.
    pub fn apply_mutation(&mut self, id: &str, action: &RecordAction) -> bool {
        let changed = match action {
            RecordAction::Delete => {
                let before = self.page.items.len();
                self.page.items.retain(|record| record.key() != id);
                let removed = before - self.page.items.len();
                self.page.total_items = self.page.total_items.saturating_sub(removed as u64);
                self.page.total_pages = pages_for(self.page.total_items, self.page.page_size);
                self.page.current_page = self.page.current_page.min(self.page.total_pages);
                removed > 0
            }
            RecordAction::UpdateStatus(status) => self
                .page
                .items
                .iter_mut()
                .find(|record| record.key() == id)
                .map(|record| record.set_status(status))
                .unwrap_or(false),
        };
        if changed {
            debug!(resource = T::RESOURCE, id, ?action, "merged mutation locally");
            self.pagination.commit(&self.page);
            self.sync_client_pages();
        }
        changed
    }

    /// Second half of the dialog flow, after [`ActionDialog::begin`] handed out
    /// `target` and `action` and the mutation ran.
    pub fn finish_action(
        &mut self,
        dialog: &mut ActionDialog,
        target: &str,
        action: &RecordAction,
        result: Result<String, SourceError>,
    ) -> bool {
        match result {
            Ok(message) => {
                self.apply_mutation(target, action);
                let message = if message.trim().is_empty() {
                    match action {
                        RecordAction::Delete => "Registro excluído".to_string(),
                        RecordAction::UpdateStatus(status) => {
                            format!("Status alterado para {status}")
                        }
                    }
                } else {
                    message
                };
                self.notice = Some(Notice::Info(message));
                dialog.finish(Ok(()));
                true
            }
            Err(err) => {
                let message = err.to_string();
                self.notice = Some(Notice::Error(message.clone()));
                dialog.finish(Err(message));
                false
            }
        }
    }

}
