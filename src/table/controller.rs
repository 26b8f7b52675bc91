use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::query::{ListParams, QueryState, SortOrder, SortState};
use super::selection::Selection;
use super::{DataSource, TableRow};
use crate::api::{ApiError, PageResponse};
use crate::constants::DEFAULT_PAGE_SIZE_OPTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one issued list request.
///
/// A response is only applied while the ticket's params still match the
/// controller's query and no newer response has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: ListParams,
}

impl FetchTicket {
    /// Dedup key of the request.
    pub fn key(&self) -> &ListParams {
        &self.params
    }
}

/// State machine behind one remote-data table screen.
#[derive(Debug)]
pub struct TableController<R> {
    query: QueryState,
    selection: Selection,
    hidden_columns: BTreeSet<String>,
    last_response: Option<PageResponse<R>>,
    status: LoadStatus,
    error: Option<ApiError>,
    next_seq: u64,
    applied_seq: u64,
    latest_issued: u64,
    mounted: bool,
    reset_page_on_sort: bool,
    page_size_options: Vec<usize>,
}

impl<R: TableRow> Default for TableController<R> {
    fn default() -> Self {
        Self::new(QueryState::default().page_size, DEFAULT_PAGE_SIZE_OPTIONS.to_vec(), false)
    }
}

impl<R: TableRow> TableController<R> {
    pub fn new(page_size: usize, page_size_options: Vec<usize>, reset_page_on_sort: bool) -> Self {
        let page_size_options = if page_size_options.is_empty() {
            DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
        } else {
            page_size_options
        };

        Self {
            query: QueryState::with_page_size(page_size),
            selection: Selection::new(),
            hidden_columns: BTreeSet::new(),
            last_response: None,
            status: LoadStatus::Idle,
            error: None,
            next_seq: 0,
            applied_seq: 0,
            latest_issued: 0,
            mounted: true,
            reset_page_on_sort,
            page_size_options,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn params(&self) -> ListParams {
        self.query.to_params()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    // Sorting

    /// Cycle the sort on `field`: ascending, descending, then unsorted.
    /// A different column always starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.query.sort = match self.query.sort.take() {
            Some(sort) if sort.field == field => match sort.direction {
                SortOrder::Asc => Some(SortState {
                    field: sort.field,
                    direction: SortOrder::Desc,
                }),
                SortOrder::Desc => None,
            },
            _ => Some(SortState {
                field: field.to_string(),
                direction: SortOrder::Asc,
            }),
        };

        if self.reset_page_on_sort {
            self.query.page_index = 0;
        }
        debug!("Sort changed: {:?}", self.query.sort);
    }

    pub fn sort_direction_of(&self, field: &str) -> Option<SortOrder> {
        self.query.sort_direction_of(field)
    }

    // Pagination

    pub fn page_count(&self) -> usize {
        self.last_response
            .as_ref()
            .map_or(0, PageResponse::page_count)
    }

    pub fn page_index(&self) -> usize {
        self.query.page_index
    }

    /// One-based number of the current page.
    pub fn current_page(&self) -> usize {
        self.query.page_index + 1
    }

    pub fn page_size(&self) -> usize {
        self.query.page_size
    }

    /// Move to `index`, clamped to the known page range. Returns whether the
    /// page changed.
    pub fn set_page(&mut self, index: usize) -> bool {
        let page_count = self.page_count();
        let index = if page_count > 0 {
            index.min(page_count - 1)
        } else {
            index
        };

        if index == self.query.page_index {
            return false;
        }
        self.query.page_index = index;
        true
    }

    pub fn can_previous_page(&self) -> bool {
        self.query.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.query.page_index + 1 < self.page_count()
    }

    pub fn next_page(&mut self) -> bool {
        self.can_next_page() && self.set_page(self.query.page_index + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.can_previous_page() && self.set_page(self.query.page_index - 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(0)
    }

    pub fn last_page(&mut self) -> bool {
        match self.page_count() {
            0 => false,
            count => self.set_page(count - 1),
        }
    }

    /// Change the page size and go back to the first page. Zero is rejected.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 || size == self.query.page_size {
            return false;
        }
        self.query.page_size = size;
        self.query.page_index = 0;
        true
    }

    /// Step through the configured page sizes.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let options = &self.page_size_options;
        let current = options.iter().position(|size| *size == self.query.page_size);
        let next = match (current, forward) {
            (Some(i), true) => options.get(i + 1).copied(),
            (Some(i), false) => i.checked_sub(1).and_then(|i| options.get(i).copied()),
            // size not among the options: jump to the nearest one in that direction
            (None, true) => options.iter().copied().find(|size| *size > self.query.page_size),
            (None, false) => options.iter().rev().copied().find(|size| *size < self.query.page_size),
        };

        match next {
            Some(size) => self.set_page_size(size),
            None => false,
        }
    }

    // Filtering

    pub fn filter(&self, field: &str) -> Option<&str> {
        self.query.filters.get(field).map(String::as_str)
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.query.filters
    }

    /// Set one filter value; an empty value removes the filter. Any change
    /// returns to the first page.
    pub fn set_filter(&mut self, field: &str, value: &str) -> bool {
        let value = value.trim();
        let changed = if value.is_empty() {
            self.query.filters.remove(field).is_some()
        } else if self.query.filters.get(field).map(String::as_str) == Some(value) {
            false
        } else {
            self.query.filters.insert(field.to_string(), value.to_string());
            true
        };

        if changed {
            self.query.page_index = 0;
        }
        changed
    }

    /// Replace the filters for every field in `values`.
    pub fn set_filters(&mut self, values: &[(String, String)]) -> bool {
        let mut changed = false;
        for (field, value) in values {
            changed |= self.set_filter(field, value);
        }
        changed
    }

    // Fetching

    /// Start a request for the current query.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.latest_issued = self.next_seq;
        self.status = LoadStatus::Loading;

        FetchTicket {
            seq: self.next_seq,
            params: self.query.to_params(),
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.mounted && ticket.seq > self.applied_seq && ticket.params == self.query.to_params()
    }

    fn settle_status(&mut self, ticket: &FetchTicket, status: LoadStatus) {
        // a newer request for the same params is still in flight
        self.status = if ticket.seq < self.latest_issued {
            LoadStatus::Loading
        } else {
            status
        };
    }

    /// Apply a successful response. Returns false when it was stale.
    pub fn apply_response(&mut self, ticket: &FetchTicket, response: PageResponse<R>) -> bool {
        if !self.is_current(ticket) {
            debug!("Discarding stale {} page (seq {})", R::KIND, ticket.seq);
            return false;
        }

        self.applied_seq = ticket.seq;
        self.selection
            .retain_page(response.data.iter().map(R::row_id));
        self.last_response = Some(response);
        self.error = None;
        self.settle_status(ticket, LoadStatus::Success);
        true
    }

    /// Record a failed request; rows already shown are kept.
    pub fn apply_error(&mut self, ticket: &FetchTicket, error: ApiError) -> bool {
        if !self.is_current(ticket) {
            debug!("Discarding stale {} error (seq {})", R::KIND, ticket.seq);
            return false;
        }

        self.applied_seq = ticket.seq;
        self.error = Some(error);
        self.settle_status(ticket, LoadStatus::Error);
        true
    }

    /// Fetch the current page from `source` and apply the outcome.
    pub async fn fetch<S>(&mut self, source: &S) -> bool
    where
        S: DataSource<Row = R> + ?Sized,
    {
        let ticket = self.begin_fetch();
        match source.list(&ticket.params).await {
            Ok(response) => self.apply_response(&ticket, response),
            Err(error) => self.apply_error(&ticket, error),
        }
    }

    /// Stop accepting responses.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    // Rows

    pub fn rows(&self) -> &[R] {
        self.last_response
            .as_ref()
            .map(|response| response.data.as_slice())
            .unwrap_or(&[])
    }

    pub fn row(&self, id: &str) -> Option<&R> {
        self.rows().iter().find(|row| row.row_id() == id)
    }

    pub fn total(&self) -> u64 {
        self.last_response
            .as_ref()
            .map_or(0, |response| response.meta.total)
    }

    /// One-based position of a row across all pages.
    pub fn row_number(&self, row: usize) -> usize {
        self.query.page_index * self.query.page_size + row + 1
    }

    // Selection

    pub fn toggle_selected(&mut self, id: &str) {
        if self.row(id).is_some() {
            self.selection.toggle(id);
        }
    }

    pub fn toggle_select_page(&mut self) {
        let ids: Vec<String> = self.rows().iter().map(|row| row.row_id().to_string()).collect();
        self.selection.toggle_all(ids.iter().map(String::as_str));
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selection_summary(&self) -> String {
        format!("{} of {} row(s) selected.", self.selection.len(), self.total())
    }

    // Columns

    pub fn toggle_column(&mut self, column: &str) {
        if !self.hidden_columns.remove(column) {
            self.hidden_columns.insert(column.to_string());
        }
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        !self.hidden_columns.contains(column)
    }
}
