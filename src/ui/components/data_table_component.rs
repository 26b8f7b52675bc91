//! Generic remote-data table screen.
//!
//! A [`DataTableComponent`] pairs a [`TableController`] with the column
//! definitions of one entity type. Key presses mutate the controller and ask
//! the app for a fetch; row actions open dialogs carrying the selected row.

use crate::api::{ApiError, PageResponse};
use crate::config::{DisplayConfig, TableConfig};
use crate::constants::{TABLE_EMPTY, TABLE_LOADING};
use crate::table::{page_window, FetchTicket, PageItem, SortOrder, TableController, TableRow};
use crate::ui::core::{
    actions::{Action, ColumnToggle, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const PAGE_STRIP_ITEMS: usize = 7;

/// How one column of a screen is titled, sorted and drawn.
pub struct Column<R> {
    pub id: &'static str,
    pub header: &'static str,
    /// Field sent as `sortBy`; `None` for unsortable columns
    pub sort_field: Option<&'static str>,
    pub hideable: bool,
    pub width: Constraint,
    pub cell: fn(&R, &DisplayConfig) -> Cell<'static>,
}

pub struct DataTableComponent<R: TableRow> {
    title: &'static str,
    controller: TableController<R>,
    columns: Vec<Column<R>>,
    filter_fields: Vec<&'static str>,
    editor: Option<fn(&R) -> DialogType>,
    display: DisplayConfig,
    cursor: usize,
    focused_column: usize,
    table_state: TableState,
}

impl<R: TableRow> DataTableComponent<R> {
    pub fn new(
        title: &'static str,
        columns: Vec<Column<R>>,
        filter_fields: Vec<&'static str>,
        table_config: &TableConfig,
        display: DisplayConfig,
    ) -> Self {
        Self {
            title,
            controller: TableController::new(
                table_config.default_page_size,
                table_config.page_size_options.clone(),
                table_config.reset_page_on_sort,
            ),
            columns,
            filter_fields,
            editor: None,
            display,
            cursor: 0,
            focused_column: 0,
            table_state: TableState::default(),
        }
    }

    /// Enable the `e` key, opening the dialog built by `editor`
    pub fn with_editor(mut self, editor: fn(&R) -> DialogType) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn controller(&self) -> &TableController<R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TableController<R> {
        &mut self.controller
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_column(&self) -> &Column<R> {
        &self.columns[self.focused_column.min(self.columns.len().saturating_sub(1))]
    }

    pub fn selected_row(&self) -> Option<&R> {
        self.controller.rows().get(self.cursor)
    }

    /// Start a fetch for the current query
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.controller.begin_fetch()
    }

    /// Reconcile a finished fetch. Returns whether it was applied.
    pub fn apply_result(&mut self, ticket: &FetchTicket, result: Result<PageResponse<R>, ApiError>) -> bool {
        let applied = match result {
            Ok(response) => self.controller.apply_response(ticket, response),
            Err(error) => self.controller.apply_error(ticket, error),
        };
        self.clamp_cursor();
        applied
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.controller.rows().len().saturating_sub(1));
    }

    fn visible_columns(&self) -> impl Iterator<Item = (usize, &Column<R>)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| self.controller.is_column_visible(column.id))
    }

    fn focus_column(&mut self, forward: bool) {
        let visible: Vec<usize> = self.visible_columns().map(|(index, _)| index).collect();
        if visible.is_empty() {
            return;
        }
        let position = visible.iter().position(|index| *index == self.focused_column).unwrap_or(0);
        let next = if forward {
            (position + 1) % visible.len()
        } else {
            (position + visible.len() - 1) % visible.len()
        };
        self.focused_column = visible[next];
    }

    fn fetch(&self) -> Action {
        Action::FetchPage(R::KIND)
    }

    fn fetch_if(&self, changed: bool) -> Action {
        if changed {
            self.fetch()
        } else {
            Action::None
        }
    }

    fn filter_dialog(&self) -> DialogType {
        DialogType::Filter {
            kind: R::KIND,
            fields: self
                .filter_fields
                .iter()
                .map(|field| {
                    let value = self.controller.filter(field).unwrap_or_default();
                    (field.to_string(), value.to_string())
                })
                .collect(),
        }
    }

    fn columns_dialog(&self) -> DialogType {
        DialogType::Columns {
            kind: R::KIND,
            columns: self
                .columns
                .iter()
                .filter(|column| column.hideable)
                .map(|column| ColumnToggle {
                    id: column.id.to_string(),
                    header: column.header.to_string(),
                    visible: self.controller.is_column_visible(column.id),
                })
                .collect(),
        }
    }

    fn header_cell(&self, index: usize, column: &Column<R>) -> Cell<'static> {
        let arrow = match column.sort_field.and_then(|field| self.controller.sort_direction_of(field)) {
            Some(SortOrder::Asc) => " ▲",
            Some(SortOrder::Desc) => " ▼",
            None => "",
        };
        let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        if index == self.focused_column {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(format!("{}{}", column.header, arrow)).style(style)
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let visible: Vec<(usize, &Column<R>)> = self.visible_columns().collect();

        let mut widths = vec![Constraint::Length(3), Constraint::Length(4)];
        widths.extend(visible.iter().map(|(_, column)| column.width));

        let mut header_cells = vec![Cell::from(""), Cell::from("#")];
        header_cells.extend(visible.iter().map(|(index, column)| self.header_cell(*index, column)));
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows: Vec<Row> = if self.controller.rows().is_empty() {
            let placeholder = if self.controller.is_loading() {
                TABLE_LOADING
            } else {
                TABLE_EMPTY
            };
            vec![Row::new(vec![Cell::from(""), Cell::from(""), Cell::from(placeholder)])]
        } else {
            self.controller
                .rows()
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let marker = if self.controller.is_selected(row.row_id()) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    let mut cells = vec![
                        Cell::from(marker),
                        Cell::from(self.controller.row_number(index).to_string()),
                    ];
                    cells.extend(visible.iter().map(|(_, column)| (column.cell)(row, &self.display)));
                    Row::new(cells)
                })
                .collect()
        };

        let title = if self.controller.is_loading() {
            format!(" {} ⟳ ", self.title)
        } else {
            format!(" {} ({}) ", self.title, self.controller.total())
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        if self.controller.rows().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.cursor));
        }
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn filter_line(&self) -> Line<'static> {
        if self.controller.filters().is_empty() {
            return Line::from(Span::styled("No filters • / to filter", Style::default().fg(Color::Gray)));
        }
        let mut spans = vec![Span::styled("Filters: ", Style::default().fg(Color::Gray))];
        for (field, value) in self.controller.filters() {
            spans.push(Span::styled(
                format!("{}={} ", field, value),
                Style::default().fg(Color::Magenta),
            ));
        }
        Line::from(spans)
    }

    fn pagination_line(&self) -> Line<'static> {
        let page_count = self.controller.page_count();
        let mut spans = vec![Span::raw(format!(
            "Page {} of {}  ",
            self.controller.current_page(),
            page_count
        ))];

        for item in page_window(self.controller.page_index(), page_count, PAGE_STRIP_ITEMS) {
            match item {
                PageItem::Page(index) if index == self.controller.page_index() => spans.push(Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                PageItem::Page(index) => spans.push(Span::raw(format!("{} ", index + 1))),
                PageItem::Ellipsis => spans.push(Span::raw("… ")),
            }
        }

        spans.push(Span::styled(
            format!(" Rows per page: {}", self.controller.page_size()),
            Style::default().fg(Color::Gray),
        ));
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(self.controller.selection_summary())];
        if let Some(error) = self.controller.error() {
            spans.push(Span::styled(
                format!("  ⚠ {}", error),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(spans)
    }
}

impl<R: TableRow> Component for DataTableComponent<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.controller.rows().len() {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                let changed = self.controller.next_page();
                self.fetch_if(changed)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                let changed = self.controller.previous_page();
                self.fetch_if(changed)
            }
            KeyCode::Home => {
                let changed = self.controller.first_page();
                self.fetch_if(changed)
            }
            KeyCode::End => {
                let changed = self.controller.last_page();
                self.fetch_if(changed)
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let changed = self.controller.cycle_page_size(true);
                self.fetch_if(changed)
            }
            KeyCode::Char('-') => {
                let changed = self.controller.cycle_page_size(false);
                self.fetch_if(changed)
            }
            KeyCode::Char(']') => {
                self.focus_column(true);
                Action::None
            }
            KeyCode::Char('[') => {
                self.focus_column(false);
                Action::None
            }
            KeyCode::Char('s') => match self.focused_column().sort_field {
                Some(field) => {
                    self.controller.toggle_sort(field);
                    self.fetch()
                }
                None => Action::None,
            },
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_row().map(|row| row.row_id().to_string()) {
                    self.controller.toggle_selected(&id);
                }
                Action::None
            }
            KeyCode::Char('a') => {
                self.controller.toggle_select_page();
                Action::None
            }
            KeyCode::Char('/') => Action::ShowDialog(self.filter_dialog()),
            KeyCode::Char('v') => Action::ShowDialog(self.columns_dialog()),
            KeyCode::Char('r') => self.fetch(),
            KeyCode::Char('e') if R::EDITABLE => match (self.editor, self.selected_row()) {
                (Some(editor), Some(row)) => Action::ShowDialog(editor(row)),
                _ => Action::None,
            },
            KeyCode::Char('b') => match self.selected_row() {
                Some(row) => Action::ShowDialog(DialogType::StatusChange(row.entity_ref())),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_row() {
                Some(row) => Action::ShowDialog(DialogType::DeleteConfirmation(row.entity_ref())),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ApplyFilters { kind, filters } if kind == R::KIND => {
                let changed = self.controller.set_filters(&filters);
                self.fetch_if(changed)
            }
            Action::ToggleColumn { kind, column } if kind == R::KIND => {
                self.controller.toggle_column(&column);
                if !self.controller.is_column_visible(self.focused_column().id) {
                    self.focus_column(true);
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(2)]).split(rect);

        f.render_widget(Paragraph::new(self.filter_line()), chunks[0]);
        self.render_table(f, chunks[1]);
        f.render_widget(Paragraph::new(vec![self.pagination_line(), self.status_line()]), chunks[2]);
    }
}
