use crate::table::EntityKind;
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::actions::{Action, ColumnToggle};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Column visibility picker; every toggle applies immediately
#[derive(Debug, Clone)]
pub struct ColumnsForm {
    kind: EntityKind,
    columns: Vec<ColumnToggle>,
    cursor: usize,
}

impl ColumnsForm {
    pub fn new(kind: EntityKind, columns: Vec<ColumnToggle>) -> Self {
        Self {
            kind,
            columns,
            cursor: 0,
        }
    }

    pub fn columns(&self) -> &[ColumnToggle] {
        &self.columns
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('v') | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.columns.len() {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.columns.get_mut(self.cursor) {
                Some(column) => {
                    column.visible = !column.visible;
                    Action::ToggleColumn {
                        kind: self.kind,
                        column: column.id.clone(),
                    }
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }
}

pub fn render_columns_dialog(f: &mut Frame, area: Rect, form: &ColumnsForm) {
    let dialog_area = LayoutManager::centered_rect_lines(40, form.columns.len() as u16 + 4, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(" Columns ", Color::Cyan), dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let lines: Vec<Line> = form
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let marker = if column.visible { "[x] " } else { "[ ] " };
            let style = if index == form.cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![Span::styled(marker, style), Span::styled(column.header.clone(), style)])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[0]);
    f.render_widget(
        common::create_instructions_paragraph(&[shortcuts::SPACE_TOGGLE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}
