use crate::table::EntityKind;
use crate::ui::components::dialogs::common::{self, shortcuts, TextInput};
use crate::ui::core::actions::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Text filters for one table, applied together on Enter
#[derive(Debug, Clone)]
pub struct FilterForm {
    kind: EntityKind,
    fields: Vec<(String, TextInput)>,
    focus: usize,
}

impl FilterForm {
    pub fn new(kind: EntityKind, fields: Vec<(String, String)>) -> Self {
        Self {
            kind,
            fields: fields
                .into_iter()
                .map(|(name, value)| (name, TextInput::new(value)))
                .collect(),
            focus: 0,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Field names and their current values; empty values clear a filter
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(name, input)| (name.clone(), input.value().to_string()))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => Action::ApplyFilters {
                kind: self.kind,
                filters: self.values(),
            },
            KeyCode::Tab | KeyCode::Down if !self.fields.is_empty() => {
                self.focus = (self.focus + 1) % self.fields.len();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up if !self.fields.is_empty() => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL) => {
                if let Some((_, input)) = self.fields.get_mut(self.focus) {
                    input.clear();
                }
                Action::None
            }
            _ => {
                if let Some((_, input)) = self.fields.get_mut(self.focus) {
                    input.handle_key(key);
                }
                Action::None
            }
        }
    }
}

pub fn render_filter_dialog(f: &mut Frame, area: Rect, form: &FilterForm) {
    let height = 3 * form.fields.len() as u16 + 4;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" 🔎 Filter {}s ", form.kind());
    f.render_widget(common::create_dialog_block(&title, Color::Magenta), dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let mut constraints: Vec<Constraint> = form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(inner);

    for (index, (name, input)) in form.fields.iter().enumerate() {
        let paragraph = common::create_input_paragraph(input, name, index == form.focus);
        f.render_widget(paragraph, chunks[index]);
    }

    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            ("Enter", Color::Green, " Apply"),
            shortcuts::SEPARATOR,
            ("Ctrl+U", Color::Yellow, " Clear"),
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[form.fields.len()],
    );
}
