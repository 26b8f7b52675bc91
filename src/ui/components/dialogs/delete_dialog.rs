use crate::table::EntityRef;
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::actions::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Key handling for the delete confirmation; declining changes nothing
pub fn handle_delete_key(entity: &EntityRef, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => Action::DeleteEntity(entity.clone()),
        KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
        _ => Action::None,
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, entity: &EntityRef) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    f.render_widget(common::create_dialog_block(" ⚠️  Confirm Delete ", Color::Red), dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(format!(
        "Are you sure you want to delete {} '{}'?",
        entity.kind, entity.label
    ))
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(message, chunks[0]);
    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::ENTER_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_DECLINE,
        ]),
        chunks[1],
    );
}
