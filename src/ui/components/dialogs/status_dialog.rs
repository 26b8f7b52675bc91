use crate::constants::{STATUS_ACTIVE, STATUS_BLOCKED, STATUS_INACTIVE};
use crate::table::{EntityKind, EntityRef};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::actions::{Action, RequestId};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Label of an active flag as shown for each entity kind
pub fn status_label(kind: EntityKind, active: bool) -> &'static str {
    match (kind, active) {
        (_, true) => STATUS_ACTIVE,
        (EntityKind::User, false) => STATUS_BLOCKED,
        (EntityKind::Card, false) => STATUS_INACTIVE,
    }
}

/// Confirmation for flipping an entity's active flag
#[derive(Debug, Clone)]
pub struct StatusForm {
    entity: EntityRef,
    pending: Option<RequestId>,
    error: Option<String>,
}

impl StatusForm {
    pub fn new(entity: EntityRef) -> Self {
        Self {
            entity,
            pending: None,
            error: None,
        }
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    /// Flag value that confirming will set
    pub fn target(&self) -> bool {
        !self.entity.is_active
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request this form is waiting on, if any
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fail(&mut self, message: String) {
        self.pending = None;
        self.error = Some(message);
    }

    /// Handle a key; a confirmation is submitted as `request`.
    pub fn handle_key(&mut self, key: KeyEvent, request: RequestId) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
            _ if self.is_pending() => Action::None,
            KeyCode::Enter | KeyCode::Char('y') => {
                self.pending = Some(request);
                self.error = None;
                Action::SetActive {
                    entity: self.entity.clone(),
                    active: self.target(),
                    request,
                }
            }
            _ => Action::None,
        }
    }
}

pub fn render_status_dialog(f: &mut Frame, area: Rect, form: &StatusForm) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 9, area);
    f.render_widget(Clear, dialog_area);

    let entity = form.entity();
    let title = format!(" Change {} status ", entity.kind);
    f.render_widget(common::create_dialog_block(&title, Color::Yellow), dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let message = format!(
        "Set {} '{}' from {} to {}?",
        entity.kind,
        entity.label,
        status_label(entity.kind, entity.is_active),
        status_label(entity.kind, form.target())
    );
    let message = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(message, chunks[0]);
    f.render_widget(common::create_status_paragraph(form.is_pending(), form.error()), chunks[1]);
    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::ENTER_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_DECLINE,
        ]),
        chunks[2],
    );
}
