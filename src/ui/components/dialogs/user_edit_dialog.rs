use crate::api::{ApiError, User, UserPatch};
use crate::ui::components::dialogs::common::{self, shortcuts, TextInput};
use crate::ui::core::actions::{Action, RequestId};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

pub const FIELD_LABELS: [&str; 3] = ["Full name", "User name", "Email"];

/// Edit form for a single user.
///
/// Holds a local copy of the editable fields; nothing is written back until
/// the form is submitted, and Esc drops every edit.
#[derive(Debug, Clone)]
pub struct UserEditForm {
    user_id: String,
    inputs: [TextInput; 3],
    focus: usize,
    pending: Option<RequestId>,
    error: Option<String>,
}

impl UserEditForm {
    pub fn new(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            inputs: [
                TextInput::new(user.full_name.clone()),
                TextInput::new(user.user_name.clone()),
                TextInput::new(user.email.clone()),
            ],
            focus: 0,
            pending: None,
            error: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn value(&self, field: usize) -> &str {
        self.inputs[field].value()
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

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Build the full patch from the fields as typed, rejecting blank ones.
    pub fn patch(&self) -> Result<UserPatch, ApiError> {
        for (label, input) in FIELD_LABELS.iter().zip(&self.inputs) {
            if input.value().trim().is_empty() {
                return Err(ApiError::Validation(format!("{} cannot be empty", label)));
            }
        }

        Ok(UserPatch {
            full_name: Some(self.inputs[0].value().to_string()),
            user_name: Some(self.inputs[1].value().to_string()),
            email: Some(self.inputs[2].value().to_string()),
        })
    }

    /// Validate and mark the form as waiting on `request`.
    pub fn submit(&mut self, request: RequestId) -> Action {
        match self.patch() {
            Ok(patch) => {
                self.pending = Some(request);
                self.error = None;
                Action::UpdateUser {
                    id: self.user_id.clone(),
                    patch,
                    request,
                }
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Action::None
            }
        }
    }

    /// Keep the form open and show why the update failed.
    pub fn fail(&mut self, message: String) {
        self.pending = None;
        self.error = Some(message);
    }

    pub fn handle_key(&mut self, key: KeyEvent, request: RequestId) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            _ if self.is_pending() => Action::None,
            KeyCode::Enter => self.submit(request),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                Action::None
            }
            _ => {
                if self.inputs[self.focus].handle_key(key) {
                    self.error = None;
                }
                Action::None
            }
        }
    }
}

pub fn render_user_edit_dialog(f: &mut Frame, area: Rect, form: &UserEditForm) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 15, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(" ✏️  Edit User ", Color::Cyan);
    f.render_widget(block, dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    for (index, label) in FIELD_LABELS.iter().enumerate() {
        let focused = index == form.focus && !form.is_pending();
        let input = common::create_input_paragraph(&form.inputs[index], label, focused);
        f.render_widget(input, chunks[index]);
    }

    f.render_widget(common::create_status_paragraph(form.is_pending(), form.error()), chunks[3]);

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ENTER_SAVE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[4]);
}
