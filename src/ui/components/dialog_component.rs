//! Modal dialog component.
//!
//! Holds at most one open dialog. Form dialogs own their editing state and
//! turn keys into actions; read-only dialogs (error, info, help, logs) share
//! one scroll position.

use crate::logger::Logger;
use crate::table::EntityRef;
use crate::ui::components::dialogs::{
    handle_delete_key, render_columns_dialog, render_delete_confirmation_dialog, render_error_dialog,
    render_filter_dialog, render_help_dialog, render_info_dialog, render_logs_dialog, render_status_dialog,
    render_user_edit_dialog, ColumnsForm, DialogScroll, FilterForm, StatusForm, UserEditForm,
};
use crate::ui::core::{
    actions::{Action, DialogType, MutationOrigin, RequestId},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// The open dialog together with its editing state
#[derive(Debug, Clone)]
pub enum ActiveDialog {
    UserEdit(UserEditForm),
    Status(StatusForm),
    Delete(EntityRef),
    Filter(FilterForm),
    Columns(ColumnsForm),
    Error(String),
    Info(String),
    Help,
    Logs,
}

impl From<DialogType> for ActiveDialog {
    fn from(dialog_type: DialogType) -> Self {
        match dialog_type {
            DialogType::UserEdit(user) => ActiveDialog::UserEdit(UserEditForm::new(&user)),
            DialogType::StatusChange(entity) => ActiveDialog::Status(StatusForm::new(entity)),
            DialogType::DeleteConfirmation(entity) => ActiveDialog::Delete(entity),
            DialogType::Filter { kind, fields } => ActiveDialog::Filter(FilterForm::new(kind, fields)),
            DialogType::Columns { kind, columns } => ActiveDialog::Columns(ColumnsForm::new(kind, columns)),
            DialogType::Error(message) => ActiveDialog::Error(message),
            DialogType::Info(message) => ActiveDialog::Info(message),
            DialogType::Help => ActiveDialog::Help,
            DialogType::Logs => ActiveDialog::Logs,
        }
    }
}

#[derive(Default)]
pub struct DialogComponent {
    dialog: Option<ActiveDialog>,
    scroll: DialogScroll,
    logger: Option<Logger>,
    /// Id handed to the next form submission
    next_request: RequestId,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog(&self) -> Option<&ActiveDialog> {
        self.dialog.as_ref()
    }

    fn clear_dialog(&mut self) {
        self.dialog = None;
        self.scroll.reset();
    }

    /// True while the open form waits for the result of `request`
    fn awaiting(&self, request: RequestId) -> bool {
        let pending = match &self.dialog {
            Some(ActiveDialog::UserEdit(form)) => form.pending_request(),
            Some(ActiveDialog::Status(form)) => form.pending_request(),
            _ => None,
        };
        pending == Some(request)
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog) = self.dialog.as_mut() else {
            return Action::None;
        };

        let request = self.next_request;
        let action = match dialog {
            ActiveDialog::UserEdit(form) => form.handle_key(key, request),
            ActiveDialog::Status(form) => form.handle_key(key, request),
            ActiveDialog::Delete(entity) => handle_delete_key(entity, key),
            ActiveDialog::Filter(form) => form.handle_key(key),
            ActiveDialog::Columns(form) => form.handle_key(key),
            ActiveDialog::Error(_) | ActiveDialog::Info(_) => {
                if self.scroll.handle_key(key) {
                    Action::None
                } else {
                    // any other key dismisses the message
                    Action::HideDialog
                }
            }
            ActiveDialog::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
            ActiveDialog::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
        };

        match &action {
            Action::UpdateUser { .. } | Action::SetActive { .. } => self.next_request += 1,
            // delete and filter dialogs close as soon as they hand off their action
            Action::DeleteEntity(_) | Action::ApplyFilters { .. } => self.clear_dialog(),
            _ => {}
        }
        action
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog = Some(dialog_type.into());
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::MutationSucceeded {
                origin: MutationOrigin::Dialog(request),
                ..
            } => {
                if self.awaiting(request) {
                    self.clear_dialog();
                }
                action
            }
            Action::MutationFailed {
                origin: MutationOrigin::Dialog(request),
                message,
            } if self.awaiting(request) => {
                match self.dialog.as_mut() {
                    Some(ActiveDialog::UserEdit(form)) => form.fail(message),
                    Some(ActiveDialog::Status(form)) => form.fail(message),
                    _ => {}
                }
                Action::None
            }
            // the submitting form was dismissed or replaced before the request finished
            Action::MutationFailed {
                origin: MutationOrigin::Dialog(_),
                message,
            } => Action::MutationFailed {
                origin: MutationOrigin::Direct,
                message,
            },
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };

        match dialog {
            ActiveDialog::UserEdit(form) => render_user_edit_dialog(f, rect, form),
            ActiveDialog::Status(form) => render_status_dialog(f, rect, form),
            ActiveDialog::Delete(entity) => render_delete_confirmation_dialog(f, rect, entity),
            ActiveDialog::Filter(form) => render_filter_dialog(f, rect, form),
            ActiveDialog::Columns(form) => render_columns_dialog(f, rect, form),
            ActiveDialog::Error(message) => render_error_dialog(f, rect, message, &mut self.scroll),
            ActiveDialog::Info(message) => render_info_dialog(f, rect, message, &mut self.scroll),
            ActiveDialog::Help => render_help_dialog(f, rect, &mut self.scroll),
            ActiveDialog::Logs => render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll),
        }
    }
}
