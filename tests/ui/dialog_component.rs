use admindash::api::User;
use admindash::table::{EntityKind, EntityRef};
use admindash::ui::components::{ActiveDialog, DialogComponent};
use admindash::ui::core::{Action, Component, DialogType, MutationOrigin, RequestId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn user() -> User {
    User {
        id: "u1".to_string(),
        full_name: "Ada Lovelace".to_string(),
        user_name: "ada".to_string(),
        email: "ada@example.com".to_string(),
        avatar: None,
        is_active: true,
        created_at: String::new(),
    }
}

fn submitted_request(action: &Action) -> RequestId {
    match action {
        Action::UpdateUser { request, .. } | Action::SetActive { request, .. } => *request,
        other => panic!("expected a dialog mutation, got {:?}", other),
    }
}

fn card_ref() -> EntityRef {
    EntityRef {
        kind: EntityKind::Card,
        id: "c1".to_string(),
        label: "Ada Lovelace".to_string(),
        is_active: true,
    }
}

#[test]
fn test_edit_dialog_closes_on_success() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::UserEdit(user())));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    let request = submitted_request(&action);
    assert!(dialog.is_visible());

    let passed = dialog.update(Action::MutationSucceeded {
        kind: EntityKind::User,
        origin: MutationOrigin::Dialog(request),
        message: "ok".to_string(),
    });
    assert!(matches!(passed, Action::MutationSucceeded { .. }));
    assert!(!dialog.is_visible());
}

#[test]
fn test_edit_dialog_shows_failure_inline() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::UserEdit(user())));
    let request = submitted_request(&dialog.handle_key_events(key(KeyCode::Enter)));

    let passed = dialog.update(Action::MutationFailed {
        origin: MutationOrigin::Dialog(request),
        message: "Email already taken".to_string(),
    });
    assert!(matches!(passed, Action::None));

    match dialog.dialog() {
        Some(ActiveDialog::UserEdit(form)) => {
            assert_eq!(form.error(), Some("Email already taken"));
            assert!(!form.is_pending());
        }
        _ => panic!("edit dialog should stay open"),
    }
}

#[test]
fn test_escape_discards_edits() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::UserEdit(user())));
    dialog.handle_key_events(key(KeyCode::Char('x')));

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    dialog.update(action);
    assert!(!dialog.is_visible());

    // reopening starts from the row again
    dialog.update(Action::ShowDialog(DialogType::UserEdit(user())));
    match dialog.dialog() {
        Some(ActiveDialog::UserEdit(form)) => assert_eq!(form.value(0), "Ada Lovelace"),
        _ => panic!("expected edit dialog"),
    }
}

#[test]
fn test_failure_after_dismissal_becomes_direct() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::StatusChange(card_ref())));
    let request = submitted_request(&dialog.handle_key_events(key(KeyCode::Char('y'))));
    let action = dialog.handle_key_events(key(KeyCode::Esc));
    dialog.update(action);

    let passed = dialog.update(Action::MutationFailed {
        origin: MutationOrigin::Dialog(request),
        message: "boom".to_string(),
    });
    assert!(matches!(
        passed,
        Action::MutationFailed {
            origin: MutationOrigin::Direct,
            ..
        }
    ));
}

#[test]
fn test_earlier_result_does_not_touch_newer_form() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::StatusChange(card_ref())));
    let card_request = submitted_request(&dialog.handle_key_events(key(KeyCode::Enter)));
    let action = dialog.handle_key_events(key(KeyCode::Esc));
    dialog.update(action);

    dialog.update(Action::ShowDialog(DialogType::UserEdit(user())));
    let edit_request = submitted_request(&dialog.handle_key_events(key(KeyCode::Enter)));
    assert_ne!(card_request, edit_request);

    // the card failure is reported on its own and the edit keeps waiting
    let passed = dialog.update(Action::MutationFailed {
        origin: MutationOrigin::Dialog(card_request),
        message: "Failed to change card status: 500".to_string(),
    });
    assert!(matches!(
        passed,
        Action::MutationFailed {
            origin: MutationOrigin::Direct,
            ..
        }
    ));
    match dialog.dialog() {
        Some(ActiveDialog::UserEdit(form)) => {
            assert!(form.is_pending());
            assert_eq!(form.error(), None);
        }
        _ => panic!("edit dialog should stay open"),
    }

    // a late card success does not close it either
    dialog.update(Action::MutationSucceeded {
        kind: EntityKind::Card,
        origin: MutationOrigin::Dialog(card_request),
        message: "ok".to_string(),
    });
    assert!(matches!(dialog.dialog(), Some(ActiveDialog::UserEdit(_))));

    dialog.update(Action::MutationSucceeded {
        kind: EntityKind::User,
        origin: MutationOrigin::Dialog(edit_request),
        message: "ok".to_string(),
    });
    assert!(!dialog.is_visible());
}

#[test]
fn test_status_dialog_requests_flip() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::StatusChange(card_ref())));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetActive { entity, active, .. } => {
            assert_eq!(entity.id, "c1");
            assert!(!active);
        }
        other => panic!("expected SetActive, got {:?}", other),
    }
}

#[test]
fn test_delete_confirmation_closes_and_hands_off() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation(card_ref())));

    let action = dialog.handle_key_events(key(KeyCode::Char('y')));
    assert!(matches!(action, Action::DeleteEntity(ref entity) if entity.id == "c1"));
    assert!(!dialog.is_visible());
}

#[test]
fn test_declining_delete_is_a_no_op() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation(card_ref())));

    let action = dialog.handle_key_events(key(KeyCode::Char('n')));
    assert!(matches!(action, Action::HideDialog));
    assert!(matches!(dialog.update(action), Action::None));
    assert!(!dialog.is_visible());
}

#[test]
fn test_error_dialog_scrolls_then_dismisses() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Error("line\n".repeat(40))));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog));
}

#[test]
fn test_help_closes_with_question_mark() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
}
