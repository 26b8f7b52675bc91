use crate::api::User;
use crate::config::{DisplayConfig, TableConfig};
use crate::constants::FILTER_EMAIL;
use crate::ui::components::data_table_component::{Column, DataTableComponent};
use crate::ui::core::actions::DialogType;
use crate::utils::datetime;
use ratatui::{layout::Constraint, widgets::Cell};

fn columns() -> Vec<Column<User>> {
    vec![
        Column {
            id: "full_name",
            header: "Full name",
            sort_field: Some("full_name"),
            hideable: false,
            width: Constraint::Min(16),
            cell: |user, _| Cell::from(user.full_name.clone()),
        },
        Column {
            id: "user_name",
            header: "User name",
            sort_field: Some("user_name"),
            hideable: true,
            width: Constraint::Min(12),
            cell: |user, _| Cell::from(user.user_name.clone()),
        },
        Column {
            id: "email",
            header: "Email",
            sort_field: Some("email"),
            hideable: true,
            width: Constraint::Min(20),
            cell: |user, _| Cell::from(user.email.clone()),
        },
        Column {
            id: "avatar",
            header: "Avatar",
            sort_field: None,
            hideable: true,
            width: Constraint::Length(8),
            cell: |user, _| Cell::from(if user.avatar.is_some() { "yes" } else { "-" }),
        },
        Column {
            id: "is_active",
            header: "Status",
            sort_field: Some("is_active"),
            hideable: true,
            width: Constraint::Length(10),
            cell: |user, _| super::status_cell(user),
        },
        Column {
            id: "created_at",
            header: "Created at",
            sort_field: Some("created_at"),
            hideable: true,
            width: Constraint::Length(20),
            cell: created_at_cell,
        },
    ]
}

fn created_at_cell(user: &User, display: &DisplayConfig) -> Cell<'static> {
    Cell::from(datetime::format_timestamp(
        &user.created_at,
        &display.datetime_format,
        display.users_created_at_offset_hours,
    ))
}

/// Users screen: editable rows, filtered by email
pub fn users_table(table_config: &TableConfig, display: DisplayConfig) -> DataTableComponent<User> {
    DataTableComponent::new("Users", columns(), vec![FILTER_EMAIL], table_config, display)
        .with_editor(|user| DialogType::UserEdit(user.clone()))
}
