use crate::api::Card;
use crate::config::{DisplayConfig, TableConfig};
use crate::constants::{FILTER_EMAIL, FILTER_TITLE};
use crate::ui::components::data_table_component::{Column, DataTableComponent};
use crate::utils::datetime;
use ratatui::{layout::Constraint, widgets::Cell};

// The cards endpoint only honours sortOrder, applied to creation time.
fn columns() -> Vec<Column<Card>> {
    vec![
        Column {
            id: "owner",
            header: "Owner",
            sort_field: None,
            hideable: false,
            width: Constraint::Min(16),
            cell: |card, _| Cell::from(card.user.full_name.clone()),
        },
        Column {
            id: "name",
            header: "Name on card",
            sort_field: None,
            hideable: true,
            width: Constraint::Min(16),
            cell: |card, _| Cell::from(format!("{} {}", card.first_name, card.last_name)),
        },
        Column {
            id: "gender",
            header: "Gender",
            sort_field: None,
            hideable: true,
            width: Constraint::Length(8),
            cell: |card, _| Cell::from(card.gender.clone()),
        },
        Column {
            id: "dob",
            header: "Date of birth",
            sort_field: None,
            hideable: true,
            width: Constraint::Length(14),
            cell: dob_cell,
        },
        Column {
            id: "address",
            header: "Address",
            sort_field: None,
            hideable: true,
            width: Constraint::Min(16),
            cell: |card, _| Cell::from(card.address.clone()),
        },
        Column {
            id: "phone",
            header: "Phone",
            sort_field: None,
            hideable: true,
            width: Constraint::Length(14),
            cell: |card, _| Cell::from(card.phone.clone()),
        },
        Column {
            id: "is_active",
            header: "Status",
            sort_field: None,
            hideable: true,
            width: Constraint::Length(10),
            cell: |card, _| super::status_cell(card),
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

fn dob_cell(card: &Card, display: &DisplayConfig) -> Cell<'static> {
    Cell::from(datetime::format_date(&card.dob, &display.date_format))
}

fn created_at_cell(card: &Card, display: &DisplayConfig) -> Cell<'static> {
    Cell::from(datetime::format_timestamp(&card.created_at, &display.datetime_format, 0))
}

/// Cards screen: read-only rows, filtered by card title and owner email
pub fn cards_table(table_config: &TableConfig, display: DisplayConfig) -> DataTableComponent<Card> {
    DataTableComponent::new("Cards", columns(), vec![FILTER_TITLE, FILTER_EMAIL], table_config, display)
}
