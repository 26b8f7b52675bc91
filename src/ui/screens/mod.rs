//! Column layouts of the dashboard screens

pub mod cards;
pub mod users;

use crate::table::{EntityKind, TableRow};
use crate::ui::components::dialogs::status_label;
use ratatui::{
    style::{Color, Style},
    widgets::Cell,
};

/// Colored active/blocked cell shared by both screens
pub(crate) fn status_cell<R: TableRow>(row: &R) -> Cell<'static> {
    let active = row.is_active();
    let color = if active { Color::Green } else { Color::Red };
    Cell::from(status_label(R::KIND, active)).style(Style::default().fg(color))
}

pub use cards::cards_table;
pub use users::users_table;

/// Screens in tab order
pub const SCREENS: [EntityKind; 2] = [EntityKind::User, EntityKind::Card];
