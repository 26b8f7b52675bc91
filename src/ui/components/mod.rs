//! Reusable UI components

pub mod data_table_component;
pub mod dialog_component;
pub mod dialogs;

pub use data_table_component::{Column, DataTableComponent};
pub use dialog_component::{ActiveDialog, DialogComponent};
