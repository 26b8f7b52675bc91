//! Dialogs shown on top of the table screens

pub mod columns_dialog;
pub mod common;
pub mod delete_dialog;
pub mod filter_dialog;
pub mod scroll_behavior;
pub mod status_dialog;
pub mod system_dialogs;
pub mod user_edit_dialog;

pub use columns_dialog::{render_columns_dialog, ColumnsForm};
pub use delete_dialog::{handle_delete_key, render_delete_confirmation_dialog};
pub use filter_dialog::{render_filter_dialog, FilterForm};
pub use scroll_behavior::DialogScroll;
pub use status_dialog::{render_status_dialog, status_label, StatusForm};
pub use system_dialogs::{render_error_dialog, render_help_dialog, render_info_dialog, render_logs_dialog};
pub use user_edit_dialog::{render_user_edit_dialog, UserEditForm};
