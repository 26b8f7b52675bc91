//! Constants used throughout the application
//!
//! This module centralizes endpoint paths, UI text, and other constant values
//! to improve maintainability and consistency.

/// REST endpoint paths consumed by the resource API modules.
pub mod api_path {
    pub const USERS_LIST: &str = "/user/get-users-by-admin";
    pub const USER_UPDATE: &str = "/user/update-user";
    pub const USER_DELETE: &str = "/user/delete-user";
    pub const USER_UPDATE_STATUS: &str = "/user/update-status";

    pub const CARDS_LIST: &str = "/card/get-cards-by-admin";
    pub const CARD_UPDATE: &str = "/card/update-card";
    pub const CARD_DELETE: &str = "/card/delete-card-by-admin";
}

// Query defaults
/// Sort field transmitted when no column sort is active
pub const DEFAULT_SORT_FIELD: &str = "created_at";
/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page sizes offered by the "rows per page" selector
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 30, 40, 50];

// Filter fields
pub const FILTER_EMAIL: &str = "email";
pub const FILTER_TITLE: &str = "title";

// Success Messages
pub const SUCCESS_USER_UPDATED: &str = "✅ User updated";
pub const SUCCESS_USER_DELETED: &str = "✅ User deleted";
pub const SUCCESS_USER_ACTIVATED: &str = "✅ User activated";
pub const SUCCESS_USER_BLOCKED: &str = "✅ User blocked";
pub const SUCCESS_CARD_DELETED: &str = "✅ Card deleted";
pub const SUCCESS_CARD_ACTIVATED: &str = "✅ Card activated";
pub const SUCCESS_CARD_DEACTIVATED: &str = "✅ Card deactivated";

// Error Messages
pub const ERROR_USER_UPDATE_FAILED: &str = "❌ Failed to update user";
pub const ERROR_USER_DELETE_FAILED: &str = "❌ Failed to delete user";
pub const ERROR_USER_STATUS_FAILED: &str = "❌ Failed to change user status";
pub const ERROR_CARD_DELETE_FAILED: &str = "❌ Failed to delete card";
pub const ERROR_CARD_STATUS_FAILED: &str = "❌ Failed to change card status";
pub const ERROR_LOAD_USERS_FAILED: &str = "❌ Failed to load users";
pub const ERROR_LOAD_CARDS_FAILED: &str = "❌ Failed to load cards";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NO_API_TOKEN: &str = "❌ Error: no bearer token stored and token environment variable not set";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const TABLE_LOADING: &str = "Loading...";
pub const TABLE_EMPTY: &str = "No results.";

// Display values
pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_BLOCKED: &str = "Blocked";
pub const STATUS_INACTIVE: &str = "Inactive";
