use crate::api::{ApiError, Card, PageResponse, User, UserPatch};
use crate::table::{EntityKind, EntityRef, FetchTicket};

/// Identifies one mutation submitted from a dialog.
pub type RequestId = u64;

/// Where a mutation was started from, which decides how its failure is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOrigin {
    /// Started by a dialog that stays open and shows the error inline. Only
    /// the form that submitted `RequestId` reacts to the result.
    Dialog(RequestId),
    /// Started after a dialog closed; failures open an error dialog.
    Direct,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchScreen(EntityKind),
    NextScreen,

    // Table data
    FetchPage(EntityKind),
    UsersLoaded {
        ticket: FetchTicket,
        result: Result<PageResponse<User>, ApiError>,
    },
    CardsLoaded {
        ticket: FetchTicket,
        result: Result<PageResponse<Card>, ApiError>,
    },
    ApplyFilters {
        kind: EntityKind,
        filters: Vec<(String, String)>,
    },
    ToggleColumn {
        kind: EntityKind,
        column: String,
    },

    // Row mutations
    UpdateUser {
        id: String,
        patch: UserPatch,
        request: RequestId,
    },
    SetActive {
        entity: EntityRef,
        active: bool,
        request: RequestId,
    },
    DeleteEntity(EntityRef),
    MutationSucceeded {
        kind: EntityKind,
        origin: MutationOrigin,
        message: String,
    },
    MutationFailed {
        origin: MutationOrigin,
        message: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

/// One toggleable column as listed by the columns dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
    pub id: String,
    pub header: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    UserEdit(User),
    StatusChange(EntityRef),
    DeleteConfirmation(EntityRef),
    Filter {
        kind: EntityKind,
        /// Field name and current value, in display order
        fields: Vec<(String, String)>,
    },
    Columns {
        kind: EntityKind,
        columns: Vec<ColumnToggle>,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
