//! Remote-data table synchronization.
//!
//! Everything in this module is independent of the terminal: the controller
//! owns the query state of one screen, derives the request parameters sent to
//! a [`DataSource`], and reconciles responses into rows and a page count.

pub mod controller;
pub mod pagination;
pub mod query;
pub mod selection;

use std::fmt;

use async_trait::async_trait;

use crate::api::{ApiError, PageResponse};

pub use controller::{FetchTicket, LoadStatus, TableController};
pub use pagination::{page_count, page_window, PageItem};
pub use query::{ListParams, QueryState, SortOrder, SortState};
pub use selection::Selection;

/// The two entity collections managed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Card,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Card => f.write_str("card"),
        }
    }
}

/// Lightweight handle on a row, carried by dialogs and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// A record that can be displayed as a table row.
pub trait TableRow: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;
    /// Whether the screen offers an edit dialog for this row type.
    const EDITABLE: bool;

    fn row_id(&self) -> &str;
    /// Human readable name used in confirmation dialogs.
    fn label(&self) -> String;
    fn is_active(&self) -> bool;

    fn entity_ref(&self) -> EntityRef {
        EntityRef {
            kind: Self::KIND,
            id: self.row_id().to_string(),
            label: self.label(),
            is_active: self.is_active(),
        }
    }
}

/// Remote collection backing a table screen.
#[async_trait]
pub trait DataSource: Send + Sync {
    type Row: TableRow;

    /// Fetch one page for the given parameters.
    async fn list(&self, params: &ListParams) -> Result<PageResponse<Self::Row>, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError>;
}
