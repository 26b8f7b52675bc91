//! Wire models for the admin backend.

use serde::{Deserialize, Serialize};

use crate::table::{pagination, EntityKind, TableRow};

/// A dashboard user as returned by the users list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Owner fields embedded in every card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardOwner {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub user_name: String,
}

/// An identity card tied to a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user: CardOwner,
}

/// Pagination metadata attached to every list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PageMeta {
    /// Number of pages for this result set; 0 when there are no rows.
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.total, self.limit)
    }
}

/// Canonical paginated envelope: `{ data, meta }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PageResponse<T> {
    pub fn page_count(&self) -> usize {
        self.meta.page_count()
    }
}

/// Partial update for a user. Only `Some` fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial update for a card. The backend only accepts the active flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TableRow for User {
    const KIND: EntityKind = EntityKind::User;
    const EDITABLE: bool = true;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        if self.full_name.is_empty() {
            self.user_name.clone()
        } else {
            self.full_name.clone()
        }
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TableRow for Card {
    const KIND: EntityKind = EntityKind::Card;
    const EDITABLE: bool = false;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.user.full_name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
