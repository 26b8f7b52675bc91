use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiClient, ApiError, PageResponse, User, UserPatch};
use crate::constants::{api_path, FILTER_EMAIL};
use crate::table::{DataSource, ListParams, SortOrder};

/// Query string of the users list endpoint.
#[derive(Debug, Serialize)]
struct UsersQuery<'a> {
    page: usize,
    limit: usize,
    #[serde(rename = "sortBy")]
    sort_by: &'a str,
    #[serde(rename = "sortOrder")]
    sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl<'a> From<&'a ListParams> for UsersQuery<'a> {
    fn from(params: &'a ListParams) -> Self {
        Self {
            page: params.page,
            limit: params.page_size,
            sort_by: &params.sort_field,
            sort_order: params.sort_order,
            email: params.filter(FILTER_EMAIL),
        }
    }
}

/// Admin operations on users.
#[derive(Clone)]
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch one page of users.
    pub async fn list(&self, params: &ListParams) -> Result<PageResponse<User>, ApiError> {
        self.client
            .get_with_query(api_path::USERS_LIST, &UsersQuery::from(params))
            .await
    }

    /// Update profile fields. Fields left as `None` are not sent.
    pub async fn update(&self, id: &str, patch: &UserPatch) -> Result<(), ApiError> {
        let path = format!("{}/{}", api_path::USER_UPDATE, id);
        let _: Value = self.client.put_json(&path, patch).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", api_path::USER_DELETE, id);
        let _: Value = self.client.delete(&path).await?;
        Ok(())
    }

    /// Activate or block a user.
    pub async fn update_status(&self, id: &str, is_active: bool) -> Result<(), ApiError> {
        let path = format!("{}/{}", api_path::USER_UPDATE_STATUS, id);
        let _: Value = self
            .client
            .put_json(&path, &json!({ "is_active": is_active }))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DataSource for UsersApi {
    type Row = User;

    async fn list(&self, params: &ListParams) -> Result<PageResponse<User>, ApiError> {
        UsersApi::list(self, params).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        UsersApi::delete(self, id).await
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        self.update_status(id, active).await
    }
}
