use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ApiError, Card, CardPatch, PageResponse};
use crate::constants::{api_path, FILTER_EMAIL, FILTER_TITLE};
use crate::table::{DataSource, ListParams, SortOrder};

/// Query string of the cards list endpoint.
///
/// The endpoint orders by creation time only, so the sort field is not sent.
#[derive(Debug, Serialize)]
struct CardsQuery<'a> {
    page: usize,
    limit: usize,
    #[serde(rename = "sortOrder")]
    sort_order: SortOrder,
    is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl<'a> From<&'a ListParams> for CardsQuery<'a> {
    fn from(params: &'a ListParams) -> Self {
        Self {
            page: params.page,
            limit: params.page_size,
            sort_order: params.sort_order,
            is_deleted: false,
            title: params.filter(FILTER_TITLE),
            email: params.filter(FILTER_EMAIL),
        }
    }
}

/// The cards list nests its page under `cards`.
#[derive(Debug, Deserialize)]
struct CardsEnvelope {
    cards: PageResponse<Card>,
}

/// Admin operations on cards.
#[derive(Clone)]
pub struct CardsApi {
    client: Arc<ApiClient>,
}

impl CardsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch one page of non-deleted cards.
    pub async fn list(&self, params: &ListParams) -> Result<PageResponse<Card>, ApiError> {
        let envelope: CardsEnvelope = self
            .client
            .get_with_query(api_path::CARDS_LIST, &CardsQuery::from(params))
            .await?;
        Ok(envelope.cards)
    }

    pub async fn update(&self, id: &str, patch: &CardPatch) -> Result<(), ApiError> {
        let path = format!("{}/{}", api_path::CARD_UPDATE, id);
        let _: Value = self.client.put_json(&path, patch).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", api_path::CARD_DELETE, id);
        let _: Value = self.client.delete(&path).await?;
        Ok(())
    }
}

#[async_trait]
impl DataSource for CardsApi {
    type Row = Card;

    async fn list(&self, params: &ListParams) -> Result<PageResponse<Card>, ApiError> {
        CardsApi::list(self, params).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        CardsApi::delete(self, id).await
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        let patch = CardPatch {
            is_active: Some(active),
        };
        self.update(id, &patch).await
    }
}
