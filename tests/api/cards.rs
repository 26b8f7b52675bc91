use admindash::api::CardsApi;
use admindash::table::{DataSource, QueryState};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::client_for;

fn cards_envelope() -> serde_json::Value {
    json!({
        "cards": {
            "data": [
                {
                    "id": "c1",
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "gender": "female",
                    "dob": "1815-12-10",
                    "address": "London",
                    "phone": "555-0100",
                    "is_active": true,
                    "created_at": "2024-03-01T10:00:00.000Z",
                    "user": { "full_name": "Ada Lovelace", "user_name": "ada" }
                }
            ],
            "meta": { "total": 1, "page": 1, "limit": 10 }
        }
    })
}

#[tokio::test]
async fn test_list_unwraps_cards_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/get-cards-by-admin"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("sortOrder", "DESC"))
        .and(query_param("is_deleted", "false"))
        .and(query_param_is_missing("title"))
        .and(query_param_is_missing("email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let api = CardsApi::new(client_for(&server, Some("t")));
    let page = api.list(&QueryState::default().to_params()).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].user.full_name, "Ada Lovelace");
    assert_eq!(page.meta.total, 1);
}

#[tokio::test]
async fn test_list_sends_title_and_email_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/get-cards-by-admin"))
        .and(query_param("title", "gold card"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = QueryState::default();
    query.filters.insert("title".to_string(), "gold card".to_string());
    query.filters.insert("email".to_string(), "ada@example.com".to_string());

    let api = CardsApi::new(client_for(&server, Some("t")));
    api.list(&query.to_params()).await.unwrap();
}

#[tokio::test]
async fn test_plain_page_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/get-cards-by-admin"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [], "meta": { "total": 0, "page": 1, "limit": 10 } })),
        )
        .mount(&server)
        .await;

    let api = CardsApi::new(client_for(&server, Some("t")));
    let err = api.list(&QueryState::default().to_params()).await.unwrap_err();
    assert!(matches!(err, admindash::api::ApiError::Decode(_)));
}

#[tokio::test]
async fn test_set_active_updates_card() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/card/update-card/c1"))
        .and(body_json(json!({ "is_active": true })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = CardsApi::new(client_for(&server, Some("t")));
    api.set_active("c1", true).await.unwrap();
}

#[tokio::test]
async fn test_delete_uses_admin_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/card/delete-card-by-admin/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = CardsApi::new(client_for(&server, Some("t")));
    DataSource::delete(&api, "c1").await.unwrap();
}
