use admindash::api::{UserPatch, UsersApi};
use admindash::table::{DataSource, QueryState, SortOrder, SortState};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::client_for;

fn users_page() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "u1",
                "full_name": "Ada Lovelace",
                "user_name": "ada",
                "email": "ada@example.com",
                "avatar": null,
                "is_active": true,
                "created_at": "2024-03-01T10:00:00.000Z"
            }
        ],
        "meta": { "total": 25, "page": 2, "limit": 10 }
    })
}

#[tokio::test]
async fn test_list_sends_default_sort_without_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get-users-by-admin"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "created_at"))
        .and(query_param("sortOrder", "DESC"))
        .and(query_param_is_missing("email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page()))
        .expect(1)
        .mount(&server)
        .await;

    let api = UsersApi::new(client_for(&server, Some("t")));
    let page = api.list(&QueryState::default().to_params()).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].full_name, "Ada Lovelace");
    assert_eq!(page.meta.total, 25);
    assert_eq!(page.page_count(), 3);
}

#[tokio::test]
async fn test_list_sends_sort_page_and_email_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/get-users-by-admin"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("sortBy", "full_name"))
        .and(query_param("sortOrder", "ASC"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page()))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = QueryState::with_page_size(20);
    query.page_index = 1;
    query.sort = Some(SortState {
        field: "full_name".to_string(),
        direction: SortOrder::Asc,
    });
    query.filters.insert("email".to_string(), "ada@example.com".to_string());

    let api = UsersApi::new(client_for(&server, Some("t")));
    api.list(&query.to_params()).await.unwrap();
}

#[tokio::test]
async fn test_update_sends_only_provided_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/update-user/u1"))
        .and(body_json(json!({ "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "updated" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = UsersApi::new(client_for(&server, Some("t")));
    let patch = UserPatch {
        email: Some("new@example.com".to_string()),
        ..Default::default()
    };
    api.update("u1", &patch).await.unwrap();
}

#[tokio::test]
async fn test_set_active_uses_status_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/update-status/u1"))
        .and(body_json(json!({ "is_active": false })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = UsersApi::new(client_for(&server, Some("t")));
    api.set_active("u1", false).await.unwrap();
}

#[tokio::test]
async fn test_delete_hits_delete_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-user/u1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = UsersApi::new(client_for(&server, Some("t")));
    DataSource::delete(&api, "u1").await.unwrap();
}
