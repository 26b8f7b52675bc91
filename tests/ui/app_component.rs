use std::sync::Arc;
use std::time::Duration;

use admindash::api::{ApiClient, CardsApi, UsersApi};
use admindash::config::{ApiConfig, Config};
use admindash::storage::MemoryTokenStore;
use admindash::table::{EntityKind, LoadStatus};
use admindash::ui::app_component::AppComponent;
use admindash::ui::components::ActiveDialog;
use admindash::ui::core::{Component, EventType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn app_for(server: &MockServer) -> AppComponent {
    let api_config = ApiConfig {
        base_url: server.uri(),
        connect_timeout_ms: 1_000,
        request_timeout_ms: 2_000,
    };
    let tokens = Arc::new(MemoryTokenStore::new(Some("t".to_string())));
    let client = Arc::new(ApiClient::new(&api_config, tokens).unwrap());
    AppComponent::new(
        &Config::default(),
        Arc::new(UsersApi::new(Arc::clone(&client))),
        Arc::new(CardsApi::new(client)),
        None,
    )
}

/// Feed background results through the app until no request is running.
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        for action in app.process_background_actions() {
            let action = app.update(action);
            app.handle_app_action(action);
        }
        if app.active_task_count() == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("background requests did not finish");
}

async fn mount_users(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user/get-users-by-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "u1",
                    "full_name": "Ada Lovelace",
                    "user_name": "ada",
                    "email": "ada@example.com",
                    "is_active": true,
                    "created_at": "2024-03-01T10:00:00.000Z"
                }
            ],
            "meta": { "total": 1, "page": 1, "limit": 10 }
        })))
        .mount(server)
        .await;
}

async fn mount_cards(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/card/get-cards-by-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": {
                "data": [],
                "meta": { "total": 0, "page": 1, "limit": 10 }
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_start_loads_users_screen() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    let mut app = app_for(&server);

    app.start();
    settle(&mut app).await;

    assert_eq!(app.active_screen(), EntityKind::User);
    assert_eq!(app.users().controller().status(), LoadStatus::Success);
    assert_eq!(app.users().controller().rows().len(), 1);
    assert_eq!(app.cards().controller().status(), LoadStatus::Idle);
}

#[tokio::test]
async fn test_switching_screens_loads_cards_once() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    Mock::given(method("GET"))
        .and(path("/card/get-cards-by-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": { "data": [], "meta": { "total": 0, "page": 1, "limit": 10 } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut app = app_for(&server);
    app.start();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('2')));
    settle(&mut app).await;
    assert_eq!(app.active_screen(), EntityKind::Card);
    assert_eq!(app.cards().controller().status(), LoadStatus::Success);

    // going back and forth keeps the loaded page
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.active_screen(), EntityKind::User);
    app.handle_event(key(KeyCode::Tab));
    settle(&mut app).await;
    assert_eq!(app.active_screen(), EntityKind::Card);
}

#[tokio::test]
async fn test_failed_delete_opens_error_dialog() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    Mock::given(method("DELETE"))
        .and(path_regex("^/user/delete-user/u1$"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })))
        .mount(&server)
        .await;
    let mut app = app_for(&server);
    app.start();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('d')));
    assert!(matches!(app.dialog().dialog(), Some(ActiveDialog::Delete(_))));
    app.handle_event(key(KeyCode::Enter));
    assert!(!app.dialog().is_visible());
    settle(&mut app).await;

    match app.dialog().dialog() {
        Some(ActiveDialog::Error(message)) => {
            assert!(message.starts_with("❌ Failed to delete user"));
            assert!(message.contains("database offline"));
        }
        _ => panic!("expected an error dialog"),
    }
    // rows from the last successful load stay on screen
    assert_eq!(app.users().controller().rows().len(), 1);
}

#[tokio::test]
async fn test_successful_delete_refetches() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    mount_cards(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-user/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    let mut app = app_for(&server);
    app.start();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('d')));
    app.handle_event(key(KeyCode::Char('y')));
    settle(&mut app).await;

    assert_eq!(app.status_message(), Some("✅ User deleted"));
    assert!(!app.dialog().is_visible());
    let list_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == "/user/get-users-by-admin")
        .count();
    assert_eq!(list_calls, 2);
}

#[tokio::test]
async fn test_quit_unmounts_tables() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    let mut app = app_for(&server);
    app.start();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('q')));

    assert!(app.should_quit());
    assert!(!app.users().controller().is_mounted());
    assert!(!app.cards().controller().is_mounted());
    assert_eq!(app.active_task_count(), 0);
}
