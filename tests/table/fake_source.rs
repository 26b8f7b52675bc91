use std::sync::Mutex;

use admindash::api::{ApiError, PageMeta, PageResponse, User};
use admindash::table::{DataSource, ListParams, SortOrder};
use async_trait::async_trait;

/// In-memory users collection that pages, sorts and filters like the backend.
pub struct FakeUsers {
    pub users: Mutex<Vec<User>>,
    pub requests: Mutex<Vec<ListParams>>,
}

impl FakeUsers {
    pub fn with_users(count: usize) -> Self {
        let users = (0..count)
            .map(|i| User {
                id: format!("u{i:02}"),
                full_name: format!("User {:02}", count - i),
                user_name: format!("user{i:02}"),
                email: format!("user{i:02}@example.com"),
                avatar: None,
                is_active: true,
                created_at: format!("2024-01-{:02}T00:00:00.000Z", (i % 28) + 1),
            })
            .collect();
        Self {
            users: Mutex::new(users),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl DataSource for FakeUsers {
    type Row = User;

    async fn list(&self, params: &ListParams) -> Result<PageResponse<User>, ApiError> {
        self.requests.lock().unwrap().push(params.clone());

        let mut users: Vec<User> = self.users.lock().unwrap().clone();
        if let Some(email) = params.filter("email") {
            users.retain(|user| user.email.contains(email));
        }
        match params.sort_field.as_str() {
            "full_name" => users.sort_by(|a, b| a.full_name.cmp(&b.full_name)),
            _ => users.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        if params.sort_order == SortOrder::Desc {
            users.reverse();
        }

        let total = users.len() as u64;
        let data = users
            .into_iter()
            .skip((params.page - 1) * params.page_size)
            .take(params.page_size)
            .collect();

        Ok(PageResponse {
            data,
            meta: PageMeta {
                total,
                page: params.page as u64,
                limit: params.page_size as u64,
            },
        })
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(ApiError::Http {
                status: 404,
                message: "User not found".to_string(),
            });
        }
        Ok(())
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.is_active = active;
                Ok(())
            }
            None => Err(ApiError::Http {
                status: 404,
                message: "User not found".to_string(),
            }),
        }
    }
}
