use std::sync::Arc;

use admindash::api::ApiClient;
use admindash::config::ApiConfig;
use admindash::storage::MemoryTokenStore;
use wiremock::MockServer;

/// Client pointed at `server`, authenticated with `token` when given.
pub fn client_for(server: &MockServer, token: Option<&str>) -> Arc<ApiClient> {
    let config = ApiConfig {
        base_url: format!("{}/", server.uri()),
        connect_timeout_ms: 1_000,
        request_timeout_ms: 2_000,
    };
    let tokens = Arc::new(MemoryTokenStore::new(token.map(str::to_string)));
    Arc::new(ApiClient::new(&config, tokens).unwrap())
}
