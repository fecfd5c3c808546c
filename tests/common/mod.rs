use serde_json::json;
use uuid::Uuid;
use wiremock::MockServer;

use supatask::config::SupabaseConfig;
use supatask::SupabaseClient;

/// Anon key used by every test client; mocks match on it.
#[allow(dead_code)]
pub const ANON_KEY: &str = "test-anon-key";

/// Construct a `SupabaseClient` pointing at the given wiremock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(&SupabaseConfig {
        url: server.uri(),
        anon_key: ANON_KEY.to_string(),
    })
}

/// A successful auth response body carrying a token and a user record.
#[allow(dead_code)]
pub fn auth_body(token: &str, user_id: Uuid) -> serde_json::Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": 3600,
        "user": { "id": user_id, "email": "user@example.com" }
    })
}

/// A `todos` row as PostgREST returns it.
#[allow(dead_code)]
pub fn todo_row(id: Uuid, user_id: Uuid, title: &str, done: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "title": title,
        "is_done": done,
        "inserted_at": "2024-03-01T09:30:00+00:00",
        "project_id": null
    })
}

/// A `projects` row as PostgREST returns it.
#[allow(dead_code)]
pub fn project_row(id: Uuid, user_id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "name": name,
        "created_at": "2024-02-20T08:00:00+00:00"
    })
}

/// A `notes` row as PostgREST returns it.
#[allow(dead_code)]
pub fn note_row(
    id: Uuid,
    user_id: Uuid,
    title: &str,
    body: &str,
    project_id: Option<Uuid>,
) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "title": title,
        "body": body,
        "created_at": "2024-03-02T14:00:00+00:00",
        "project_id": project_id
    })
}
