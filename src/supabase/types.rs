//! Wire records for the Supabase auth and REST endpoints
//!
//! Row shapes mirror the PostgREST tables one to one: field names are the
//! snake_case column names and serde matches them exactly. Ids and
//! timestamps are assigned by the backend; these structs are ephemeral
//! projections of a response body, never locally mutated state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row in the `todos` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    /// Owning user; set at creation, never reassigned.
    pub user_id: Uuid,
    pub title: String,
    pub is_done: bool,
    pub inserted_at: DateTime<Utc>,
    /// Present when the todo was created through the project-scoped path.
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

/// A row in the `projects` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A row in the `notes` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// A note may live outside any project; `None` here means exactly
    /// that, never a zero UUID.
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

/// Response body of the `signup` and password-grant `token` endpoints.
///
/// Both fields are optional on the wire: a project that requires email
/// confirmation answers a signup without an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// The user record embedded in an auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_row_deserializes() {
        let json = r#"{
            "id": "7b1a3c6e-8d1f-4a5b-9c2d-0e4f6a8b1c3d",
            "user_id": "11111111-2222-3333-4444-555555555555",
            "title": "Buy milk",
            "is_done": false,
            "inserted_at": "2024-03-01T09:30:00+00:00"
        }"#;
        let todo: Todo = serde_json::from_str(json).expect("deserialize");
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.is_done);
        assert_eq!(todo.project_id, None);
    }

    #[test]
    fn test_todo_row_with_project() {
        let json = r#"{
            "id": "7b1a3c6e-8d1f-4a5b-9c2d-0e4f6a8b1c3d",
            "user_id": "11111111-2222-3333-4444-555555555555",
            "title": "Write report",
            "is_done": true,
            "inserted_at": "2024-03-01T09:30:00Z",
            "project_id": "99999999-8888-7777-6666-555555555555"
        }"#;
        let todo: Todo = serde_json::from_str(json).expect("deserialize");
        assert!(todo.is_done);
        assert_eq!(
            todo.project_id.map(|id| id.to_string()).as_deref(),
            Some("99999999-8888-7777-6666-555555555555")
        );
    }

    #[test]
    fn test_note_without_project_is_none() {
        let json = r#"{
            "id": "7b1a3c6e-8d1f-4a5b-9c2d-0e4f6a8b1c3d",
            "user_id": "11111111-2222-3333-4444-555555555555",
            "title": "Meeting notes",
            "body": "Agreed on the rollout plan.",
            "created_at": "2024-03-02T14:00:00+00:00",
            "project_id": null
        }"#;
        let note: Note = serde_json::from_str(json).expect("deserialize");
        assert_eq!(note.project_id, None);
        assert_eq!(note.body, "Agreed on the rollout plan.");
    }

    #[test]
    fn test_auth_response_ignores_unknown_fields() {
        // Real token responses carry token_type, expires_in, refresh_token
        // and a much larger user object; only what we model is kept.
        let json = r#"{
            "access_token": "header.payload.sig",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {
                "id": "11111111-2222-3333-4444-555555555555",
                "aud": "authenticated",
                "email": "user@example.com",
                "role": "authenticated"
            }
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(auth.access_token.as_deref(), Some("header.payload.sig"));
        let user = auth.user.expect("user present");
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_auth_response_with_no_token() {
        let json = r#"{"user": {"id": "11111111-2222-3333-4444-555555555555"}}"#;
        let auth: AuthResponse = serde_json::from_str(json).expect("deserialize");
        assert!(auth.access_token.is_none());
        assert!(auth.user.expect("user").email.is_none());
    }
}
