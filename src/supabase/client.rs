//! Supabase backend API client
//!
//! [`SupabaseClient`] is the single point of contact with the hosted
//! backend. It owns the base URL, the project anon key, the current
//! session, and a shared reqwest transport. Auth endpoints live under
//! `{base}/auth/v1/`; the resource tables are reached through the
//! PostgREST surface under `{base}/rest/v1/` with `column=eq.value`
//! filters and `order=column.desc` ordering.
//!
//! Every operation is one request/response round trip: no caching, no
//! retries, no local mutation of resource state. Non-success statuses
//! surface as [`SupataskError::UnexpectedStatus`] carrying the status and
//! body; malformed response JSON surfaces as
//! [`SupataskError::Serialization`]. The client itself never logs errors;
//! reporting is the caller's job.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::SupabaseConfig;
use crate::error::{Result, SupataskError};
use crate::supabase::session::{Session, SessionStore};
use crate::supabase::types::{AuthResponse, Note, Project, Todo};

/// Client for one Supabase project.
///
/// Cloning is cheap; clones share the transport and the session store, so
/// a sign-in through one handle is visible to all of them. Concurrent
/// calls are not ordered against each other: a resource call racing a
/// sign-in goes out with whichever token it observes.
///
/// # Examples
///
/// ```no_run
/// use supatask::config::SupabaseConfig;
/// use supatask::SupabaseClient;
///
/// # async fn example() -> supatask::Result<()> {
/// let client = SupabaseClient::new(&SupabaseConfig {
///     url: "https://abcdefgh.supabase.co".to_string(),
///     anon_key: "public-anon-key".to_string(),
/// });
/// client.sign_in("user@example.com", "hunter2").await?;
/// for todo in client.todos().await? {
///     println!("{} {}", if todo.is_done { "x" } else { " " }, todo.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    session: Arc<SessionStore>,
}

/// Body of the signup and password-grant token requests.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Insert body for the `todos` table.
#[derive(Debug, Serialize)]
struct NewTodo<'a> {
    title: &'a str,
    user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<Uuid>,
    is_done: bool,
}

/// Patch body for flipping a todo's completion flag.
#[derive(Debug, Serialize)]
struct TodoPatch {
    is_done: bool,
}

/// Insert body for the `projects` table.
#[derive(Debug, Serialize)]
struct NewProject<'a> {
    name: &'a str,
    user_id: Uuid,
}

/// Insert body for the `notes` table.
///
/// A note without a project is sent with an explicit `project_id: null`.
#[derive(Debug, Serialize)]
struct NewNote<'a> {
    title: &'a str,
    body: &'a str,
    user_id: Uuid,
    project_id: Option<Uuid>,
}

impl SupabaseClient {
    /// Build a client from the Supabase section of the configuration.
    ///
    /// Construction never fails, even for an empty configuration; a client
    /// with an empty base URL simply errors on its first request. Callers
    /// that want to fail fast run [`crate::Config::validate`] beforehand.
    pub fn new(config: &SupabaseConfig) -> Self {
        let http = Client::builder()
            .user_agent(concat!("supatask/", env!("CARGO_PKG_VERSION")))
            .build()
            // Builder failure here means TLS could not initialise; none of
            // the configuration values feed into it.
            .expect("failed to build reqwest client");

        Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            session: Arc::new(SessionStore::default()),
        }
    }

    /// The base URL this client talks to, trailing slash stripped.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    /// Register a new user via `POST {base}/auth/v1/signup`.
    ///
    /// The response may carry an access token, or not (projects that
    /// require email confirmation answer without one); either way the
    /// client's session is left untouched. Call [`Self::adopt_session`]
    /// with the response to treat a sign-up as a sign-in.
    ///
    /// # Errors
    ///
    /// [`SupataskError::UnexpectedStatus`] on a non-success status,
    /// [`SupataskError::Http`] on transport failure.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.auth_request("signup", email, password).await
    }

    /// Sign in via `POST {base}/auth/v1/token?grant_type=password`.
    ///
    /// On success the returned access token is installed as the active
    /// session for all subsequent calls. A failed sign-in leaves the
    /// current session unchanged.
    ///
    /// # Errors
    ///
    /// [`SupataskError::UnexpectedStatus`] on a non-success status,
    /// [`SupataskError::Http`] on transport failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let auth = self
            .auth_request("token?grant_type=password", email, password)
            .await?;
        self.adopt_session(&auth);
        Ok(auth)
    }

    /// Install the session carried by an auth response.
    ///
    /// This is how a caller opts into treating [`Self::sign_up`]'s response
    /// as a live session. A response without an access token clears the
    /// session instead of keeping a stale one.
    pub fn adopt_session(&self, auth: &AuthResponse) {
        match &auth.access_token {
            Some(token) => self
                .session
                .replace(Session::new(token.clone(), auth.user.clone())),
            None => self.session.clear(),
        }
    }

    /// Drop the current session; subsequent requests go out without an
    /// `Authorization` header.
    pub fn sign_out(&self) {
        self.session.clear();
    }

    /// Snapshot of the current session, if signed in.
    pub fn session(&self) -> Option<Arc<Session>> {
        self.session.current()
    }

    /// The current bearer access token, if signed in.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .current()
            .map(|session| session.access_token.clone())
    }

    async fn auth_request(
        &self,
        path_and_query: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        let url = format!("{}/auth/v1/{}", self.base_url, path_and_query);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(SupataskError::Http)?;
        let response = ensure_success(response).await?;
        read_json(response).await
    }

    // -----------------------------------------------------------------------
    // REST plumbing
    // -----------------------------------------------------------------------

    /// Build a request against the PostgREST surface with the standing
    /// headers: the anon key always, the bearer token when a session is
    /// active. Without a session the request goes out unauthenticated and
    /// the backend decides whether to reject it.
    fn rest(&self, method: Method, path_and_query: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, path_and_query);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header("apikey", &self.anon_key);
        if let Some(session) = self.session.current() {
            request = request.bearer_auth(&session.access_token);
        }
        request
    }

    /// GET a list of rows.
    async fn list<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<Vec<T>> {
        let response = self
            .rest(Method::GET, path_and_query)
            .send()
            .await
            .map_err(SupataskError::Http)?;
        let response = ensure_success(response).await?;
        read_json(response).await
    }

    /// POST or PATCH rows and hand back the representation the backend
    /// returns. PostgREST answers with a list of affected rows; an empty
    /// list yields `None`.
    async fn mutate<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path_and_query: &str,
        body: &B,
    ) -> Result<Option<T>> {
        let response = self
            .rest(method, path_and_query)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(SupataskError::Http)?;
        let response = ensure_success(response).await?;
        let rows: Vec<T> = read_json(response).await?;
        Ok(rows.into_iter().next())
    }

    /// DELETE the rows matched by the filter. Success is signaled by the
    /// status code alone; there is no payload.
    async fn delete(&self, path_and_query: &str) -> Result<()> {
        let response = self
            .rest(Method::DELETE, path_and_query)
            .send()
            .await
            .map_err(SupataskError::Http)?;
        ensure_success(response).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Todos
    // -----------------------------------------------------------------------

    /// All todos visible to the session, newest first.
    pub async fn todos(&self) -> Result<Vec<Todo>> {
        self.list("todos?select=*&order=inserted_at.desc").await
    }

    /// Todos belonging to one project, newest first.
    pub async fn todos_in_project(&self, project_id: Uuid) -> Result<Vec<Todo>> {
        self.list(&format!(
            "todos?select=*&project_id=eq.{}&order=inserted_at.desc",
            project_id
        ))
        .await
    }

    /// Insert a todo owned by `user_id`. Returns the stored row.
    pub async fn add_todo(&self, title: &str, user_id: Uuid) -> Result<Option<Todo>> {
        self.mutate(
            Method::POST,
            "todos",
            &NewTodo {
                title,
                user_id,
                project_id: None,
                is_done: false,
            },
        )
        .await
    }

    /// Insert a todo attached to a project.
    pub async fn add_todo_in_project(
        &self,
        title: &str,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<Option<Todo>> {
        self.mutate(
            Method::POST,
            "todos",
            &NewTodo {
                title,
                user_id,
                project_id: Some(project_id),
                is_done: false,
            },
        )
        .await
    }

    /// Set a todo's completion flag. Returns the updated row.
    pub async fn set_todo_done(&self, id: Uuid, done: bool) -> Result<Option<Todo>> {
        self.mutate(
            Method::PATCH,
            &format!("todos?id=eq.{}", id),
            &TodoPatch { is_done: done },
        )
        .await
    }

    /// Delete a todo by id. The backend's status is taken as-is; deleting
    /// an id that matches nothing is whatever the backend says it is.
    pub async fn delete_todo(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("todos?id=eq.{}", id)).await
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// All projects visible to the session, newest first.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.list("projects?select=*&order=created_at.desc").await
    }

    /// Insert a project owned by `user_id`. Returns the stored row.
    pub async fn add_project(&self, name: &str, user_id: Uuid) -> Result<Option<Project>> {
        self.mutate(Method::POST, "projects", &NewProject { name, user_id })
            .await
    }

    /// Delete a project by id.
    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("projects?id=eq.{}", id)).await
    }

    // -----------------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------------

    /// Notes, newest first; filtered to one project when `project_id` is
    /// given.
    pub async fn notes(&self, project_id: Option<Uuid>) -> Result<Vec<Note>> {
        let path = match project_id {
            None => "notes?order=created_at.desc".to_string(),
            Some(project_id) => {
                format!("notes?project_id=eq.{}&order=created_at.desc", project_id)
            }
        };
        self.list(&path).await
    }

    /// Insert a note owned by `user_id`, optionally attached to a project.
    /// Returns the stored row.
    pub async fn add_note(
        &self,
        title: &str,
        body: &str,
        user_id: Uuid,
        project_id: Option<Uuid>,
    ) -> Result<Option<Note>> {
        self.mutate(
            Method::POST,
            "notes",
            &NewNote {
                title,
                body,
                user_id,
                project_id,
            },
        )
        .await
    }

    /// Delete a note by id.
    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("notes?id=eq.{}", id)).await
    }
}

/// Fail non-success responses, preserving status and body for the caller.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SupataskError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }
    .into())
}

/// Read a response body and deserialize it.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await.map_err(SupataskError::Http)?;
    let parsed = serde_json::from_str(&body).map_err(SupataskError::Serialization)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> SupabaseConfig {
        SupabaseConfig {
            url: url.to_string(),
            anon_key: "anon".to_string(),
        }
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = SupabaseClient::new(&config("https://example.supabase.co/"));
        assert_eq!(client.base_url(), "https://example.supabase.co");
    }

    #[test]
    fn test_empty_config_still_constructs() {
        let client = SupabaseClient::new(&SupabaseConfig::default());
        assert_eq!(client.base_url(), "");
        assert!(client.access_token().is_none());
    }

    #[test]
    fn test_clones_share_the_session() {
        let client = SupabaseClient::new(&config("https://example.supabase.co"));
        let clone = client.clone();
        clone.adopt_session(&AuthResponse {
            access_token: Some("token-a".to_string()),
            user: None,
        });
        assert_eq!(client.access_token().as_deref(), Some("token-a"));
    }

    #[test]
    fn test_adopt_session_without_token_clears() {
        let client = SupabaseClient::new(&config("https://example.supabase.co"));
        client.adopt_session(&AuthResponse {
            access_token: Some("token-a".to_string()),
            user: None,
        });
        client.adopt_session(&AuthResponse {
            access_token: None,
            user: None,
        });
        assert!(client.access_token().is_none());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let client = SupabaseClient::new(&config("https://example.supabase.co"));
        client.adopt_session(&AuthResponse {
            access_token: Some("token-a".to_string()),
            user: None,
        });
        client.sign_out();
        assert!(client.access_token().is_none());
        assert!(client.session().is_none());
    }

    #[test]
    fn test_new_todo_body_omits_absent_project() {
        let body = serde_json::to_value(NewTodo {
            title: "Buy milk",
            user_id: Uuid::nil(),
            project_id: None,
            is_done: false,
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Buy milk",
                "user_id": "00000000-0000-0000-0000-000000000000",
                "is_done": false
            })
        );
    }

    #[test]
    fn test_new_todo_body_includes_project_when_set() {
        let project_id = Uuid::new_v4();
        let body = serde_json::to_value(NewTodo {
            title: "Write report",
            user_id: Uuid::nil(),
            project_id: Some(project_id),
            is_done: false,
        })
        .expect("serialize");
        assert_eq!(body["project_id"], serde_json::json!(project_id));
    }

    #[test]
    fn test_new_note_body_sends_null_project() {
        let body = serde_json::to_value(NewNote {
            title: "Meeting notes",
            body: "minutes",
            user_id: Uuid::nil(),
            project_id: None,
        })
        .expect("serialize");
        assert!(body.get("project_id").expect("key present").is_null());
    }
}
