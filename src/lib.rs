//! Supatask - Supabase-backed todo, project, and note client
//!
//! This library provides the building blocks for the `supatask` CLI: a
//! typed client for a Supabase project's auth and PostgREST endpoints,
//! session handling, access-token payload decoding, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `supabase`: API client, session state, wire records, token decoding
//! - `config`: configuration loading and validation
//! - `error`: error types and result alias
//! - `cli`: command-line interface definition
//! - `commands`: handlers invoked by the CLI entrypoint
//!
//! # Example
//!
//! ```no_run
//! use supatask::config::Config;
//! use supatask::SupabaseClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml")?;
//!     config.validate()?;
//!
//!     let client = SupabaseClient::new(&config.supabase);
//!     client.sign_in("user@example.com", "hunter2").await?;
//!
//!     let todos = client.todos().await?;
//!     println!("{} open todos", todos.iter().filter(|t| !t.is_done).count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod supabase;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SupataskError};
pub use supabase::client::SupabaseClient;
pub use supabase::session::Session;
pub use supabase::types::{AuthResponse, AuthUser, Note, Project, Todo};
