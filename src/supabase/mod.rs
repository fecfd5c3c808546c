//! Supabase backend integration
//!
//! This module contains everything that talks to, or reasons about, the
//! hosted backend: the API client, session state, the wire record types,
//! and access-token payload decoding.

pub mod client;
pub mod jwt;
pub mod session;
pub mod types;

pub use client::SupabaseClient;
pub use session::{Session, SessionStore};
pub use types::{AuthResponse, AuthUser, Note, Project, Todo};
