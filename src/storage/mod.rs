//! Local persistence for client session state.
//!
//! The dashboard keeps a small SQLite database (via SeaORM) holding key/value
//! session entries. The bearer token used by the API client lives there.

pub mod db;
pub mod token_store;

pub use db::LocalStorage;
pub use token_store::{MemoryTokenStore, SqliteTokenStore, TokenStore};
