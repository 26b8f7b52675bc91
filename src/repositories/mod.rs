//! Repository layer for database operations.
//!
//! Repositories keep entities as pure data models while providing reusable
//! database access methods.

pub mod session;

pub use session::SessionRepository;
