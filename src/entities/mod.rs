pub mod session_entry;

pub use session_entry::Entity as SessionEntry;
