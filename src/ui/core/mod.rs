//! Core UI functionality for admindash.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background API calls reporting back as actions
//!
//! Components turn key presses into [`Action`]s, actions flow through the
//! component hierarchy, and whatever is left is handled by the app. API calls
//! run on tokio tasks owned by the [`TaskManager`] and come back through the
//! same action channel, so the UI task never waits on the network.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, ColumnToggle, DialogType, MutationOrigin, RequestId};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
