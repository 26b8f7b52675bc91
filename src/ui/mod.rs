//! Terminal user interface for admindash.
//!
//! The [`app_component::AppComponent`] owns one table screen per entity kind
//! and the dialog layer; [`renderer::run_app`] drives it from the terminal.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod screens;

pub use layout::LayoutManager;
pub use renderer::run_app;
