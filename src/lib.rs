//! admindash - a terminal admin dashboard for users and ID cards
//!
//! The dashboard lists, filters, sorts and pages through the users and cards
//! of a REST backend, and edits, blocks, activates or deletes them through
//! confirmation dialogs.
//!
//! # Modules
//!
//! * [`api`] - HTTP client wrapper and the users/cards resource modules
//! * [`config`] - Application configuration management
//! * [`table`] - Remote-data table controller (query state, pagination, selection)
//! * [`storage`] - Local session database and bearer token store
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date/time display helpers

/// REST API client and resource modules
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local session storage
pub mod storage;

/// Query state and response reconciliation for table screens
pub mod table;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
