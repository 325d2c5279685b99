//! Storage layer for the persisted favorites list.
//!
//! This module provides the client-scoped key-value abstraction and the
//! favorites manager built on top of it. The default backend is a JSON file
//! with atomic writes; an in-memory backend serves ephemeral sessions.
//!
//! # Modules
//!
//! - `backend`: Key-value trait abstraction for backend implementations
//! - `json`: JSON file-based backend
//! - `memory`: Process-local backend
//! - `models`: Storage record types separate from domain models
//! - `favorites`: Write-through favorites set

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::KeyValueStore;
pub use favorites::FavoritesManager;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{FavoriteRecord, FAVORITES_KEY};
