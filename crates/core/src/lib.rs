//! # Recipe Core
//!
//! Core data operations for the recipe catalog.
//!
//! - [`config`]: startup configuration (listen address, persistence connection string)
//! - [`store`]: the [`RecipeStore`](store::RecipeStore) persistence adapter and its backends
//! - [`service`]: [`RecipeService`], one store call per operation
//!
//! **No API concerns**: HTTP routing, status codes and OpenAPI belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod service;
pub mod store;

pub use config::{CoreConfig, StoreLocation};
pub use error::{ErrorKind, RecipeError, RecipeResult};
pub use recipe_types::{NonEmptyText, Recipe, RecipeDraft, RecipeFields, RecipeId};
pub use service::RecipeService;
