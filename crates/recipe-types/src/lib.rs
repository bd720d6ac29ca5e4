//! # Recipe Types
//!
//! Domain types shared by the recipe service, its stores, and its clients.
//!
//! - [`NonEmptyText`] guarantees a non-blank string, stored as given.
//! - [`RecipeDraft`] is the request body as sent over the wire; any field may be absent.
//! - [`RecipeFields`] is a draft that passed validation: all four content fields present.
//! - [`Recipe`] is a stored record with its store-assigned [`RecipeId`].

mod recipe;
mod text;

pub use recipe::{Recipe, RecipeDraft, RecipeFields, RecipeId, ValidationError};
pub use text::{NonEmptyText, TextError};
