//! # Recipe Client
//!
//! Client-side data flow for the recipe catalog, independent of any rendering toolkit.
//!
//! - [`RecipeApi`] is the transport seam; [`HttpRecipeApi`] talks to the REST service.
//! - [`RecipeBook`] is the single copy of the collection. Every view reads and writes
//!   through it and re-renders from [`RecipeBook::subscribe`].
//! - [`RecipeForm`] is the creation view, [`RecipeListView`] the list/edit/delete view.
//!
//! Views never distinguish error kinds: any failed request leaves state as it was and sets
//! one generic message.

mod api;
mod book;
mod error;
mod form;
mod http;
mod ingredients;
mod list;

pub use api::RecipeApi;
pub use book::{LoadStatus, RecipeBook};
pub use error::{ClientError, ClientResult};
pub use form::{RecipeForm, RecipeFormFields};
pub use http::HttpRecipeApi;
pub use ingredients::{join_ingredients, split_ingredients};
pub use list::{Card, RecipeListView};

pub use recipe_types::{Recipe, RecipeDraft, RecipeId};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching recipes.";
pub const ADD_ERROR_MESSAGE: &str = "Error adding recipe.";
pub const UPDATE_ERROR_MESSAGE: &str = "Error updating recipe.";
pub const DELETE_ERROR_MESSAGE: &str = "Error deleting recipe.";

#[cfg(test)]
pub(crate) mod testing;
