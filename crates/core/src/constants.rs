//! Constants used throughout the recipe core crate.

/// Default listen port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Default listen host when `RECIPES_HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default persistence connection string when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "file://recipe_data";

/// Filename of the JSON document inside each record directory of the file store.
pub const RECIPE_JSON_FILENAME: &str = "recipe.json";

/// Collection holding recipe documents in the MongoDB store.
pub const RECIPE_COLLECTION: &str = "recipes";

/// Database used when a MongoDB connection string names none.
pub const DEFAULT_DATABASE_NAME: &str = "recipes";

/// Message returned when an identifier addresses no record.
pub const NOT_FOUND_MESSAGE: &str = "Recipe not found";

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Recipe deleted successfully";
