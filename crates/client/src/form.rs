use crate::{join_ingredients, split_ingredients, RecipeApi, RecipeBook};
use crate::{ADD_ERROR_MESSAGE, REQUIRED_FIELDS_MESSAGE};
use recipe_types::{Recipe, RecipeDraft};

/// The four editable text fields shared by the creation form and the inline edit form.
///
/// Ingredients are held as the comma-separated string the user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFormFields {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
}

impl RecipeFormFields {
    /// Pre-populates an edit form from a stored record.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: join_ingredients(&recipe.ingredients),
            instructions: recipe.instructions.clone(),
            category: recipe.category.clone(),
        }
    }

    /// True when no field is empty.
    pub fn is_complete(&self) -> bool {
        [
            &self.title,
            &self.ingredients,
            &self.instructions,
            &self.category,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// The request body to send, with ingredients split on commas.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft::complete(
            self.title.clone(),
            split_ingredients(&self.ingredients),
            self.instructions.clone(),
            self.category.clone(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Creation view: pending field values plus the last error shown.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub fields: RecipeFormFields,
    error: Option<String>,
}

impl RecipeForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submits the form.
    ///
    /// Rejects locally, without a request, if any field is empty. On success the created
    /// record is appended to `book` and the fields are cleared; on failure the fields are
    /// kept and a generic error is set.
    pub async fn submit(&mut self, api: &dyn RecipeApi, book: &mut RecipeBook) -> bool {
        self.error = None;

        if !self.fields.is_complete() {
            self.error = Some(REQUIRED_FIELDS_MESSAGE.into());
            return false;
        }

        match api.create(&self.fields.to_draft()).await {
            Ok(recipe) => {
                tracing::debug!("added recipe {}", recipe.id);
                book.push(recipe);
                self.fields.clear();
                true
            }
            Err(e) => {
                tracing::warn!("failed to add recipe: {}", e);
                self.error = Some(ADD_ERROR_MESSAGE.into());
                false
            }
        }
    }
}
