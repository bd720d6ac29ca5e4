use crate::{RecipeApi, RecipeBook, RecipeFormFields};
use crate::{DELETE_ERROR_MESSAGE, UPDATE_ERROR_MESSAGE};
use recipe_types::{Recipe, RecipeId};

/// How one record is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card<'a> {
    Viewing(&'a Recipe),
    Editing {
        recipe: &'a Recipe,
        fields: &'a RecipeFormFields,
    },
}

#[derive(Debug, Clone)]
struct EditingCard {
    id: RecipeId,
    fields: RecipeFormFields,
}

/// List view: one card per record with inline edit and delete.
///
/// Per card: `viewing -> editing -> viewing` (on save or cancel). At most one card is in
/// editing at a time. Delete is only reachable from viewing.
#[derive(Debug, Clone, Default)]
pub struct RecipeListView {
    editing: Option<EditingCard>,
    error: Option<String>,
}

impl RecipeListView {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing_id(&self) -> Option<&RecipeId> {
        self.editing.as_ref().map(|card| &card.id)
    }

    /// The cards to render, in collection order.
    pub fn cards<'a>(&'a self, book: &'a RecipeBook) -> impl Iterator<Item = Card<'a>> + 'a {
        book.recipes().iter().map(move |recipe| match &self.editing {
            Some(card) if card.id == recipe.id => Card::Editing {
                recipe,
                fields: &card.fields,
            },
            _ => Card::Viewing(recipe),
        })
    }

    /// Puts the card for `id` into editing, pre-populated from the record.
    ///
    /// Any other card being edited goes back to viewing, discarding its pending changes.
    pub fn begin_edit(&mut self, book: &RecipeBook, id: &RecipeId) -> bool {
        let Some(recipe) = book.get(id) else {
            return false;
        };
        self.editing = Some(EditingCard {
            id: recipe.id.clone(),
            fields: RecipeFormFields::from_recipe(recipe),
        });
        true
    }

    /// The pending values of the card being edited.
    pub fn edit_fields_mut(&mut self) -> Option<&mut RecipeFormFields> {
        self.editing.as_mut().map(|card| &mut card.fields)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sends the pending edit as a full replacement.
    ///
    /// On success the record in `book` is swapped for the server's response and the card
    /// returns to viewing. On failure the card stays in editing with a generic error.
    /// Empty fields are not checked here; the server's rejection is reported the same way.
    pub async fn save_edit(&mut self, api: &dyn RecipeApi, book: &mut RecipeBook) -> bool {
        self.error = None;
        let Some(card) = &self.editing else {
            return false;
        };

        match api.update(&card.id, &card.fields.to_draft()).await {
            Ok(recipe) => {
                book.replace(recipe);
                self.editing = None;
                true
            }
            Err(e) => {
                tracing::warn!("failed to update recipe {}: {}", card.id, e);
                self.error = Some(UPDATE_ERROR_MESSAGE.into());
                false
            }
        }
    }

    /// Deletes the record for `id` once `confirm` agrees.
    ///
    /// Does nothing if the card is being edited, the record is unknown, or `confirm`
    /// returns false. On failure the record remains and a generic error is set.
    pub async fn delete<F>(
        &mut self,
        api: &dyn RecipeApi,
        book: &mut RecipeBook,
        id: &RecipeId,
        confirm: F,
    ) -> bool
    where
        F: FnOnce(&Recipe) -> bool,
    {
        self.error = None;
        if self.editing_id() == Some(id) {
            return false;
        }
        let Some(recipe) = book.get(id) else {
            return false;
        };
        if !confirm(recipe) {
            return false;
        }

        match api.delete(id).await {
            Ok(_) => {
                book.remove(id);
                true
            }
            Err(e) => {
                tracing::warn!("failed to delete recipe {}: {}", id, e);
                self.error = Some(DELETE_ERROR_MESSAGE.into());
                false
            }
        }
    }
}
