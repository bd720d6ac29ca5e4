use crate::{RecipeApi, FETCH_ERROR_MESSAGE};
use recipe_types::{Recipe, RecipeId};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// The client's only copy of the recipe collection.
///
/// Views mutate it through the methods below after a request succeeds; each change bumps a
/// revision number that subscribers can wait on to re-render.
#[derive(Debug)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    status: LoadStatus,
    error: Option<String>,
    revision: watch::Sender<u64>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBook {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            recipes: Vec::new(),
            status: LoadStatus::Loading,
            error: None,
            revision,
        }
    }

    /// A receiver that observes a new revision after every change to the collection.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the full collection, replacing whatever was held.
    ///
    /// On failure the previous contents stay and the status becomes [`LoadStatus::Failed`].
    pub async fn load(&mut self, api: &dyn RecipeApi) -> bool {
        self.status = LoadStatus::Loading;
        let loaded = match api.list().await {
            Ok(recipes) => {
                self.recipes = recipes;
                self.status = LoadStatus::Ready;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::warn!("failed to fetch recipes: {}", e);
                self.status = LoadStatus::Failed;
                self.error = Some(FETCH_ERROR_MESSAGE.into());
                false
            }
        };
        self.bump();
        loaded
    }

    pub(crate) fn push(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.bump();
    }

    /// Swaps in `recipe` for the held record with the same id.
    pub(crate) fn replace(&mut self, recipe: Recipe) {
        if let Some(slot) = self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            *slot = recipe;
            self.bump();
        }
    }

    pub(crate) fn remove(&mut self, id: &RecipeId) {
        let before = self.recipes.len();
        self.recipes.retain(|r| &r.id != id);
        if self.recipes.len() != before {
            self.bump();
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
