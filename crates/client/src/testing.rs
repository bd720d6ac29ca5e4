//! In-memory [`RecipeApi`] for view tests.

use crate::{ClientError, ClientResult, RecipeApi};
use api_shared::MessageRes;
use async_trait::async_trait;
use recipe_types::{Recipe, RecipeDraft, RecipeId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: title.into(),
        ingredients: vec!["water".into()],
        instructions: "Boil".into(),
        category: "Beverage".into(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    recipes: Mutex<Vec<Recipe>>,
    last_draft: Mutex<Option<RecipeDraft>>,
    requests: AtomicUsize,
    next_id: AtomicUsize,
    fail: AtomicBool,
}

impl FakeApi {
    pub(crate) fn with(recipes: Vec<Recipe>) -> Self {
        let next_id = AtomicUsize::new(recipes.len() + 100);
        Self {
            recipes: Mutex::new(recipes),
            next_id,
            ..Self::default()
        }
    }

    pub(crate) fn fail_requests(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn last_draft(&self) -> Option<RecipeDraft> {
        self.last_draft.lock().unwrap().clone()
    }

    fn begin(&self) -> ClientResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 500,
                message: "store unreachable".into(),
            });
        }
        Ok(())
    }

    fn build(id: RecipeId, draft: &RecipeDraft) -> Recipe {
        Recipe {
            id,
            title: draft.title.clone().unwrap_or_default(),
            ingredients: draft.ingredients.clone().unwrap_or_default(),
            instructions: draft.instructions.clone().unwrap_or_default(),
            category: draft.category.clone().unwrap_or_default(),
        }
    }
}

fn not_found() -> ClientError {
    ClientError::Status {
        status: 404,
        message: "Recipe not found".into(),
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn list(&self) -> ClientResult<Vec<Recipe>> {
        self.begin()?;
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn get(&self, id: &RecipeId) -> ClientResult<Recipe> {
        self.begin()?;
        let recipes = self.recipes.lock().unwrap();
        recipes
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, draft: &RecipeDraft) -> ClientResult<Recipe> {
        self.begin()?;
        *self.last_draft.lock().unwrap() = Some(draft.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let recipe = Self::build(RecipeId::new(id), draft);
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> ClientResult<Recipe> {
        self.begin()?;
        *self.last_draft.lock().unwrap() = Some(draft.clone());
        let mut recipes = self.recipes.lock().unwrap();
        let slot = recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(not_found)?;
        *slot = Self::build(id.clone(), draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &RecipeId) -> ClientResult<MessageRes> {
        self.begin()?;
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| &r.id != id);
        if recipes.len() == before {
            return Err(not_found());
        }
        Ok(MessageRes::new("Recipe deleted successfully"))
    }
}
