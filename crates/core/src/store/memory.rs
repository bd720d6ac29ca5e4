use super::RecipeStore;
use crate::RecipeResult;
use async_trait::async_trait;
use recipe_types::{Recipe, RecipeFields, RecipeId};
use recipe_uuid::ShardableUuid;
use tokio::sync::RwLock;

/// Process-local store. Keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        Ok(self.recipes.read().await.clone())
    }

    async fn get(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().find(|r| &r.id == id).cloned())
    }

    async fn insert(&self, fields: RecipeFields) -> RecipeResult<Recipe> {
        let recipe = Recipe::new(RecipeId::new(ShardableUuid::new().to_string()), fields);
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }

    async fn replace(&self, id: &RecipeId, fields: RecipeFields) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.recipes.write().await;
        let Some(slot) = recipes.iter_mut().find(|r| &r.id == id) else {
            return Ok(None);
        };
        *slot = Recipe::new(id.clone(), fields);
        Ok(Some(slot.clone()))
    }

    async fn remove(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.recipes.write().await;
        Ok(recipes
            .iter()
            .position(|r| &r.id == id)
            .map(|index| recipes.remove(index)))
    }
}
