use crate::ClientResult;
use api_shared::MessageRes;
use async_trait::async_trait;
use recipe_types::{Recipe, RecipeDraft, RecipeId};

/// The recipe service as seen from a client: one method per HTTP operation.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Recipe>>;

    async fn get(&self, id: &RecipeId) -> ClientResult<Recipe>;

    async fn create(&self, draft: &RecipeDraft) -> ClientResult<Recipe>;

    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> ClientResult<Recipe>;

    async fn delete(&self, id: &RecipeId) -> ClientResult<MessageRes>;
}
