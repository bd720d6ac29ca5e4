//! Recipe operations.
//!
//! Each operation validates its input, then makes exactly one store call. There are no
//! business rules beyond field presence: no derived data and no cross-record checks.

use crate::store::RecipeStore;
use crate::{RecipeError, RecipeResult};
use recipe_types::{Recipe, RecipeDraft, RecipeId};
use std::sync::Arc;

/// Pure recipe data operations - no HTTP concerns.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    /// Creates a service over an already-connected store handle.
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Every recipe, in the store's order.
    pub async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        self.store.list().await
    }

    /// # Errors
    ///
    /// Returns [`RecipeError::NotFound`] if `id` addresses no record.
    pub async fn get(&self, id: &RecipeId) -> RecipeResult<Recipe> {
        self.store.get(id).await?.ok_or(RecipeError::NotFound)
    }

    /// Validates `draft` and stores it as a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Validation`] if any of the four content fields is missing or
    /// empty; nothing is written in that case.
    pub async fn create(&self, draft: RecipeDraft) -> RecipeResult<Recipe> {
        let fields = draft.validate()?;
        let recipe = self.store.insert(fields).await?;
        tracing::info!("saved recipe {}", recipe.id);
        Ok(recipe)
    }

    /// Replaces all four content fields of the record addressed by `id`.
    ///
    /// Partial updates are not supported: the draft must be complete, exactly as for
    /// [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Validation`] for an incomplete draft (checked before the
    /// lookup), or [`RecipeError::NotFound`] if `id` addresses no record.
    pub async fn update(&self, id: &RecipeId, draft: RecipeDraft) -> RecipeResult<Recipe> {
        let fields = draft.validate()?;
        let recipe = self
            .store
            .replace(id, fields)
            .await?
            .ok_or(RecipeError::NotFound)?;
        tracing::info!("updated recipe {}", recipe.id);
        Ok(recipe)
    }

    /// Deletes the record addressed by `id`.
    ///
    /// Not idempotent: deleting the same id twice yields [`RecipeError::NotFound`] the
    /// second time.
    pub async fn delete(&self, id: &RecipeId) -> RecipeResult<()> {
        self.store.remove(id).await?.ok_or(RecipeError::NotFound)?;
        tracing::info!("deleted recipe {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::ErrorKind;

    fn service() -> RecipeService {
        RecipeService::new(Arc::new(MemoryStore::new()))
    }

    fn tea() -> RecipeDraft {
        RecipeDraft::complete(
            "Tea",
            vec!["water".into(), "tea leaves".into()],
            "Boil",
            "Beverage",
        )
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let service = service();
        let created = service.create(tea()).await.unwrap();
        assert!(!created.id.as_str().is_empty());

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.ingredients, vec!["water", "tea leaves"]);
    }

    #[tokio::test]
    async fn test_created_identifiers_are_unique() {
        let service = service();
        let a = service.create(tea()).await.unwrap();
        let b = service.create(tea()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_client_fault_and_writes_nothing() {
        let service = service();
        let mut draft = tea();
        draft.ingredients = None;

        let err = service.create(draft).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClientFault);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_and_keeps_id() {
        let service = service();
        let created = service.create(tea()).await.unwrap();

        let draft = RecipeDraft::complete("Chai", vec!["milk".into()], "Simmer", "Drinks");
        let updated = service.update(&created.id, draft).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Chai");
        assert_eq!(updated.ingredients, vec!["milk"]);

        assert_eq!(service.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_incomplete_update_is_client_fault() {
        let service = service();
        let created = service.create(tea()).await.unwrap();

        let draft = RecipeDraft {
            title: Some("Chai".into()),
            ..RecipeDraft::default()
        };
        let err = service.update(&created.id, draft).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClientFault);
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_not_found_everywhere() {
        let service = service();
        let id = RecipeId::new("doesnotexist");

        assert_eq!(service.get(&id).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            service.update(&id, tea()).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(service.delete(&id).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let service = service();
        let created = service.create(tea()).await.unwrap();

        service.delete(&created.id).await.unwrap();
        let err = service.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, RecipeError::NotFound));
        assert!(service.list().await.unwrap().is_empty());
    }
}
