use crate::{ClientError, ClientResult, RecipeApi};
use api_shared::MessageRes;
use async_trait::async_trait;
use recipe_types::{Recipe, RecipeDraft, RecipeId};
use reqwest::{Client, Response};

/// [`RecipeApi`] over HTTP/JSON against the REST service.
#[derive(Clone, Debug)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// `base_url` is the service root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn item_url(&self, id: &RecipeId) -> String {
        format!("{}/api/recipes/{}", self.base_url, id)
    }
}

/// Turns a non-2xx response into [`ClientError::Status`], keeping the server's message.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<MessageRes>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list(&self) -> ClientResult<Vec<Recipe>> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn get(&self, id: &RecipeId) -> ClientResult<Recipe> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let response = self.client.put(self.item_url(id)).json(draft).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete(&self, id: &RecipeId) -> ClientResult<MessageRes> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecipeBook, RecipeForm, RecipeListView};
    use api_rest::AppState;
    use recipe_core::store::MemoryStore;
    use recipe_core::RecipeService;
    use std::sync::Arc;

    /// Starts the real router on an ephemeral port, backed by a memory store.
    async fn spawn_server() -> HttpRecipeApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(RecipeService::new(Arc::new(MemoryStore::new())));
        tokio::spawn(api_rest::serve(listener, state, std::future::pending()));
        HttpRecipeApi::new(format!("http://{addr}/"))
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let api = HttpRecipeApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(
            api.item_url(&RecipeId::new("abc")),
            "http://localhost:5000/api/recipes/abc"
        );
    }

    #[tokio::test]
    async fn test_round_trip_against_running_server() {
        let api = spawn_server().await;

        let draft = RecipeDraft::complete(
            "Tea",
            vec!["water".into(), "tea leaves".into()],
            "Boil",
            "Beverage",
        );
        let created = api.create(&draft).await.unwrap();
        assert_eq!(api.get(&created.id).await.unwrap(), created);
        assert_eq!(api.list().await.unwrap(), vec![created.clone()]);

        let replacement = RecipeDraft::complete("Chai", vec!["milk".into()], "Simmer", "Beverage");
        let updated = api.update(&created.id, &replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Chai");

        let deleted = api.delete(&created.id).await.unwrap();
        assert_eq!(deleted.message, "Recipe deleted successfully");

        match api.delete(&created.id).await {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Recipe not found");
            }
            other => panic!("expected 404, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_rejection_surfaces_as_status_error() {
        let api = spawn_server().await;
        let draft = RecipeDraft {
            title: Some("Tea".into()),
            ..RecipeDraft::default()
        };
        match api.create(&draft).await {
            Err(ClientError::Status { status, .. }) => assert_eq!(status, 400),
            other => panic!("expected 400, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_edit_with_empty_field_reports_update_error() {
        let api = spawn_server().await;
        let created = api
            .create(&RecipeDraft::complete("Tea", vec!["water".into()], "Boil", "Beverage"))
            .await
            .unwrap();
        let mut book = RecipeBook::new();
        book.load(&api).await;

        let mut list = RecipeListView::default();
        list.begin_edit(&book, &created.id);
        list.edit_fields_mut().unwrap().title = String::new();

        assert!(!list.save_edit(&api, &mut book).await);
        assert_eq!(list.error(), Some("Error updating recipe."));
        assert_eq!(list.editing_id(), Some(&created.id));
        assert_eq!(api.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_form_and_list_share_one_collection_over_http() {
        let api = spawn_server().await;
        let mut book = RecipeBook::new();
        book.load(&api).await;
        assert!(book.recipes().is_empty());

        let mut form = RecipeForm::default();
        form.fields.title = "Salad".into();
        form.fields.ingredients = "a, b , c".into();
        form.fields.instructions = "Toss".into();
        form.fields.category = "Vegetarian".into();
        assert!(form.submit(&api, &mut book).await);

        let stored = api.list().await.unwrap();
        assert_eq!(stored[0].ingredients, vec!["a", "b", "c"]);
        assert_eq!(book.recipes(), stored.as_slice());

        let mut list = RecipeListView::default();
        let id = stored[0].id.clone();
        assert!(list.delete(&api, &mut book, &id, |_| true).await);
        assert!(book.recipes().is_empty());
        assert!(api.list().await.unwrap().is_empty());
    }
}
