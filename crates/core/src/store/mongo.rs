use super::RecipeStore;
use crate::constants::{DEFAULT_DATABASE_NAME, RECIPE_COLLECTION};
use crate::{RecipeError, RecipeResult};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use recipe_types::{NonEmptyText, Recipe, RecipeFields, RecipeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: NonEmptyText,
    ingredients: Vec<String>,
    instructions: NonEmptyText,
    category: NonEmptyText,
}

impl RecipeDocument {
    fn from_fields(fields: RecipeFields) -> Self {
        Self {
            id: None,
            title: fields.title,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            category: fields.category,
        }
    }

    fn into_recipe(self) -> RecipeResult<Recipe> {
        let id = self.id.ok_or(RecipeError::MissingObjectId)?;
        Ok(Recipe::new(
            RecipeId::new(id.to_hex()),
            RecipeFields {
                title: self.title,
                ingredients: self.ingredients,
                instructions: self.instructions,
                category: self.category,
            },
        ))
    }
}

/// Recipes stored in a MongoDB collection.
///
/// The driver pools connections internally; one `MongoStore` is built at startup and shared
/// by every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    recipes: Collection<RecipeDocument>,
}

impl MongoStore {
    /// Connects using `uri`. The database named in the URI is used, or `recipes` if none is.
    pub async fn connect(uri: &str) -> RecipeResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));
        tracing::info!("connected to MongoDB database {}", database.name());

        let recipes = database.collection::<RecipeDocument>(RECIPE_COLLECTION);
        Ok(Self { client, recipes })
    }
}

fn object_id(id: &RecipeId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

#[async_trait]
impl RecipeStore for MongoStore {
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        let mut cursor = self.recipes.find(doc! {}).await?;
        let mut recipes = Vec::new();
        while cursor.advance().await? {
            recipes.push(cursor.deserialize_current()?.into_recipe()?);
        }
        Ok(recipes)
    }

    async fn get(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };
        self.recipes
            .find_one(doc! { "_id": oid })
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn insert(&self, fields: RecipeFields) -> RecipeResult<Recipe> {
        let mut document = RecipeDocument::from_fields(fields);
        let inserted = self.recipes.insert_one(&document).await?;
        document.id = Some(
            inserted
                .inserted_id
                .as_object_id()
                .ok_or(RecipeError::MissingObjectId)?,
        );
        document.into_recipe()
    }

    async fn replace(&self, id: &RecipeId, fields: RecipeFields) -> RecipeResult<Option<Recipe>> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };
        self.recipes
            .find_one_and_replace(doc! { "_id": oid }, RecipeDocument::from_fields(fields))
            .return_document(ReturnDocument::After)
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn remove(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };
        self.recipes
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}
