use crate::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Store-assigned recipe identifier.
///
/// Opaque to everything above the store: the file store hands out canonical UUIDs, the
/// MongoDB store hands out ObjectId hex strings. Callers only ever compare and echo it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A stored recipe as returned by every read and write operation.
///
/// The identifier is serialised as `_id`, the key browser clients already read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "550e8400e29b41d4a716446655440000")]
    pub id: RecipeId,
    #[schema(example = "Tea")]
    pub title: String,
    #[schema(example = json!(["water", "tea leaves"]))]
    pub ingredients: Vec<String>,
    #[schema(example = "Boil")]
    pub instructions: String,
    #[schema(example = "Beverage")]
    pub category: String,
}

impl Recipe {
    /// Builds a record from a store-assigned id and validated content.
    pub fn new(id: RecipeId, fields: RecipeFields) -> Self {
        Self {
            id,
            title: fields.title.into_string(),
            ingredients: fields.ingredients,
            instructions: fields.instructions.into_string(),
            category: fields.category.into_string(),
        }
    }
}

/// Recipe content as submitted by a client.
///
/// Every field is optional at this level so that a missing field is reported as a
/// validation failure naming the field, rather than as a body-parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Tea")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["water", "tea leaves"]))]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Boil")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Beverage")]
    pub category: Option<String>,
}

impl RecipeDraft {
    /// A draft with all four fields present.
    pub fn complete(
        title: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            ingredients: Some(ingredients),
            instructions: Some(instructions.into()),
            category: Some(category.into()),
        }
    }

    /// Checks that every content field is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every offending field, in declaration order.
    pub fn validate(self) -> Result<RecipeFields, ValidationError> {
        let mut missing = Vec::new();

        let title = required_text(self.title, "title", &mut missing);
        let ingredients = match self.ingredients {
            Some(list) if !list.is_empty() => Some(list),
            _ => {
                missing.push("ingredients");
                None
            }
        };
        let instructions = required_text(self.instructions, "instructions", &mut missing);
        let category = required_text(self.category, "category", &mut missing);

        match (title, ingredients, instructions, category) {
            (Some(title), Some(ingredients), Some(instructions), Some(category)) => {
                Ok(RecipeFields {
                    title,
                    ingredients,
                    instructions,
                    category,
                })
            }
            _ => Err(ValidationError { fields: missing }),
        }
    }
}

fn required_text(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<NonEmptyText> {
    let text = value.and_then(|v| NonEmptyText::new(v).ok());
    if text.is_none() {
        missing.push(name);
    }
    text
}

/// Recipe content that passed validation.
///
/// Stores only ever receive this type, so a record can never be written with a field
/// missing. Updates replace all four fields at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFields {
    pub title: NonEmptyText,
    pub ingredients: Vec<String>,
    pub instructions: NonEmptyText,
    pub category: NonEmptyText,
}

/// One or more required recipe fields were absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("recipe validation failed: {} required", fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> RecipeDraft {
        RecipeDraft::complete(
            "Tea",
            vec!["water".into(), "tea leaves".into()],
            "Boil",
            "Beverage",
        )
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let fields = tea().validate().expect("complete draft should validate");
        assert_eq!(fields.title.as_str(), "Tea");
        assert_eq!(fields.ingredients, vec!["water", "tea leaves"]);
        assert_eq!(fields.category.as_str(), "Beverage");
    }

    #[test]
    fn test_validate_names_every_missing_field() {
        let draft = RecipeDraft {
            title: Some("Tea".into()),
            ..RecipeDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields, vec!["ingredients", "instructions", "category"]);
        assert_eq!(
            err.to_string(),
            "recipe validation failed: ingredients, instructions, category required"
        );
    }

    #[test]
    fn test_validate_rejects_blank_text_and_empty_ingredient_list() {
        let mut draft = tea();
        draft.category = Some("   ".into());
        draft.ingredients = Some(vec![]);
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields, vec!["ingredients", "category"]);
    }

    #[test]
    fn test_validate_keeps_text_exactly_as_sent() {
        let draft = RecipeDraft::complete(" Chai ", vec![" milk ".into()], "Simmer\n", "Beverage");
        let recipe = Recipe::new(RecipeId::new("1"), draft.validate().unwrap());
        assert_eq!(recipe.title, " Chai ");
        assert_eq!(recipe.ingredients, vec![" milk "]);
        assert_eq!(recipe.instructions, "Simmer\n");
    }

    #[test]
    fn test_schema_carries_ingredient_example() {
        let (name, schema) = <Recipe as ToSchema>::schema();
        assert_eq!(name, "Recipe");
        let rendered = serde_json::to_string(&schema).unwrap();
        assert!(rendered.contains("tea leaves"), "schema was {rendered}");
    }

    #[test]
    fn test_recipe_serialises_id_as_underscore_id() {
        let recipe = Recipe::new(RecipeId::new("abc123"), tea().validate().unwrap());
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["ingredients"][1], "tea leaves");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_draft_deserialises_with_missing_fields() {
        let draft: RecipeDraft =
            serde_json::from_str(r#"{"title":"Tea","instructions":"Boil","category":"Beverage"}"#)
                .unwrap();
        assert!(draft.ingredients.is_none());
        assert_eq!(draft.validate().unwrap_err().fields, vec!["ingredients"]);
    }
}
