//! Plain-text rendering of the client views.

use recipe_client::{Card, LoadStatus, RecipeBook, RecipeListView};
use std::fmt::Write;

pub fn card(card: &Card<'_>) -> String {
    let mut out = String::new();
    match card {
        Card::Viewing(recipe) => {
            let _ = writeln!(out, "{}  [{}]", recipe.title, recipe.id);
            let _ = writeln!(out, "  Ingredients: {}", recipe.ingredients.join(", "));
            let _ = writeln!(out, "  Instructions: {}", recipe.instructions);
            let _ = writeln!(out, "  Category: {}", recipe.category);
        }
        Card::Editing { recipe, fields } => {
            let _ = writeln!(out, "Editing [{}]", recipe.id);
            let _ = writeln!(out, "  title: {}", fields.title);
            let _ = writeln!(out, "  ingredients: {}", fields.ingredients);
            let _ = writeln!(out, "  instructions: {}", fields.instructions);
            let _ = writeln!(out, "  category: {}", fields.category);
        }
    }
    out
}

/// The whole list view: a status line when there is nothing to show, else one card each.
pub fn list(list: &RecipeListView, book: &RecipeBook) -> String {
    match book.status() {
        LoadStatus::Loading => return "Loading...\n".into(),
        LoadStatus::Failed => {
            return format!("{}\n", book.error().unwrap_or("Error fetching recipes."))
        }
        LoadStatus::Ready => {}
    }
    if book.recipes().is_empty() {
        return "No recipes found.\n".into();
    }
    list.cards(book)
        .map(|c| card(&c))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_client::{Recipe, RecipeId};

    fn tea() -> Recipe {
        Recipe {
            id: RecipeId::new("abc"),
            title: "Tea".into(),
            ingredients: vec!["water".into(), "tea leaves".into()],
            instructions: "Boil".into(),
            category: "Beverage".into(),
        }
    }

    #[test]
    fn test_viewing_card_joins_ingredients() {
        let recipe = tea();
        let out = card(&Card::Viewing(&recipe));
        assert!(out.starts_with("Tea  [abc]\n"));
        assert!(out.contains("Ingredients: water, tea leaves"));
        assert!(out.contains("Category: Beverage"));
    }

    #[test]
    fn test_unloaded_book_renders_loading() {
        let book = RecipeBook::new();
        assert_eq!(list(&RecipeListView::default(), &book), "Loading...\n");
    }
}
