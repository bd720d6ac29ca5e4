//! Terminal front end for the recipe catalog.
//!
//! Each subcommand loads the collection into a [`RecipeBook`] and drives the same form and
//! list views a graphical client would, then prints the result.

mod render;

use clap::{Parser, Subcommand};
use recipe_client::{HttpRecipeApi, RecipeApi, RecipeBook, RecipeForm, RecipeId, RecipeListView};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Recipe catalog CLI")]
struct Cli {
    /// Base URL of the recipe API
    #[arg(long, env = "RECIPES_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recipes
    List,
    /// Show one recipe
    Show {
        /// Recipe identifier
        id: String,
    },
    /// Add a recipe
    Add {
        #[arg(long, default_value = "")]
        title: String,
        /// Ingredients (comma-separated)
        #[arg(long, default_value = "")]
        ingredients: String,
        #[arg(long, default_value = "")]
        instructions: String,
        /// Category (e.g., Vegetarian, Non-Vegetarian)
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Edit a recipe; fields not given keep their current value
    Edit {
        /// Recipe identifier
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Ingredients (comma-separated)
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe identifier
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_client=error".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let api = HttpRecipeApi::new(cli.api_url);
    let mut book = RecipeBook::new();

    match cli.command {
        Some(Commands::List) => {
            book.load(&api).await;
            print!("{}", render::list(&RecipeListView::default(), &book));
        }
        Some(Commands::Show { id }) => match api.get(&RecipeId::new(id)).await {
            Ok(recipe) => print!("{}", render::card(&recipe_client::Card::Viewing(&recipe))),
            Err(e) => anyhow::bail!("{}", e),
        },
        Some(Commands::Add {
            title,
            ingredients,
            instructions,
            category,
        }) => {
            let mut form = RecipeForm::default();
            form.fields.title = title;
            form.fields.ingredients = ingredients;
            form.fields.instructions = instructions;
            form.fields.category = category;

            if !form.submit(&api, &mut book).await {
                anyhow::bail!("{}", form.error().unwrap_or_default());
            }
            if let Some(recipe) = book.recipes().last() {
                println!("Added recipe {}", recipe.id);
            }
        }
        Some(Commands::Edit {
            id,
            title,
            ingredients,
            instructions,
            category,
        }) => {
            let id = RecipeId::new(id);
            if !book.load(&api).await {
                anyhow::bail!("{}", book.error().unwrap_or_default());
            }

            let mut list = RecipeListView::default();
            if !list.begin_edit(&book, &id) {
                anyhow::bail!("Recipe not found");
            }
            if let Some(fields) = list.edit_fields_mut() {
                if let Some(title) = title {
                    fields.title = title;
                }
                if let Some(ingredients) = ingredients {
                    fields.ingredients = ingredients;
                }
                if let Some(instructions) = instructions {
                    fields.instructions = instructions;
                }
                if let Some(category) = category {
                    fields.category = category;
                }
            }

            if !list.save_edit(&api, &mut book).await {
                anyhow::bail!("{}", list.error().unwrap_or_default());
            }
            if let Some(recipe) = book.get(&id) {
                print!("{}", render::card(&recipe_client::Card::Viewing(recipe)));
            }
        }
        Some(Commands::Delete { id, yes }) => {
            let id = RecipeId::new(id);
            if !book.load(&api).await {
                anyhow::bail!("{}", book.error().unwrap_or_default());
            }
            if book.get(&id).is_none() {
                anyhow::bail!("Recipe not found");
            }

            let mut list = RecipeListView::default();
            let deleted = list
                .delete(&api, &mut book, &id, |recipe| yes || confirm(recipe))
                .await;
            if let Some(error) = list.error() {
                anyhow::bail!("{}", error);
            }
            if deleted {
                println!("Deleted recipe {}", id);
            }
        }
        None => {
            println!("Use 'recipes --help' for commands");
        }
    }

    Ok(())
}

fn confirm(recipe: &recipe_client::Recipe) -> bool {
    print!(
        "Are you sure you want to delete \"{}\"? [y/N] ",
        recipe.title
    );
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
