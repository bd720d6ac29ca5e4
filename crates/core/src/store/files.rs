//! File-backed document store.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//!   <s1>/
//!     <s2>/
//!       <uuid>/
//!         recipe.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the UUID. Each `recipe.json`
//! carries the four content fields plus creation and update timestamps; listing orders by
//! creation time so the collection reads back in insertion order.

use super::RecipeStore;
use crate::constants::RECIPE_JSON_FILENAME;
use crate::{RecipeError, RecipeResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipe_types::{NonEmptyText, Recipe, RecipeFields, RecipeId};
use recipe_uuid::ShardableUuid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecipe {
    title: NonEmptyText,
    ingredients: Vec<String>,
    instructions: NonEmptyText,
    category: NonEmptyText,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredRecipe {
    fn new(fields: RecipeFields, created_at: DateTime<Utc>) -> Self {
        Self {
            title: fields.title,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            category: fields.category,
            created_at,
            updated_at: Utc::now(),
        }
    }

    fn into_recipe(self, id: &ShardableUuid) -> Recipe {
        Recipe::new(
            RecipeId::new(id.to_string()),
            RecipeFields {
                title: self.title,
                ingredients: self.ingredients,
                instructions: self.instructions,
                category: self.category,
            },
        )
    }
}

/// Recipes stored as JSON documents in a sharded directory tree.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::StorageDirCreation`] if the root directory cannot be created.
    pub fn open(root: PathBuf) -> RecipeResult<Self> {
        fs::create_dir_all(&root).map_err(RecipeError::StorageDirCreation)?;
        tracing::debug!("file store opened at {}", root.display());
        Ok(Self { root })
    }

    fn record_file(&self, id: &ShardableUuid) -> PathBuf {
        id.sharded_dir(&self.root).join(RECIPE_JSON_FILENAME)
    }

    /// Reads the record addressed by `id`; a non-canonical id addresses nothing.
    fn read(&self, id: &RecipeId) -> RecipeResult<Option<(ShardableUuid, StoredRecipe)>> {
        let Ok(uuid) = ShardableUuid::parse(id.as_str()) else {
            return Ok(None);
        };
        let path = self.record_file(&uuid);
        if !path.is_file() {
            return Ok(None);
        }
        let stored = read_document(&path)?;
        Ok(Some((uuid, stored)))
    }

    fn write(&self, id: &ShardableUuid, stored: &StoredRecipe) -> RecipeResult<()> {
        let dir = id.sharded_dir(&self.root);
        fs::create_dir_all(&dir).map_err(RecipeError::StorageDirCreation)?;

        let raw = serde_json::to_vec_pretty(stored).map_err(RecipeError::Serialization)?;

        // Each writer gets its own temp file; overlapping writes race on the rename only.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(RecipeError::FileWrite)?;
        tmp.write_all(&raw).map_err(RecipeError::FileWrite)?;
        tmp.persist(dir.join(RECIPE_JSON_FILENAME))
            .map_err(|e| RecipeError::FileWrite(e.error))?;
        Ok(())
    }
}

fn read_document(path: &Path) -> RecipeResult<StoredRecipe> {
    let contents = fs::read_to_string(path).map_err(RecipeError::FileRead)?;
    serde_json::from_str(&contents).map_err(RecipeError::Deserialization)
}

fn subdirs(path: &Path) -> RecipeResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path).map_err(RecipeError::FileRead)? {
        let entry_path = entry.map_err(RecipeError::FileRead)?.path();
        if entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }
    Ok(dirs)
}

#[async_trait]
impl RecipeStore for FileStore {
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        let mut found = Vec::new();

        for s1 in subdirs(&self.root)? {
            for s2 in subdirs(&s1)? {
                for record_dir in subdirs(&s2)? {
                    let Some(uuid) = record_dir
                        .file_name()
                        .and_then(|os| os.to_str())
                        .and_then(|name| ShardableUuid::parse(name).ok())
                    else {
                        continue;
                    };

                    let path = record_dir.join(RECIPE_JSON_FILENAME);
                    if !path.is_file() {
                        continue;
                    }

                    match read_document(&path) {
                        Ok(stored) => found.push((uuid, stored)),
                        Err(e) => {
                            tracing::warn!("skipping unreadable recipe {}: {}", path.display(), e)
                        }
                    }
                }
            }
        }

        found.sort_by(|(a_id, a), (b_id, b)| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a_id.uuid().cmp(&b_id.uuid()))
        });

        Ok(found
            .into_iter()
            .map(|(id, stored)| stored.into_recipe(&id))
            .collect())
    }

    async fn get(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        Ok(self
            .read(id)?
            .map(|(uuid, stored)| stored.into_recipe(&uuid)))
    }

    async fn insert(&self, fields: RecipeFields) -> RecipeResult<Recipe> {
        let uuid = ShardableUuid::new();
        let stored = StoredRecipe::new(fields, Utc::now());
        self.write(&uuid, &stored)?;
        Ok(stored.into_recipe(&uuid))
    }

    async fn replace(&self, id: &RecipeId, fields: RecipeFields) -> RecipeResult<Option<Recipe>> {
        let Some((uuid, existing)) = self.read(id)? else {
            return Ok(None);
        };
        let stored = StoredRecipe::new(fields, existing.created_at);
        self.write(&uuid, &stored)?;
        Ok(Some(stored.into_recipe(&uuid)))
    }

    async fn remove(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let Some((uuid, existing)) = self.read(id)? else {
            return Ok(None);
        };
        fs::remove_dir_all(uuid.sharded_dir(&self.root)).map_err(RecipeError::FileRemove)?;
        Ok(Some(existing.into_recipe(&uuid)))
    }
}
