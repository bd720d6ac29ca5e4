//! # API Shared
//!
//! Wire types and services shared by the REST server and its clients.
//!
//! Contains:
//! - Response bodies that are not recipes ([`MessageRes`], [`HealthRes`])
//! - [`HealthService`]
//!
//! Recipe bodies themselves (`Recipe`, `RecipeDraft`) live in `recipe-types`.

pub mod health;

pub use health::HealthService;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response and of the delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    #[schema(example = "Recipe not found")]
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
