use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole currency units, always greater than 0.
    pub price: u64,
    pub image_url: String,
}

/// Validated dish fields, everything but the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    type Draft = DishDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn assemble(id: String, draft: DishDraft) -> Self {
        Dish {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    fn overwrite(&mut self, draft: DishDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image_url = draft.image_url;
    }
}
