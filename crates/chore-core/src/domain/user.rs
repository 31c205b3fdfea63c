//! User domain entity

use chore_shared::{new_id, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A group member. Only the id takes part in balance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email)]
    pub email: String,
}

impl User {
    pub fn new(name: String, email: String) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: new_id(),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
        };

        user.validate()?;
        Ok(user)
    }
}
