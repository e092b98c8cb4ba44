//! Database models for product categories.

use crate::models::categories::Category;
use crate::types::CategoryId;
use sqlx::FromRow;

/// Transfer record for a row of the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct CategoryDBRecord {
    #[sqlx(rename = "category_id")]
    pub id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryDBRecord {
    fn from(category: Category) -> Self {
        Self {
            id: category.category_id,
            category_name: category.category_name,
            description: category.description,
        }
    }
}

impl From<CategoryDBRecord> for Category {
    fn from(db: CategoryDBRecord) -> Self {
        Self {
            category_id: db.id,
            category_name: db.category_name,
            description: db.description,
        }
    }
}
