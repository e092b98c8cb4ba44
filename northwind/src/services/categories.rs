//! Category management service.

use super::{found, require_id};
use crate::db::factory::DataAccessFactory;
use crate::db::handlers::{Page, Repository};
use crate::db::models::categories::CategoryDBRecord;
use crate::errors::Result;
use crate::models::categories::Category;
use crate::types::CategoryId;
use sqlx::PgPool;
use tracing::instrument;

pub struct CategoryManagementService {
    factory: DataAccessFactory,
}

impl CategoryManagementService {
    pub fn new(factory: DataAccessFactory) -> Self {
        Self { factory }
    }

    pub async fn connect(pool: &PgPool) -> Result<Self> {
        Ok(Self::new(DataAccessFactory::acquire(pool).await?))
    }

    #[instrument(skip(self, category), fields(category_name = %category.category_name), err)]
    pub async fn create_category(&mut self, category: Category) -> Result<CategoryId> {
        Ok(self.factory.categories().insert(&CategoryDBRecord::from(category)).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn destroy_category(&mut self, category_id: CategoryId) -> Result<bool> {
        require_id("category_id", category_id)?;
        Ok(self.factory.categories().delete(category_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn show_categories(&mut self, offset: i64, limit: i64) -> Result<Vec<Category>> {
        let records = self.factory.categories().list(&Page::new(offset, limit)).await?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn try_show_category(&mut self, category_id: CategoryId) -> Result<Option<Category>> {
        require_id("category_id", category_id)?;
        let record = found(self.factory.categories().find(category_id).await)?;
        Ok(record.map(Category::from))
    }

    #[instrument(skip(self, category), err)]
    pub async fn update_category(&mut self, category_id: CategoryId, category: Category) -> Result<bool> {
        require_id("category_id", category_id)?;
        if category_id != category.category_id {
            return Ok(false);
        }
        Ok(self.factory.categories().update(&CategoryDBRecord::from(category)).await?)
    }

    #[instrument(skip(self, names), fields(count = names.len()), err)]
    pub async fn lookup_categories_by_names(&mut self, names: &[String]) -> Result<Vec<Category>> {
        let records = self.factory.categories().list_by_names(names).await?;
        Ok(records.into_iter().map(Category::from).collect())
    }
}
