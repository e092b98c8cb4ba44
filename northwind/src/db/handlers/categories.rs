//! Database repository for product categories.

use crate::db::{
    columns::{TextColumn, require_positive_id},
    errors::{DbError, Result},
    handlers::repository::{Page, Repository},
    models::categories::CategoryDBRecord,
};
use crate::types::CategoryId;
use sqlx::PgConnection;
use tracing::instrument;

const CATEGORY_NAME: TextColumn = TextColumn::required("category_name", 15);
const DESCRIPTION: TextColumn = TextColumn::unbounded("description");

pub struct Categories<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Categories<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn check_columns(record: &CategoryDBRecord) -> Result<()> {
        CATEGORY_NAME.check(Some(&record.category_name))?;
        DESCRIPTION.check(record.description.as_deref())?;
        Ok(())
    }

    /// Categories whose name exactly matches one of `names`, in identifier order
    #[instrument(skip(self, names), fields(count = names.len()), err)]
    pub async fn list_by_names(&mut self, names: &[String]) -> Result<Vec<CategoryDBRecord>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let categories = sqlx::query_as::<_, CategoryDBRecord>(
            "SELECT category_id, category_name, description FROM categories WHERE category_name = ANY($1) ORDER BY category_id",
        )
        .bind(names)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(categories)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Categories<'c> {
    type Record = CategoryDBRecord;
    type Id = CategoryId;
    type Filter = Page;

    #[instrument(skip(self, record), fields(category_name = %record.category_name), err)]
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id> {
        Self::check_columns(record)?;

        let id = sqlx::query_scalar::<_, CategoryId>(
            "INSERT INTO categories (category_name, description) VALUES ($1, $2) RETURNING category_id",
        )
        .bind(&record.category_name)
        .bind(record.description.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record> {
        require_positive_id("category_id", id)?;

        let category = sqlx::query_as::<_, CategoryDBRecord>(
            "SELECT category_id, category_name, description FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(category)
    }

    #[instrument(skip(self, page), fields(offset = page.offset, limit = page.limit), err)]
    async fn list(&mut self, page: &Self::Filter) -> Result<Vec<Self::Record>> {
        page.validate()?;

        let categories = sqlx::query_as::<_, CategoryDBRecord>(
            "SELECT category_id, category_name, description FROM categories ORDER BY category_id OFFSET $1 LIMIT $2",
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(self, record), fields(category_id = record.id), err)]
    async fn update(&mut self, record: &Self::Record) -> Result<bool> {
        require_positive_id("category_id", record.id)?;
        Self::check_columns(record)?;

        let result = sqlx::query("UPDATE categories SET category_name = $2, description = $3 WHERE category_id = $1")
            .bind(record.id)
            .bind(&record.category_name)
            .bind(record.description.as_deref())
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        require_positive_id("category_id", id)?;

        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
