//! Database repository for blog comments.

use crate::db::{
    columns::{TextColumn, require_positive_id},
    errors::{DbError, Result},
    handlers::repository::{Page, Repository},
    models::blogging::BlogCommentDBRecord,
};
use crate::types::{BlogArticleId, BlogCommentId};
use sqlx::PgConnection;
use tracing::instrument;

const TEXT: TextColumn = TextColumn::nullable("text", 500);

/// Filter for listing comments
#[derive(Debug, Clone, Copy)]
pub struct BlogCommentFilter {
    /// Restrict to one article's comments
    pub article_id: Option<BlogArticleId>,
    pub page: Page,
}

impl BlogCommentFilter {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            article_id: None,
            page: Page::new(offset, limit),
        }
    }

    pub fn for_article(article_id: BlogArticleId, offset: i64, limit: i64) -> Self {
        Self {
            article_id: Some(article_id),
            page: Page::new(offset, limit),
        }
    }
}

pub struct BlogComments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> BlogComments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn check_columns(record: &BlogCommentDBRecord) -> Result<()> {
        require_positive_id("article_id", record.article_id)?;
        require_positive_id("customer_id", record.customer_id)?;
        TEXT.check(record.text.as_deref())
    }

    /// One page of an article's comments, oldest first
    #[instrument(skip(self), err)]
    pub async fn list_for_article(&mut self, article_id: BlogArticleId, offset: i64, limit: i64) -> Result<Vec<BlogCommentDBRecord>> {
        self.list(&BlogCommentFilter::for_article(article_id, offset, limit)).await
    }
}

#[async_trait::async_trait]
impl<'c> Repository for BlogComments<'c> {
    type Record = BlogCommentDBRecord;
    type Id = BlogCommentId;
    type Filter = BlogCommentFilter;

    #[instrument(skip(self, record), fields(article_id = record.article_id), err)]
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id> {
        Self::check_columns(record)?;

        let id = sqlx::query_scalar::<_, BlogCommentId>(
            "INSERT INTO blog_comments (article_id, customer_id, text) VALUES ($1, $2, $3) RETURNING blog_comment_id",
        )
        .bind(record.article_id)
        .bind(record.customer_id)
        .bind(record.text.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record> {
        require_positive_id("blog_comment_id", id)?;

        let comment = sqlx::query_as::<_, BlogCommentDBRecord>(
            "SELECT blog_comment_id, article_id, customer_id, text FROM blog_comments WHERE blog_comment_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(comment)
    }

    #[instrument(skip(self, filter), fields(article_id = ?filter.article_id, offset = filter.page.offset, limit = filter.page.limit), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Record>> {
        filter.page.validate()?;
        if let Some(article_id) = filter.article_id {
            require_positive_id("article_id", article_id)?;
        }

        let comments = sqlx::query_as::<_, BlogCommentDBRecord>(
            r#"
            SELECT blog_comment_id, article_id, customer_id, text
            FROM blog_comments
            WHERE ($1::INTEGER IS NULL OR article_id = $1)
            ORDER BY blog_comment_id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(filter.article_id)
        .bind(filter.page.offset)
        .bind(filter.page.limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(comments)
    }

    #[instrument(skip(self, record), fields(blog_comment_id = record.id), err)]
    async fn update(&mut self, record: &Self::Record) -> Result<bool> {
        require_positive_id("blog_comment_id", record.id)?;
        Self::check_columns(record)?;

        let result = sqlx::query("UPDATE blog_comments SET article_id = $2, customer_id = $3, text = $4 WHERE blog_comment_id = $1")
            .bind(record.id)
            .bind(record.article_id)
            .bind(record.customer_id)
            .bind(record.text.as_deref())
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        require_positive_id("blog_comment_id", id)?;

        let result = sqlx::query("DELETE FROM blog_comments WHERE blog_comment_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
