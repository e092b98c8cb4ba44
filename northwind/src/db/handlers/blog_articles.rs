//! Database repository for blog articles and the products they mention.

use crate::db::{
    columns::{TextColumn, require_positive_id},
    errors::{DbError, Result},
    handlers::repository::{Page, Repository},
    models::blogging::{BlogArticleDBRecord, BlogArticleProductDBRecord},
};
use crate::types::{BlogArticleId, BlogArticleProductId, ProductId};
use sqlx::PgConnection;
use tracing::instrument;

const TITLE: TextColumn = TextColumn::nullable("title", 50);
const BODY: TextColumn = TextColumn::nullable("body", 4000);

pub struct BlogArticles<'c> {
    db: &'c mut PgConnection,
}

impl<'c> BlogArticles<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn check_columns(record: &BlogArticleDBRecord) -> Result<()> {
        TITLE.check(record.title.as_deref())?;
        BODY.check(record.body.as_deref())?;
        require_positive_id("employee_id", record.employee_id)
    }

    /// Record that an article mentions a product, returning the link identifier
    #[instrument(skip(self), err)]
    pub async fn link_product(&mut self, article_id: BlogArticleId, product_id: ProductId) -> Result<BlogArticleProductId> {
        require_positive_id("article_id", article_id)?;
        require_positive_id("product_id", product_id)?;

        let id = sqlx::query_scalar::<_, BlogArticleProductId>(
            "INSERT INTO blog_article_products (article_id, product_id) VALUES ($1, $2) RETURNING blog_article_product_id",
        )
        .bind(article_id)
        .bind(product_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    /// Remove every link between an article and a product; returns whether any row was affected
    #[instrument(skip(self), err)]
    pub async fn unlink_product(&mut self, article_id: BlogArticleId, product_id: ProductId) -> Result<bool> {
        require_positive_id("article_id", article_id)?;
        require_positive_id("product_id", product_id)?;

        let result = sqlx::query("DELETE FROM blog_article_products WHERE article_id = $1 AND product_id = $2")
            .bind(article_id)
            .bind(product_id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Product links of an article, in the order they were added
    #[instrument(skip(self), err)]
    pub async fn list_products(&mut self, article_id: BlogArticleId) -> Result<Vec<BlogArticleProductDBRecord>> {
        require_positive_id("article_id", article_id)?;

        let links = sqlx::query_as::<_, BlogArticleProductDBRecord>(
            r#"
            SELECT blog_article_product_id, article_id, product_id
            FROM blog_article_products
            WHERE article_id = $1
            ORDER BY blog_article_product_id
            "#,
        )
        .bind(article_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(links)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for BlogArticles<'c> {
    type Record = BlogArticleDBRecord;
    type Id = BlogArticleId;
    type Filter = Page;

    #[instrument(skip(self, record), fields(employee_id = record.employee_id), err)]
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id> {
        Self::check_columns(record)?;

        let id = sqlx::query_scalar::<_, BlogArticleId>(
            r#"
            INSERT INTO blog_articles (title, body, publication_date, employee_id)
            VALUES ($1, $2, $3, $4)
            RETURNING blog_article_id
            "#,
        )
        .bind(record.title.as_deref())
        .bind(record.body.as_deref())
        .bind(record.publication_date)
        .bind(record.employee_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record> {
        require_positive_id("blog_article_id", id)?;

        let article = sqlx::query_as::<_, BlogArticleDBRecord>(
            "SELECT blog_article_id, title, body, publication_date, employee_id FROM blog_articles WHERE blog_article_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(article)
    }

    #[instrument(skip(self, page), fields(offset = page.offset, limit = page.limit), err)]
    async fn list(&mut self, page: &Self::Filter) -> Result<Vec<Self::Record>> {
        page.validate()?;

        let articles = sqlx::query_as::<_, BlogArticleDBRecord>(
            r#"
            SELECT blog_article_id, title, body, publication_date, employee_id
            FROM blog_articles
            ORDER BY blog_article_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(articles)
    }

    #[instrument(skip(self, record), fields(blog_article_id = record.id), err)]
    async fn update(&mut self, record: &Self::Record) -> Result<bool> {
        require_positive_id("blog_article_id", record.id)?;
        Self::check_columns(record)?;

        let result = sqlx::query(
            r#"
            UPDATE blog_articles SET title = $2, body = $3, publication_date = $4, employee_id = $5
            WHERE blog_article_id = $1
            "#,
        )
        .bind(record.id)
        .bind(record.title.as_deref())
        .bind(record.body.as_deref())
        .bind(record.publication_date)
        .bind(record.employee_id)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the article together with its product links; comments are left in place
    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        require_positive_id("blog_article_id", id)?;

        let result = sqlx::query(
            r#"
            WITH unlinked AS (DELETE FROM blog_article_products WHERE article_id = $1)
            DELETE FROM blog_articles WHERE blog_article_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_article;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_article_round_trip(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = BlogArticles::new(&mut conn);

        let mut record = sample_article(3);
        let id = repo.insert(&record).await.unwrap();
        record.id = id;
        assert_eq!(repo.find(id).await.unwrap(), record);

        record.title = Some("Winter specials".to_string());
        record.body = None;
        assert!(repo.update(&record).await.unwrap());
        assert_eq!(repo.find(id).await.unwrap(), record);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_article_requires_author(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = BlogArticles::new(&mut conn);

        let record = sample_article(0);
        assert!(matches!(
            repo.insert(&record).await,
            Err(DbError::InvalidArgument { argument: "employee_id", .. })
        ));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_product_links(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = BlogArticles::new(&mut conn);

        let article_id = repo.insert(&sample_article(1)).await.unwrap();

        let first = repo.link_product(article_id, 11).await.unwrap();
        let second = repo.link_product(article_id, 4).await.unwrap();
        assert!(second > first);

        let links = repo.list_products(article_id).await.unwrap();
        assert_eq!(links.iter().map(|l| l.product_id).collect::<Vec<_>>(), vec![11, 4]);

        assert!(repo.unlink_product(article_id, 11).await.unwrap());
        assert!(!repo.unlink_product(article_id, 11).await.unwrap());
        assert_eq!(repo.list_products(article_id).await.unwrap().len(), 1);

        assert!(matches!(repo.link_product(article_id, 0).await, Err(DbError::InvalidArgument { .. })));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_removes_links(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = BlogArticles::new(&mut conn);

        let article_id = repo.insert(&sample_article(2)).await.unwrap();
        repo.link_product(article_id, 7).await.unwrap();

        assert!(repo.delete(article_id).await.unwrap());
        assert!(repo.list_products(article_id).await.unwrap().is_empty());
        assert!(!repo.delete(article_id).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_non_positive_ids_are_rejected(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = BlogArticles::new(&mut conn);

        for id in [0, -1, i32::MIN] {
            assert!(matches!(repo.find(id).await, Err(DbError::InvalidArgument { argument: "blog_article_id", .. })));
            assert!(matches!(repo.delete(id).await, Err(DbError::InvalidArgument { argument: "blog_article_id", .. })));
            assert!(matches!(repo.list_products(id).await, Err(DbError::InvalidArgument { argument: "article_id", .. })));
            assert!(matches!(repo.link_product(id, 1).await, Err(DbError::InvalidArgument { argument: "article_id", .. })));
            assert!(matches!(repo.link_product(1, id).await, Err(DbError::InvalidArgument { argument: "product_id", .. })));
            assert!(matches!(repo.unlink_product(id, 1).await, Err(DbError::InvalidArgument { argument: "article_id", .. })));
            assert!(matches!(repo.unlink_product(1, id).await, Err(DbError::InvalidArgument { argument: "product_id", .. })));

            let mut record = sample_article(1);
            record.id = id;
            assert!(matches!(repo.update(&record).await, Err(DbError::InvalidArgument { argument: "blog_article_id", .. })));
        }

        // Nothing was linked by the rejected calls
        assert!(repo.list_products(1).await.unwrap().is_empty());
    }
}
